mod errors_test;
