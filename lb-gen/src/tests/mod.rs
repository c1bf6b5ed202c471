mod seeder_test;

use lb_core::memstore::InMemoryStore;
use rstest::fixture;

use crate::seeder::{
    insert_nodes_in_db,
    insert_types_in_db,
};

const NUM_ARTIFACT_TYPES: usize = 51;
const NUM_EXECUTION_TYPES: usize = 52;
const NUM_CONTEXT_TYPES: usize = 53;

const NUM_ARTIFACTS: usize = 101;
const NUM_EXECUTIONS: usize = 102;
const NUM_CONTEXTS: usize = 103;

#[fixture]
fn typed_store() -> InMemoryStore {
    let mut store = InMemoryStore::new();
    insert_types_in_db(NUM_ARTIFACT_TYPES, NUM_EXECUTION_TYPES, NUM_CONTEXT_TYPES, &mut store).unwrap();
    store
}

#[fixture]
fn seeded_store(mut typed_store: InMemoryStore) -> InMemoryStore {
    insert_nodes_in_db(NUM_ARTIFACTS, NUM_EXECUTIONS, NUM_CONTEXTS, &mut typed_store).unwrap();
    typed_store
}
