//! Errors raised by lb-gen itself.  Store failures pass through untouched and keep the store's
//! own error type.
use lb_core::err_impl;

err_impl! {
    /// Errors raised before any store call is made.
    GenError,
    /// A workload configuration names a specification this call does not recognize.
    #[error("invalid specification: {0}")]
    InvalidSpecification(String),
}
