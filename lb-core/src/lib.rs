//! Shared plumbing for lineage-bench: the metadata store contract, the record model the store
//! speaks, error helpers, logging setup, and an in-process store engine.

pub mod errors;
pub mod logging;
pub mod memstore;
pub mod model;
pub mod prelude;
pub mod store;

#[cfg(feature = "testutils")]
pub mod testutils;

#[cfg(test)]
mod tests;
