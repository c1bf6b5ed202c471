#![deny(
    // Overly strict on purpose: it forces inline allows, which mark the places a reviewer may
    // want to take a second look at.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # lb-gen – workload seeding and sampling for lineage-bench
//!
//! lb-gen prepares a metadata store for a benchmark run and hands workload stages the operands
//! they act on.
//!
//! ## Pieces
//! 1. Seeding ([`seeder`]) – synthesize uniquely-named types and nodes for the artifact,
//!    execution and context families and insert them with one batched store call per family.
//! 2. Sampling ([`sampler`]) – resolve a workload configuration's specification to an entity
//!    family and read back everything the store currently holds for it, either one family at a
//!    time or as the (non-context, context) node pair an edge workload needs.
//!
//! The store is any [`MetadataStore`](lb_core::store::MetadataStore); sampled records come back
//! as family-erased [`Type`] and [`Node`] values.  Specifications are resolved with an
//! exhaustive match, so an unknown specification fails with
//! [`GenError::InvalidSpecification`](errors::GenError::InvalidSpecification) before the store
//! is touched.  Store failures are never retried or swallowed.

pub mod config;
pub mod entity;
pub mod errors;
pub mod naming;
pub mod sampler;
pub mod seeder;
pub mod specification;

pub use config::{
    FillContextEdgesConfig,
    FillNodesConfig,
    FillTypesConfig,
    SeedConfig,
};
pub use entity::{
    Node,
    Type,
};
pub use sampler::{
    get_existing_edge_operands,
    get_existing_nodes,
    get_existing_types,
    EdgeOperands,
    TypeSource,
};
pub use seeder::{
    insert_nodes_in_db,
    insert_types_in_db,
    seed_store,
};
pub use specification::{
    EdgeSpecification,
    NodeSpecification,
    TypeSpecification,
};

#[cfg(test)]
mod tests;
