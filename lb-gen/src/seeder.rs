//! Puts a known quantity of types and nodes into a store before a benchmark run.
//!
//! Each family gets one batched insert.  Families are seeded in the order artifact, execution,
//! context, and the first store failure stops the whole seed and is returned as-is: a failed
//! batch may or may not have been committed, and only the caller knows whether retrying is safe.
use anyhow::Result;
use lb_core::errors::{
    ensure,
    EmptyResult,
};
use lb_core::model::{
    Family,
    NodeRecord,
    PropertyType,
    TypeId,
    TypeRecord,
    Value,
};
use lb_core::store::MetadataStore;
use tracing::{
    debug,
    info,
    instrument,
};

use crate::config::SeedConfig;
use crate::naming::NameGenerator;

/// Every seeded type declares this property, and every seeded node sets it, so that update
/// workloads have a field to rewrite.
pub const SEED_PROPERTY: &str = "property";

/// Insert the requested number of types for each family.
///
/// Names are unique against whatever the store already holds for the family.  A zero count
/// makes no store call for that family.
///
/// # Errors
/// The first failure reported by the store, unchanged.
#[instrument(skip(store))]
pub fn insert_types_in_db<S: MetadataStore + ?Sized>(
    num_artifact_types: usize,
    num_execution_types: usize,
    num_context_types: usize,
    store: &mut S,
) -> EmptyResult {
    for (family, count) in Family::ALL.into_iter().zip([num_artifact_types, num_execution_types, num_context_types]) {
        insert_family_types(family, count, store)?;
    }
    Ok(())
}

/// Insert the requested number of nodes for each family.
///
/// Nodes are spread round-robin over the family's existing types, in the order the store lists
/// them.  A zero count makes no store call for that family.
///
/// # Errors
/// The first failure reported by the store, unchanged.  Seeding nodes into a family that has no
/// types sends them without a type reference, which the store rejects; that rejection is the
/// error returned.
#[instrument(skip(store))]
pub fn insert_nodes_in_db<S: MetadataStore + ?Sized>(
    num_artifact_nodes: usize,
    num_execution_nodes: usize,
    num_context_nodes: usize,
    store: &mut S,
) -> EmptyResult {
    for (family, count) in Family::ALL.into_iter().zip([num_artifact_nodes, num_execution_nodes, num_context_nodes]) {
        insert_family_nodes(family, count, store)?;
    }
    Ok(())
}

/// Insert everything `config` asks for: all types first, then all nodes.
///
/// # Errors
/// The first failure reported by the store, unchanged.
#[instrument(skip(store))]
pub fn seed_store<S: MetadataStore + ?Sized>(config: &SeedConfig, store: &mut S) -> EmptyResult {
    insert_types_in_db(config.num_artifact_types, config.num_execution_types, config.num_context_types, store)?;
    insert_nodes_in_db(config.num_artifacts, config.num_executions, config.num_contexts, store)?;
    info!("store seeded");
    Ok(())
}

/// Synthesize and insert `count` types into `family`.
fn insert_family_types<S: MetadataStore + ?Sized>(family: Family, count: usize, store: &mut S) -> EmptyResult {
    if count == 0 {
        return Ok(());
    }

    let taken = store.list_types(family)?.into_iter().map(|t| t.name);
    let types: Vec<_> = NameGenerator::new(format!("pre_insert_{family}_type"))
        .avoiding(taken)
        .take(count)
        .map(|name| TypeRecord::new(name).with_property(SEED_PROPERTY, PropertyType::String))
        .collect();

    debug!(%family, count, "inserting types");
    let ids = store.insert_types(family, types)?;
    ensure!(ids.len() == count, "store acknowledged {} of {count} {family} types", ids.len());
    Ok(())
}

/// Synthesize and insert `count` nodes into `family`, typed by the family's existing types.
fn insert_family_nodes<S: MetadataStore + ?Sized>(family: Family, count: usize, store: &mut S) -> EmptyResult {
    if count == 0 {
        return Ok(());
    }

    let type_ids = existing_type_ids(family, store)?;
    let taken = store.list_nodes(family)?.into_iter().map(|n| n.name);

    // An empty cycle yields `None` forever, so with no types every node goes out unreferenced.
    let mut type_refs = type_ids.iter().copied().cycle();
    let nodes: Vec<_> = NameGenerator::new(format!("pre_insert_{family}"))
        .avoiding(taken)
        .take(count)
        .map(|name| {
            let value = Value::String(format!("{name}-value"));
            NodeRecord::new(name, type_refs.next()).with_property(SEED_PROPERTY, value)
        })
        .collect();

    debug!(%family, count, types = type_ids.len(), "inserting nodes");
    let ids = store.insert_nodes(family, nodes)?;
    ensure!(ids.len() == count, "store acknowledged {} of {count} {family} nodes", ids.len());
    Ok(())
}

/// Ids of every persisted type in `family`, in store order.
fn existing_type_ids<S: MetadataStore + ?Sized>(family: Family, store: &S) -> Result<Vec<TypeId>> {
    Ok(store.list_types(family)?.into_iter().filter_map(|t| t.id).collect())
}
