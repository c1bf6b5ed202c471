//! An in-process [`MetadataStore`] engine.
//!
//! Used as the backing store for dry runs of the seeder and as the fake in tests.  It enforces
//! the same constraints a SQL-backed store does for the operations in the contract: names are
//! unique per family, nodes must reference an existing type of their own family, and a batch
//! that violates either rule is rejected as a whole.
use std::collections::{
    BTreeMap,
    HashSet,
};

use anyhow::Result;
use tracing::instrument;

use crate::errors::StoreError;
use crate::model::{
    Family,
    NodeId,
    NodeRecord,
    TypeId,
    TypeRecord,
};
use crate::store::MetadataStore;

/// Types of all families share one id sequence, like a single type table; nodes get one sequence
/// per family.  Both start at 1.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    types: BTreeMap<Family, Vec<TypeRecord>>,
    nodes: BTreeMap<Family, Vec<NodeRecord>>,
    last_type_id: TypeId,
    last_node_ids: BTreeMap<Family, NodeId>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of types stored in `family`.
    #[must_use]
    pub fn type_count(&self, family: Family) -> usize {
        self.types.get(&family).map_or(0, Vec::len)
    }

    /// Number of nodes stored in `family`.
    #[must_use]
    pub fn node_count(&self, family: Family) -> usize {
        self.nodes.get(&family).map_or(0, Vec::len)
    }

    fn has_type(&self, family: Family, type_id: TypeId) -> bool {
        self.types
            .get(&family)
            .is_some_and(|types| types.iter().any(|t| t.id == Some(type_id)))
    }
}

impl MetadataStore for InMemoryStore {
    #[instrument(level = "trace", skip(self, types), fields(batch = types.len()))]
    fn insert_types(&mut self, family: Family, types: Vec<TypeRecord>) -> Result<Vec<TypeId>> {
        let stored = self.types.entry(family).or_default();
        let mut names: HashSet<&str> = stored.iter().map(|t| t.name.as_str()).collect();
        for t in &types {
            if !names.insert(t.name.as_str()) {
                return Err(StoreError::duplicate_type_name(&t.name));
            }
        }

        let mut ids = Vec::with_capacity(types.len());
        for mut t in types {
            self.last_type_id += 1;
            t.id = Some(self.last_type_id);
            ids.push(self.last_type_id);
            stored.push(t);
        }
        Ok(ids)
    }

    #[instrument(level = "trace", skip(self, nodes), fields(batch = nodes.len()))]
    fn insert_nodes(&mut self, family: Family, nodes: Vec<NodeRecord>) -> Result<Vec<NodeId>> {
        for n in &nodes {
            let Some(type_id) = n.type_id else {
                return Err(StoreError::missing_type_reference(&n.name));
            };
            if !self.has_type(family, type_id) {
                return Err(StoreError::unknown_type_id(type_id));
            }
        }

        let stored = self.nodes.entry(family).or_default();
        let mut names: HashSet<&str> = stored.iter().map(|n| n.name.as_str()).collect();
        for n in &nodes {
            if !names.insert(n.name.as_str()) {
                return Err(StoreError::duplicate_node_name(&n.name));
            }
        }

        let last_id = self.last_node_ids.entry(family).or_default();
        let mut ids = Vec::with_capacity(nodes.len());
        for mut n in nodes {
            *last_id += 1;
            n.id = Some(*last_id);
            ids.push(*last_id);
            stored.push(n);
        }
        Ok(ids)
    }

    fn list_types(&self, family: Family) -> Result<Vec<TypeRecord>> {
        Ok(self.types.get(&family).cloned().unwrap_or_default())
    }

    fn list_nodes(&self, family: Family) -> Result<Vec<NodeRecord>> {
        Ok(self.nodes.get(&family).cloned().unwrap_or_default())
    }
}
