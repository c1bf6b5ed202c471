use anyhow::Result;
use mockall::mock;
use rstest::fixture;

use crate::memstore::InMemoryStore;
use crate::model::{
    Family,
    NodeId,
    NodeRecord,
    TypeId,
    TypeRecord,
};
use crate::store::MetadataStore;

mock! {
    pub Store {}

    impl MetadataStore for Store {
        fn insert_types(&mut self, family: Family, types: Vec<TypeRecord>) -> Result<Vec<TypeId>>;
        fn insert_nodes(&mut self, family: Family, nodes: Vec<NodeRecord>) -> Result<Vec<NodeId>>;
        fn list_types(&self, family: Family) -> Result<Vec<TypeRecord>>;
        fn list_nodes(&self, family: Family) -> Result<Vec<NodeRecord>>;
    }
}

/// A mock that fails the test on any store call.
#[fixture]
pub fn untouched_store() -> MockStore {
    let mut store = MockStore::new();
    store.expect_insert_types().never();
    store.expect_insert_nodes().never();
    store.expect_list_types().never();
    store.expect_list_nodes().never();
    store
}

#[fixture]
pub fn empty_store() -> InMemoryStore {
    InMemoryStore::new()
}

/// Persisted type records named `{prefix}-0`, `{prefix}-1`, ... with ids starting at `first_id`.
pub fn type_records(prefix: &str, first_id: TypeId, count: usize) -> Vec<TypeRecord> {
    (0..count)
        .zip(first_id..)
        .map(|(i, id)| TypeRecord { id: Some(id), ..TypeRecord::new(format!("{prefix}-{i}")) })
        .collect()
}
