use anyhow::Result;

use crate::model::{
    Family,
    NodeId,
    NodeRecord,
    TypeId,
    TypeRecord,
};

/// The call contract of a metadata store.
///
/// Every operation is scoped to a single [`Family`].  Inserts are batched: one call carries the
/// whole list and returns the assigned identifiers in input order.  Lists are full scans with no
/// pagination.  Implementations own all persisted state and are responsible for their own
/// synchronization; callers hold `&mut` only to write.
pub trait MetadataStore {
    /// Create `types` in `family`, returning one identifier per record.
    fn insert_types(&mut self, family: Family, types: Vec<TypeRecord>) -> Result<Vec<TypeId>>;

    /// Create `nodes` in `family`, returning one identifier per record.  Each node must
    /// reference an existing type of the same family.
    fn insert_nodes(&mut self, family: Family, nodes: Vec<NodeRecord>) -> Result<Vec<NodeId>>;

    /// Every type currently stored in `family`.
    fn list_types(&self, family: Family) -> Result<Vec<TypeRecord>>;

    /// Every node currently stored in `family`.
    fn list_nodes(&self, family: Family) -> Result<Vec<NodeRecord>>;
}

impl<S: MetadataStore + ?Sized> MetadataStore for Box<S> {
    fn insert_types(&mut self, family: Family, types: Vec<TypeRecord>) -> Result<Vec<TypeId>> {
        (**self).insert_types(family, types)
    }

    fn insert_nodes(&mut self, family: Family, nodes: Vec<NodeRecord>) -> Result<Vec<NodeId>> {
        (**self).insert_nodes(family, nodes)
    }

    fn list_types(&self, family: Family) -> Result<Vec<TypeRecord>> {
        (**self).list_types(family)
    }

    fn list_nodes(&self, family: Family) -> Result<Vec<NodeRecord>> {
        (**self).list_nodes(family)
    }
}
