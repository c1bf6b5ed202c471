//! Family-erased views of store records.
//!
//! Workload stages handle types and nodes of every family through the same code path; these
//! enums carry the family alongside the record so the stage can still route a store call back to
//! the right family.
use lb_core::model::{
    Family,
    NodeId,
    NodeRecord,
    TypeId,
    TypeRecord,
};
use serde::Serialize;

/// A type of any family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Type {
    /// A type of artifacts.
    ArtifactType(TypeRecord),
    /// A type of executions.
    ExecutionType(TypeRecord),
    /// A type of contexts.
    ContextType(TypeRecord),
}

impl Type {
    /// Tag `record` with `family`.
    #[must_use]
    pub fn new(family: Family, record: TypeRecord) -> Self {
        match family {
            Family::Artifact => Self::ArtifactType(record),
            Family::Execution => Self::ExecutionType(record),
            Family::Context => Self::ContextType(record),
        }
    }

    /// The family this type belongs to.
    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Self::ArtifactType(_) => Family::Artifact,
            Self::ExecutionType(_) => Family::Execution,
            Self::ContextType(_) => Family::Context,
        }
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &TypeRecord {
        match self {
            Self::ArtifactType(r) | Self::ExecutionType(r) | Self::ContextType(r) => r,
        }
    }

    /// Store-assigned id, if the type has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TypeId> {
        self.record().id
    }

    /// The type's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record().name
    }
}

/// A node of any family.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Node {
    /// An artifact.
    Artifact(NodeRecord),
    /// An execution.
    Execution(NodeRecord),
    /// A context.
    Context(NodeRecord),
}

impl Node {
    /// Tag `record` with `family`.
    #[must_use]
    pub fn new(family: Family, record: NodeRecord) -> Self {
        match family {
            Family::Artifact => Self::Artifact(record),
            Family::Execution => Self::Execution(record),
            Family::Context => Self::Context(record),
        }
    }

    /// The family this node belongs to.
    #[must_use]
    pub const fn family(&self) -> Family {
        match self {
            Self::Artifact(_) => Family::Artifact,
            Self::Execution(_) => Family::Execution,
            Self::Context(_) => Family::Context,
        }
    }

    /// The underlying record.
    #[must_use]
    pub const fn record(&self) -> &NodeRecord {
        match self {
            Self::Artifact(r) | Self::Execution(r) | Self::Context(r) => r,
        }
    }

    /// Store-assigned id, if the node has been persisted.
    #[must_use]
    pub const fn id(&self) -> Option<NodeId> {
        self.record().id
    }

    /// The id of the type this node instantiates.
    #[must_use]
    pub const fn type_id(&self) -> Option<TypeId> {
        self.record().type_id
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record().name
    }
}
