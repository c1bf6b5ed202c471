//! Records exchanged with a metadata store.
//!
//! A store holds three parallel entity families (artifacts, executions, contexts).  Each family
//! has its own set of types and its own set of nodes; every node references one type of the
//! same family.  The records here are family-agnostic: the family travels alongside them as a
//! [`Family`] argument on every store call.
use std::collections::BTreeMap;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Store-assigned identifier of a type.
pub type TypeId = i64;

/// Store-assigned identifier of a node.
pub type NodeId = i64;

/// One of the three node families of the lineage graph.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Data assets, e.g. datasets or model files.
    Artifact,
    /// Units of computation, e.g. a training run.
    Execution,
    /// Grouping constructs, e.g. an experiment or a project.
    Context,
}

impl Family {
    /// Every family, in the order seeding walks them.
    pub const ALL: [Self; 3] = [Self::Artifact, Self::Execution, Self::Context];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artifact => "artifact",
            Self::Execution => "execution",
            Self::Context => "context",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a property in a type's schema.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    Int,
    Double,
    String,
}

/// A property value attached to a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Double(f64),
    String(String),
}

/// A named schema for nodes of one family.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Assigned by the store on insert; `None` for records that have not been persisted.
    pub id: Option<TypeId>,
    pub name: String,
    pub properties: BTreeMap<String, PropertyType>,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), properties: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, property_type: PropertyType) -> Self {
        self.properties.insert(name.into(), property_type);
        self
    }
}

/// An instance of a type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Assigned by the store on insert; `None` for records that have not been persisted.
    pub id: Option<NodeId>,
    /// The type this node instantiates.  Stores reject nodes without one.
    pub type_id: Option<TypeId>,
    pub name: String,
    pub properties: BTreeMap<String, Value>,
}

impl NodeRecord {
    pub fn new(name: impl Into<String>, type_id: Option<TypeId>) -> Self {
        Self { id: None, type_id, name: name.into(), properties: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}
