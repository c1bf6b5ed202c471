//! Workload configurations consumed by the seeder and the sampler.
//!
//! The `Fill*Config` structs keep the specification exactly as the configuration layer wrote it;
//! it is resolved to an enum only when a sampler call needs it, so a bad value surfaces as
//! [`GenError::InvalidSpecification`](crate::errors::GenError::InvalidSpecification) at that
//! call.
use std::fs::File;
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::instrument;

use crate::specification::{
    EdgeSpecification,
    NodeSpecification,
    TypeSpecification,
};

/// Configuration of a stage that fills types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillTypesConfig {
    /// One of the [`TypeSpecification`] names.
    pub specification: String,
}

impl FillTypesConfig {
    /// A config naming `specification`.
    #[must_use]
    pub fn new(specification: TypeSpecification) -> Self {
        Self { specification: specification.to_string() }
    }

    /// The resolved specification.
    ///
    /// # Errors
    /// `InvalidSpecification` if the configured value is not a [`TypeSpecification`] name.
    pub fn specification(&self) -> Result<TypeSpecification> {
        self.specification.parse()
    }
}

/// Configuration of a stage that fills nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillNodesConfig {
    /// One of the [`NodeSpecification`] names.
    pub specification: String,
}

impl FillNodesConfig {
    /// A config naming `specification`.
    #[must_use]
    pub fn new(specification: NodeSpecification) -> Self {
        Self { specification: specification.to_string() }
    }

    /// The resolved specification.
    ///
    /// # Errors
    /// `InvalidSpecification` if the configured value is not a [`NodeSpecification`] name.
    pub fn specification(&self) -> Result<NodeSpecification> {
        self.specification.parse()
    }
}

/// Configuration of a stage that fills attribution or association edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FillContextEdgesConfig {
    /// One of the [`EdgeSpecification`] names.
    pub specification: String,
}

impl FillContextEdgesConfig {
    /// A config naming `specification`.
    #[must_use]
    pub fn new(specification: EdgeSpecification) -> Self {
        Self { specification: specification.to_string() }
    }

    /// The resolved specification.
    ///
    /// # Errors
    /// `InvalidSpecification` if the configured value is not an [`EdgeSpecification`] name.
    pub fn specification(&self) -> Result<EdgeSpecification> {
        self.specification.parse()
    }
}

/// How much to put in the store before any workload stage runs.  Missing counts default to 0;
/// unknown keys are rejected so a misspelled count cannot silently seed nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of artifact types to insert.
    pub num_artifact_types: usize,
    /// Number of execution types to insert.
    pub num_execution_types: usize,
    /// Number of context types to insert.
    pub num_context_types: usize,
    /// Number of artifacts to insert.
    pub num_artifacts: usize,
    /// Number of executions to insert.
    pub num_executions: usize,
    /// Number of contexts to insert.
    pub num_contexts: usize,
}

impl SeedConfig {
    /// Read a YAML seed configuration from `path`.
    ///
    /// # Errors
    /// The file cannot be opened or is not a valid seed configuration.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening seed config {}", path.display()))?;
        serde_yaml::from_reader(file).with_context(|| format!("parsing seed config {}", path.display()))
    }
}
