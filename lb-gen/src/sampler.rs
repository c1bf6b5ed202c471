//! Reads back the entities a workload stage operates on.
//!
//! Every call resolves the configuration's specification first, so an unknown specification
//! fails before the store is touched.  Nothing is cached: each call lists the store's current
//! contents, which picks up whatever earlier stages inserted.  Calls only need `&S`, so
//! concurrent sampling is safe whenever the store's read path is.
use anyhow::Result;
use lb_core::model::Family;
use lb_core::store::MetadataStore;
use serde::Serialize;
use tracing::{
    debug,
    field,
    instrument,
    Span,
};

use crate::config::{
    FillContextEdgesConfig,
    FillNodesConfig,
    FillTypesConfig,
};
use crate::entity::{
    Node,
    Type,
};

/// A workload configuration that determines a family of types.
pub trait TypeSource {
    /// The family whose types the configuration needs.
    ///
    /// # Errors
    /// `InvalidSpecification` if the configuration's specification is not recognized.
    fn type_family(&self) -> Result<Family>;
}

impl TypeSource for FillTypesConfig {
    fn type_family(&self) -> Result<Family> {
        Ok(self.specification()?.family())
    }
}

impl TypeSource for FillNodesConfig {
    fn type_family(&self) -> Result<Family> {
        Ok(self.specification()?.family())
    }
}

/// Candidate endpoints for new context edges.  Both sides are complete: edges that already exist
/// between them are not taken into account.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EdgeOperands {
    /// Every artifact (attribution) or execution (association) in the store.
    pub non_context: Vec<Node>,
    /// Every context in the store.
    pub context: Vec<Node>,
}

/// Every type in the family `config` names.
///
/// Works with both [`FillTypesConfig`] (which names a type family directly) and
/// [`FillNodesConfig`] (whose node family is typed by the same family's types).
///
/// # Errors
/// `InvalidSpecification` without a store call, or the store's failure unchanged.
#[instrument(skip_all, fields(family = field::Empty))]
pub fn get_existing_types<C, S>(config: &C, store: &S) -> Result<Vec<Type>>
where
    C: TypeSource + ?Sized,
    S: MetadataStore + ?Sized,
{
    let family = config.type_family()?;
    Span::current().record("family", family.as_str());

    let types = store.list_types(family)?;
    debug!(count = types.len(), "sampled types");
    Ok(types.into_iter().map(|record| Type::new(family, record)).collect())
}

/// Every node in the family `config` names.
///
/// # Errors
/// `InvalidSpecification` without a store call, or the store's failure unchanged.
#[instrument(skip_all, fields(family = field::Empty))]
pub fn get_existing_nodes<S: MetadataStore + ?Sized>(config: &FillNodesConfig, store: &S) -> Result<Vec<Node>> {
    let family = config.specification()?.family();
    Span::current().record("family", family.as_str());

    list_family_nodes(family, store)
}

/// Every node on each side of the edge kind `config` names: artifacts and contexts for
/// attribution, executions and contexts for association.
///
/// # Errors
/// `InvalidSpecification` without a store call, or the store's failure unchanged.
#[instrument(skip_all, fields(edge = field::Empty))]
pub fn get_existing_edge_operands<S: MetadataStore + ?Sized>(
    config: &FillContextEdgesConfig,
    store: &S,
) -> Result<EdgeOperands> {
    let spec = config.specification()?;
    Span::current().record("edge", spec.as_str());

    let (non_context_family, context_family) = spec.endpoint_families();
    Ok(EdgeOperands {
        non_context: list_family_nodes(non_context_family, store)?,
        context: list_family_nodes(context_family, store)?,
    })
}

/// One `list_nodes` round-trip, tagged with `family`.
fn list_family_nodes<S: MetadataStore + ?Sized>(family: Family, store: &S) -> Result<Vec<Node>> {
    let nodes = store.list_nodes(family)?;
    debug!(%family, count = nodes.len(), "sampled nodes");
    Ok(nodes.into_iter().map(|record| Node::new(family, record)).collect())
}
