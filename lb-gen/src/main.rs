#![deny(
    // Overly strict on purpose: it forces inline allows, which mark the places a reviewer may
    // want to take a second look at.
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! lineage-bench seeding dry run
//!
//! Seeds an in-memory metadata store the same way a benchmark run seeds a real one, then samples
//! it with every specification and prints the sampled counts as JSON.  Useful for checking a seed
//! configuration before pointing it at a real store.  See `--help` for the flags.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lb_core::memstore::InMemoryStore;
use lb_core::store::MetadataStore;
use lb_gen::{
    get_existing_edge_operands,
    get_existing_nodes,
    get_existing_types,
    seed_store,
    EdgeSpecification,
    FillContextEdgesConfig,
    FillNodesConfig,
    FillTypesConfig,
    NodeSpecification,
    SeedConfig,
    TypeSpecification,
};
use serde::Serialize;
use tracing::info;

/// Seed an in-memory lineage store and report what the samplers see.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML seed configuration.  Count flags given on the command line override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of artifact types to insert.
    #[arg(long)]
    artifact_types: Option<usize>,

    /// Number of execution types to insert.
    #[arg(long)]
    execution_types: Option<usize>,

    /// Number of context types to insert.
    #[arg(long)]
    context_types: Option<usize>,

    /// Number of artifacts to insert.
    #[arg(long)]
    artifacts: Option<usize>,

    /// Number of executions to insert.
    #[arg(long)]
    executions: Option<usize>,

    /// Number of contexts to insert.
    #[arg(long)]
    contexts: Option<usize>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

impl Cli {
    /// The seed configuration file (if any) with command-line overrides applied.
    fn seed_config(&self) -> Result<SeedConfig> {
        let mut config = match &self.config {
            Some(path) => SeedConfig::load(path)?,
            None => SeedConfig::default(),
        };

        let overrides = [
            (self.artifact_types, &mut config.num_artifact_types),
            (self.execution_types, &mut config.num_execution_types),
            (self.context_types, &mut config.num_context_types),
            (self.artifacts, &mut config.num_artifacts),
            (self.executions, &mut config.num_executions),
            (self.contexts, &mut config.num_contexts),
        ];
        for (flag, count) in overrides {
            if let Some(n) = flag {
                *count = n;
            }
        }
        Ok(config)
    }
}

/// Sampled entity counts, keyed by specification name.
#[derive(Debug, Default, Serialize)]
struct Summary {
    /// Types returned per type specification.
    types: BTreeMap<&'static str, usize>,
    /// Nodes returned per node specification.
    nodes: BTreeMap<&'static str, usize>,
    /// (non-context, context) nodes returned per edge specification.
    edge_operands: BTreeMap<&'static str, (usize, usize)>,
}

/// Run every sampler specification against `store`.
fn summarize<S: MetadataStore + ?Sized>(store: &S) -> Result<Summary> {
    let mut summary = Summary::default();
    for &spec in TypeSpecification::ALL {
        let types = get_existing_types(&FillTypesConfig::new(spec), store)?;
        summary.types.insert(spec.as_str(), types.len());
    }
    for &spec in NodeSpecification::ALL {
        let nodes = get_existing_nodes(&FillNodesConfig::new(spec), store)?;
        summary.nodes.insert(spec.as_str(), nodes.len());
    }
    for &spec in EdgeSpecification::ALL {
        let operands = get_existing_edge_operands(&FillContextEdgesConfig::new(spec), store)?;
        summary
            .edge_operands
            .insert(spec.as_str(), (operands.non_context.len(), operands.context.len()));
    }
    Ok(summary)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    lb_core::logging::setup(&args.verbosity);

    let config = args.seed_config()?;
    info!(?config, "seeding in-memory store");

    let mut store = InMemoryStore::new();
    seed_store(&config, &mut store)?;

    let summary = summarize(&store)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
