//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::{Cli, LimitArgs};
use trains_core::config::TrainsConfig;
use trains_core::error::{Result, TrainsError};
use trains_core::graph::{load_edge_list, parse_edge_list, Graph};
use trains_core::RouteService;

/// Where the graph definition came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    Inline(String),
    File(PathBuf),
}

/// Pick the graph source: `--graph`, `--file`, then the config's
/// `graph.edges` and `graph.file`
pub fn resolve_graph_source(cli: &Cli, root: &Path, config: &TrainsConfig) -> Result<GraphSource> {
    if let Some(edges) = &cli.graph {
        return Ok(GraphSource::Inline(edges.clone()));
    }
    if let Some(path) = &cli.file {
        let resolved = if path.is_absolute() {
            path.clone()
        } else {
            root.join(path)
        };
        return Ok(GraphSource::File(resolved));
    }
    if let Some(edges) = &config.graph.edges {
        return Ok(GraphSource::Inline(edges.clone()));
    }
    if let Some(path) = config.graph_file() {
        return Ok(GraphSource::File(path));
    }
    Err(TrainsError::GraphSourceMissing)
}

/// Install a Ctrl-C handler that raises the returned flag
fn cancel_on_interrupt() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    interrupted
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn load_config(&self) -> Result<TrainsConfig> {
        TrainsConfig::discover(self.cli.config.as_deref(), self.root)
    }

    pub fn load_graph(&self, config: &TrainsConfig) -> Result<Graph> {
        let graph = match resolve_graph_source(self.cli, self.root, config)? {
            GraphSource::Inline(edges) => parse_edge_list(&edges),
            GraphSource::File(path) => load_edge_list(&path),
        }
        .inspect_err(|e| {
            if e.is_construction_error() {
                tracing::debug!(error = %e, "graph definition rejected");
            }
        })?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }

    /// Service for single-answer queries
    pub fn route_service(&self) -> Result<RouteService> {
        let config = self.load_config()?;
        let graph = self.load_graph(&config)?;
        Ok(RouteService::new(graph))
    }

    /// Service for enumeration queries: config limits overridden by CLI
    /// flags, and Ctrl-C interrupts the search
    pub fn enumerating_service(&self, limits: &LimitArgs) -> Result<RouteService> {
        let config = self.load_config()?;
        let graph = self.load_graph(&config)?;

        let mut options = config.enumerate_options();
        if limits.max_routes.is_some() {
            options.max_routes = limits.max_routes;
        }
        if limits.max_depth.is_some() {
            options.max_depth = limits.max_depth;
        }
        options.cancel = Some(cancel_on_interrupt());

        Ok(RouteService::new(graph).with_options(options))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("trains {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Route distances, shortest routes and route counts over a rail network.");
        println!();
        println!("Run `trains --help` for usage information.");
        Ok(())
    }
}
