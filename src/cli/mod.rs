//! CLI argument parsing for trains
//!
//! Global flags select the graph source, output format and logging; each
//! subcommand runs one route query.

pub mod format;
pub mod parse;
pub mod usage;

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

pub use trains_core::format::OutputFormat;
use parse::parse_label;
use trains_core::Label;

/// Trains - route queries over a weighted rail network
#[derive(Parser, Debug)]
#[command(name = "trains")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Inline edge list, e.g. "AB5, BC4, CD8"
    #[arg(long, global = true)]
    pub graph: Option<String>,

    /// Edge-list file
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to ./trains.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Total distance of an explicit route such as A-B-C
    Distance {
        /// Route as labels joined by '-'
        route: String,
    },

    /// Shortest route between two stations
    Shortest {
        /// Start station
        #[arg(value_parser = parse_label)]
        from: Label,

        /// End station (same as start for the shortest round trip)
        #[arg(value_parser = parse_label)]
        to: Label,
    },

    /// List routes within a stop limit
    Routes(RoutesArgs),

    /// Count routes shorter than a distance
    Count(CountArgs),

    /// Summarize the loaded graph
    Graph,
}

/// Enumeration limits shared by `routes` and `count`
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// Stop after this many routes (overrides [limits] in trains.toml)
    #[arg(long)]
    pub max_routes: Option<usize>,

    /// Never extend a route beyond this many stops
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the routes command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("bound").required(true).args(["max_stops", "exact_stops"])))]
pub struct RoutesArgs {
    /// Start station
    #[arg(value_parser = parse_label)]
    pub from: Label,

    /// End station
    #[arg(value_parser = parse_label)]
    pub to: Label,

    /// Routes with at most this many stops
    #[arg(long)]
    pub max_stops: Option<u32>,

    /// Routes with exactly this many stops
    #[arg(long)]
    pub exact_stops: Option<u32>,

    #[command(flatten)]
    pub limits: LimitArgs,
}

/// Arguments for the count command.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Start station
    #[arg(value_parser = parse_label)]
    pub from: Label,

    /// End station
    #[arg(value_parser = parse_label)]
    pub to: Label,

    /// Count routes whose total distance is below this value
    #[arg(long)]
    pub max_distance: u32,

    #[command(flatten)]
    pub limits: LimitArgs,
}
