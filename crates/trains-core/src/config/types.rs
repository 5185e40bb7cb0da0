use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local configuration file name
pub const CONFIG_FILE: &str = "trains.toml";

/// Configuration loaded from `trains.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainsConfig {
    /// Where the graph comes from when no CLI flag names one
    pub graph: GraphSourceConfig,

    /// Enumeration limits
    pub limits: LimitsConfig,

    /// File this configuration was read from
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSourceConfig {
    /// Inline edge list, e.g. "AB5, BC4"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<String>,

    /// Edge-list file, relative to the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Stop enumerating after this many routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_routes: Option<usize>,

    /// Never extend a route beyond this many stops
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}
