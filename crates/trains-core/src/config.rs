//! Configuration for trains
//!
//! Looked up in order: an explicit `--config` path, `trains.toml` in the
//! working directory, then the global `<config dir>/trains/config.toml`.
//! The global directory can be overridden with `TRAINS_CONFIG_DIR`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrainsError};
use crate::graph::EnumerateOptions;

pub use types::{GraphSourceConfig, LimitsConfig, TrainsConfig, CONFIG_FILE};

const GLOBAL_CONFIG_DIR: &str = "trains";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TRAINS_CONFIG_DIR";

/// Path of the global configuration file, if a config directory is known
pub fn global_config_path() -> Option<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()?.join(GLOBAL_CONFIG_DIR)
    };
    Some(config_dir.join(GLOBAL_CONFIG_FILE))
}

impl TrainsConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TrainsError::read_failed(path, e))?;
        let mut config: TrainsConfig = toml::from_str(&content)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrainsError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find and load the configuration that applies to `root`
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let resolved = if path.is_absolute() {
                path.to_path_buf()
            } else {
                root.join(path)
            };
            if !resolved.is_file() {
                return Err(TrainsError::not_found("config file", resolved.display()));
            }
            return Self::load(&resolved);
        }

        let local = root.join(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }

        match global_config_path() {
            Some(global) if global.is_file() => Self::load(&global),
            _ => Ok(Self::default()),
        }
    }

    /// Edge-list file named by the config, resolved against the config's
    /// directory
    pub fn graph_file(&self) -> Option<PathBuf> {
        let file = self.graph.file.as_ref()?;
        if file.is_absolute() {
            return Some(file.clone());
        }
        let base = self
            .source_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        Some(base.join(file))
    }

    /// Enumeration limits as search options
    pub fn enumerate_options(&self) -> EnumerateOptions {
        EnumerateOptions {
            max_routes: self.limits.max_routes,
            max_depth: self.limits.max_depth,
            cancel: None,
        }
    }
}
