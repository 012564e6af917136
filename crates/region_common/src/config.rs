//! Daemon configuration.
//!
//! Configuration lives in /etc/regiond/config.toml. Every field has a
//! default so a missing or partial file still yields a working daemon.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// System configuration directory
pub const SYSTEM_CONFIG_DIR: &str = "/etc/regiond";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "REGIOND_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Base directory of the per-identifier/per-node telemetry tree
    #[serde(default = "default_storage_root")]
    pub storage_root: PathBuf,

    /// Address the HTTP server binds
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("/var/lib/regiond/storage")
}

fn default_listen_addr() -> String {
    // Localhost only; external exposure is a reverse-proxy decision
    "127.0.0.1:7610".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            storage_root: default_storage_root(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl DaemonConfig {
    /// Load from `$REGIOND_CONFIG` or the system location, falling back to
    /// defaults when no file is readable.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new(SYSTEM_CONFIG_DIR).join(CONFIG_FILE));

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Could not load {}: {:#} - using defaults", path.display(), err);
                Self::default()
            }
        }
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}
