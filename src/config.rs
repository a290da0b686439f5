//! Settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsedr/rsedr.toml`
//! 3. Environment variables: `RSEDR_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Runtime settings for the simulator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Destination of the activity log (JSON lines)
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rsedr.log"),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("log_file", "rsedr.log")?;

        if let Some(dirs) = ProjectDirs::from("", "", "rsedr") {
            let global = dirs.config_dir().join("rsedr.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("RSEDR"));

        builder.build()?.try_deserialize()
    }
}
