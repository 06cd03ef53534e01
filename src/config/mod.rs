//! User configuration loaded from TOML.
//!
//! Lookup order: an explicit `--config` path, then
//! `<config dir>/unit-converter/config.toml` when present, then defaults.
//! Every key is optional:
//!
//! ```toml
//! precision = 6
//! history_limit = 5
//! default_category = "Length"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_RECENT_LIMIT;
use crate::models::DEFAULT_RESULT_PRECISION;
use crate::table::find_category;

const APP_DIR_NAME: &str = "unit-converter";
const CONFIG_FILENAME: &str = "config.toml";
/// Beyond this many decimals an `f64` only prints noise
const MAX_PRECISION: usize = 15;
/// Upper bound on recent history entries shown at once
const MAX_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places used when displaying results
    pub precision: usize,
    /// Entries shown by recent history displays
    pub history_limit: usize,
    /// Category preselected in the interactive form and used by `convert`
    /// when no category is given
    pub default_category: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_RESULT_PRECISION,
            history_limit: DEFAULT_RECENT_LIMIT,
            default_category: "Length".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Resolve configuration for this run.
    ///
    /// An explicit path must exist and parse. The default location is
    /// optional; if it fails to parse the defaults are used with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => match Self::load_from_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    Ok(config)
                }
                Err(e) => {
                    tracing::warn!("{:#}; using defaults", e);
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            bail!("precision must be at most {}, got {}", MAX_PRECISION, self.precision);
        }
        if self.history_limit == 0 {
            bail!("history_limit must be at least 1");
        }
        if self.history_limit > MAX_HISTORY_LIMIT {
            bail!(
                "history_limit must be at most {}, got {}",
                MAX_HISTORY_LIMIT,
                self.history_limit
            );
        }
        find_category(&self.default_category)
            .with_context(|| "default_category must name a known category".to_string())?;
        Ok(())
    }
}

/// `<platform config dir>/unit-converter/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILENAME))
}
