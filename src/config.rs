//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/vampires/vampires.toml`
//! 3. Local config: `<dir>/.vampires.toml`
//! 4. Environment variables: `VAMPIRES_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::MILLENNIAL_YEAR;
use crate::error::{VampireError, VampireResult};

/// Settings for lineage queries and rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Conversions strictly after this year count as recent
    pub millennial_year: i32,
    /// Render `name (year)` instead of just `name`
    pub show_years: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            millennial_year: MILLENNIAL_YEAR,
            show_years: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub millennial_year: Option<i32>,
    pub show_years: Option<bool>,
}

/// Get the XDG config directory for vampires.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vampires").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("vampires.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".vampires.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> VampireResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| VampireError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| VampireError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            millennial_year: overlay.millennial_year.unwrap_or(self.millennial_year),
            show_years: overlay.show_years.unwrap_or(self.show_years),
        }
    }

    /// Load settings from the global config, an optional local directory and
    /// the process environment.
    pub fn load(local_dir: Option<&Path>) -> VampireResult<Self> {
        Self::load_layered(global_config_path().as_deref(), local_dir, None)
    }

    /// Load settings from explicit layers.
    ///
    /// # Arguments
    /// * `global_path` - Global TOML file, skipped if absent on disk
    /// * `local_dir` - Directory holding `.vampires.toml`, skipped if absent
    /// * `env_source` - Variables to read instead of the process environment
    #[instrument(level = "debug", skip(env_source))]
    pub fn load_layered(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env_source: Option<Map<String, String>>,
    ) -> VampireResult<Self> {
        let mut current = Self::default();

        if let Some(global) = global_path {
            if global.exists() {
                debug!("global config: {}", global.display());
                current = current.merge_with(&load_raw_settings(global)?);
            }
        }

        if let Some(dir) = local_dir {
            let local = local_config_path(dir);
            if local.exists() {
                debug!("local config: {}", local.display());
                current = current.merge_with(&load_raw_settings(&local)?);
            }
        }

        Self::apply_env_overrides(current, env_source)
    }

    /// Apply VAMPIRES_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env_source: Option<Map<String, String>>,
    ) -> VampireResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("VAMPIRES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env_source),
            )
            .build()
            .map_err(config_err)?;

        match config.get_int("millennial_year") {
            Ok(val) => {
                settings.millennial_year = i32::try_from(val).map_err(|e| VampireError::Config {
                    message: format!("millennial_year {val}: {e}"),
                })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_bool("show_years") {
            Ok(val) => settings.show_years = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> VampireResult<String> {
        toml::to_string_pretty(self).map_err(|e| VampireError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> VampireError {
    VampireError::Config {
        message: e.to_string(),
    }
}
