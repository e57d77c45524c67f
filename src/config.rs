//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbor/arbor.toml`
//! 3. Explicit config: `--config <file>`
//! 4. Environment variables: `ARBOR_*` prefix, `__` between table and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{PriceTable, Renderer, MAX_INDENT};
use crate::util::path::expand_path;

/// Indented display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Extra indent per tree level
    pub indent_step: usize,
    /// Repeated once per indent unit
    pub marker: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent_step: 2,
            marker: "-".into(),
        }
    }
}

impl DisplayConfig {
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.indent_step, self.marker.clone())
    }
}

/// Raw display config for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub indent_step: Option<usize>,
    pub marker: Option<String>,
}

/// Raw price table for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawPricing {
    pub plain: Option<u64>,
    pub plane: Option<u64>,
    pub bus: Option<u64>,
    pub container: Option<u64>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub display: RawDisplayConfig,
    pub pricing: RawPricing,
}

/// Unified configuration for arbor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub display: DisplayConfig,
    pub pricing: PriceTable,
}

/// Get the XDG config directory for arbor.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arbor").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arbor.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Read an optional key; only an absent key is `None`.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("environment override {key}: {e}"),
        }),
    }
}

impl Settings {
    /// Overlay values win where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let display = &overlay.display;
        let pricing = &overlay.pricing;
        Self {
            display: DisplayConfig {
                indent_step: display.indent_step.unwrap_or(self.display.indent_step),
                marker: display
                    .marker
                    .clone()
                    .unwrap_or_else(|| self.display.marker.clone()),
            },
            pricing: PriceTable {
                plain: pricing.plain.unwrap_or(self.pricing.plain),
                plane: pricing.plane.unwrap_or(self.pricing.plane),
                bus: pricing.bus.unwrap_or(self.pricing.bus),
                container: pricing.container.unwrap_or(self.pricing.container),
            },
        }
    }

    /// Load settings with layered precedence, using the XDG global config.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file layered over the global one; must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit config files.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: explicit config {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        Self::apply_env_overrides(current)?.validate()
    }

    fn validate(self) -> Result<Self, ApplicationError> {
        if self.display.indent_step > MAX_INDENT {
            return Err(ApplicationError::Config {
                message: format!(
                    "display.indent_step {} exceeds {}",
                    self.display.indent_step, MAX_INDENT
                ),
            });
        }
        Ok(self)
    }

    /// Apply ARBOR_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ARBOR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<usize>(&config, "display.indent_step")? {
            settings.display.indent_step = val;
        }
        if let Some(val) = env_value::<String>(&config, "display.marker")? {
            settings.display.marker = val;
        }
        if let Some(val) = env_value::<u64>(&config, "pricing.plain")? {
            settings.pricing.plain = val;
        }
        if let Some(val) = env_value::<u64>(&config, "pricing.plane")? {
            settings.pricing.plane = val;
        }
        if let Some(val) = env_value::<u64>(&config, "pricing.bus")? {
            settings.pricing.bus = val;
        }
        if let Some(val) = env_value::<u64>(&config, "pricing.container")? {
            settings.pricing.container = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}
