//! Configuration management for the HudController utility plugin
//!
//! Settings are read once at plugin load. Defaults are compiled in, an
//! optional TOML file next to the plugin can override them, and `HUDCTL_*`
//! environment variables override both.

use config::{Config, ConfigError, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file searched relative to the host working directory (extension optional)
pub const CONFIG_FILE: &str = "reframework/plugins/hudcontroller_util";

/// Environment prefix for overrides, e.g. `HUDCTL_MOD_NAME`
pub const ENV_PREFIX: &str = "HUDCTL";

/// Complete plugin configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PluginConfig {
    /// Sandbox directory, relative to the host working directory
    pub data_dir: String,

    /// Namespace marker every target path must contain
    pub mod_name: String,

    /// Global Lua table the functions are installed under
    pub table_name: String,

    /// Maximum level forwarded to the host log
    pub log_level: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_dir: "reframework/data".to_string(),
            mod_name: "HudController".to_string(),
            table_name: "hudcontroller_util".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PluginConfig {
    /// Load configuration from the default file location with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from `path` (missing file is fine) with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let defaults = PluginConfig::default();

        let settings = Config::builder()
            .set_default("data_dir", defaults.data_dir)?
            .set_default("mod_name", defaults.mod_name)?
            .set_default("table_name", defaults.table_name)?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: PluginConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.is_empty() {
            return Err(ConfigError::Message("data_dir cannot be empty".into()));
        }

        if Path::new(&self.data_dir).is_absolute() {
            return Err(ConfigError::Message(format!(
                "data_dir must be relative to the game directory, got {}",
                self.data_dir
            )));
        }

        if self.mod_name.is_empty() {
            return Err(ConfigError::Message("mod_name cannot be empty".into()));
        }

        if self.mod_name.contains(['/', '\\']) {
            return Err(ConfigError::Message(
                "mod_name must be a single directory name".into(),
            ));
        }

        if self.table_name.is_empty() {
            return Err(ConfigError::Message("table_name cannot be empty".into()));
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Message(format!(
                "Unknown log_level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Get the sandbox root under the given working directory
    pub fn sandbox_root(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.data_dir)
    }

    /// Get the configured log level, falling back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
