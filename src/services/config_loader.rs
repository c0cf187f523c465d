// Subtitle shell config loader
// Reads the shell configuration from a JSON file at the platform config path.
// The shell never writes this file; missing files mean defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::ConfigError;
use crate::types::settings::ShellConfig;

const APP_DIR: &str = "subtitle-shell";
const CONFIG_FILE: &str = "config.json";

/// Trait defining the config loader interface.
pub trait ConfigLoaderTrait {
    fn load(&mut self) -> Result<ShellConfig, ConfigError>;
    fn get_config(&self) -> &ShellConfig;
    fn config_path(&self) -> &Path;
}

/// Loads [`ShellConfig`] from disk.
pub struct ConfigLoader {
    config_path: PathBuf,
    explicit: bool,
    config: ShellConfig,
}

impl ConfigLoader {
    /// Creates a new ConfigLoader.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise uses `<config dir>/subtitle-shell/config.json`.
    pub fn new(path_override: Option<PathBuf>) -> Self {
        let explicit = path_override.is_some();
        let config_path = path_override.unwrap_or_else(default_config_path);
        Self {
            config_path,
            explicit,
            config: ShellConfig::default(),
        }
    }

    /// Whether the path was given by the caller rather than derived.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

/// Platform config path, falling back to the working directory when the
/// platform has no config dir.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

impl ConfigLoaderTrait for ConfigLoader {
    /// Loads the config file.
    ///
    /// A missing file yields defaults. A file that exists but does not parse
    /// is an error; partial files fill the gaps with defaults.
    fn load(&mut self) -> Result<ShellConfig, ConfigError> {
        if !self.config_path.exists() {
            if self.explicit {
                log::warn!("config file {} does not exist, using defaults", self.config_path.display());
            } else {
                log::debug!("no config at {}, using defaults", self.config_path.display());
            }
            self.config = ShellConfig::default();
            return Ok(self.config.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let config: ShellConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Serialization(format!("Failed to parse config file: {}", e)))?;

        log::info!("loaded config from {}", self.config_path.display());
        self.config = config;
        Ok(self.config.clone())
    }

    fn get_config(&self) -> &ShellConfig {
        &self.config
    }

    fn config_path(&self) -> &Path {
        &self.config_path
    }
}
