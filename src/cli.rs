//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::services::config_loader::{ConfigLoader, ConfigLoaderTrait};
use crate::types::errors::ConfigError;
use crate::types::settings::ShellConfig;

/// Subtitle shell - tabbed workspace for subtitle tools.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "subtitle-shell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subtitle file to open on startup.
    pub file: Option<PathBuf>,

    /// Tool to open FILE with (defaults to the configured file tool).
    #[arg(long, value_name = "ID", requires = "file")]
    pub tool: Option<String>,

    /// Read configuration from PATH instead of the platform config dir.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Loads the config the arguments point at.
    pub fn load_config(&self) -> Result<ShellConfig, ConfigError> {
        ConfigLoader::new(self.config.clone()).load()
    }
}
