mod init;
mod mutate;
mod query;
mod schema;
mod serve;
mod utils;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::LaunchpadConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to command handlers that need configuration
pub struct CommandContext {
    pub config: LaunchpadConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: LaunchpadConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Load from an explicit config path, or discover one from the current directory.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => LaunchpadConfig::load(Path::new(path)),
            None => LaunchpadConfig::discover(&std::env::current_dir()?),
        }
        .context("Failed to load launchpad configuration")?;
        Ok(Self::new(config, root))
    }
}
