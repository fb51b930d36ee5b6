use crate::error::{LaunchpadError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".launchpad.yml";
/// Users file written by `launchpad init` unless another is given
pub const DEFAULT_USERS_FILE: &str = ".launchpad-users.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchpadConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Default `pageSize` for the `launches` query
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// YAML launch catalog replacing the built-in one
    #[serde(default)]
    pub launches_file: Option<String>,

    /// JSON snapshot of users and their trips; in-memory only when unset
    #[serde(default)]
    pub users_file: Option<String>,
}

fn default_page_size() -> usize {
    20
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            launches_file: None,
            users_file: None,
        }
    }
}

impl LaunchpadConfig {
    /// Load the config found by walking up from `start_path`.
    ///
    /// Falls back to defaults rooted at `start_path` when no config file exists.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Ok(path) => Self::load(&path),
            Err(LaunchpadError::NotInitialized) => {
                tracing::debug!(path = %start_path.display(), "No config file found, using defaults");
                Ok((Self::default(), start_path.to_path_buf()))
            }
            Err(e) => Err(e),
        }
    }

    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: LaunchpadConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                LaunchpadError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(LaunchpadError::NotInitialized);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.data.page_size == 0 {
            return Err(LaunchpadError::Config(
                "data.page_size must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve a configured data file relative to the project root.
    pub fn resolve_path(project_root: &Path, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }

    pub fn launches_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.data
            .launches_file
            .as_deref()
            .map(|f| Self::resolve_path(project_root, f))
    }

    pub fn users_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.data
            .users_file
            .as_deref()
            .map(|f| Self::resolve_path(project_root, f))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
