//! Location and loading of `config.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "cordview";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no home directory to place configuration in")]
    ConfigDirNotFound,
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize default config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Reads the configuration file, creating a default one on first run.
#[derive(Debug, Clone)]
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when no home directory exists.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    #[must_use]
    pub fn default_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            info!(path = %self.config_dir.display(), "Creating configuration directory");
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads `path_override` or the default config file.
    ///
    /// A missing file is created with default values. A file that does not
    /// parse is left untouched and defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on I/O failures.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        self.ensure_config_dir()?;
        let config_path =
            path_override.map_or_else(|| self.default_config_path(), Path::to_path_buf);

        if !config_path.exists() {
            info!(path = %config_path.display(), "No config file, writing defaults");
            let config = AppConfig::default();
            write_atomically(&config_path, &toml::to_string_pretty(&config)?)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(toml::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %config_path.display(), error = %err, "Ignoring unreadable config file");
            AppConfig::default()
        }))
    }
}

/// Writes through a temporary file in the same directory so readers never
/// see a half-written config.
fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("config path has no parent directory"))?;
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
