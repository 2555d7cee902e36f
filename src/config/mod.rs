use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::time::DEFAULT_DATETIME_FORMAT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Name of the profile created when none exists.
    #[serde(default = "default_profile_name")]
    pub default_profile_name: String,
    /// Name used by `profile add` when no name is given.
    #[serde(default = "default_new_profile_name")]
    pub new_profile_name: String,
    /// Page the export link points to (`?data=` is appended).
    #[serde(default = "default_export_base_url")]
    pub export_base_url: String,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    /// Refresh period of `list --watch`.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_profile_name() -> String {
    "Default".to_string()
}
fn default_new_profile_name() -> String {
    "New Base".to_string()
}
fn default_export_base_url() -> String {
    "https://rsupply.local/".to_string()
}
fn default_datetime_format() -> String {
    DEFAULT_DATETIME_FORMAT.to_string()
}
fn default_refresh_interval() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_profile_name: default_profile_name(),
            new_profile_name: default_new_profile_name(),
            export_base_url: default_export_base_url(),
            datetime_format: default_datetime_format(),
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rsupply")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rsupply")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsupply.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rsupply.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Where a `--db` value points: absolute paths are kept, relative
    /// ones live inside the config directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        if Path::new(name).is_absolute() {
            PathBuf::from(name)
        } else {
            Self::config_dir().join(name)
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
