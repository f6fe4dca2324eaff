use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_duration")]
    pub default_duration: i64,
    #[serde(default)]
    pub strict_not_found: bool,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_model() -> String {
    Config::model_file().to_string_lossy().to_string()
}
fn default_duration() -> i64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            model: default_model(),
            default_duration: default_duration(),
            strict_not_found: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fitlogger")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".fitlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fitlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workouts.db")
    }

    /// Return the full path of the predictor artifact
    pub fn model_file() -> PathBuf {
        Self::config_dir().join("next_exercise_model.json")
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    /// Parse YAML content; fields that are missing keep their defaults.
    pub fn parse(content: &str) -> AppResult<Self> {
        let mut cfg: Config =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.model = expand_tilde(&cfg.model).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Write a fresh configuration pointing at `database` (or the default one).
    ///
    /// In test mode nothing is written to disk; the returned config is
    /// still the one that would have been saved.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let database = match custom_db {
            Some(name) => expand_tilde(name),
            None => Self::database_file(),
        };

        let cfg = Config {
            database: database.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            cfg.save_to(&Self::config_file())?;
            log::info!("config written to {}", Self::config_file().display());
        }

        Ok(cfg)
    }
}
