use crate::errors::{AppError, AppResult};
use crate::models::summary_row::SummaryOrder;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub summary_order: SummaryOrder,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            summary_order: SummaryOrder::default(),
        }
    }
}

impl Config {
    /// Every key of the YAML file, in file order.
    pub const FIELDS: [&'static str; 5] = ["database", "host", "port", "log_level", "summary_order"];

    /// `%APPDATA%\chatlog` on Windows, `$HOME/.chatlog` elsewhere
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("chatlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".chatlog")
        }
    }

    /// `chatlog.conf` (YAML) inside [`Config::config_dir`]
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("chatlog.conf")
    }

    /// Default event database, next to the config file
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("chatlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Missing keys take their default value.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// Returns the database path written into the configuration.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB path: user provided (same resolution as --db) or default
        let db_path = custom_name
            .map(|name| expand_tilde(&name))
            .unwrap_or_else(Self::database_file);

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode)
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
