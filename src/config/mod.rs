use crate::errors::{AppError, AppResult};
use crate::utils::date::{DEFAULT_UTC_OFFSET_HOURS, civil_offset};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use chrono::{FixedOffset, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const APP_DIR: &str = ".ragenda";
const CONFIG_FILE: &str = "ragenda.conf";
const DB_FILE: &str = "ragenda.sqlite";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Offset of the civil clock used to decide what is "today" and "now".
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
}

fn default_utc_offset() -> i32 {
    DEFAULT_UTC_OFFSET_HOURS
}
fn default_start() -> String {
    "09:00".to_string()
}
fn default_end() -> String {
    "10:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            utc_offset_hours: default_utc_offset(),
            default_start: default_start(),
            default_end: default_end(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.ragenda`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Validate the values that are only interpreted later.
    pub fn check(&self) -> AppResult<()> {
        civil_offset(self.utc_offset_hours)?;
        self.start_default()?;
        self.end_default()?;
        Ok(())
    }

    pub fn offset(&self) -> AppResult<FixedOffset> {
        civil_offset(self.utc_offset_hours)
    }

    pub fn start_default(&self) -> AppResult<NaiveTime> {
        parse_time(&self.default_start)
            .ok_or_else(|| AppError::Config(format!("default_start: '{}'", self.default_start)))
    }

    pub fn end_default(&self) -> AppResult<NaiveTime> {
        parse_time(&self.default_end)
            .ok_or_else(|| AppError::Config(format!("default_end: '{}'", self.default_end)))
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // DB path: user provided (as given) or default
        let db_path = match custom_db {
            Some(name) => expand_tilde(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                io::Error::new(e.kind(), format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        Ok(db_path)
    }
}
