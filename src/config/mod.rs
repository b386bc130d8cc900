use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_role() -> String {
    Role::Employee.as_str().to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            role: default_role(),
            company_id: None,
            employee_id: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.checkmate`, `.` without a home)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".checkmate")
    }

    /// Full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("checkmate.conf")
    }

    /// Full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("checkmate.sqlite")
    }

    /// Load configuration from the standard file, or defaults if absent.
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

    /// Configured viewer role.
    pub fn role(&self) -> AppResult<Role> {
        Role::from_code(&self.role).ok_or_else(|| AppError::InvalidRole(self.role.clone()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the database path to initialise.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config.database)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|e: io::Error| AppError::Config(e.to_string()))?;
        Ok(())
    }
}
