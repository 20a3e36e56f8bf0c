use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const EQUIPMENT_FILE: &str = "equipment_data.csv";
pub const TASK_FILE: &str = "task_data.csv";
pub const OPLOG_FILE: &str = "commtrack.log";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the two CSV tables and the operation log.
    pub data_dir: String,
    #[serde(default = "default_equipment_file")]
    pub equipment_file: String,
    #[serde(default = "default_task_file")]
    pub task_file: String,
    /// Shared static passphrase for the Admin role. Plain-text exact match,
    /// acceptable only for a non-adversarial internal tool.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Case sensitivity of the Work Type substring filter.
    #[serde(default)]
    pub match_case: bool,
}

fn default_equipment_file() -> String {
    EQUIPMENT_FILE.to_string()
}
fn default_task_file() -> String {
    TASK_FILE.to_string()
}
fn default_admin_password() -> String {
    "5241".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            equipment_file: default_equipment_file(),
            task_file: default_task_file(),
            admin_password: default_admin_password(),
            match_case: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("commtrack")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".commtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("commtrack.conf")
    }

    pub fn equipment_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.equipment_file)
    }

    pub fn task_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(&self.task_file)
    }

    pub fn oplog_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(OPLOG_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration file and the data directory.
    /// In test mode only the data directory is created, the config file on
    /// the user's machine is left alone.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        let data_dir = match custom_dir {
            Some(d) => PathBuf::from(d),
            None => Self::config_dir(),
        };
        fs::create_dir_all(&data_dir)?;

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Sanity-check the configuration, returning a list of findings.
    pub fn check(&self) -> Vec<String> {
        let mut findings = Vec::new();
        if self.data_dir.trim().is_empty() {
            findings.push("data_dir is empty".to_string());
        } else if !PathBuf::from(&self.data_dir).exists() {
            findings.push(format!("data_dir '{}' does not exist", self.data_dir));
        }
        if self.equipment_file.trim().is_empty() {
            findings.push("equipment_file is empty".to_string());
        }
        if self.task_file.trim().is_empty() {
            findings.push("task_file is empty".to_string());
        }
        if self.admin_password.is_empty() {
            findings.push("admin_password is empty, Admin login impossible".to_string());
        }
        findings
    }
}
