//! User configuration loaded from `config.toml` in the data directory.

use crate::domain::timer::{DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Timer lengths and phase-change behaviour.
    pub timer: TimerConfig,
    /// Data file location.
    pub storage: StorageConfig,
}

/// Timer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Work phase length in seconds.
    pub work_secs: u32,
    /// Break phase length in seconds.
    pub break_secs: u32,
    /// Keep counting into the next phase when one ends.
    ///
    /// When false the timer stops at each phase boundary and waits for start.
    pub auto_continue: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            auto_continue: false,
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the data file path (None = `pomodoro_data.json` in the data directory).
    pub data_file: Option<PathBuf>,
}

/// Result of a fallback load: the config to use plus the error that forced defaults.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds a zero-length phase.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid TOML in {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when absent or broken.
    pub fn load_with_fallback(path: &Path) -> ConfigLoad {
        if !path.exists() {
            return ConfigLoad {
                config: Config::default(),
                error: None,
            };
        }

        match Self::from_file(path) {
            Ok(config) => ConfigLoad {
                config,
                error: None,
            },
            Err(err) => ConfigLoad {
                config: Config::default(),
                error: Some(err),
            },
        }
    }

    /// Write configuration as TOML, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), AppError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        crate::persistence::atomic_write(path, &content)
            .map_err(|e| AppError::Config(format!("{:#}", e)))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.timer.work_secs == 0 {
            return Err(AppError::Config("timer.work_secs must be greater than zero".into()));
        }
        if self.timer.break_secs == 0 {
            return Err(AppError::Config("timer.break_secs must be greater than zero".into()));
        }
        Ok(())
    }

    /// Data file to use: explicit override, else the default inside `data_dir`.
    pub fn data_file_in(&self, data_dir: &Path) -> PathBuf {
        match &self.storage.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => crate::persistence::data_file(data_dir),
        }
    }
}
