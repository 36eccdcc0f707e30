//! Configuration loading for the postplan TUI.
//!
//! The config file is optional: postplan runs standalone with defaults when
//! no path is given via `--config` or `POSTPLAN_CONFIG`.

use crate::table::PAGE_SIZES;
use chrono::NaiveDate;
use postplan_core::default_start_date;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// First day of the generated calendar.
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    /// RNG seed for reproducible calendars; unset uses entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Initial rows per page, one of 10/20/30/40/50.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Redraw tick interval.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_page_size() -> usize {
    10
}

fn default_tick_interval_ms() -> u64 {
    200
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            seed: None,
            page_size: default_page_size(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: format!("must be one of {:?}", PAGE_SIZES),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os("POSTPLAN_CONFIG").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = TuiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.start_date, default_start_date());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_from_path_parses_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "start_date = \"2024-03-04\"\nseed = 99\npage_size = 20"
        )
        .unwrap();

        let config = TuiConfig::from_path(file.path()).unwrap();
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
        );
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.tick_interval_ms, 200);
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        let config = TuiConfig {
            page_size: 15,
            ..TuiConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "page_size",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_tick_interval_rejected() {
        let config = TuiConfig {
            tick_interval_ms: 0,
            ..TuiConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<TuiConfig, _> = toml::from_str("unknown_key = 1");
        assert!(result.is_err());
    }
}
