use crate::difficulty::Difficulty;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty initially selected in the difficulty menu
    #[serde(default)]
    pub(crate) difficulty: Difficulty,

    /// Settings for the log file
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakegame").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLoggingConfig")]
pub(crate) struct LoggingConfig {
    /// Maximum level of messages written to the log file.  At
    /// `LevelFilter::Off`, no log file is created.
    pub(crate) level: LevelFilter,

    /// Path to the log file; `None` means the default path
    pub(crate) file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawLoggingConfig {
    level: String,
    file: Option<String>,
}

impl Default for RawLoggingConfig {
    fn default() -> RawLoggingConfig {
        RawLoggingConfig {
            level: String::from("info"),
            file: None,
        }
    }
}

impl TryFrom<RawLoggingConfig> for LoggingConfig {
    type Error = LoggingConfigError;

    fn try_from(value: RawLoggingConfig) -> Result<LoggingConfig, LoggingConfigError> {
        Ok(LoggingConfig {
            level: LevelFilter::from_str(&value.level)?,
            file: value.file.map(expanduser::expanduser).transpose()?,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub(crate) enum LoggingConfigError {
    #[error("invalid log level")]
    Level(#[from] log::ParseLevelError),
    #[error("invalid log file path")]
    Path(#[from] std::io::Error),
}
