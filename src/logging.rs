use crate::config::LoggingConfig;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Return the default log file path
pub(crate) fn default_path() -> Result<PathBuf, LoggingError> {
    dirs::data_local_dir()
        .map(|p| p.join("snakegame").join("snakegame.log"))
        .ok_or(LoggingError::NoPath)
}

/// Start logging to the file given by `cfg`, appending to it if it already
/// exists.  The terminal is never logged to, as the game is drawn there.
///
/// Returns the path to the log file, or `None` if logging is disabled.
pub(crate) fn init(cfg: &LoggingConfig) -> Result<Option<PathBuf>, LoggingError> {
    if cfg.level == LevelFilter::Off {
        return Ok(None);
    }
    let path = match cfg.file {
        Some(ref p) => p.clone(),
        None => default_path()?,
    };
    let file = open_log_file(&path)?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .build();
    WriteLogger::init(cfg.level, config, file)?;
    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<fs_err::File, LoggingError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LoggingError::Mkdir)?;
    }
    fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LoggingError::Create)
}

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create log directory")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to open log file")]
    Create(#[source] std::io::Error),
    #[error("failed to install logger")]
    Init(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_path_is_under_data_dir() {
        if let Ok(p) = default_path() {
            assert!(p.ends_with("snakegame/snakegame.log"));
        }
    }

    #[test]
    fn open_creates_parents() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("dir").join("game.log");
        let mut fp = open_log_file(&path).unwrap();
        writeln!(fp, "first").unwrap();
        drop(fp);
        let mut fp = open_log_file(&path).unwrap();
        writeln!(fp, "second").unwrap();
        drop(fp);
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn disabled_logging_creates_nothing() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("game.log");
        let cfg = LoggingConfig {
            level: LevelFilter::Off,
            file: Some(path.clone()),
        };
        assert_eq!(init(&cfg).unwrap(), None);
        assert!(!path.exists());
    }
}
