//! fern-backed `log` dispatcher.

use crate::error::{Result as ServerErrorResult, ServerError};

use ph_config::LoggingConfig;

use std::fmt::{Arguments, Display};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to a file; never colored
    File(PathBuf),
    Stdout { colored: bool },
}

impl LogSink {
    pub fn from_config(logging: &LoggingConfig, log_file: Option<PathBuf>) -> Self {
        match log_file {
            Some(path) => LogSink::File(path),
            None => LogSink::Stdout {
                colored: logging.colored,
            },
        }
    }
}

/// Create the directory that will hold `log_file`.
pub fn prepare_log_dir(log_file: &Path) -> ServerErrorResult<()> {
    let Some(dir) = log_file.parent() else {
        return Ok(());
    };

    std::fs::create_dir_all(dir).map_err(|e| ServerError::LogFile {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Install the global logger. Call once, before anything else logs.
#[track_caller]
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let level_filter = logging.level.0;
    let sink = LogSink::from_config(logging, log_file);

    let output = match &sink {
        LogSink::File(path) => {
            prepare_log_dir(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::LogFile {
                    path: path.clone(),
                    source: e,
                })?;

            Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file)
        }
        LogSink::Stdout { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        LogSink::Stdout { colored: false } => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", level_filter.min(log::LevelFilter::Warn))
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &sink {
        LogSink::File(path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        LogSink::Stdout { colored } => info!(
            "Logger initialized: level={:?}, stdout (colored: {})",
            level_filter, colored
        ),
    }

    // Bridge tracing to log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// `[<rfc3339> - LEVEL] message [file:line]`
fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}
