use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback, Output};
use log::{Level, Record, info};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: bday_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn);

    let (colors, output): (Option<ColoredLevelConfig>, Output) =
        if let Some(ref log_path) = log_file {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;
            (None, file.into())
        } else if colored {
            (Some(level_colors()), std::io::stdout().into())
        } else {
            // Plain output for non-TTY (systemd, docker logs)
            (None, std::io::stdout().into())
        };

    let dispatch = Dispatch::new()
        .format(move |out, message, record| format_line(out, message, record, colors.as_ref()))
        .chain(output);

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

pub(crate) fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn format_line(
    out: FormatCallback,
    message: &fmt::Arguments,
    record: &Record,
    colors: Option<&ColoredLevelConfig>,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level_label(record.level(), colors),
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

pub(crate) fn level_label(level: Level, colors: Option<&ColoredLevelConfig>) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}
