//! Process-wide logging setup.
//!
//! Records always go to stdout; when a log file is configured the same
//! records are appended there as well, without color codes, so a crash
//! leaves a trail even if the terminal scrollback is gone.

use crate::error::{Result, ServerError};

use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

pub fn initialize(
    log_level: roster_config::LogLevel,
    log_file: Option<std::path::PathBuf>,
    colored: bool,
) -> Result<()> {
    let mut root = Dispatch::new()
        .level(log_level.0)
        .chain(stdout_dispatch(colored));

    if let Some(ref path) = log_file {
        root = root.chain(file_dispatch(path)?);
    }

    root.apply().map_err(|e| ServerError::Logger {
        message: format!("logger already initialized: {e}"),
    })?;

    // Re-emit tracing events (axum/sqlx internals) through log
    tracing_log::LogTracer::init().ok();

    match log_file {
        Some(path) => info!(
            "Logging at {:?} to stdout and {}",
            log_level.0,
            path.display()
        ),
        None => info!("Logging at {:?} to stdout", log_level.0),
    }

    Ok(())
}

fn format_record(
    out: fern::FormatCallback,
    message: &std::fmt::Arguments,
    record: &log::Record,
    level: std::fmt::Arguments,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

fn stdout_dispatch(colored: bool) -> Dispatch {
    if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                format_record(
                    out,
                    message,
                    record,
                    format_args!("{}", colors.color(record.level())),
                );
            })
            .chain(std::io::stdout())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                format_record(out, message, record, format_args!("{}", record.level()));
            })
            .chain(std::io::stdout())
    }
}

fn file_dispatch(path: &Path) -> Result<Dispatch> {
    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("cannot open log file {}: {e}", path.display()),
    })?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            format_record(out, message, record, format_args!("{}", record.level()));
        })
        .chain(file))
}
