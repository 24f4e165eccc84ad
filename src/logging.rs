//! Console and file logging
//!
//! Console lines go to stderr, since stdout may carry exported text. Errors
//! and warnings carry a prefix so they stand out when colour is unavailable.

use anyhow::Result;
use chrono::SecondsFormat;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    /// Warnings and errors; selected by `--quiet`
    Warning,
    /// Progress messages (default)
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level selected by the `--quiet` flag and the number of `-v` flags
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        match (quiet, verbose) {
            (true, _) => LogLevel::Warning,
            (false, 0) => LogLevel::Info,
            (false, 1) => LogLevel::Debug,
            (false, _) => LogLevel::Trace,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn console_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "error: ",
        Level::Warn => "warning: ",
        _ => "",
    }
}

fn console_dispatch(filter: LevelFilter, colours: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new()
        .format(move |out, message, record| {
            let prefix = console_prefix(record.level());
            match colours {
                Some(colours) => out.finish(format_args!(
                    "\x1B[{}m{prefix}{message}\x1B[0m",
                    colours.get_color(&record.level()).to_fg_str()
                )),
                None => out.finish(format_args!("{prefix}{message}")),
            }
        })
        .level(filter)
        .chain(std::io::stderr())
}

fn file_dispatch(filter: LevelFilter, log_file: &str) -> Result<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(filter)
        .chain(fern::log_file(log_file)?))
}

/// Installs the global logger
///
/// An empty `log_file` logs to the console only.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already
/// installed
pub fn init_logger(level: LogLevel, log_file: &str) -> Result<()> {
    let filter = LevelFilter::from(level);
    let colours = atty::is(atty::Stream::Stderr).then(|| {
        ColoredLevelConfig::new()
            .error(Color::Red)
            .warn(Color::Yellow)
            .info(Color::White)
            .debug(Color::White)
            .trace(Color::BrightBlack)
    });

    let mut logger = Dispatch::new()
        .level(filter)
        .chain(console_dispatch(filter, colours));
    if !log_file.is_empty() {
        logger = logger.chain(file_dispatch(filter, log_file)?);
    }
    logger.apply()?;

    log::debug!("Logging at {level:?}");
    Ok(())
}

/// Picks the coloured form of a message when stdout is a terminal
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
