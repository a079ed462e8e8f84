//! Plain-text logger for the `log` facade.
//!
//! The library only emits records through `log` macros: rejected hex input at
//! `debug`, rejected byte widths at `warn`, parsed values at `trace`. Nothing
//! is printed until a logger is installed. [`ColorLogger`] is a small
//! implementation for binaries and tests that want those records on a writer.
//!
//! ```no_run
//! use colorhub::logging::ColorLogger;
//! use log::LevelFilter;
//!
//! ColorLogger::new()
//!     .level(LevelFilter::Debug)
//!     .show_time(false)
//!     .init()
//!     .expect("logger already installed");
//! ```
//!
//! # Environment
//!
//! [`ColorLogger::from_env`] reads the level from `COLORHUB_LOG`
//! (`off`, `error`, `warn`, `info`, `debug` or `trace`, any case).

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::sync::lock_recover;

/// Environment variable consulted by [`ColorLogger::from_env`].
pub const LOG_ENV_VAR: &str = "COLORHUB_LOG";

const DEFAULT_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Logger writing one line per record.
///
/// Line layout: `[<time>] <LEVEL> <target>: <message>`, where the time and
/// level columns can be switched off.
pub struct ColorLogger {
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Default for ColorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorLogger {
    /// Create a logger at `Info` level writing to stderr.
    #[must_use]
    pub fn new() -> Self {
        let time_format = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: true,
            time_format,
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a logger whose level comes from `COLORHUB_LOG`.
    #[must_use]
    pub fn from_env() -> Self {
        let value = std::env::var(LOG_ENV_VAR).ok();
        Self::new().level(level_from_env_value(value.as_deref()))
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the record target (module path).
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override the time format (`time` crate format description, version 2).
    ///
    /// An unparsable description leaves the current format in place.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Send output to `writer` instead of stderr.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Mutex::new(Box::new(writer));
        self
    }

    /// The configured level filter.
    #[must_use]
    pub const fn level_filter(&self) -> LevelFilter {
        self.level
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if another logger has already been installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push('[');
            line.push_str(&self.format_time());
            line.push_str("] ");
        }

        if self.show_level {
            line.push_str(&format!("{:<5} ", record.level()));
        }

        if self.show_target {
            line.push_str(record.target());
            line.push_str(": ");
        }

        line.push_str(&record.args().to_string());
        line
    }
}

/// Map a `COLORHUB_LOG` value to a level filter, defaulting to `Info`.
#[must_use]
pub fn level_from_env_value(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .and_then(|raw| LevelFilter::from_str(raw).ok())
        .unwrap_or(LevelFilter::Info)
}

impl Log for ColorLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // A failed write has nowhere to be reported.
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}
