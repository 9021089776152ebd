//! Stderr backend for the `log` facade.
//!
//! The library only emits records through `log::debug!` and friends. A
//! binary picks a verbosity with [`init_logger`] and installs the returned
//! [`Logger`], after which records at or above that verbosity are written to
//! stderr.

use std::env;
use std::io::{self, Write};
use std::str::FromStr;

use log::{Level, LevelFilter, Metadata, Record};

use crate::error::Error;

/// Environment variable consulted when neither `--verbose` nor `--quiet`
/// is given.
pub const LOG_MODE_VAR: &str = "TABLEBOOK_LOG_MODE";

/// Verbosity of the stderr logger.
///
/// # Examples
///
/// ```
/// use log::LevelFilter;
/// use tablebook::LogLevel;
///
/// let level: LogLevel = "verbose".parse().unwrap();
/// assert_eq!(level.filter(), LevelFilter::Debug);
/// assert_eq!(LogLevel::default().filter(), LevelFilter::Warn);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Nothing is logged.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl LogLevel {
    /// The facade filter for this verbosity.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(Error::Validation {
                field: LOG_MODE_VAR.into(),
                message: format!("unknown log mode '{other}', expected quiet, normal or verbose"),
            }),
        }
    }
}

/// A `log::Log` implementation writing one line per record to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    filter: LevelFilter,
}

impl Logger {
    /// Create a logger that lets through records at or above `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            filter: level.filter(),
        }
    }

    /// The most verbose level this logger lets through.
    #[must_use]
    pub const fn filter(&self) -> LevelFilter {
        self.filter
    }

    /// Installs this logger as the facade backend.
    ///
    /// Returns `false` if another logger was installed first. The facade's
    /// max level is set either way.
    pub fn install(self) -> bool {
        let filter = self.filter;
        let installed = log::set_boxed_logger(Box::new(self)).is_ok();
        log::set_max_level(filter);
        installed
    }

    /// Formats a record as `LEVEL: message`, with the emitting module
    /// appended for debug and trace records.
    fn format(record: &Record<'_>) -> String {
        match record.level() {
            Level::Debug | Level::Trace => {
                format!("{} [{}]: {}", record.level(), record.target(), record.args())
            }
            level => format!("{level}: {}", record.args()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.filter
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            // write failures on stderr are dropped
            let _ = writeln!(io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Picks the logger for a run.
///
/// `verbose` wins over `quiet`. With neither flag, a valid
/// `TABLEBOOK_LOG_MODE` decides; an unset or unrecognized value means
/// [`LogLevel::Normal`].
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_VAR)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default()
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    struct ModeGuard(Option<String>);

    impl ModeGuard {
        fn set(value: Option<&str>) -> Self {
            let saved = env::var(LOG_MODE_VAR).ok();
            match value {
                Some(v) => env::set_var(LOG_MODE_VAR, v),
                None => env::remove_var(LOG_MODE_VAR),
            }
            Self(saved)
        }
    }

    impl Drop for ModeGuard {
        fn drop(&mut self) {
            match &self.0 {
                Some(v) => env::set_var(LOG_MODE_VAR, v),
                None => env::remove_var(LOG_MODE_VAR),
            }
        }
    }

    #[test]
    fn test_parse_log_mode() {
        assert_eq!(" Quiet ".parse::<LogLevel>().unwrap(), LogLevel::Quiet);
        assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
        assert!("loud".parse::<LogLevel>().unwrap_err().is_validation());
    }

    #[test]
    fn test_enabled_follows_filter() {
        let debug = Metadata::builder().level(Level::Debug).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        let error = Metadata::builder().level(Level::Error).build();

        let normal = Logger::default();
        assert!(!normal.enabled(&debug));
        assert!(normal.enabled(&warn));

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&error));
    }

    #[test]
    fn test_format_includes_target_for_debug() {
        assert_eq!(
            Logger::format(
                &Record::builder()
                    .level(Level::Debug)
                    .target("tablebook::database")
                    .args(format_args!("seeded {} tables", 5))
                    .build()
            ),
            "DEBUG [tablebook::database]: seeded 5 tables"
        );
        assert_eq!(
            Logger::format(
                &Record::builder()
                    .level(Level::Warn)
                    .args(format_args!("slow lock"))
                    .build()
            ),
            "WARN: slow lock"
        );
    }

    #[test]
    #[serial]
    fn test_flags_beat_env() {
        let _mode = ModeGuard::set(Some("quiet"));
        assert_eq!(init_logger(true, false).filter(), LevelFilter::Debug);
        assert_eq!(init_logger(true, true).filter(), LevelFilter::Debug);

        let _mode = ModeGuard::set(Some("verbose"));
        assert_eq!(init_logger(false, true).filter(), LevelFilter::Off);
    }

    #[test]
    #[serial]
    fn test_env_mode() {
        let _mode = ModeGuard::set(Some("verbose"));
        assert_eq!(init_logger(false, false).filter(), LevelFilter::Debug);

        let _mode = ModeGuard::set(Some("nonsense"));
        assert_eq!(init_logger(false, false).filter(), LevelFilter::Warn);

        let _mode = ModeGuard::set(None);
        assert_eq!(init_logger(false, false).filter(), LevelFilter::Warn);
    }
}
