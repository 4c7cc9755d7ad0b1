//! Forwards this crate's `log` records to a host-provided [`Logger`].

use std::sync::{Arc, OnceLock};

/// Sink for log records produced by this crate.
///
/// Implemented by the host and installed once with [`set_logger`].
///
/// # Examples
///
/// ```rust
/// use securestore_core::logger::{LogLevel, Logger};
///
/// struct StderrLogger;
///
/// impl Logger for StderrLogger {
///     fn log(&self, level: LogLevel, message: String) {
///         eprintln!("[{level:?}] {message}");
///     }
/// }
/// ```
///
/// ## Swift
///
/// ```swift
/// final class SecureStoreLogBridge: SecureStore.Logger {
///     static let shared = SecureStoreLogBridge()
///
///     func log(level: SecureStore.LogLevel, message: String) {
///         os_log("%{public}@", message)
///     }
/// }
///
/// // Once, at launch.
/// SecureStore.setLogger(logger: SecureStoreLogBridge.shared)
/// ```
#[uniffi::export(with_foreign)]
pub trait Logger: Sync + Send {
    /// Receives one formatted record at `level`.
    fn log(&self, level: LogLevel, message: String);
}

/// Severity of a forwarded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum LogLevel {
    /// Very detailed tracing output.
    Trace,
    /// Debugging information.
    Debug,
    /// Normal progress, such as state transitions.
    Info,
    /// Recoverable problems, such as an undecodable collection.
    Warn,
    /// Failures.
    Error,
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

/// Bridges the `log` facade to the installed [`Logger`].
struct ForeignLogger;

impl ForeignLogger {
    /// Debug and trace records from other crates are dropped.
    fn accepts(level: log::Level, module_path: Option<&str>) -> bool {
        let from_crate = module_path.is_some_and(|path| path.starts_with("securestore"));
        from_crate || level <= log::Level::Info
    }
}

impl log::Log for ForeignLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Self::accepts(metadata.level(), Some(metadata.target()))
    }

    fn log(&self, record: &log::Record) {
        if !Self::accepts(record.level(), record.module_path()) {
            return;
        }

        if let Some(logger) = LOGGER_INSTANCE.get() {
            logger.log(record.level().into(), format!("{}", record.args()));
        } else {
            eprintln!("Logger not set: {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER_INSTANCE: OnceLock<Arc<dyn Logger>> = OnceLock::new();

/// Installs the host logger and routes the `log` facade to it.
///
/// Only the first call has an effect.
#[uniffi::export]
pub fn set_logger(logger: Arc<dyn Logger>) {
    if LOGGER_INSTANCE.set(logger).is_err() {
        eprintln!("Logger already set");
        return;
    }

    if let Err(e) = init_logger() {
        eprintln!("Failed to set logger: {e}");
    }
}

fn init_logger() -> Result<(), log::SetLoggerError> {
    static LOGGER: ForeignLogger = ForeignLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
