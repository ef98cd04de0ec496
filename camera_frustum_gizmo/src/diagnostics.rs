/// Global logger slot for the frustum gizmo.
///
/// Everything in the crate logs through `Diagnostics::log` (usually via the
/// `gizmo_*!` macros). The logger defaults to `DefaultLogger` and can be
/// replaced at runtime, e.g. by a host engine forwarding to its own console.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Access point to the global logger
pub struct Diagnostics;

impl Diagnostics {
    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use camera_frustum_gizmo::frustum_gizmo::{Diagnostics, log::{Logger, LogEntry}};
    ///
    /// struct SilentLogger;
    /// impl Logger for SilentLogger {
    ///     fn log(&self, _entry: &LogEntry) {}
    /// }
    ///
    /// Diagnostics::set_logger(SilentLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(logger_impl);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Log without file:line (used by gizmo_trace! .. gizmo_warn!)
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log with file:line information (used by gizmo_error! and gizmo_err!)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
