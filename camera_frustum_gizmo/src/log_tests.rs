//! Unit tests for log.rs

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Warn), "Warn");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Warn,
        timestamp: SystemTime::now(),
        source: "frustum_gizmo::FrustumSampler".to_string(),
        message: "ray parallel to ground".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Warn);
    assert_eq!(entry.source, "frustum_gizmo::FrustumSampler");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone_keeps_location() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "frustum_gizmo::DebugScene".to_string(),
        message: "missing marker".to_string(),
        file: Some("debug_scene.rs"),
        line: Some(42),
    };
    let copy = entry.clone();

    assert_eq!(copy.severity, entry.severity);
    assert_eq!(copy.message, entry.message);
    assert_eq!(copy.file, Some("debug_scene.rs"));
    assert_eq!(copy.line, Some(42));
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_handles_every_severity() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: "test".to_string(),
            message: "message".to_string(),
            file: if severity == LogSeverity::Error { Some("test.rs") } else { None },
            line: if severity == LogSeverity::Error { Some(1) } else { None },
        });
    }
}

#[test]
fn test_logger_is_object_safe() {
    let loggers: Vec<Box<dyn Logger>> = vec![Box::new(DefaultLogger)];
    assert_eq!(loggers.len(), 1);
}
