//! Unit tests for log.rs
//!
//! Tests LogSeverity ordering and labels, LogEntry formatting, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "galaxy3d::Scene".to_string(),
        message: "node re-parented".to_string(),
        file,
        line,
    }
}

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
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_format_plain_without_location() {
    let text = entry(LogSeverity::Debug, None, None).format_plain();
    assert!(text.contains("[DEBUG]"));
    assert!(text.contains("[galaxy3d::Scene]"));
    assert!(text.ends_with("node re-parented"));
}

#[test]
fn test_format_plain_with_location() {
    let text = entry(LogSeverity::Error, Some("scene.rs"), Some(42)).format_plain();
    assert!(text.contains("[ERROR]"));
    assert!(text.ends_with("(scene.rs:42)"));
}

#[test]
fn test_format_plain_ignores_partial_location() {
    let text = entry(LogSeverity::Error, Some("scene.rs"), None).format_plain();
    assert!(!text.contains("scene.rs"));
}

#[test]
fn test_log_entry_clone() {
    let original = entry(LogSeverity::Info, Some("a.rs"), Some(1));
    let cloned = original.clone();
    assert_eq!(cloned.severity, original.severity);
    assert_eq!(cloned.message, original.message);
    assert_eq!(cloned.line, Some(1));
}

// ============================================================================
// LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Debug, None, None));
    logger.log(&entry(LogSeverity::Info, None, None));
    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("scene.rs"), Some(7)));
}

#[test]
fn test_custom_logger_implementation() {
    struct Capture {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Logger for Capture {
        fn log(&self, entry: &LogEntry) {
            self.lines.lock().unwrap().push(entry.format_plain());
        }
    }

    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Capture { lines: lines.clone() };
    logger.log(&entry(LogSeverity::Warn, None, None));

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARN"));
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}
