//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::{
    config::ConfigError, report_error, set_error_reporter, ErrorContext, ErrorReporter,
    PrefixMatcherError, TracingErrorReporter,
};
use crate::matcher::MatcherError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = PrefixMatcherError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that component errors convert and keep their message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = PrefixMatcherError::from(io_error);
    assert!(error.to_string().contains("file not found"));

    let error: PrefixMatcherError = MatcherError::InvalidPath("foo".to_string()).into();
    assert!(matches!(error, PrefixMatcherError::Matcher(MatcherError::InvalidPath(_))));
    assert!(error.to_string().starts_with("Matcher error:"));

    let error: PrefixMatcherError = ConfigError::ValidationError("bad".to_string()).into();
    assert!(error.to_string().contains("bad"));
}

/// Counting error reporter for testing.
#[derive(Debug, Default)]
struct CountingReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter is installed once and used.
///
/// This is the only test in the crate that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(CountingReporter::default());
    assert!(set_error_reporter(reporter.clone()));
    assert!(!set_error_reporter(Arc::new(TracingErrorReporter)));

    let error = PrefixMatcherError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component").with_details("frame"));

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = PrefixMatcherError::Custom("test error".to_string());
    reporter.report(ErrorContext::new(error, "test_component"));
}
