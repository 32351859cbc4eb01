//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::data_structures::probing_table::ProbingTableError;
use crate::error::config::ConfigError;
use crate::error::script::ScriptError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, ProbemapError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = ProbemapError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors convert and display correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = ProbemapError::from(io_error);
    assert!(format!("{error}").contains("file not found"));

    let error = ProbemapError::from(ProbingTableError::InvalidCapacity(-2));
    assert_eq!(
        error.to_string(),
        "Table error: Invalid table size specified: -2"
    );

    let error = ProbemapError::from(ScriptError::UnknownVerb("put".to_string()));
    assert!(matches!(error, ProbemapError::Script(_)));

    let error = ProbemapError::from(ConfigError::ValidationError("bad".to_string()));
    assert_eq!(
        error.to_string(),
        "Configuration error: Configuration validation error: bad"
    );
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = ProbemapError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = ProbemapError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component");

    // Just make sure this doesn't panic
    reporter.report(context);
}
