//! Integration tests for call-site metadata.
//!
//! Records must name the function and line that invoked the macro, never a
//! location inside the logging crate.

use std::sync::Arc;

use logging::{CapturingSink, LoggingConfiguration, OwnedLogRecord, Severity, log_error, log_fault};

fn configuration() -> (LoggingConfiguration, Arc<CapturingSink>) {
    let sink = Arc::new(CapturingSink::new());
    let config = LoggingConfiguration::new(Severity::Info, sink.clone());
    (config, sink)
}

fn single(sink: &CapturingSink) -> OwnedLogRecord {
    let mut records = sink.drain();
    assert_eq!(records.len(), 1);
    records.remove(0)
}

/// Verifies the record carries the caller's line number.
#[test]
fn line_matches_invocation() {
    let (config, sink) = configuration();
    let expected_line = line!() + 1;
    log_error!(config: config, "boom");

    assert_eq!(single(&sink).line, expected_line);
}

/// Verifies the record carries the caller's source file.
#[test]
fn file_matches_invocation() {
    let (config, sink) = configuration();
    log_error!(config: config, "boom");

    assert_eq!(single(&sink).file, file!());
}

/// Verifies the function name is this test function.
#[test]
fn function_matches_caller() {
    let (config, sink) = configuration();
    log_fault!(config: config, "boom");

    let record = single(&sink);
    assert_eq!(record.function, "call_site_capture::function_matches_caller");
}

fn helper_that_logs(config: &LoggingConfiguration) -> u32 {
    log_error!(config: config, "from helper");
    line!() - 1
}

/// Verifies a helper function is reported, not the test that called it.
#[test]
fn helper_function_is_reported() {
    let (config, sink) = configuration();
    let line = helper_that_logs(&config);

    let record = single(&sink);
    assert_eq!(record.function, "call_site_capture::helper_that_logs");
    assert_eq!(record.line, line);
}

/// Verifies calls inside closures report the function that owns the closure.
#[test]
fn closure_reports_enclosing_function() {
    let (config, sink) = configuration();
    let log = || log_error!(config: config, "from closure");
    log();

    let record = single(&sink);
    assert_eq!(
        record.function,
        "call_site_capture::closure_reports_enclosing_function"
    );
}

struct TileLoader;

impl TileLoader {
    fn load(&self, config: &LoggingConfiguration) {
        log_error!(config: config, "tile missing");
    }
}

/// Verifies methods are reported with their impl path.
#[test]
fn method_reports_impl_path() {
    let (config, sink) = configuration();
    TileLoader.load(&config);

    let record = single(&sink);
    assert!(record.function.ends_with("TileLoader::load"), "{}", record.function);
}
