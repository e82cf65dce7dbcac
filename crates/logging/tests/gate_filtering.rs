//! Integration tests for threshold filtering.
//!
//! These tests verify that the gate macros admit a message exactly when the
//! threshold is not `None` and the message's severity does not exceed it.

use std::sync::Arc;

use logging::{
    CapturingSink, LoggingConfiguration, Severity, log_debug, log_error, log_fault, log_info,
    log_with_severity,
};

fn configuration(threshold: Severity) -> (LoggingConfiguration, Arc<CapturingSink>) {
    let sink = Arc::new(CapturingSink::new());
    let config = LoggingConfiguration::new(threshold, sink.clone());
    (config, sink)
}

fn emit_all(config: &LoggingConfiguration) {
    log_fault!(config: config, "fault");
    log_error!(config: config, "error");
    log_debug!(config: config, "debug");
    log_info!(config: config, "info");
}

fn emitted_severities(sink: &CapturingSink) -> Vec<Severity> {
    sink.drain().into_iter().map(|record| record.severity).collect()
}

// ============================================================================
// Exhaustive Threshold Matrix
// ============================================================================

/// Verifies the sink sees a message iff the threshold admits its severity.
#[test]
fn sink_receives_message_iff_threshold_admits_it() {
    let thresholds = [
        Severity::None,
        Severity::Fault,
        Severity::Error,
        Severity::Debug,
        Severity::Info,
    ];

    for threshold in thresholds {
        for severity in Severity::ALL {
            let (config, sink) = configuration(threshold);
            log_with_severity!(config: config, severity, "probe");

            let expected = threshold != Severity::None && severity.as_u8() <= threshold.as_u8();
            assert_eq!(
                sink.len(),
                usize::from(expected),
                "severity {severity} under threshold {threshold}"
            );
        }
    }
}

/// Verifies a `None` message severity is never emitted, even at `Info`.
#[test]
fn none_severity_is_never_emitted() {
    let (config, sink) = configuration(Severity::Info);
    log_with_severity!(config: config, Severity::None, "nothing");
    assert!(sink.is_empty());
}

// ============================================================================
// Threshold Boundaries
// ============================================================================

/// Verifies a `None` threshold suppresses every entry point.
#[test]
fn none_threshold_suppresses_everything() {
    let (config, sink) = configuration(Severity::None);
    for _ in 0..10 {
        emit_all(&config);
    }
    assert!(sink.is_empty());
}

/// Verifies a `Fault` threshold admits only fault messages.
#[test]
fn fault_threshold_admits_only_faults() {
    let (config, sink) = configuration(Severity::Fault);
    emit_all(&config);
    assert_eq!(emitted_severities(&sink), vec![Severity::Fault]);
}

/// Verifies an `Error` threshold admits errors and faults.
#[test]
fn error_threshold_admits_errors_and_faults() {
    let (config, sink) = configuration(Severity::Error);
    emit_all(&config);
    assert_eq!(
        emitted_severities(&sink),
        vec![Severity::Fault, Severity::Error]
    );
}

/// Verifies an `Info` threshold admits all four entry points.
#[test]
fn info_threshold_admits_everything() {
    let (config, sink) = configuration(Severity::Info);
    emit_all(&config);
    assert_eq!(emitted_severities(&sink), Severity::ALL.to_vec());
}

// ============================================================================
// Concrete Scenarios
// ============================================================================

/// Error threshold: debug is dropped, error is emitted once with its message.
#[test]
fn error_threshold_scenario() {
    let (config, sink) = configuration(Severity::Error);

    log_debug!(config: config, "x={}", 5);
    assert!(sink.is_empty());

    log_error!(config: config, "fail: {}", "disk full");
    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::Error);
    assert_eq!(records[0].message, "fail: disk full");
}

/// Verifies threshold changes apply to the very next call.
#[test]
fn runtime_threshold_change_applies_immediately() {
    let (config, sink) = configuration(Severity::None);
    log_info!(config: &config, "dropped");

    config.set_threshold(Severity::Info);
    log_info!(config: &config, "kept");

    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "kept");
}

/// Verifies the macros accept a configuration held in an `Arc`.
#[test]
fn arc_configuration_is_accepted() {
    let sink = Arc::new(CapturingSink::new());
    let config = Arc::new(LoggingConfiguration::new(Severity::Debug, sink.clone()));

    log_debug!(config: config, "through arc");
    log_debug!(config: Arc::clone(&config), "through temporary arc");

    assert_eq!(sink.len(), 2);
}
