//! Integration tests for the process-wide configuration.
//!
//! The shared instance is global state, so every test here serializes on a
//! session lock and restores the threshold it found.

use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use std::thread;

use logging::{CapturingSink, LoggingConfiguration, Severity, log_debug, log_error, log_info};

fn session() -> MutexGuard<'static, ()> {
    static SESSION: OnceLock<Mutex<()>> = OnceLock::new();
    SESSION
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

struct Restore {
    threshold: Severity,
}

impl Drop for Restore {
    fn drop(&mut self) {
        let shared = LoggingConfiguration::shared();
        shared.set_threshold(self.threshold);
        shared.reset_sink();
    }
}

fn capture_shared(threshold: Severity) -> (Restore, Arc<CapturingSink>) {
    let shared = LoggingConfiguration::shared();
    let restore = Restore {
        threshold: shared.threshold(),
    };
    let sink = Arc::new(CapturingSink::new());
    shared.set_shared_sink(sink.clone());
    shared.set_threshold(threshold);
    (restore, sink)
}

/// Verifies `shared` always returns the same instance.
#[test]
fn shared_is_a_single_instance() {
    let _session = session();
    let first = LoggingConfiguration::shared();
    let second = LoggingConfiguration::shared();
    assert!(Arc::ptr_eq(first, second));
}

/// Verifies macros without `config:` go through the shared instance.
#[test]
fn macros_default_to_shared_configuration() {
    let _session = session();
    let (_restore, sink) = capture_shared(Severity::Error);

    log_debug!("x={}", 5);
    log_error!("fail: {}", "disk full");

    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "fail: disk full");
}

/// Verifies a threshold set on one thread is honoured by others.
#[test]
fn threshold_is_visible_across_threads() {
    let _session = session();
    let (_restore, sink) = capture_shared(Severity::None);

    thread::spawn(|| log_info!("suppressed"))
        .join()
        .expect("logging thread");
    assert!(sink.is_empty());

    LoggingConfiguration::shared().set_threshold(Severity::Info);
    let workers: Vec<_> = (0..4)
        .map(|n| thread::spawn(move || log_info!("worker {n}")))
        .collect();
    for worker in workers {
        worker.join().expect("logging thread");
    }

    assert_eq!(sink.len(), 4);
}
