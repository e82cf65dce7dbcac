//! crates/logging/src/capture.rs
//! In-memory sink that keeps admitted records until they are drained.

use std::sync::{Mutex, MutexGuard};

use crate::record::{LogRecord, OwnedLogRecord};
use crate::sink::LogSink;

/// Sink that stores every record it receives.
///
/// Records are kept in arrival order until [`drain`](Self::drain) hands them
/// back. Share it with a configuration through an `Arc` to inspect what the
/// gate let through.
///
/// ```
/// use std::sync::Arc;
/// use logging::{log_error, CapturingSink, LoggingConfiguration, Severity};
///
/// let sink = Arc::new(CapturingSink::new());
/// let config = LoggingConfiguration::new(Severity::Error, sink.clone());
///
/// log_error!(config: config, "fail: {}", "disk full");
///
/// let records = sink.drain();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "fail: disk full");
/// ```
#[derive(Debug, Default)]
pub struct CapturingSink {
    records: Mutex<Vec<OwnedLogRecord>>,
}

impl CapturingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Removes and returns every captured record.
    pub fn drain(&self) -> Vec<OwnedLogRecord> {
        self.lock_records().drain(..).collect()
    }

    /// Returns a copy of the captured records without clearing them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OwnedLogRecord> {
        self.lock_records().clone()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock_records().len()
    }

    /// Reports whether no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    fn lock_records(&self) -> MutexGuard<'_, Vec<OwnedLogRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl LogSink for CapturingSink {
    fn log(&self, record: &LogRecord<'_>) {
        self.lock_records().push(record.to_owned_record());
    }
}
