//! crates/logging/src/sink.rs
//! The contract between the gate and whatever renders admitted records.

use crate::record::LogRecord;

/// Receives records that passed the gate.
///
/// Implementations decide where a record ends up (console, OS log, an
/// in-memory buffer). The gate calls [`log`](Self::log) at most once per
/// macro invocation and ignores whatever happens inside it, so sinks have no
/// error channel. Any `Fn(&LogRecord<'_>)` closure is a sink, which matches
/// hosts that configure logging with a handler callback.
///
/// ```
/// use logging::{LogRecord, LogSink, Severity};
///
/// let sink = |record: &LogRecord<'_>| {
///     assert_eq!(record.severity(), Severity::Error);
/// };
/// sink.log(&LogRecord::new(Severity::Error, "host::load", "host.rs", 7, "failed"));
/// ```
pub trait LogSink: Send + Sync {
    /// Emits a single record.
    fn log(&self, record: &LogRecord<'_>);
}

impl<F> LogSink for F
where
    F: Fn(&LogRecord<'_>) + Send + Sync,
{
    fn log(&self, record: &LogRecord<'_>) {
        self(record);
    }
}

/// Sink that drops every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl LogSink for DiscardSink {
    fn log(&self, _record: &LogRecord<'_>) {}
}
