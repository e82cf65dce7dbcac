//! crates/logging/src/tracing_sink.rs
//! Bridge that forwards admitted records into the tracing ecosystem.
//!
//! The gate still decides what is emitted; the tracing subscriber only
//! decides how it is rendered and where it goes.
//!
//! # Usage
//!
//! ```
//! use logging::{init_tracing, log_error, Severity};
//!
//! init_tracing(Severity::Debug);
//! log_error!("fail: {}", "disk full");
//! ```

use tracing::Level;

use crate::configuration::LoggingConfiguration;
use crate::record::LogRecord;
use crate::severity::Severity;
use crate::sink::LogSink;

/// Target attached to every forwarded event.
pub const TRACING_TARGET: &str = "map_platform";

/// Sink that re-emits each record as a `tracing` event.
///
/// The message becomes the event's `message` field; `function`, `file` and
/// `line` are recorded as separate fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Maps a severity onto the tracing level used for its events.
    ///
    /// Returns `None` for [`Severity::None`], which never reaches a sink.
    #[must_use]
    pub const fn level_for(severity: Severity) -> Option<Level> {
        match severity {
            Severity::None => None,
            Severity::Fault | Severity::Error => Some(Level::ERROR),
            Severity::Debug => Some(Level::DEBUG),
            Severity::Info => Some(Level::INFO),
        }
    }
}

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord<'_>) {
        let function = record.function();
        let file = record.file();
        let line = record.line();
        let severity = record.severity().name();
        let message = record.message();

        match record.severity() {
            Severity::Fault | Severity::Error => tracing::error!(
                target: TRACING_TARGET,
                severity,
                function,
                file,
                line,
                "{message}"
            ),
            Severity::Debug => tracing::debug!(
                target: TRACING_TARGET,
                severity,
                function,
                file,
                line,
                "{message}"
            ),
            Severity::Info => tracing::info!(
                target: TRACING_TARGET,
                severity,
                function,
                file,
                line,
                "{message}"
            ),
            Severity::None => {}
        }
    }
}

/// Installs a formatting tracing subscriber and routes the shared configuration through it.
///
/// The subscriber honours `RUST_LOG` through an `EnvFilter`, defaulting to
/// everything under [`TRACING_TARGET`]. The shared configuration's threshold
/// is set to `threshold`. Calling this more than once keeps the first
/// subscriber.
pub fn init_tracing(threshold: Severity) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{TRACING_TARGET}=trace")));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let shared = LoggingConfiguration::shared();
    shared.set_sink(TracingSink);
    shared.set_threshold(threshold);
}
