#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a severity-gated logging facade for the map-platform
//! workspace. Call sites log through four macros, [`log_fault!`],
//! [`log_error!`], [`log_debug!`] and [`log_info!`], which test the current
//! threshold before doing any work. Only when a message is admitted does the
//! macro evaluate its format arguments, capture the calling function, file
//! and line, and hand a [`LogRecord`] to the configured [`LogSink`].
//!
//! # Design
//!
//! - [`Severity`] orders the levels numerically: `None < Fault < Error <
//!   Debug < Info`. A message passes when the threshold is not `None` and the
//!   message's value does not exceed it.
//! - [`LoggingConfiguration`] owns the threshold (an atomic) and the sink.
//!   One instance is shared process-wide through
//!   [`LoggingConfiguration::shared`]; others can be passed to the macros
//!   with `config:` for isolation.
//! - [`STATIC_MAX_SEVERITY`] lets builds compile verbose call sites out
//!   with `--cfg map_platform_max_severity="error"` (or `="off"`).
//!
//! # Invariants
//!
//! - A rejected call formats nothing, allocates nothing and never touches
//!   the sink.
//! - An admitted call invokes the sink exactly once.
//! - Logging never panics the caller: formatting errors truncate the
//!   message and panics inside formatting or the sink are contained.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{log_debug, log_error, CapturingSink, LoggingConfiguration, Severity};
//!
//! let sink = Arc::new(CapturingSink::new());
//! let config = LoggingConfiguration::new(Severity::Error, sink.clone());
//!
//! log_debug!(config: config, "x={}", 5);
//! log_error!(config: config, "fail: {}", "disk full");
//!
//! let records = sink.drain();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].severity, Severity::Error);
//! assert_eq!(records[0].message, "fail: disk full");
//! ```

mod callsite;
mod capture;
mod ceiling;
mod configuration;
mod line_mode;
mod macros;
mod record;
mod severity;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_sink;
mod writer_sink;

pub use capture::CapturingSink;
pub use ceiling::STATIC_MAX_SEVERITY;
pub use configuration::{LOG_LEVEL_ENV, LoggingConfiguration};
pub use line_mode::LineMode;
pub use record::{LogRecord, OwnedLogRecord};
pub use severity::{ParseSeverityError, Severity};
pub use sink::{DiscardSink, LogSink};
#[cfg(feature = "tracing")]
pub use tracing_sink::{TRACING_TARGET, TracingSink, init_tracing};
pub use writer_sink::WriterSink;

/// Items referenced by macro expansions. Not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::callsite::enclosing_function;
}
