#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Platform support for a native map rendering engine.
//!
//! The host application reaches both utilities through this crate:
//!
//! - [`logging`]: severity-gated logging macros, the shared
//!   [`LoggingConfiguration`](logging::LoggingConfiguration) and the sinks
//!   that render admitted records.
//! - [`encoding`]: UTF-8 / UTF-16 conversion at platform API boundaries.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use map_platform::logging::{self, CapturingSink, LoggingConfiguration, Severity};
//!
//! let sink = Arc::new(CapturingSink::new());
//! let config = LoggingConfiguration::new(Severity::Error, sink.clone());
//!
//! let name = map_platform::encoding::utf8_to_utf16("Zürich");
//! logging::log_error!(config: config, "label has {} units", name.len());
//!
//! assert_eq!(sink.drain()[0].message, "label has 6 units");
//! ```

pub use encoding;
pub use logging;
