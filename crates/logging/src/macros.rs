//! crates/logging/src/macros.rs
//! Gate macros: check the threshold, then capture the call site and dispatch.
//!
//! Every macro accepts an optional leading `config: <expr>` naming the
//! [`LoggingConfiguration`](crate::LoggingConfiguration) to consult; without
//! it the process-wide [`shared`](crate::LoggingConfiguration::shared)
//! instance is used. The remaining tokens are passed to
//! [`format_args!`](core::format_args), which is only evaluated once the
//! gate has admitted the message.

/// Logs at an explicit [`Severity`](crate::Severity).
///
/// # Example
/// ```
/// use logging::{log_with_severity, LoggingConfiguration, Severity};
///
/// let config = LoggingConfiguration::with_threshold(Severity::None);
/// log_with_severity!(config: config, Severity::Fault, "never {}", "shown");
/// ```
#[macro_export]
macro_rules! log_with_severity {
    (config: $config:expr, $severity:expr, $($arg:tt)+) => {{
        let __severity: $crate::Severity = $severity;
        if __severity.passes($crate::STATIC_MAX_SEVERITY) {
            // The match keeps a temporary configuration alive for the whole dispatch.
            #[allow(clippy::match_single_binding)]
            match ::core::convert::AsRef::<$crate::LoggingConfiguration>::as_ref(&$config) {
                __config => {
                    if __config.permits(__severity) {
                        __config.log_calling_function(
                            $crate::function_name!(),
                            ::core::file!(),
                            ::core::line!(),
                            __severity,
                            ::core::format_args!($($arg)+),
                        );
                    }
                }
            };
        }
    }};
    ($severity:expr, $($arg:tt)+) => {
        $crate::log_with_severity!(
            config: $crate::LoggingConfiguration::shared(),
            $severity,
            $($arg)+
        )
    };
}

/// Logs at [`Severity::Fault`](crate::Severity::Fault).
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use logging::{log_fault, CapturingSink, LoggingConfiguration, Severity};
///
/// let sink = Arc::new(CapturingSink::new());
/// let config = LoggingConfiguration::new(Severity::Fault, sink.clone());
/// let name = "night";
///
/// log_fault!(config: config, "style {} is unreadable", name);
/// assert_eq!(sink.drain()[0].message, "style night is unreadable");
/// ```
#[macro_export]
macro_rules! log_fault {
    (config: $config:expr, $($arg:tt)+) => {
        $crate::log_with_severity!(config: $config, $crate::Severity::Fault, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_with_severity!($crate::Severity::Fault, $($arg)+)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use logging::{log_error, CapturingSink, LoggingConfiguration, Severity};
///
/// let sink = Arc::new(CapturingSink::new());
/// let config = LoggingConfiguration::new(Severity::Error, sink.clone());
///
/// log_error!(config: config, "fail: {}", "disk full");
/// assert_eq!(sink.drain()[0].severity, Severity::Error);
/// ```
#[macro_export]
macro_rules! log_error {
    (config: $config:expr, $($arg:tt)+) => {
        $crate::log_with_severity!(config: $config, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_with_severity!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use logging::{log_debug, CapturingSink, LoggingConfiguration, Severity};
///
/// let sink = Arc::new(CapturingSink::new());
/// let config = LoggingConfiguration::new(Severity::Error, sink.clone());
///
/// // Debug is above the error threshold.
/// log_debug!(config: config, "x={}", 5);
/// assert!(sink.is_empty());
///
/// config.set_threshold(Severity::Debug);
/// log_debug!(config: config, "x={}", 5);
/// assert_eq!(sink.drain()[0].message, "x=5");
/// ```
#[macro_export]
macro_rules! log_debug {
    (config: $config:expr, $($arg:tt)+) => {
        $crate::log_with_severity!(config: $config, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_with_severity!($crate::Severity::Debug, $($arg)+)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use logging::{log_info, CapturingSink, LoggingConfiguration, Severity};
///
/// let sink = Arc::new(CapturingSink::new());
/// let config = LoggingConfiguration::new(Severity::Info, sink.clone());
/// let count = 12;
///
/// log_info!(config: config, "loaded {} tiles", count);
/// assert_eq!(sink.drain()[0].message, "loaded 12 tiles");
/// ```
#[macro_export]
macro_rules! log_info {
    (config: $config:expr, $($arg:tt)+) => {
        $crate::log_with_severity!(config: $config, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_with_severity!($crate::Severity::Info, $($arg)+)
    };
}
