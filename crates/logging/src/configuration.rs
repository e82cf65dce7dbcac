//! crates/logging/src/configuration.rs
//! Threshold and sink shared by every call site that logs through it.

use std::env;
use std::fmt::{self, Write as _};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::record::LogRecord;
use crate::severity::Severity;
use crate::sink::LogSink;
use crate::writer_sink::WriterSink;

/// Environment variable consulted by [`LoggingConfiguration::from_env`].
pub const LOG_LEVEL_ENV: &str = "MAP_PLATFORM_LOG";

/// Threshold plus sink, consulted by the gate macros.
///
/// The threshold is an atomic so it can be changed from any thread while
/// other threads log; a reader may observe a value that is one update
/// behind. The sink can also be replaced at runtime. It is cloned out of
/// its lock before being invoked, so a sink may itself reconfigure the
/// configuration it is attached to.
///
/// Most hosts use the process-wide instance returned by
/// [`shared`](Self::shared). Tests and embedders that want isolation create
/// their own instance and pass it to the macros with `config:`.
pub struct LoggingConfiguration {
    threshold: AtomicU8,
    sink: RwLock<Arc<dyn LogSink>>,
}

impl LoggingConfiguration {
    /// Creates a configuration with an explicit threshold and sink.
    #[must_use]
    pub fn new(threshold: Severity, sink: Arc<dyn LogSink>) -> Self {
        Self {
            threshold: AtomicU8::new(threshold.as_u8()),
            sink: RwLock::new(sink),
        }
    }

    /// Creates a configuration that writes to standard error.
    #[must_use]
    pub fn with_threshold(threshold: Severity) -> Self {
        Self::new(threshold, default_sink())
    }

    /// Creates a configuration whose threshold is read from [`LOG_LEVEL_ENV`].
    ///
    /// An unset or unparsable variable leaves the default threshold
    /// ([`Severity::Error`]) in place.
    #[must_use]
    pub fn from_env() -> Self {
        let value = env::var(LOG_LEVEL_ENV).ok();
        Self::with_threshold(threshold_from_env_value(value.as_deref()))
    }

    /// Returns the process-wide configuration, creating it on first use.
    ///
    /// The instance is built with [`from_env`](Self::from_env) and lives
    /// until the process exits.
    pub fn shared() -> &'static Arc<Self> {
        static SHARED: OnceLock<Arc<LoggingConfiguration>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::from_env()))
    }

    /// Returns the current threshold.
    #[inline]
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    /// Replaces the threshold. Takes effect for subsequent gate checks.
    pub fn set_threshold(&self, threshold: Severity) {
        self.threshold.store(threshold.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a message at `severity` would currently be emitted.
    #[inline]
    pub fn permits(&self, severity: Severity) -> bool {
        severity.passes(self.threshold())
    }

    /// Returns the installed sink.
    pub fn sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.sink.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Installs `sink`, replacing the previous one.
    pub fn set_sink<S>(&self, sink: S)
    where
        S: LogSink + 'static,
    {
        self.set_shared_sink(Arc::new(sink));
    }

    /// Installs an already shared sink, replacing the previous one.
    pub fn set_shared_sink(&self, sink: Arc<dyn LogSink>) {
        *self.sink.write().unwrap_or_else(PoisonError::into_inner) = sink;
    }

    /// Restores the standard error sink.
    pub fn reset_sink(&self) {
        self.set_shared_sink(default_sink());
    }

    /// Formats `args` and hands the resulting record to the sink.
    ///
    /// This is the dispatch half of the gate; the macros call it only after
    /// [`permits`](Self::permits) returned `true`, and it does not check the
    /// threshold again. A `Display` impl that fails truncates the message,
    /// and a panic raised while formatting or inside the sink is contained
    /// here.
    pub fn log_calling_function(
        &self,
        function: &str,
        file: &str,
        line: u32,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) {
        let sink = self.sink();
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut message = String::new();
            let _ = message.write_fmt(args);
            sink.log(&LogRecord::new(severity, function, file, line, &message));
        }));
    }
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self::with_threshold(Severity::default())
    }
}

impl AsRef<Self> for LoggingConfiguration {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl fmt::Debug for LoggingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingConfiguration")
            .field("threshold", &self.threshold())
            .finish_non_exhaustive()
    }
}

/// Parses the raw value of [`LOG_LEVEL_ENV`], falling back to the default threshold.
fn threshold_from_env_value(value: Option<&str>) -> Severity {
    value
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn default_sink() -> Arc<dyn LogSink> {
    Arc::new(WriterSink::stderr())
}
