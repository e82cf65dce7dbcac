//! crates/logging/src/record.rs
//! Records handed to sinks once the gate has admitted a message.

use crate::severity::Severity;

/// A fully formatted log record borrowed for the duration of one dispatch.
///
/// Records are built only after the gate passes and are dropped as soon as
/// the sink returns. Sinks that need to keep a record convert it with
/// [`to_owned_record`](Self::to_owned_record).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    severity: Severity,
    function: &'a str,
    file: &'a str,
    line: u32,
    message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Creates a record from its parts.
    #[must_use]
    pub const fn new(
        severity: Severity,
        function: &'a str,
        file: &'a str,
        line: u32,
        message: &'a str,
    ) -> Self {
        Self {
            severity,
            function,
            file,
            line,
            message,
        }
    }

    /// Returns the severity the message was logged at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the path of the function that issued the call.
    #[must_use]
    pub const fn function(&self) -> &'a str {
        self.function
    }

    /// Returns the source file of the call site.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the source line of the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the formatted message.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Copies the record into an [`OwnedLogRecord`].
    #[must_use]
    pub fn to_owned_record(&self) -> OwnedLogRecord {
        OwnedLogRecord {
            severity: self.severity,
            function: self.function.to_owned(),
            file: self.file.to_owned(),
            line: self.line,
            message: self.message.to_owned(),
        }
    }
}

/// Owned counterpart of [`LogRecord`], kept by capturing sinks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedLogRecord {
    /// Severity the message was logged at.
    pub severity: Severity,
    /// Path of the calling function.
    pub function: String,
    /// Source file of the call site.
    pub file: String,
    /// Source line of the call site.
    pub line: u32,
    /// Formatted message.
    pub message: String,
}

impl OwnedLogRecord {
    /// Borrows the record as a [`LogRecord`].
    #[must_use]
    pub fn as_record(&self) -> LogRecord<'_> {
        LogRecord::new(
            self.severity,
            &self.function,
            &self.file,
            self.line,
            &self.message,
        )
    }
}
