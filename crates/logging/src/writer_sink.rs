//! crates/logging/src/writer_sink.rs
//! Sink that renders records as text lines into an [`io::Write`] target.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use crate::line_mode::LineMode;
use crate::record::LogRecord;
use crate::sink::LogSink;

/// Renders records as `[<severity>] <function>:<line>: <message>`.
///
/// The writer sits behind a mutex so one sink can be shared by every thread
/// that logs through a configuration. Write errors are dropped: logging
/// never reports failure back to the call site.
///
/// # Examples
///
/// ```
/// use logging::{LineMode, LogRecord, LogSink, Severity, WriterSink};
///
/// let sink = WriterSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// sink.log(&LogRecord::new(Severity::Error, "tiles::load", "tiles.rs", 42, "disk full"));
///
/// assert_eq!(sink.into_inner(), b"[error] tiles::load:42: disk full".to_vec());
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
    line_mode: LineMode,
}

impl<W> WriterSink<W> {
    /// Creates a sink that appends a newline after each record.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            line_mode,
        }
    }

    /// Returns the configured [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock_writer(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl WriterSink<io::Stderr> {
    /// Console sink writing to standard error, used when the host installs nothing else.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W> WriterSink<W>
where
    W: Write,
{
    /// Renders `record` into the writer, returning any I/O error.
    pub fn write_record(&self, record: &LogRecord<'_>) -> io::Result<()> {
        let mut writer = self.lock_writer();
        write!(
            writer,
            "[{}] {}:{}: {}",
            record.severity(),
            record.function(),
            record.line(),
            record.message()
        )?;
        if self.line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

impl<W> LogSink for WriterSink<W>
where
    W: Write + Send,
{
    fn log(&self, record: &LogRecord<'_>) {
        let _ = self.write_record(record);
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("line_mode", &self.line_mode)
            .finish_non_exhaustive()
    }
}
