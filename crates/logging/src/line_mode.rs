/// Controls whether a [`WriterSink`](crate::WriterSink) terminates each rendered record with a newline.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered record.
    #[default]
    WithNewline,
    /// Emit the rendered record without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when rendering a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}
