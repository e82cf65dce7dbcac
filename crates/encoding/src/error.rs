/// Error type for strict conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The UTF-16 input contains a surrogate without its partner.
    #[error("unpaired surrogate 0x{unit:04X} at index {index}")]
    UnpairedSurrogate {
        /// Index of the offending code unit.
        index: usize,
        /// The code unit itself.
        unit: u16,
    },

    /// The UTF-8 input is malformed.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence.
        offset: usize,
    },
}

impl EncodingError {
    /// Returns the position of the offending input, in code units or bytes.
    #[must_use]
    pub const fn position(&self) -> usize {
        match *self {
            Self::UnpairedSurrogate { index, .. } => index,
            Self::InvalidUtf8 { offset } => offset,
        }
    }
}
