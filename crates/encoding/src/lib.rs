#![deny(unsafe_code)]
#![deny(missing_docs)]

//! UTF-8 and UTF-16 conversion for platform API boundaries.
//!
//! Platform string APIs hand out UTF-16 code units while the engine works in
//! UTF-8. The helpers here convert in both directions on top of
//! [`encoding_rs::mem`]. The plain variants are lossy and replace malformed
//! input with U+FFFD; the `_strict` variants reject it with an
//! [`EncodingError`] that pinpoints the offending position.
//!
//! # Examples
//!
//! ```
//! use encoding::{utf16_to_utf8, utf16_to_utf8_strict, utf8_to_utf16};
//!
//! let units = utf8_to_utf16("Zürich 🗺");
//! assert_eq!(utf16_to_utf8(&units), "Zürich 🗺");
//!
//! // A lone high surrogate is replaced in lossy mode and rejected in strict mode.
//! assert_eq!(utf16_to_utf8(&[0x0041, 0xD800]), "A\u{FFFD}");
//! assert!(utf16_to_utf8_strict(&[0x0041, 0xD800]).is_err());
//! ```

mod error;
mod utf;

pub use error::EncodingError;
pub use utf::{
    utf8_bytes_to_utf16, utf8_bytes_to_utf16_strict, utf8_to_utf16, utf16_to_utf8,
    utf16_to_utf8_strict,
};
