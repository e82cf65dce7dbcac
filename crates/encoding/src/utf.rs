//! crates/encoding/src/utf.rs
//! Conversions between UTF-8 and UTF-16.

use encoding_rs::mem;
use logging::log_debug;

use crate::error::EncodingError;

/// Encodes `text` as UTF-16 code units.
#[must_use]
pub fn utf8_to_utf16(text: &str) -> Vec<u16> {
    // Every UTF-8 byte yields at most one UTF-16 unit.
    let mut units = vec![0u16; text.len()];
    let written = mem::convert_str_to_utf16(text, &mut units);
    units.truncate(written);
    units
}

/// Encodes possibly malformed UTF-8 bytes as UTF-16, replacing bad sequences with U+FFFD.
#[must_use]
pub fn utf8_bytes_to_utf16(bytes: &[u8]) -> Vec<u16> {
    let mut units = vec![0u16; bytes.len() + 1];
    let written = mem::convert_utf8_to_utf16(bytes, &mut units);
    units.truncate(written);
    units
}

/// Encodes UTF-8 bytes as UTF-16, failing at the first malformed sequence.
pub fn utf8_bytes_to_utf16_strict(bytes: &[u8]) -> Result<Vec<u16>, EncodingError> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(utf8_to_utf16(text)),
        Err(error) => {
            let offset = error.valid_up_to();
            log_debug!("rejecting malformed UTF-8 at byte offset {offset}");
            Err(EncodingError::InvalidUtf8 { offset })
        }
    }
}

/// Decodes UTF-16 code units, replacing unpaired surrogates with U+FFFD.
#[must_use]
pub fn utf16_to_utf8(units: &[u16]) -> String {
    // A single unit expands to at most three UTF-8 bytes.
    let mut text = "\0".repeat(units.len() * 3);
    let written = mem::convert_utf16_to_str(units, text.as_mut_str());
    text.truncate(written);
    text
}

/// Decodes UTF-16 code units, failing at the first unpaired surrogate.
pub fn utf16_to_utf8_strict(units: &[u16]) -> Result<String, EncodingError> {
    let valid = mem::utf16_valid_up_to(units);
    if let Some(&unit) = units.get(valid) {
        log_debug!("rejecting unpaired surrogate 0x{unit:04X} at index {valid}");
        return Err(EncodingError::UnpairedSurrogate { index: valid, unit });
    }
    Ok(utf16_to_utf8(units))
}
