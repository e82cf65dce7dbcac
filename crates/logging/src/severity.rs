//! crates/logging/src/severity.rs
//! Severity levels and the threshold comparison used by the gate.

use std::fmt;
use std::str::FromStr;

/// Ordered classification of a log message's importance.
///
/// Lower numeric values are more severe. [`Severity::None`] is only
/// meaningful as a threshold: it disables logging entirely and never matches
/// a message.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Logging disabled.
    None = 0,
    /// Unrecoverable conditions.
    Fault = 1,
    /// Failures the host should know about.
    #[default]
    Error = 2,
    /// Diagnostics useful while developing against the engine.
    Debug = 3,
    /// Verbose informational output.
    Info = 4,
}

impl Severity {
    /// The four levels a message can be emitted at, most severe first.
    pub const ALL: [Self; 4] = [Self::Fault, Self::Error, Self::Debug, Self::Info];

    /// Returns the numeric value of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a level.
    ///
    /// Values above the most verbose level saturate to [`Severity::Info`].
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Fault,
            2 => Self::Error,
            3 => Self::Debug,
            _ => Self::Info,
        }
    }

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fault => "fault",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    /// Reports whether a message at `self` passes the given `threshold`.
    ///
    /// A `None` threshold rejects everything, and a `None` message is never
    /// emitted.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Fault.passes(Severity::Error));
    /// assert!(!Severity::Debug.passes(Severity::Error));
    /// assert!(!Severity::Fault.passes(Severity::None));
    /// ```
    #[inline]
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        if matches!(threshold, Self::None) || matches!(self, Self::None) {
            return false;
        }
        self.as_u8() <= threshold.as_u8()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(String);

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let severity = match token.to_ascii_lowercase().as_str() {
            "none" | "off" => Self::None,
            "fault" => Self::Fault,
            "error" => Self::Error,
            "debug" => Self::Debug,
            "info" | "verbose" => Self::Info,
            _ => return Err(ParseSeverityError(token.to_owned())),
        };
        Ok(severity)
    }
}
