//! crates/logging/src/ceiling.rs
//! Compile-time severity ceiling selected with `--cfg map_platform_max_severity`.
//!
//! Build with `RUSTFLAGS='--cfg map_platform_max_severity="error"'` to drop
//! debug and info call sites, or `="off"` to drop every call site.

use crate::severity::Severity;

/// Most verbose severity that survives compilation.
///
/// The gate macros compare against this constant before reading the runtime
/// threshold, so call sites above it fold away. `"off"` wins when both
/// values are set.
#[cfg(map_platform_max_severity = "off")]
pub const STATIC_MAX_SEVERITY: Severity = Severity::None;

/// Most verbose severity that survives compilation.
///
/// The gate macros compare against this constant before reading the runtime
/// threshold, so call sites above it fold away.
#[cfg(all(
    map_platform_max_severity = "error",
    not(map_platform_max_severity = "off")
))]
pub const STATIC_MAX_SEVERITY: Severity = Severity::Error;

/// Most verbose severity that survives compilation.
///
/// The gate macros compare against this constant before reading the runtime
/// threshold. Nothing is compiled out unless `map_platform_max_severity` is
/// set.
#[cfg(not(any(
    map_platform_max_severity = "error",
    map_platform_max_severity = "off"
)))]
pub const STATIC_MAX_SEVERITY: Severity = Severity::Info;
