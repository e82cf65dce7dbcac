//! crates/logging/src/callsite.rs
//! Call-site metadata captured by the gate macros.

/// Suffix of the marker item declared by [`function_name!`](crate::function_name).
const MARKER_SUFFIX: &str = "::__callsite_marker";
const CLOSURE_SUFFIX: &str = "::{{closure}}";

/// Turns the type name of the marker function into the enclosing function's path.
///
/// Closure segments are stripped so a call from inside a closure or an
/// `async` block reports the function that owns it.
#[doc(hidden)]
#[must_use]
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    let mut name = marker_type_name
        .strip_suffix(MARKER_SUFFIX)
        .unwrap_or(marker_type_name);
    while let Some(stripped) = name.strip_suffix(CLOSURE_SUFFIX) {
        name = stripped;
    }
    name
}

/// Expands to the path of the function the macro is invoked in.
///
/// ```
/// fn load_style() -> &'static str {
///     logging::function_name!()
/// }
///
/// assert!(load_style().ends_with("load_style"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __callsite_marker() {}
        $crate::__private::enclosing_function(::core::any::type_name_of_val(&__callsite_marker))
    }};
}
