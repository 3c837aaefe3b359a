//! Tracing utilities for statement rendering and execution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use ::tracing as __tracing;

/// Emit a debug-level tracing event with the rendered node type and SQL text.
///
/// ```ignore
/// sqlweave_trace_render!(core::any::type_name::<T>(), &sql);
/// ```
#[macro_export]
macro_rules! sqlweave_trace_render {
    ($node:expr, $sql:expr) => {
        #[cfg(feature = "tracing")]
        $crate::tracing::__tracing::debug!(node = $node, sql = %$sql, "sqlweave.render");
    };
}

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// sqlweave_trace_query!(&sql, params.len());
/// ```
#[macro_export]
macro_rules! sqlweave_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        $crate::tracing::__tracing::debug!(sql = %$sql, params = $param_count, "sqlweave.query");
    };
}
