//! crates/logging/src/tracing_macros.rs
//! Convenience macros for subsystem-scoped tracing.
//!
//! These macros wrap the standard tracing macros with the target of the
//! subsystem emitting the event, so `RUST_LOG=wise_ignore::tag=debug` style
//! filters work without every call site spelling the target out.

/// Emit a rule resolution or classification trace.
///
/// # Example
/// ```ignore
/// trace_rules!("override '{}' removed rule '{}'", token, rule);
/// ```
#[macro_export]
macro_rules! trace_rules {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "wise_ignore::rules", $($arg)*)
    };
}

/// Emit a directory traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("entering directory {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "wise_ignore::walk", $($arg)*)
    };
}

/// Emit an ignore-tag change.
///
/// # Example
/// ```ignore
/// trace_tag!("Ignoring {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_tag {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "wise_ignore::tag", $($arg)*)
    };
}

/// Emit a deletion trace.
///
/// # Example
/// ```ignore
/// trace_delete!("Nuking the folder {}", path.display());
/// ```
#[macro_export]
macro_rules! trace_delete {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "wise_ignore::delete", $($arg)*)
    };
}
