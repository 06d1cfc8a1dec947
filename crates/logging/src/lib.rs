#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` centralises how the workspace reports what it does. Every crate
//! emits [`tracing`] events under a `wise_ignore::<subsystem>` target through
//! the macros exported here, and the binary installs a single subscriber via
//! [`init_tracing`] once the command line has been parsed.
//!
//! # Design
//!
//! - [`VerbosityConfig`] maps `-v`/`--quiet` flags onto a [`tracing::Level`]
//!   and an `EnvFilter` directive.
//! - [`init_tracing`] installs a `tracing-subscriber` `fmt` layer writing to
//!   standard error. `RUST_LOG` overrides the computed filter.
//! - [`trace_rules!`], [`trace_walk!`], [`trace_tag!`] and [`trace_delete!`]
//!   attach the subsystem target. They expand through this crate's
//!   re-export of [`tracing`], so callers need no direct dependency on it.
//!
//! # Invariants
//!
//! - Subscriber installation is attempted at most once per process; later
//!   calls leave the first subscriber in place.
//! - Tag changes and deletions are logged at `info` so they are visible at the
//!   default verbosity. Rule and traversal chatter is `debug`.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let config = VerbosityConfig::from_verbose_level(1);
//! assert_eq!(config.filter_directive(), "warn,wise_ignore=debug");
//! ```

mod config;
mod tracing_bridge;
mod tracing_macros;

pub use config::{TARGET_PREFIX, VerbosityConfig};
pub use tracing_bridge::{env_filter, init_tracing};

#[doc(hidden)]
pub use tracing;
