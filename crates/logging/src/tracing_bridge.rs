//! crates/logging/src/tracing_bridge.rs
//! Installs the global `tracing` subscriber.
//!
//! Events are rendered by a `tracing-subscriber` `fmt` layer on standard
//! error. The level filter comes from `RUST_LOG` when it is set and from the
//! [`VerbosityConfig`] otherwise.

use super::config::VerbosityConfig;
use std::io;
use tracing_subscriber::EnvFilter;

/// Builds the level filter for `config`, preferring `RUST_LOG` when present.
pub fn env_filter(config: VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.filter_directive()))
}

/// Initialize tracing with the given verbosity configuration.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing subscriber stays in place.
///
/// # Example
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(VerbosityConfig::from_verbose_level(1));
/// tracing::debug!(target: "wise_ignore::walk", "entering directory");
/// ```
pub fn init_tracing(config: VerbosityConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .with_target(config.verbose_level() > 1)
        .without_time()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_refused() {
        let _ = init_tracing(VerbosityConfig::default());
        assert!(!init_tracing(VerbosityConfig::from_verbose_level(2)));
    }
}
