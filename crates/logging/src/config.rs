//! crates/logging/src/config.rs
//! Verbosity configuration derived from `-v`/`--quiet` flags.

use tracing::Level;

/// Target prefix shared by every event the workspace emits.
pub const TARGET_PREFIX: &str = "wise_ignore";

/// Verbosity requested on the command line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    verbose: u8,
    quiet: bool,
}

impl VerbosityConfig {
    /// Create a configuration from the number of `-v` flags.
    pub const fn from_verbose_level(level: u8) -> Self {
        Self {
            verbose: level,
            quiet: false,
        }
    }

    /// Configuration that only reports warnings and errors.
    pub const fn quiet() -> Self {
        Self {
            verbose: 0,
            quiet: true,
        }
    }

    /// Number of `-v` flags.
    pub const fn verbose_level(&self) -> u8 {
        self.verbose
    }

    /// Returns `true` when `--quiet` was requested.
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Most detailed level recorded for workspace targets.
    ///
    /// `--quiet` wins over any number of `-v` flags.
    pub const fn level(&self) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// `EnvFilter` directive equivalent to this configuration.
    ///
    /// Third-party crates stay at `warn`; only workspace targets follow the
    /// requested level.
    pub fn filter_directive(&self) -> String {
        let level = self.level().as_str().to_ascii_lowercase();
        format!("warn,{TARGET_PREFIX}={level}")
    }
}
