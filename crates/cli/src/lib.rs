#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `dropbox-wise-ignore`. It parses the
//! arguments with [`clap`], installs the tracing subscriber and runs an
//! [`engine::Sweeper`] over the requested root.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for standard
//! output and error and returns the exit code, which keeps the whole surface
//! testable without spawning a process. [`run_with`] adapts it for `main`.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit code `1` with a single
//!   `dropbox-wise-ignore: error: ...` line on standard error.
//! - Help and version text go to standard output and exit with `0`.
//! - The sweep summary is printed to standard output unless `--quiet` is set.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["dropbox-wise-ignore", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8_lossy(&stdout).starts_with("dropbox-wise-ignore "));
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/dropbox-wise-ignore.rs` for the binary that wires [`run_with`]
//!   into `main`.

use std::ffi::OsString;
use std::fmt::Display;
use std::io::Write;
use std::process::ExitCode;

use engine::{SweepOptions, Sweeper};
use logging::{VerbosityConfig, init_tracing};
use metadata::XattrMarker;

mod args;


use crate::args::{PROGRAM_NAME, ParsedArgs, parse_args, usage_message};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Help text describing every supported option.
const HELP_TEXT: &str = concat!(
    "dropbox-wise-ignore: tag heavy folders so the Dropbox client skips them\n",
    "\n",
    "Usage: dropbox-wise-ignore [OPTIONS] [ROOT]\n",
    "\n",
    "Walks ROOT (default: the current directory) and sets the Dropbox ignore\n",
    "attribute on node_modules, .tox, __pycache__, .pytest_cache and .cache\n",
    "folders, on build/dist/.next next to an ignored node_modules, and on\n",
    "target next to Cargo.toml. A .dropboxignore file adds names or /paths\n",
    "for its directory and below; a !name line stops ignoring a name.\n",
    "\n",
    "Options:\n",
    "      --empty-cache     Delete the contents of ignored cache folders.\n",
    "  -n, --dry-run         Report what would change without touching anything.\n",
    "      --match-paths     Match rules against root-relative paths (/web/dist)\n",
    "                        instead of bare folder names.\n",
    "      --attribute NAME  Extended attribute to set instead of the default.\n",
    "  -v, --verbose         Log rule and traversal decisions (repeatable).\n",
    "  -q, --quiet           Only log warnings and errors; omit the summary.\n",
    "  -h, --help            Show this help message and exit.\n",
    "  -V, --version         Output version information and exit.\n",
    "\n",
    "RUST_LOG overrides the log filter chosen by -v and -q.\n",
);

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            write_error(stderr, usage_message(&error));
            1
        }
    }
}

/// Runs the CLI and converts the result into an [`ExitCode`].
pub fn run_with<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    exit_code_from(run(arguments, stdout, stderr))
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return if stdout.write_all(HELP_TEXT.as_bytes()).is_ok() {
            0
        } else {
            1
        };
    }

    if parsed.show_version {
        return if writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")).is_ok() {
            0
        } else {
            1
        };
    }

    let verbosity = if parsed.quiet {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(parsed.verbose)
    };
    init_tracing(verbosity);

    let marker = parsed
        .attribute
        .map_or_else(XattrMarker::default, XattrMarker::new);
    let options = SweepOptions::new()
        .empty_cache(parsed.empty_cache)
        .dry_run(parsed.dry_run)
        .match_relative_paths(parsed.match_paths);

    match Sweeper::new(marker, options).run(&parsed.root) {
        Ok(report) => {
            if !parsed.quiet && writeln!(stdout, "{report}").is_err() {
                return 1;
            }
            0
        }
        Err(error) => {
            write_error(stderr, error);
            1
        }
    }
}

fn write_error<Err: Write>(stderr: &mut Err, message: impl Display) {
    let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {message}");
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}
