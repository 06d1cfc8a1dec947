use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};

/// Program name used in diagnostics and when no `argv[0]` is supplied.
pub(crate) const PROGRAM_NAME: &str = "dropbox-wise-ignore";

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) empty_cache: bool,
    pub(crate) dry_run: bool,
    pub(crate) match_paths: bool,
    pub(crate) verbose: u8,
    pub(crate) quiet: bool,
    pub(crate) attribute: Option<OsString>,
    pub(crate) root: PathBuf,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("empty-cache")
                .long("empty-cache")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("match-paths")
                .long("match-paths")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("attribute")
                .long("attribute")
                .value_name("NAME")
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .action(ArgAction::Set)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let root = matches
        .remove_one::<OsString>("root")
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        empty_cache: matches.get_flag("empty-cache"),
        dry_run: matches.get_flag("dry-run"),
        match_paths: matches.get_flag("match-paths"),
        verbose: matches.get_count("verbose"),
        quiet: matches.get_flag("quiet"),
        attribute: matches.remove_one::<OsString>("attribute"),
        root,
    })
}

/// Extracts the one-line reason from a `clap` error.
pub(crate) fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_owned()
}
