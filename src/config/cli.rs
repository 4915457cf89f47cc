//! Command-line surface

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Raw command-line arguments
///
/// Help is a plain flag on [`InstallArgs`] so its output stays under our
/// control. Version is only honored as the first token, see [`parse_args`].
#[derive(Debug, Parser)]
#[command(
    name = "micro-claude",
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub install: InstallArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Install Micro-Claude in the current project
    #[command(disable_help_flag = true)]
    Install(InstallArgs),
}

/// Options accepted by the install step
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct InstallArgs {
    /// Project directory to install into (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Directory to copy command files from
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Overwrite an existing installation without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show usage
    #[arg(short = 'h', long)]
    pub help: bool,
}

impl InstallArgs {
    /// Options given after `install` win over the same ones given before it
    fn merged_with(self, outer: Self) -> Self {
        Self {
            target: self.target.or(outer.target),
            source: self.source.or(outer.source),
            yes: self.yes || outer.yes,
            help: self.help || outer.help,
        }
    }
}

/// What the entry point should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Install(InstallArgs),
    Help,
    Version,
    /// A token that is neither a command nor a known flag
    Unknown(String),
    /// Recognized arguments used incorrectly (e.g. `--target` without a value)
    Invalid(String),
}

impl Cli {
    pub fn into_action(self) -> CliAction {
        let args = match self.command {
            Some(Command::Install(args)) => args.merged_with(self.install),
            None => self.install,
        };
        if args.help {
            CliAction::Help
        } else {
            CliAction::Install(args)
        }
    }
}

/// Parse process arguments (including the program name) into an action
///
/// A leading `--help`/`-h` or `--version`/`-v` decides the action on its own;
/// whatever follows it is ignored.
pub fn parse_args<I, T>(args: I) -> CliAction
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match args.get(1).and_then(|arg| arg.to_str()) {
        Some("-h" | "--help") => return CliAction::Help,
        Some("-v" | "--version") => return CliAction::Version,
        _ => {}
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => cli.into_action(),
        Err(err) => match err.kind() {
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
                CliAction::Unknown(offending_token(&err, &args))
            }
            _ => {
                let rendered = err.to_string();
                let first_line = rendered.lines().next().unwrap_or("invalid arguments");
                CliAction::Invalid(first_line.trim_start_matches("error: ").to_string())
            }
        },
    }
}

fn offending_token(err: &clap::Error, args: &[OsString]) -> String {
    for kind in [ContextKind::InvalidSubcommand, ContextKind::InvalidArg] {
        if let Some(ContextValue::String(token)) = err.get(kind) {
            return token.clone();
        }
    }
    args.get(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default()
}
