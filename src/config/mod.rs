//! Configuration management

mod cli;

pub use cli::{parse_args, Cli, CliAction, Command, InstallArgs};

use crate::types::InstallError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Where command files land, relative to the target project
pub const COMMANDS_SUBDIR: &str = ".claude/commands";

/// Task-storage directory scaffolded for the installed commands
pub const TASK_DIR: &str = ".micro-claude";

/// File name prefix that marks a previous installation
pub const MARKER_PREFIX: &str = "mc-";

/// Overrides the bundled commands directory
pub const COMMANDS_DIR_ENV: &str = "MICRO_CLAUDE_COMMANDS_DIR";

/// Commands directory shipped inside this package
pub const BUNDLED_COMMANDS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/.claude/commands");

/// Resolved installation settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Project directory to install into
    pub target_dir: PathBuf,

    /// Directory whose contents are mirrored into the commands directory
    pub source_dir: PathBuf,

    /// Overwrite an existing installation without asking
    pub assume_yes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            source_dir: PathBuf::from(BUNDLED_COMMANDS_DIR),
            assume_yes: false,
        }
    }
}

impl Config {
    /// Config for installing `source_dir` into `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// `<target>/.claude/commands`
    pub fn commands_dir(&self) -> PathBuf {
        self.target_dir.join(COMMANDS_SUBDIR)
    }

    /// `<target>/.micro-claude`
    pub fn task_dir(&self) -> PathBuf {
        self.target_dir.join(TASK_DIR)
    }

    /// Validate configuration
    ///
    /// The source directory is not checked: a missing bundle is tolerated and
    /// simply results in nothing being copied.
    pub fn validate(&self) -> Result<(), InstallError> {
        if !self.target_dir.exists() {
            return Err(InstallError::Config(format!(
                "Target directory does not exist: {}",
                self.target_dir.display()
            )));
        }

        if !self.target_dir.is_dir() {
            return Err(InstallError::Config(format!(
                "Target is not a directory: {}",
                self.target_dir.display()
            )));
        }

        Ok(())
    }
}

impl TryFrom<InstallArgs> for Config {
    type Error = InstallError;

    fn try_from(args: InstallArgs) -> Result<Self, Self::Error> {
        let target_dir = match args.target {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(InstallError::Io)?,
        };

        let source_dir = resolve_source_dir(
            args.source,
            std::env::var_os(COMMANDS_DIR_ENV),
            std::env::current_exe().ok().as_deref(),
        );

        let config = Self {
            target_dir,
            source_dir,
            assume_yes: args.yes,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Pick the commands directory to install from
///
/// An explicit `--source` wins, then the environment override. Otherwise the
/// first existing of `.claude/commands` next to the executable and the
/// package's own `.claude/commands`; if neither exists the package path is
/// returned and the copy step becomes a no-op.
pub fn resolve_source_dir(
    explicit: Option<PathBuf>,
    env_override: Option<OsString>,
    current_exe: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = env_override.filter(|value| !value.is_empty()) {
        return PathBuf::from(dir);
    }

    let beside_exe = current_exe
        .and_then(Path::parent)
        .map(|dir| dir.join(COMMANDS_SUBDIR));

    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(BUNDLED_COMMANDS_DIR),
    }
}
