//! # micro-claude
//!
//! Installs the Micro-Claude slash commands into a project: the bundled
//! command files are mirrored into `.claude/commands/` and an empty
//! `.micro-claude/` task-storage directory is scaffolded next to them.

pub mod commands;
pub mod config;
pub mod executor;
pub mod logging;
pub mod scanner;
pub mod types;
pub mod ui;

pub use config::Config;
pub use executor::mirror_tree;
pub use types::{InstallError, InstallOutcome, InstallReport, SyncStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
