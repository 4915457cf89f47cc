//! Results reported by the synchronizer and the installer

use std::path::PathBuf;

/// Counters from one mirror run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Files written at the destination
    pub files_copied: usize,
    /// Directories created or confirmed at the destination
    pub dirs_ensured: usize,
    pub bytes_copied: u64,
}

/// What a completed installation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Whether the bundled commands directory existed and was mirrored
    pub commands_installed: bool,
    /// Whether `.micro-claude` was created by this run
    pub task_dir_created: bool,
    /// True when a previous installation was found and overwritten
    pub overwrote_existing: bool,
    pub stats: SyncStats,
    /// Relative paths of the command files that were copied
    pub installed_files: Vec<PathBuf>,
}

/// Terminal state of an install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(InstallReport),
    /// User refused to overwrite an existing installation
    Declined,
}

impl InstallOutcome {
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }
}
