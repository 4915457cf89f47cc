//! Error types for micro-claude

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for installer operations
#[derive(Debug, Error)]
pub enum InstallError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Filesystem operation that failed on a known path
    #[error("Failed to {op} {}: {source}", .path.display())]
    Fs {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading the confirmation answer (or writing the question) failed
    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    /// Directory walk failed without an underlying IO error
    #[error("Walk error: {0}")]
    Walk(String),
}

impl InstallError {
    /// Build a `map_err` adapter that attaches the failing path and operation.
    pub fn fs(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| Self::Fs { op, path, source }
    }

    /// Underlying IO error kind, if this error came from the filesystem
    pub fn io_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Io(err) | Self::Prompt(err) | Self::Fs { source: err, .. } => Some(err.kind()),
            Self::Config(_) | Self::Walk(_) => None,
        }
    }

    /// Path the error refers to, when known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Fs { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        self.io_kind() == Some(ErrorKind::PermissionDenied)
    }
}

impl From<ignore::Error> for InstallError {
    fn from(err: ignore::Error) -> Self {
        if err.is_io() {
            if let Some(io) = err.into_io_error() {
                return Self::Io(io);
            }
            return Self::Walk("unknown IO failure during walk".to_string());
        }
        Self::Walk(err.to_string())
    }
}
