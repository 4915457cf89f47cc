//! Core type definitions for micro-claude

mod entry;
mod error;
mod outcome;
mod tree;

pub use entry::{EntryKind, TreeEntry};
pub use error::InstallError;
pub use outcome::{InstallOutcome, InstallReport, SyncStats};
pub use tree::SourceTree;
