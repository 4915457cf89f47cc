//! Top-level commands

pub mod info;
pub mod install;
