//! Terminal output and interaction

pub mod messages;
mod prompt;
mod style;

pub use prompt::{is_affirmative, AssumeYes, Confirm, LinePrompt};
pub use style::{paint, style_for, Printer, Tone};
