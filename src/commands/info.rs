//! Help, version and unknown-command output

use crate::ui::messages::{
    unknown_command, version_line, HELP, INSTALL_FAILED, UNKNOWN_COMMAND_HINT,
};
use crate::ui::{Printer, Tone};
use crate::VERSION;
use std::io::{self, Write};

/// Print usage text
pub fn print_help<W: Write>(out: W) -> io::Result<()> {
    let mut printer = Printer::new(out);
    printer.lines(HELP)?;
    printer.flush()
}

/// Print `micro-claude v<version>`
pub fn print_version<W: Write>(out: W) -> io::Result<()> {
    let mut printer = Printer::new(out);
    printer.line(Tone::Heading, &version_line(VERSION))?;
    printer.flush()
}

/// Report a token that is not a command
pub fn print_unknown<W: Write>(out: W, token: &str) -> io::Result<()> {
    let mut printer = Printer::new(out);
    printer.line(Tone::Error, &unknown_command(token))?;
    printer.line(Tone::Warning, UNKNOWN_COMMAND_HINT)?;
    printer.flush()
}

/// Report arguments that were recognized but malformed
pub fn print_invalid<W: Write>(out: W, message: &str) -> io::Result<()> {
    let mut printer = Printer::new(out);
    printer.line(Tone::Error, message)?;
    printer.line(Tone::Warning, UNKNOWN_COMMAND_HINT)?;
    printer.flush()
}

/// Report a failed installation with the underlying error text
pub fn print_install_failure<W: Write>(out: W, error: &dyn std::error::Error) -> io::Result<()> {
    let mut printer = Printer::new(out);
    printer.line(Tone::Error, &format!("{INSTALL_FAILED}: {error}"))?;
    printer.flush()
}
