//! Terminal styling for status lines

use console::Style;
use std::io::{self, Write};

/// Semantic role of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Bold cyan, used for banners
    Title,
    /// Cyan section headings and underlines
    Heading,
    /// Blue progress and link lines
    Info,
    Success,
    /// Bold green final confirmation
    Done,
    Warning,
    Error,
    /// White detail lines under a heading
    Detail,
}

/// Style for a tone
pub fn style_for(tone: Tone) -> Style {
    let style = Style::new();
    match tone {
        Tone::Plain => style,
        Tone::Title => style.cyan().bold(),
        Tone::Heading => style.cyan(),
        Tone::Info => style.blue(),
        Tone::Success => style.green(),
        Tone::Done => style.green().bold(),
        Tone::Warning => style.yellow(),
        Tone::Error => style.red(),
        Tone::Detail => style.white(),
    }
}

/// Render `message` in the given tone
///
/// Colors are dropped automatically when stdout is not a terminal.
pub fn paint(tone: Tone, message: &str) -> String {
    style_for(tone).apply_to(message).to_string()
}

/// Line-oriented writer that styles every line it emits
pub struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one styled line
    pub fn line(&mut self, tone: Tone, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", paint(tone, message))
    }

    /// Write a block of `(tone, text)` lines in order
    pub fn lines(&mut self, block: &[(Tone, &str)]) -> io::Result<()> {
        for (tone, text) in block {
            self.line(*tone, text)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
