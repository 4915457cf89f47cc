//! Interactive yes/no confirmation

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of an overwrite decision
pub trait Confirm {
    /// Ask `question` and report whether the answer was affirmative
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Only a lone `y` or `Y` counts as consent; the line terminator is ignored.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .trim_end_matches(['\r', '\n'])
        .eq_ignore_ascii_case("y")
}

/// Writes the question without a newline and reads one line back
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        // EOF leaves the answer empty, which reads as "no"
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Ok(true)
    }
}
