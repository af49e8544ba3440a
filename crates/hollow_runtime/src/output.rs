//! Output sinks for narration.
//!
//! The interpreter produces [`Line`]s; a sink decides how they reach the
//! player.

use std::io::Write;

use hollow_command::{Line, Tone};
use hollow_foundation::{Error, ErrorKind, Result};

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Destination for narration lines.
pub trait OutputSink {
    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns `Output` if the line cannot be written.
    fn emit(&mut self, line: &Line) -> Result<()>;

    /// Writes lines in order.
    ///
    /// # Errors
    ///
    /// Returns the first write failure.
    fn emit_all(&mut self, lines: &[Line]) -> Result<()> {
        lines.iter().try_for_each(|line| self.emit(line))
    }
}

/// Writes lines to a terminal or any other writer.
///
/// With colour on, failures are red and successes blue.
pub struct TerminalSink<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalSink<W> {
    /// Creates a sink over `writer`.
    pub const fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalSink<std::io::Stdout> {
    /// Creates a sink over stdout.
    #[must_use]
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn emit(&mut self, line: &Line) -> Result<()> {
        let colour = match line.tone {
            Tone::Failure if self.color => Some(RED),
            Tone::Success if self.color => Some(BLUE),
            _ => None,
        };

        let written = match colour {
            Some(code) => writeln!(self.writer, "{code}{line}{RESET}"),
            None => writeln!(self.writer, "{line}"),
        };
        written
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::new(ErrorKind::Output(e.to_string())))
    }
}

/// Collects lines in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Vec<Line>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every line emitted so far.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the text of every line emitted so far.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, line: &Line) -> Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }
}
