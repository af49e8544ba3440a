//! The game loop.
//!
//! Reads a line, runs one turn, writes the narration, until the player
//! quits or input runs out.

use std::io::Stdout;
use std::path::Path;

use hollow_command::{Interpreter, Line};
use hollow_foundation::Result;
use hollow_story::{Story, StoryCompiler};

use crate::config::GameConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::output::{OutputSink, TerminalSink};

/// A play session over one compiled story.
pub struct Game<E: LineEditor = RustylineEditor, S: OutputSink = TerminalSink<Stdout>> {
    /// Runs each turn.
    interpreter: Interpreter,

    /// Where commands come from.
    editor: E,

    /// Where narration goes.
    sink: S,

    /// Session settings.
    config: GameConfig,
}

impl Game<RustylineEditor, TerminalSink<Stdout>> {
    /// Loads a story file and sets up interactive play on the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the story cannot be read or compiled, or if the
    /// line editor fails to initialize.
    pub fn load(path: impl AsRef<Path>, config: GameConfig) -> Result<Self> {
        let story = StoryCompiler::new(config.compile_options()).load(path)?;
        let editor = RustylineEditor::new(config.history_size)?;
        let sink = TerminalSink::stdout(config.color.enabled());
        Ok(Self::new(story, editor, sink, config))
    }
}

impl<E: LineEditor, S: OutputSink> Game<E, S> {
    /// Creates a session over a compiled story.
    ///
    /// Every compile diagnostic is logged at `warn`.
    pub fn new(story: Story, mut editor: E, sink: S, config: GameConfig) -> Self {
        for diagnostic in story.diagnostics() {
            tracing::warn!(%diagnostic, "story diagnostic");
        }
        editor.set_keywords(story.aliases().words());

        Self {
            interpreter: story.into_interpreter(),
            editor,
            sink,
            config,
        }
    }

    /// Returns the interpreter.
    #[must_use]
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Plays until the player quits or input ends, then prints the farewell.
    ///
    /// Returns the number of turns taken.
    ///
    /// # Errors
    ///
    /// Returns `Input` or `Output` if the terminal fails.
    pub fn run(&mut self) -> Result<usize> {
        let opening = self.interpreter.start();
        self.sink.emit_all(&opening)?;

        let mut turns = 0;
        loop {
            let input = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => {
                    tracing::debug!("end of input");
                    break;
                }
            };

            if !input.trim().is_empty() {
                self.editor.add_history(&input);
            }

            let turn = self.interpreter.execute(&input);
            turns += 1;
            tracing::debug!(outcome = ?turn.outcome, "turn");
            self.sink.emit_all(&turn.lines)?;

            if turn.outcome.is_end() {
                break;
            }
        }

        if let Some(farewell) = &self.config.farewell {
            self.sink.emit(&Line::failure(farewell.as_str()))?;
        }
        tracing::info!(turns, "game over");
        Ok(turns)
    }

    /// Consumes the game, returning the editor and sink.
    pub fn into_parts(self) -> (E, S) {
        (self.editor, self.sink)
    }
}
