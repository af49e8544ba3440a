//! Configuration for a play session.

use std::io::IsTerminal;

use hollow_story::CompileOptions;

/// When to colour failure and success lines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Colour only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit colour codes.
    Always,
    /// Never emit colour codes.
    Never,
}

impl ColorChoice {
    /// Resolves the choice against stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled_for(std::io::stdout().is_terminal())
    }

    /// Resolves the choice given whether the output is a terminal.
    #[must_use]
    pub const fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Configuration for a play session.
///
/// Controls the prompt, colour, closing line, and story validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Prompt shown before each command.
    pub prompt: String,

    /// Colour policy for the terminal sink.
    pub color: ColorChoice,

    /// Line printed when play ends, if any.
    pub farewell: Option<String>,

    /// Reject stories with dangling references.
    pub strict: bool,

    /// Number of commands kept in line-editor history.
    pub history_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            color: ColorChoice::Auto,
            farewell: Some("You have died of dysentery.".to_string()),
            strict: false,
            history_size: 1000,
        }
    }
}

impl GameConfig {
    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the colour policy.
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Builder method to set or clear the farewell line.
    #[must_use]
    pub fn with_farewell(mut self, farewell: Option<String>) -> Self {
        self.farewell = farewell;
        self
    }

    /// Builder method to set strict validation.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to set history size.
    #[must_use]
    pub const fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// The compile options this configuration implies.
    #[must_use]
    pub const fn compile_options(&self) -> CompileOptions {
        CompileOptions::strict(self.strict)
    }
}
