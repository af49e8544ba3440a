//! The alias table.
//!
//! Maps every word a player may start a command with to a canonical
//! [`Command`]. The base vocabulary maps each canonical name to itself;
//! stories overlay synonyms on top.

use std::collections::HashMap;

use hollow_foundation::Command;

/// Word → canonical command mapping.
#[derive(Clone, Debug)]
pub struct AliasTable {
    aliases: HashMap<String, Command>,
}

impl AliasTable {
    /// Creates a table holding only the base vocabulary.
    #[must_use]
    pub fn new() -> Self {
        let aliases = Command::ALL
            .into_iter()
            .map(|cmd| (cmd.as_str().to_string(), cmd))
            .collect();
        Self { aliases }
    }

    /// Registers `word` as an alias for `command`.
    ///
    /// The word is stored lower-cased, since input is lower-cased before
    /// lookup. Returns the command the word mapped to before, if any; the new
    /// mapping always wins.
    pub fn register(&mut self, word: &str, command: Command) -> Option<Command> {
        self.aliases.insert(word.to_lowercase(), command)
    }

    /// Resolves a word to its command.
    #[must_use]
    pub fn resolve(&self, word: &str) -> Option<Command> {
        self.aliases.get(word).copied()
    }

    /// Returns every known word, sorted. Used for input completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.aliases.keys().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Always false: the base vocabulary is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
    }
}
