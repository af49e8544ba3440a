//! Line tokens produced by the lexer.

use std::fmt;

use crate::span::Span;

/// The section keywords recognised inside room and object blocks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// `Title:` (rooms).
    Title,
    /// `Description:` (rooms and objects).
    Description,
    /// `Exits:` (rooms).
    Exits,
    /// `Objects:` (rooms, always last).
    Objects,
    /// `Terms:` (objects).
    Terms,
}

impl Section {
    /// Every section keyword.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Exits,
        Self::Objects,
        Self::Terms,
    ];

    /// The keyword as written in a story, without the colon.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Exits => "Exits",
            Self::Objects => "Objects",
            Self::Terms => "Terms",
        }
    }

    /// Looks up a keyword. Matching is case-sensitive.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == word)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of one source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Empty or whitespace only.
    Blank,
    /// `Room <id>:`
    RoomHeader(String),
    /// `Object <id>:`
    ObjectHeader(String),
    /// `Synonyms:`
    SynonymsHeader,
    /// `<Keyword>: <inline text>`
    Section {
        /// Which keyword.
        name: Section,
        /// Trimmed text after the colon, possibly empty.
        inline: String,
    },
    /// Any other line.
    Text,
}

impl TokenKind {
    /// Returns true for room and object headers.
    #[must_use]
    pub const fn is_block_header(&self) -> bool {
        matches!(self, Self::RoomHeader(_) | Self::ObjectHeader(_))
    }
}

/// A classified line with its location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The classification.
    pub kind: TokenKind,
    /// The trimmed line.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the trimmed line text.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}
