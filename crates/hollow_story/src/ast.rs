//! Story declarations.
//!
//! The parser groups lines into these declarations; the compiler turns them
//! into a [`World`](hollow_world::World) and an
//! [`AliasTable`](hollow_command::AliasTable).

use hollow_foundation::Direction;

use crate::span::Span;

/// A section value with the span of its first line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Inline text and continuation lines, joined with single spaces.
    pub text: String,
    /// Where the section started.
    pub span: Span,
}

/// One `<direction> to <target>` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitDecl {
    /// Which way.
    pub direction: Direction,
    /// The target room id as written.
    pub target: String,
    /// The exit line.
    pub span: Span,
}

/// One whitespace-separated entry of an `Objects:` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectRef {
    /// The item id or term as written.
    pub name: String,
    /// The line it appeared on.
    pub span: Span,
}

/// A `Room <id>:` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomDecl {
    /// The room id.
    pub id: String,
    /// The header line.
    pub span: Span,
    /// `Title:`
    pub title: Option<Field>,
    /// `Description:`
    pub description: Option<Field>,
    /// `Exits:` lines in source order.
    pub exits: Vec<ExitDecl>,
    /// `Objects:` entries in source order.
    pub objects: Vec<ObjectRef>,
}

impl RoomDecl {
    pub(crate) const fn new(id: String, span: Span) -> Self {
        Self {
            id,
            span,
            title: None,
            description: None,
            exits: Vec::new(),
            objects: Vec::new(),
        }
    }
}

/// An `Object <id>:` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectDecl {
    /// The item id.
    pub id: String,
    /// The header line.
    pub span: Span,
    /// `Terms:` split on commas, trimmed, empties dropped.
    pub terms: Vec<String>,
    /// `Description:`
    pub description: Option<Field>,
}

impl ObjectDecl {
    pub(crate) const fn new(id: String, span: Span) -> Self {
        Self {
            id,
            span,
            terms: Vec::new(),
            description: None,
        }
    }
}

/// One `<command>:<word>,<word>` line of the synonyms section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynonymDecl {
    /// The command name, trimmed.
    pub command: String,
    /// The alias words, trimmed, empties dropped.
    pub words: Vec<String>,
    /// The line.
    pub span: Span,
}

/// Everything the parser found, in source order per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    /// Room blocks.
    pub rooms: Vec<RoomDecl>,
    /// Object blocks.
    pub objects: Vec<ObjectDecl>,
    /// Synonym lines from every synonyms section.
    pub synonyms: Vec<SynonymDecl>,
}
