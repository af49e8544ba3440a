//! Compile diagnostics.
//!
//! Story files are parsed leniently. Anything odd that does not stop
//! compilation is recorded as a [`Diagnostic`].

use std::fmt;

use crate::span::Span;

/// What kind of problem a diagnostic reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A header with no id.
    MissingId,
    /// A block without a section it normally has.
    MissingSection,
    /// A section keyword that does not belong to this kind of block.
    MisplacedSection,
    /// The same section twice in one block; the later one wins.
    RepeatedSection,
    /// Block text before the first section keyword.
    StrayText,
    /// An exit line that is not `<direction> to <target>`.
    MalformedExit,
    /// An exit direction that is not one of the six.
    UnknownDirection,
    /// The same direction twice in one room; the later one wins.
    RepeatedExit,
    /// The same item listed twice in one room.
    DuplicateObject,
    /// A second room with an id already used.
    DuplicateRoom,
    /// A second object with an id already used.
    DuplicateItem,
    /// A term already claimed by another item.
    SharedTerm,
    /// A synonym line without a colon.
    MalformedSynonym,
    /// A synonym line naming something that is not a command.
    UnknownCommand,
    /// An exit to a room nobody declared.
    DanglingExit,
    /// An object reference that matches no item id or term.
    DanglingObject,
}

impl DiagnosticKind {
    /// Returns true for references that will fail when a player reaches them.
    #[must_use]
    pub const fn is_dangling(self) -> bool {
        matches!(self, Self::DanglingExit | Self::DanglingObject)
    }
}

/// One compile diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// Human-readable explanation.
    pub message: String,
    /// The line it concerns.
    pub span: Span,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.message)
    }
}
