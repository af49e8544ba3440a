//! Error types for Hollow.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Only fatal conditions and world-consistency failures are errors. Player
//! mistakes (unknown commands, walking into walls) are ordinary turn outcomes
//! and never travel through this type.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::command::Direction;
use crate::id::{ItemId, RoomId};

/// The main error type for Hollow operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a story file that could not be read.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Creates an error for a story with no usable room.
    #[must_use]
    pub fn malformed_story(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedStory(message.into()))
    }

    /// Creates an error for a room id that names nothing.
    #[must_use]
    pub fn unknown_room(room: RoomId) -> Self {
        Self::new(ErrorKind::UnknownRoom { room })
    }

    /// Creates an error for an exit whose target room does not exist.
    #[must_use]
    pub fn dangling_exit(room: RoomId, direction: Direction, target: RoomId) -> Self {
        Self::new(ErrorKind::DanglingExit {
            room,
            direction,
            target,
        })
    }

    /// Creates an error for an item id that names nothing.
    #[must_use]
    pub fn unknown_item(item: ItemId, holder: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownItem {
            item,
            holder: holder.into(),
        })
    }

    /// Returns true if this error describes broken story data discovered
    /// during play, as opposed to a fatal startup failure.
    #[must_use]
    pub const fn is_world_consistency(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownRoom { .. }
                | ErrorKind::DanglingExit { .. }
                | ErrorKind::UnknownItem { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The story file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The story text contains nothing that can start a game.
    #[error("malformed story: {0}")]
    MalformedStory(String),

    /// Strict compilation found references to undeclared rooms or items.
    #[error("story has {count} dangling reference(s)")]
    DanglingReferences {
        /// Number of dangling references found.
        count: usize,
    },

    /// A room id was looked up but never declared.
    #[error("room `{room}` does not exist")]
    UnknownRoom {
        /// The missing room.
        room: RoomId,
    },

    /// An exit points at a room that was never declared.
    #[error("exit {direction} from `{room}` leads to missing room `{target}`")]
    DanglingExit {
        /// Room holding the exit.
        room: RoomId,
        /// Direction of the exit.
        direction: Direction,
        /// The undeclared target.
        target: RoomId,
    },

    /// An item id held by a room or the player was never declared.
    #[error("{holder} holds unknown item `{item}`")]
    UnknownItem {
        /// The missing item.
        item: ItemId,
        /// Who holds it ("room `cellar`", "inventory").
        holder: String,
    },

    /// Reading player input failed.
    #[error("input error: {0}")]
    Input(String),

    /// Writing narration failed.
    #[error("output error: {0}")]
    Output(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Story file path.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line, self.column) {
            (Some(source), Some(line), Some(col)) => write!(f, "at {source}:{line}:{col}"),
            (Some(source), _, _) => write!(f, "at {source}"),
            (None, Some(line), Some(col)) => write!(f, "at line {line}:{col}"),
            _ => Ok(()),
        }
    }
}
