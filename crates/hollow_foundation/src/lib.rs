//! Identifiers and error types for Hollow.
//!
//! This crate provides:
//! - [`RoomId`] and [`ItemId`] - Story-declared identifiers
//! - [`Command`] and [`Direction`] - The canonical command vocabulary
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod error;
pub mod id;

pub use command::{Command, Direction, UnknownName};
pub use error::{Error, ErrorContext, ErrorKind};
pub use id::{ItemId, RoomId};

/// Result type for Hollow operations.
pub type Result<T> = std::result::Result<T, Error>;
