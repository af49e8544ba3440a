//! Story compiler for Hollow.
//!
//! This crate turns a line-oriented story file into a playable world:
//! - [`Lexer`] - Classifies each source line into a [`Token`]
//! - [`Parser`] - Groups lines into room, object, and synonym declarations
//! - [`StoryCompiler`] - Builds the [`World`](hollow_world::World) and
//!   [`AliasTable`](hollow_command::AliasTable), collecting [`Diagnostic`]s
//!
//! # Story Format
//!
//! ```text
//! Room cellar:
//!   Title: the cellar
//!   Description: A damp cellar.
//!   Exits:
//!     north to stairs
//!   Objects:
//!     lamp
//!
//! Object lamp:
//!   Terms: lamp, lantern
//!   Description: A brass lamp sits here.
//!
//! Synonyms:
//!   north:n
//!   take:get,grab
//! ```
//!
//! Blocks end at a blank line. The first room declared is where play
//! starts.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod compiler;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{Declarations, ExitDecl, Field, ObjectDecl, ObjectRef, RoomDecl, SynonymDecl};
pub use compiler::{CompileOptions, Story, StoryCompiler, compile, compile_with};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Section, Token, TokenKind};
