//! Game loop, line editing, and CLI for Hollow.
//!
//! This crate provides:
//! - [`Game`] - The read-execute-narrate loop over a compiled story
//! - [`LineEditor`] - Input abstraction with rustyline and reader backends
//! - [`OutputSink`] - Output abstraction with terminal and in-memory sinks
//! - [`GameConfig`] - Prompt, colour, and validation settings
//! - [`logging`] - `tracing` subscriber setup for the binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod game;
pub mod logging;
pub mod output;

pub use config::{ColorChoice, GameConfig};
pub use editor::{LineEditor, ReadResult, ReaderEditor, RustylineEditor};
pub use game::Game;
pub use output::{MemorySink, OutputSink, TerminalSink};
