//! Hollow - Text adventure interpreter
//!
//! This crate re-exports all layers of the Hollow system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: hollow_runtime    - Game loop, line editing, CLI
//! Layer 3: hollow_story      - Story lexer, parser, compiler
//! Layer 2: hollow_command    - Alias table, actions, narration, turns
//! Layer 1: hollow_world      - Rooms, items, play context, world graph
//! Layer 0: hollow_foundation - Core types (RoomId, Command, Error)
//! ```

pub use hollow_command as command;
pub use hollow_foundation as foundation;
pub use hollow_runtime as runtime;
pub use hollow_story as story;
pub use hollow_world as world;
