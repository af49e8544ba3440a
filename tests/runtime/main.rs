//! Integration tests for the hollow_runtime crate.
//!
//! Drives the game loop with in-memory input and output.

mod game;
