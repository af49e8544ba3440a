//! Rooms, items, play context, and the world graph for Hollow.
//!
//! This crate provides:
//! - [`Room`] - A navigable location with exits and contents
//! - [`Item`] and [`ItemTable`] - Takeable things, looked up by id or term
//! - [`Context`] - The player's mutable play state
//! - [`World`] - The compiled room graph and item table

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod item;
pub mod room;
pub mod world;

pub use context::Context;
pub use item::{Item, ItemTable};
pub use room::Room;
pub use world::{DanglingReference, World};
