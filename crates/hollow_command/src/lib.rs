//! Command interpreter for text adventure play.
//!
//! This crate turns one line of player input into a world-state transition
//! and the narration that describes it.
//!
//! # Architecture
//!
//! ```text
//! "Grab Blade"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → verb "grab", argument "blade"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ALIAS TABLE    │  → Command::Take
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ACTION TABLE    │  → take handler moves matching items
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  NARRATION      │  → "OK", then first-visit or short room text
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split raw input into command word and argument
//! - [`vocabulary`] - The alias table mapping input words to commands
//! - [`action`] - Fixed dispatch table from command to handler
//! - [`narration`] - Narration lines and room descriptions
//! - [`interpreter`] - Per-turn orchestration over the play context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod interpreter;
pub mod narration;
pub mod tokenizer;
pub mod vocabulary;

pub use action::{ActionResult, Refusal};
pub use interpreter::{Interpreter, Turn, TurnOutcome};
pub use narration::{Line, Tone};
pub use tokenizer::{InputTokenizer, TokenizedInput};
pub use vocabulary::AliasTable;
