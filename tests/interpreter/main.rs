//! Integration tests for the hollow_command crate.
//!
//! Tests for turn execution against compiled stories:
//! - Movement and exits
//! - Taking, dropping, and inventory
//! - Story synonyms
//! - First-visit and revisit narration
//! - Properties over arbitrary command sequences

mod items;
mod movement;
mod narration;
mod properties;
mod synonyms;

use hollow_command::{Interpreter, Line};

/// Two rooms joined north/south, with a sword and a dagger in the first.
pub const ARMOURY: &str = "\
Room armoury:
  Title: the armoury
  Description: Racks line the walls.
  Exits:
    north to yard
  Objects:
    sword dagger

Room yard:
  Title: the yard
  Description: An open yard.
  Exits:
    south to armoury
    east to stables

Object sword:
  Terms: sword, blade
  Description: a sharp sword

Object dagger:
  Terms: Dagger, blade, knife
  Description: a small dagger

Synonyms:
  north:n
  south:s
  take:grab,get
";

/// Compiles `source` and narrates the start room.
pub fn play(source: &str) -> Interpreter {
    let mut interpreter = hollow_story::compile(source)
        .expect("story compiles")
        .into_interpreter();
    interpreter.start();
    interpreter
}

/// The texts of a turn's lines.
pub fn texts(lines: &[Line]) -> Vec<&str> {
    lines.iter().map(|line| line.text.as_str()).collect()
}
