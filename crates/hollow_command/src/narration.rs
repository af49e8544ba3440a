//! Narration lines and room descriptions.
//!
//! Everything the interpreter says is a [`Line`] with a [`Tone`]. The tone
//! lets the presentation layer colour failures and successes without the
//! core knowing about terminals.

use std::fmt;

use hollow_foundation::{Command, Result};
use hollow_world::{Context, Room, World};

/// Reply to a command word nobody recognises.
pub const UNKNOWN_COMMAND: &str = "...and then?";
/// Reply to walking where there is no exit.
pub const NO_EXIT: &str = "There is no way to go in that direction.";
/// Reply to `take` or `drop` with nothing after it.
pub const MISSING_OBJECT: &str = "Do what with the what?";
/// Reply to taking something that is not here.
pub const NOTHING_HERE: &str = "There's nothing like that here.";
/// Reply to dropping something that is not carried.
pub const NOT_CARRIED: &str = "You don't have anything like that.";
/// Reply to `inventory` with empty hands.
pub const EMPTY_HANDED: &str = "You're not carrying anything.";
/// Acknowledgement for each item taken or dropped.
pub const OK: &str = "OK";

/// How a line should be presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Descriptive text.
    Narration,
    /// Acknowledgement of something that worked.
    Success,
    /// Something did not happen.
    Failure,
}

/// One line of output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Presentation class.
    pub tone: Tone,
    /// The text, without a trailing newline.
    pub text: String,
}

impl Line {
    /// Creates a descriptive line.
    #[must_use]
    pub fn narration(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Narration,
            text: text.into(),
        }
    }

    /// Creates a success line.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    /// Creates a failure line.
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Failure,
            text: text.into(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The full description of a room: its description, then one line per item
/// present, in room order.
///
/// # Errors
///
/// Returns `UnknownItem` if the room lists an undeclared item.
pub fn describe_room(world: &World, room: &Room) -> Result<Vec<Line>> {
    let mut lines = Vec::with_capacity(room.items().len() + 1);
    lines.push(Line::narration(room.description()));
    for id in room.items() {
        let item = world.item(id, || format!("room `{}`", room.id()))?;
        lines.push(Line::narration(item.description()));
    }
    Ok(lines)
}

/// What to say about the current room after a successful turn.
///
/// An unseen room is marked seen and fully described. A seen room gets a
/// short reminder only when the turn was a movement.
///
/// # Errors
///
/// Returns a world-consistency error if the current room is missing or
/// lists an undeclared item. The room is still marked seen.
pub fn narrate_arrival(
    world: &mut World,
    context: &Context,
    command: Option<Command>,
) -> Result<Vec<Line>> {
    let room = world.room_mut(context.room())?;
    if !room.is_seen() {
        room.mark_seen();
        tracing::debug!(room = %context.room(), "first visit");
        return describe_room(world, world.room(context.room())?);
    }

    if command.is_some_and(Command::is_movement) {
        return Ok(vec![Line::narration(format!("You're at {}.", room.title()))]);
    }

    Ok(Vec::new())
}
