//! Action handlers and the dispatch table.
//!
//! Every canonical [`Command`] maps to exactly one handler through
//! [`dispatch`]. Handlers mutate the world and context and report what
//! happened; they never print and never decide follow-up narration.

use hollow_foundation::{Command, Direction, ItemId, Result};
use hollow_world::{Context, World};

use crate::narration::{self, Line};

/// A resolved command with its argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// The canonical command.
    pub command: Command,
    /// Free text after the command word, lower-cased.
    pub argument: Option<&'a str>,
}

/// Why a command did not happen. These are ordinary player outcomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refusal {
    /// The current room has no exit that way.
    NoExit(Direction),
    /// `take` or `drop` without saying what.
    MissingObject,
    /// Nothing in the room answers to the word.
    NothingHere(String),
    /// Nothing carried answers to the word.
    NotCarried(String),
    /// The inventory is empty.
    EmptyHanded,
}

impl Refusal {
    /// The message shown to the player.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoExit(_) => narration::NO_EXIT,
            Self::MissingObject => narration::MISSING_OBJECT,
            Self::NothingHere(_) => narration::NOTHING_HERE,
            Self::NotCarried(_) => narration::NOT_CARRIED,
            Self::EmptyHanded => narration::EMPTY_HANDED,
        }
    }
}

/// What a handler did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// The command happened; these lines describe it.
    Completed(Vec<Line>),
    /// The command did not happen.
    Refused(Refusal),
    /// The player asked to stop.
    Ended,
}

/// Runs the handler for an invocation.
///
/// # Errors
///
/// Returns a world-consistency error if the handler runs into a room, exit
/// or item that the story never declared.
pub fn dispatch(
    world: &mut World,
    context: &mut Context,
    invocation: &Invocation<'_>,
) -> Result<ActionResult> {
    match invocation.command {
        Command::Go(direction) => go(world, context, direction),
        Command::Look => look(world, context),
        Command::Take => take_item(world, context, invocation.argument),
        Command::Drop => drop_item(world, context, invocation.argument),
        Command::Inventory => inventory(world, context),
        Command::Quit => Ok(ActionResult::Ended),
    }
}

fn go(world: &World, context: &mut Context, direction: Direction) -> Result<ActionResult> {
    match world.follow_exit(context.room(), direction)? {
        Some(target) => {
            let target = target.id().clone();
            tracing::debug!(from = %context.room(), to = %target, %direction, "moved");
            context.set_room(target);
            Ok(ActionResult::Completed(Vec::new()))
        }
        None => Ok(ActionResult::Refused(Refusal::NoExit(direction))),
    }
}

fn look(world: &World, context: &Context) -> Result<ActionResult> {
    let room = world.room(context.room())?;
    narration::describe_room(world, room).map(ActionResult::Completed)
}

/// Items in `ids` that answer to `word`. Undeclared ids have no terms and
/// never match.
fn answering(world: &World, ids: &[ItemId], word: &str) -> Vec<ItemId> {
    ids.iter()
        .filter(|id| {
            world
                .items()
                .get(id.as_str())
                .is_some_and(|item| item.answers_to(word))
        })
        .cloned()
        .collect()
}

fn take_item(
    world: &mut World,
    context: &mut Context,
    argument: Option<&str>,
) -> Result<ActionResult> {
    let Some(word) = argument else {
        return Ok(ActionResult::Refused(Refusal::MissingObject));
    };

    let room_id = context.room().clone();
    let matching = answering(world, world.room(&room_id)?.items(), word);
    if matching.is_empty() {
        return Ok(ActionResult::Refused(Refusal::NothingHere(word.to_string())));
    }

    let room = world.room_mut(&room_id)?;
    let mut lines = Vec::with_capacity(matching.len());
    for id in matching {
        room.remove_item(&id);
        tracing::debug!(item = %id, room = %room_id, "taken");
        context.carry(id);
        lines.push(Line::success(narration::OK));
    }
    Ok(ActionResult::Completed(lines))
}

fn drop_item(
    world: &mut World,
    context: &mut Context,
    argument: Option<&str>,
) -> Result<ActionResult> {
    let Some(word) = argument else {
        return Ok(ActionResult::Refused(Refusal::MissingObject));
    };

    let matching = answering(world, context.inventory(), word);
    if matching.is_empty() {
        return Ok(ActionResult::Refused(Refusal::NotCarried(word.to_string())));
    }

    let room_id = context.room().clone();
    let room = world.room_mut(&room_id)?;
    let mut lines = Vec::with_capacity(matching.len());
    for id in matching {
        context.release(&id);
        tracing::debug!(item = %id, room = %room_id, "dropped");
        room.add_item(id);
        lines.push(Line::success(narration::OK));
    }
    Ok(ActionResult::Completed(lines))
}

fn inventory(world: &World, context: &Context) -> Result<ActionResult> {
    if context.inventory().is_empty() {
        return Ok(ActionResult::Refused(Refusal::EmptyHanded));
    }

    let lines = context
        .inventory()
        .iter()
        .map(|id| {
            world
                .item(id, || "inventory".to_string())
                .map(|item| Line::narration(item.noun()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ActionResult::Completed(lines))
}
