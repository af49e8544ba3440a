//! Per-turn orchestration.
//!
//! The interpreter owns the world, the alias table, and the play context.
//! Each call to [`Interpreter::execute`] is one turn: tokenize, resolve,
//! dispatch, narrate. World-consistency errors raised anywhere in the turn
//! are caught here and turned into a failure line; they never escape.

use hollow_foundation::{Command, Error};
use hollow_world::{Context, World};

use crate::action::{self, ActionResult, Invocation, Refusal};
use crate::narration::{self, Line};
use crate::tokenizer::{InputTokenizer, TokenizedInput};
use crate::vocabulary::AliasTable;

/// How a turn ended.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The line was blank.
    Empty,
    /// The first word is not in the alias table.
    Unknown(String),
    /// The command happened.
    Completed(Command),
    /// The command was understood but did not happen.
    Refused(Command, Refusal),
    /// The story data is broken in a way this turn ran into.
    Inconsistent(Command, Error),
    /// The player quit.
    Ended,
}

impl TurnOutcome {
    /// Returns true if the game should stop after this turn.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::Ended)
    }

    /// Returns the resolved command, if the input resolved to one.
    #[must_use]
    pub const fn command(&self) -> Option<Command> {
        match self {
            Self::Completed(cmd) | Self::Refused(cmd, _) | Self::Inconsistent(cmd, _) => {
                Some(*cmd)
            }
            Self::Ended => Some(Command::Quit),
            Self::Empty | Self::Unknown(_) => None,
        }
    }
}

/// The result of one turn.
#[derive(Debug)]
pub struct Turn {
    /// What happened.
    pub outcome: TurnOutcome,
    /// What to tell the player, in order.
    pub lines: Vec<Line>,
}

impl Turn {
    fn new(outcome: TurnOutcome, lines: Vec<Line>) -> Self {
        Self { outcome, lines }
    }
}

/// Runs turns against a compiled world.
#[derive(Debug)]
pub struct Interpreter {
    world: World,
    aliases: AliasTable,
    context: Context,
}

impl Interpreter {
    /// Creates an interpreter with the player in the world's start room.
    #[must_use]
    pub fn new(world: World, aliases: AliasTable) -> Self {
        let context = world.new_context();
        Self {
            world,
            aliases,
            context,
        }
    }

    /// Returns the world.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// Returns the play context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns the alias table.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Narrates the starting room and marks it seen.
    pub fn start(&mut self) -> Vec<Line> {
        match narration::narrate_arrival(&mut self.world, &self.context, None) {
            Ok(lines) => lines,
            Err(error) => vec![Self::report(&error)],
        }
    }

    /// Executes one line of player input.
    pub fn execute(&mut self, input: &str) -> Turn {
        let TokenizedInput { verb, argument } = InputTokenizer::tokenize(input);

        let Some(verb) = verb else {
            return Turn::new(TurnOutcome::Empty, Vec::new());
        };

        let Some(command) = self.aliases.resolve(&verb) else {
            tracing::debug!(word = %verb, "unknown command");
            return Turn::new(
                TurnOutcome::Unknown(verb),
                vec![Line::failure(narration::UNKNOWN_COMMAND)],
            );
        };

        tracing::debug!(word = %verb, %command, argument = ?argument, "resolved");
        self.context.record(command, argument.clone());

        let invocation = Invocation {
            command,
            argument: argument.as_deref(),
        };
        let result = match action::dispatch(&mut self.world, &mut self.context, &invocation) {
            Ok(result) => result,
            Err(error) => return Self::inconsistent(command, error, Vec::new()),
        };

        match result {
            ActionResult::Ended => Turn::new(TurnOutcome::Ended, Vec::new()),
            ActionResult::Refused(refusal) => {
                let line = Line::failure(refusal.message());
                Turn::new(TurnOutcome::Refused(command, refusal), vec![line])
            }
            ActionResult::Completed(mut lines) => {
                match narration::narrate_arrival(&mut self.world, &self.context, Some(command)) {
                    Ok(more) => {
                        lines.extend(more);
                        Turn::new(TurnOutcome::Completed(command), lines)
                    }
                    Err(error) => Self::inconsistent(command, error, lines),
                }
            }
        }
    }

    fn inconsistent(command: Command, error: Error, mut lines: Vec<Line>) -> Turn {
        lines.push(Self::report(&error));
        Turn::new(TurnOutcome::Inconsistent(command, error), lines)
    }

    fn report(error: &Error) -> Line {
        if error.is_world_consistency() {
            tracing::warn!(%error, "story data is inconsistent");
        } else {
            tracing::error!(%error, "turn failed");
        }
        Line::failure(format!("Something is wrong with this world: {error}."))
    }
}
