//! The canonical command vocabulary.
//!
//! Every player input resolves (through the alias table) to one of eleven
//! canonical commands. Six of them are movements, one per [`Direction`].

use std::fmt;
use std::str::FromStr;

/// The fixed set of exit directions a room may declare.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// `north`
    North,
    /// `south`
    South,
    /// `east`
    East,
    /// `west`
    West,
    /// `enter`
    Enter,
    /// `exit`
    Exit,
}

impl Direction {
    /// Every direction, in the order exits are listed.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Enter,
        Direction::Exit,
    ];

    /// Returns the canonical lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Enter => "enter",
            Self::Exit => "exit",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a name is not part of the canonical vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownName(pub String);

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a canonical name", self.0)
    }
}

impl std::error::Error for UnknownName {}

impl FromStr for Direction {
    type Err = UnknownName;

    /// Parses a canonical direction name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// A canonical command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move through an exit.
    Go(Direction),
    /// Describe the current room and its contents.
    Look,
    /// Move matching items from the room to the inventory.
    Take,
    /// Move matching items from the inventory to the room.
    Drop,
    /// List carried items.
    Inventory,
    /// End the game.
    Quit,
}

impl Command {
    /// Every canonical command, in base alias table order.
    pub const ALL: [Command; 11] = [
        Command::Go(Direction::North),
        Command::Go(Direction::South),
        Command::Go(Direction::East),
        Command::Go(Direction::West),
        Command::Go(Direction::Enter),
        Command::Go(Direction::Exit),
        Command::Look,
        Command::Take,
        Command::Drop,
        Command::Inventory,
        Command::Quit,
    ];

    /// Returns the canonical name players type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go(dir) => dir.as_str(),
            Self::Look => "look",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Inventory => "inventory",
            Self::Quit => "quit",
        }
    }

    /// Returns true for the six movement commands.
    #[must_use]
    pub const fn is_movement(self) -> bool {
        matches!(self, Self::Go(_))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = UnknownName;

    /// Parses a canonical command name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.as_str() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
