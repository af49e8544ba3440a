//! The player's play state.

use hollow_foundation::{Command, ItemId, RoomId};

/// Mutable play state: where the player is, what they carry, and what
/// they last asked for.
///
/// The context refers to the current room by id; rooms themselves are owned
/// by the [`World`](crate::World).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    room: RoomId,
    inventory: Vec<ItemId>,
    last_command: Option<Command>,
    last_argument: Option<String>,
}

impl Context {
    /// Creates a context standing in `start` with empty hands.
    #[must_use]
    pub fn new(start: RoomId) -> Self {
        Self {
            room: start,
            inventory: Vec::new(),
            last_command: None,
            last_argument: None,
        }
    }

    /// Returns the current room id.
    #[must_use]
    pub fn room(&self) -> &RoomId {
        &self.room
    }

    /// Moves the player.
    pub fn set_room(&mut self, room: RoomId) {
        self.room = room;
    }

    /// Returns carried items in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Returns true if the item is carried.
    #[must_use]
    pub fn is_carrying(&self, item: &ItemId) -> bool {
        self.inventory.contains(item)
    }

    /// Appends an item to the inventory. Returns false if already carried.
    pub fn carry(&mut self, item: ItemId) -> bool {
        if self.is_carrying(&item) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Removes an item from the inventory. Returns false if not carried.
    pub fn release(&mut self, item: &ItemId) -> bool {
        let before = self.inventory.len();
        self.inventory.retain(|held| held != item);
        self.inventory.len() != before
    }

    /// Returns the last resolved command.
    #[must_use]
    pub const fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    /// Returns the argument that accompanied the last command.
    #[must_use]
    pub fn last_argument(&self) -> Option<&str> {
        self.last_argument.as_deref()
    }

    /// Records the command and argument of the current turn.
    pub fn record(&mut self, command: Command, argument: Option<String>) {
        self.last_command = Some(command);
        self.last_argument = argument;
    }
}
