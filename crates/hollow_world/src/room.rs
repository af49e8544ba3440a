//! Rooms: the nodes of the world graph.

use std::collections::BTreeMap;

use hollow_foundation::{Direction, ItemId, RoomId};

/// A navigable location.
///
/// Rooms are built once by the story compiler. During play only the item
/// list and the `seen` flag change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    title: String,
    description: String,
    exits: BTreeMap<Direction, RoomId>,
    items: Vec<ItemId>,
    seen: bool,
}

impl Room {
    /// Creates an empty, unseen room.
    #[must_use]
    pub fn new(id: impl Into<RoomId>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            seen: false,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds an exit, replacing any earlier exit in the same direction.
    #[must_use]
    pub fn with_exit(mut self, direction: Direction, target: impl Into<RoomId>) -> Self {
        self.exits.insert(direction, target.into());
        self
    }

    /// Adds an item to the end of the room's list.
    #[must_use]
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.add_item(item.into());
        self
    }

    /// Returns the room id.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the exit target in the given direction, if declared.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits.get(&direction)
    }

    /// Iterates over exits in direction order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &RoomId)> {
        self.exits.iter().map(|(dir, target)| (*dir, target))
    }

    /// Returns the items present, in list order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Returns true if the item is in this room.
    #[must_use]
    pub fn contains(&self, item: &ItemId) -> bool {
        self.items.contains(item)
    }

    /// Appends an item. Returns false (and changes nothing) if it is already here.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes an item. Returns false if it was not here.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|held| held != item);
        self.items.len() != before
    }

    /// Returns true once the player has been here.
    #[must_use]
    pub const fn is_seen(&self) -> bool {
        self.seen
    }

    /// Marks the room as visited. There is no way back.
    pub fn mark_seen(&mut self) {
        self.seen = true;
    }
}
