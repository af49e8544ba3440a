//! The compiled world graph.
//!
//! A `World` owns every room and the item table. It does not require exits
//! or room contents to name declared things: such dangling references are
//! listed by [`World::dangling_references`] and fail at the point of use with
//! a world-consistency error.

use std::collections::HashMap;
use std::fmt;

use hollow_foundation::{Direction, Error, ItemId, Result, RoomId};

use crate::context::Context;
use crate::item::{Item, ItemTable};
use crate::room::Room;

/// Rooms and items of a compiled story.
#[derive(Clone, Debug)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    order: Vec<RoomId>,
    items: ItemTable,
    start: RoomId,
}

impl World {
    /// Builds a world. The first room is where play starts.
    ///
    /// A room whose id repeats an earlier one replaces it in place.
    ///
    /// # Errors
    ///
    /// Returns `MalformedStory` if `rooms` is empty.
    pub fn new(rooms: impl IntoIterator<Item = Room>, items: ItemTable) -> Result<Self> {
        let mut map = HashMap::new();
        let mut order = Vec::new();

        for room in rooms {
            let id = room.id().clone();
            if map.insert(id.clone(), room).is_none() {
                order.push(id);
            }
        }

        let start = order
            .first()
            .cloned()
            .ok_or_else(|| Error::malformed_story("no room to start in"))?;

        Ok(Self {
            rooms: map,
            order,
            items,
            start,
        })
    }

    /// Returns the starting room id.
    #[must_use]
    pub fn start(&self) -> &RoomId {
        &self.start
    }

    /// Creates a fresh play context standing in the starting room.
    #[must_use]
    pub fn new_context(&self) -> Context {
        Context::new(self.start.clone())
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if no room has this id.
    pub fn room(&self, id: &RoomId) -> Result<&Room> {
        self.rooms
            .get(id)
            .ok_or_else(|| Error::unknown_room(id.clone()))
    }

    /// Looks up a room for mutation.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if no room has this id.
    pub fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| Error::unknown_room(id.clone()))
    }

    /// Iterates over rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// Number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Returns the item table.
    #[must_use]
    pub fn items(&self) -> &ItemTable {
        &self.items
    }

    /// Looks up an item held by `holder` (used only to word the error).
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if no item has this id.
    pub fn item(&self, id: &ItemId, holder: impl FnOnce() -> String) -> Result<&Item> {
        self.items
            .get(id.as_str())
            .ok_or_else(|| Error::unknown_item(id.clone(), holder()))
    }

    /// Follows the exit in `direction` out of room `from`.
    ///
    /// Returns `Ok(None)` when the room has no such exit.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if `from` does not exist, or `DanglingExit` if
    /// the exit names a room that does not exist.
    pub fn follow_exit(&self, from: &RoomId, direction: Direction) -> Result<Option<&Room>> {
        let room = self.room(from)?;
        let Some(target) = room.exit(direction) else {
            return Ok(None);
        };
        self.rooms
            .get(target)
            .map(Some)
            .ok_or_else(|| Error::dangling_exit(from.clone(), direction, target.clone()))
    }

    /// Lists every exit target and room item that names nothing.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        for room in self.rooms() {
            for (direction, target) in room.exits() {
                if !self.rooms.contains_key(target) {
                    dangling.push(DanglingReference::Exit {
                        room: room.id().clone(),
                        direction,
                        target: target.clone(),
                    });
                }
            }
            for item in room.items() {
                if !self.items.contains(item.as_str()) {
                    dangling.push(DanglingReference::Item {
                        room: room.id().clone(),
                        item: item.clone(),
                    });
                }
            }
        }
        tracing::debug!(count = dangling.len(), "checked world references");
        dangling
    }
}

/// A reference from a room to something that was never declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DanglingReference {
    /// An exit whose target room is missing.
    Exit {
        /// Room holding the exit.
        room: RoomId,
        /// Direction of the exit.
        direction: Direction,
        /// The missing target.
        target: RoomId,
    },
    /// A room object that is not a declared item.
    Item {
        /// Room listing the object.
        room: RoomId,
        /// The missing item.
        item: ItemId,
    },
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exit {
                room,
                direction,
                target,
            } => write!(f, "room `{room}` exit {direction} leads to undeclared room `{target}`"),
            Self::Item { room, item } => {
                write!(f, "room `{room}` lists undeclared object `{item}`")
            }
        }
    }
}
