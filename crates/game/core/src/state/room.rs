use arrayvec::ArrayVec;

use crate::config::DungeonConfig;

use super::RoomId;

type RoomSlots = ArrayVec<Room, { DungeonConfig::MAX_ROOMS }>;

/// Puzzle bookkeeping for one room.
///
/// `running_total` only exceeds `target` inside the activation call that
/// pushes it over; resolution resets it to zero before returning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub number: RoomId,
    /// Zero until the room's puzzle is configured.
    pub target: u32,
    pub running_total: u32,
}

impl Room {
    pub const fn unconfigured(number: RoomId) -> Self {
        Self {
            number,
            target: 0,
            running_total: 0,
        }
    }

    pub const fn is_configured(&self) -> bool {
        self.target > 0
    }

    pub const fn is_done(&self) -> bool {
        self.running_total >= self.target
    }

    pub const fn is_overloaded(&self) -> bool {
        self.running_total > self.target
    }

    pub fn add(&mut self, amount: u32) {
        self.running_total += amount;
    }

    pub fn clear(&mut self) {
        self.running_total = 0;
    }
}

/// Fixed-capacity table of rooms indexed by [`RoomId`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomBook {
    rooms: RoomSlots,
}

impl RoomBook {
    /// Every slot starts unconfigured, numbered by its index.
    pub fn new() -> Self {
        let rooms = (0..DungeonConfig::MAX_ROOMS)
            .map(|index| Room::unconfigured(RoomId(index as u8)))
            .collect();
        Self { rooms }
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn get_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    /// Sets the puzzle target of `id`, resetting its running total.
    ///
    /// Returns `false` when `id` is beyond the tracked capacity.
    pub fn configure(&mut self, id: RoomId, target: u32) -> bool {
        match self.get_mut(id) {
            Some(room) => {
                room.target = target;
                room.running_total = 0;
                true
            }
            None => false,
        }
    }

    /// Rooms that carry a puzzle, in id order.
    pub fn configured(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.iter().filter(|room| room.is_configured())
    }
}

impl Default for RoomBook {
    fn default() -> Self {
        Self::new()
    }
}
