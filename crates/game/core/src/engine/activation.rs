//! Puzzle resolution when a value tile is stepped on.

use crate::state::{Grid, Position, RoomBook, RoomId, Tile};

/// What a single activation did to its room's puzzle.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PuzzleOutcome {
    /// Nothing resolved: the tile was inert or the total is still short.
    #[default]
    None,
    /// The total hit the target exactly; the room's locked doors are now closed.
    Perfect,
    /// The total overshot the target; the acting entity should be penalised.
    Overload,
}

/// Applies activations to a grid and its room table.
///
/// Each room runs a two-state machine. While its running total is short of
/// the target, activations accumulate. The activation that reaches or passes
/// the target resolves the room in the same call: every active tile of the
/// room loses its value, the total returns to zero and the outcome decides
/// whether doors unlock.
pub struct PuzzleEngine<'a> {
    grid: &'a mut Grid,
    rooms: &'a mut RoomBook,
}

impl<'a> PuzzleEngine<'a> {
    pub fn new(grid: &'a mut Grid, rooms: &'a mut RoomBook) -> Self {
        Self { grid, rooms }
    }

    /// Activates the value tile at `position`.
    ///
    /// Inert cells (out of bounds, no value, already active) return
    /// [`PuzzleOutcome::None`] and change nothing.
    pub fn activate(&mut self, position: Position) -> PuzzleOutcome {
        let Some(cell) = self.grid.cell_mut(position) else {
            return PuzzleOutcome::None;
        };
        if !cell.has_value() || cell.active {
            return PuzzleOutcome::None;
        }
        let id = cell.room;
        let Some(room) = self.rooms.get_mut(id) else {
            return PuzzleOutcome::None;
        };

        cell.active = true;
        room.add(u32::from(cell.value));
        tracing::debug!(
            room = %id,
            %position,
            total = room.running_total,
            target = room.target,
            "tile activated"
        );

        if !room.is_done() {
            return PuzzleOutcome::None;
        }

        let overloaded = room.is_overloaded();
        room.clear();
        self.clear_active_cells(id);

        if overloaded {
            tracing::debug!(room = %id, "puzzle overloaded");
            return PuzzleOutcome::Overload;
        }

        let unlocked = self.unlock_doors(id);
        tracing::debug!(room = %id, unlocked, "puzzle solved");
        PuzzleOutcome::Perfect
    }

    /// Strips value and active flag from every active tile of `room`.
    fn clear_active_cells(&mut self, room: RoomId) {
        for (_, cell) in self.grid.iter_mut() {
            if cell.room == room && cell.active {
                cell.active = false;
                cell.value = 0;
            }
        }
    }

    /// Demotes every locked door 4-adjacent to a cell of `room` to closed.
    ///
    /// Returns how many doors changed.
    fn unlock_doors(&mut self, room: RoomId) -> usize {
        let doors: Vec<Position> = self
            .grid
            .iter()
            .filter(|(_, cell)| cell.tile == Tile::DoorLocked)
            .map(|(position, _)| position)
            .filter(|door| {
                door.neighbors()
                    .iter()
                    .any(|neighbor| self.grid.cell(*neighbor).room == room)
            })
            .collect();

        for door in &doors {
            self.grid.set_tile(*door, Tile::DoorClosed);
        }
        doors.len()
    }
}
