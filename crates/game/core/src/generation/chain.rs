//! Room-chain generation.
//!
//! A pass places the entrance, opens the exit in its south wall and then
//! walks a single chain of rooms through random doors. Rooms sit on a fixed
//! lattice (anchors 12 apart horizontally, 8 vertically, walls shared), so a
//! neighbouring slot is either wholly free or wholly claimed and probing one
//! interior cell of it decides which.

use crate::config::DungeonConfig;
use crate::env::{RngOracle, RoomTemplateLibrary};
use crate::state::{CardinalDirection, Cell, Grid, Position, RoomBook, RoomId, Tile};

use super::error::ChainError;
use super::puzzle;

const STRIDE_X: i32 = DungeonConfig::ROOM_STRIDE_X;
const STRIDE_Y: i32 = DungeonConfig::ROOM_STRIDE_Y;

/// Result of a successful pass, cropped to the rooms it placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub rooms: RoomBook,
    /// Anchor (top-left wall corner) of the entrance room.
    pub entrance: Position,
    /// The always-open door in the entrance's south wall.
    pub exit: Position,
}

/// Where a door in `direction` goes, relative to the current room's anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Doorway {
    /// Wall cell that becomes the door.
    door: Position,
    /// Interior cell of the neighbouring slot; must still be wall.
    probe: Position,
    /// Anchor of the neighbouring room.
    next: Position,
}

impl Doorway {
    fn new(anchor: Position, direction: CardinalDirection) -> Self {
        let (door, probe) = match direction {
            CardinalDirection::North => (anchor.offset(6, 0), anchor.offset(6, -1)),
            CardinalDirection::South => (anchor.offset(6, STRIDE_Y), anchor.offset(6, STRIDE_Y + 1)),
            CardinalDirection::East => (anchor.offset(STRIDE_X, 4), anchor.offset(STRIDE_X + 1, 4)),
            CardinalDirection::West => (anchor.offset(0, 4), anchor.offset(-1, 4)),
        };
        let (dx, dy) = direction.delta();
        Self {
            door,
            probe,
            next: anchor.offset(dx * STRIDE_X, dy * STRIDE_Y),
        }
    }
}

/// Builds layouts from a configuration and a template set.
///
/// The generator holds no state between passes; retrying with another seed
/// is the caller's business.
#[derive(Clone, Copy, Debug)]
pub struct DungeonGenerator<'a> {
    config: &'a DungeonConfig,
    templates: &'a RoomTemplateLibrary,
}

impl<'a> DungeonGenerator<'a> {
    pub fn new(config: &'a DungeonConfig, templates: &'a RoomTemplateLibrary) -> Self {
        Self { config, templates }
    }

    /// Runs one pass from `seed`.
    ///
    /// The oracle is reseeded first, so the outcome depends only on `seed`,
    /// the configuration and the templates.
    pub fn generate<R>(&self, seed: u64, rng: &mut R) -> Result<Layout, ChainError>
    where
        R: RngOracle + ?Sized,
    {
        tracing::debug!(seed, "generating dungeon");
        rng.reseed(seed);

        let chain = self.config.chain_length as i32;
        let width = (2 * chain + 1) * STRIDE_X + 1;
        let height = (chain + 1) * STRIDE_Y + 1;
        let mut grid = Grid::filled(width as u32, height as u32, Cell::WALL);
        let mut rooms = RoomBook::new();

        let entrance = Position::new(chain * STRIDE_X, chain * STRIDE_Y);
        self.place_room(&mut grid, &mut rooms, RoomId::ENTRANCE, entrance, rng);
        let exit = entrance.offset(6, STRIDE_Y);
        grid.set_tile(exit, Tile::DoorOpen);

        let mut anchor = entrance;
        let mut min = entrance;
        let mut max = entrance;
        for step in 1..=self.config.chain_length {
            let current = RoomId((step - 1) as u8);
            anchor = self.extend(&mut grid, current, anchor, step, rng)?;
            self.place_room(&mut grid, &mut rooms, RoomId(step as u8), anchor, rng);

            min = Position::new(min.x.min(anchor.x), min.y.min(anchor.y));
            max = Position::new(max.x.max(anchor.x), max.y.max(anchor.y));
        }

        let grid = grid.crop(
            min,
            (max.x - min.x + STRIDE_X + 1) as u32,
            (max.y - min.y + STRIDE_Y + 1) as u32,
        );
        tracing::debug!(
            seed,
            width = grid.width(),
            height = grid.height(),
            "chain complete"
        );

        Ok(Layout {
            grid,
            rooms,
            entrance: entrance.offset(-min.x, -min.y),
            exit: exit.offset(-min.x, -min.y),
        })
    }

    /// Opens a door out of the room at `anchor` and returns the next anchor.
    fn extend<R>(
        &self,
        grid: &mut Grid,
        current: RoomId,
        anchor: Position,
        step: u32,
        rng: &mut R,
    ) -> Result<Position, ChainError>
    where
        R: RngOracle + ?Sized,
    {
        let door_tile = if current.is_entrance() {
            Tile::DoorOpen
        } else {
            Tile::DoorLocked
        };

        for _ in 0..self.config.direction_attempts {
            let direction = CardinalDirection::from_index(rng.range(0, 3));
            let doorway = Doorway::new(anchor, direction);
            if grid.tile(doorway.probe) != Tile::Wall {
                tracing::trace!(step, %direction, "direction blocked");
                continue;
            }
            grid.set_tile(doorway.door, door_tile);
            tracing::trace!(step, %direction, door = %doorway.door, "door placed");
            return Ok(doorway.next);
        }

        tracing::debug!(step, attempts = self.config.direction_attempts, "chain blocked");
        Err(ChainError::Blocked {
            step,
            attempts: self.config.direction_attempts,
        })
    }

    /// Claims the interior of the room at `anchor`, stamps its template and,
    /// for normal rooms, its puzzle.
    fn place_room<R>(
        &self,
        grid: &mut Grid,
        rooms: &mut RoomBook,
        id: RoomId,
        anchor: Position,
        rng: &mut R,
    ) where
        R: RngOracle + ?Sized,
    {
        let template_index = if id.is_entrance() {
            0
        } else {
            rng.range(1, self.templates.last_index() as u32) as usize
        };
        tracing::debug!(room = %id, %anchor, template = template_index, "placing room");

        let template = match self.templates.get(template_index) {
            Some(template) => template,
            None => self.templates.entrance(),
        };
        for ty in 0..DungeonConfig::ROOM_HEIGHT {
            for tx in 0..DungeonConfig::ROOM_WIDTH {
                if let Some(cell) = grid.cell_mut(anchor.offset(tx + 1, ty + 1)) {
                    cell.tile = template.tile(tx as usize, ty as usize);
                    cell.room = id;
                }
            }
        }

        if !id.is_entrance() {
            puzzle::configure_room(grid, rooms, id, anchor, self.config, rng);
        }
    }
}
