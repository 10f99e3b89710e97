//! The dungeon facade and puzzle resolution.
//!
//! [`Dungeon`] owns the generated grid, the room table and the random stream.
//! Collaborators read it through bounds-checked queries and change it through
//! two commands: [`Dungeon::open_door`] and [`Dungeon::activate`].

mod activation;

pub use activation::{PuzzleEngine, PuzzleOutcome};

use crate::config::DungeonConfig;
use crate::env::{PcgRng, RngOracle, RoomTemplateLibrary};
use crate::generation::{DungeonGenerator, GenerationError};
use crate::state::{Cell, Grid, Position, Room, RoomBook, Tile, WorldPoint, WorldRect};

/// A generated dungeon and its live puzzle state.
///
/// Construction runs generation to completion; there is no way to observe a
/// partially built dungeon.
#[derive(Clone, Debug)]
pub struct Dungeon<R: RngOracle = PcgRng> {
    grid: Grid,
    rooms: RoomBook,
    config: DungeonConfig,
    rng: R,
    seed: u64,
    entrance: Position,
    exit: Position,
}

impl Dungeon<PcgRng> {
    /// Builds a dungeon on the default PCG stream.
    pub fn new(
        seed: u64,
        config: DungeonConfig,
        templates: &RoomTemplateLibrary,
    ) -> Result<Self, GenerationError> {
        Self::with_rng(seed, config, templates, PcgRng::default())
    }
}

impl<R: RngOracle> Dungeon<R> {
    /// Builds a dungeon on a caller-supplied stream.
    ///
    /// Passes are tried with `seed`, `seed + 1`, ... until one completes or
    /// `config.generation_attempts` seeds have failed.
    pub fn with_rng(
        seed: u64,
        config: DungeonConfig,
        templates: &RoomTemplateLibrary,
        mut rng: R,
    ) -> Result<Self, GenerationError> {
        config.validate()?;

        let found = {
            let generator = DungeonGenerator::new(&config, templates);
            let mut found = None;
            for attempt in 0..config.generation_attempts {
                let candidate = seed.wrapping_add(u64::from(attempt));
                match generator.generate(candidate, &mut rng) {
                    Ok(layout) => {
                        found = Some((candidate, attempt + 1, layout));
                        break;
                    }
                    Err(error) => tracing::debug!(seed = candidate, %error, "pass failed"),
                }
            }
            found
        };

        let Some((used_seed, attempts, layout)) = found else {
            return Err(GenerationError::AttemptsExhausted {
                first_seed: seed,
                attempts: config.generation_attempts,
            });
        };

        tracing::info!(
            seed = used_seed,
            attempts,
            width = layout.grid.width(),
            height = layout.grid.height(),
            "dungeon generated"
        );

        Ok(Self {
            grid: layout.grid,
            rooms: layout.rooms,
            config,
            rng,
            seed: used_seed,
            entrance: layout.entrance,
            exit: layout.exit,
        })
    }

    // ===== queries =====

    /// World position to grid cell, flooring towards negative infinity.
    pub fn grid_coords(&self, point: WorldPoint) -> Position {
        let size = f64::from(self.config.tile_size);
        Position::new((point.x / size).floor() as i32, (point.y / size).floor() as i32)
    }

    pub fn cell(&self, position: Position) -> &Cell {
        self.grid.cell(position)
    }

    pub fn tile(&self, position: Position) -> Tile {
        self.grid.tile(position)
    }

    /// Whether the cell under a world point can be walked on.
    pub fn walkable(&self, point: WorldPoint) -> bool {
        self.tile(self.grid_coords(point)).is_walkable()
    }

    /// Whether all four corners of `rect` are walkable.
    ///
    /// Only the corners are sampled, so a thin obstacle between them is
    /// missed when the rectangle spans more than one cell.
    pub fn box_walkable(&self, rect: WorldRect) -> bool {
        rect.corners().into_iter().all(|corner| self.walkable(corner))
    }

    /// Puzzle bookkeeping of the room owning `position`.
    pub fn room(&self, position: Position) -> Option<&Room> {
        if !self.grid.contains(position) {
            return None;
        }
        self.rooms.get(self.grid.cell(position).room)
    }

    /// Rooms that carry a puzzle, in chain order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.rooms.configured()
    }

    pub fn find_tile(&self, tile: Tile) -> Option<Position> {
        self.grid.find_tile(tile)
    }

    /// Anchor (top-left wall corner) of the entrance room.
    pub fn entrance(&self) -> Position {
        self.entrance
    }

    /// The always-open door leading out of the entrance.
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// World point where the player enters: the top edge of the exit cell,
    /// centred horizontally.
    pub fn spawn_point(&self) -> WorldPoint {
        let size = f64::from(self.config.tile_size);
        WorldPoint::new(
            f64::from(self.exit.x) * size + size / 2.0,
            f64::from(self.exit.y) * size,
        )
    }

    /// Seed of the pass that produced this layout.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// The dungeon's random stream, positioned just after generation.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ===== commands =====

    /// Opens a locked or closed door. Returns `false` for any other tile.
    pub fn open_door(&mut self, position: Position) -> bool {
        match self.grid.tile(position) {
            Tile::DoorLocked | Tile::DoorClosed => {
                self.grid.set_tile(position, Tile::DoorOpen);
                tracing::debug!(%position, "door opened");
                true
            }
            _ => false,
        }
    }

    /// Steps on the value tile at `position`.
    pub fn activate(&mut self, position: Position) -> PuzzleOutcome {
        PuzzleEngine::new(&mut self.grid, &mut self.rooms).activate(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{RoomTemplate, SequenceRng};

    fn templates() -> RoomTemplateLibrary {
        RoomTemplateLibrary::new(vec![RoomTemplate::open(), RoomTemplate::open()]).unwrap()
    }

    fn dungeon() -> Dungeon {
        Dungeon::new(7, DungeonConfig::default(), &templates()).unwrap()
    }

    #[test]
    fn builds_a_full_chain() {
        let dungeon = dungeon();
        assert!(dungeon.seed() >= 7);
        assert_eq!(dungeon.rooms().count(), 15);
        assert_eq!(dungeon.tile(dungeon.exit()), Tile::DoorOpen);
        assert_eq!(dungeon.find_tile(Tile::OutOfBounds), None);
    }

    #[test]
    fn out_of_bounds_queries_hit_the_sentinel() {
        let dungeon = dungeon();
        let outside = Position::new(-1, dungeon.grid().height() as i32);
        assert_eq!(dungeon.tile(outside), Tile::OutOfBounds);
        assert_eq!(dungeon.cell(Position::new(-5, -5)), &Cell::OUT_OF_BOUNDS);
        assert!(dungeon.room(outside).is_none());
        assert!(!dungeon.walkable(WorldPoint::new(-1.0, -1.0)));
    }

    #[test]
    fn world_points_floor_to_cells() {
        let dungeon = dungeon();
        assert_eq!(dungeon.grid_coords(WorldPoint::new(0.0, 15.9)), Position::new(0, 0));
        assert_eq!(dungeon.grid_coords(WorldPoint::new(16.0, 33.0)), Position::new(1, 2));
        assert_eq!(dungeon.grid_coords(WorldPoint::new(-0.5, 0.0)), Position::new(-1, 0));
    }

    #[test]
    fn spawn_point_sits_on_the_exit() {
        let dungeon = dungeon();
        let spawn = dungeon.spawn_point();
        assert_eq!(dungeon.grid_coords(spawn), dungeon.exit());
        assert!(dungeon.walkable(spawn));
    }

    #[test]
    fn box_walkable_checks_every_corner() {
        let dungeon = dungeon();
        let entrance = dungeon.entrance();
        let inside = WorldPoint::new(
            f64::from(entrance.x + 2) * 16.0,
            f64::from(entrance.y + 2) * 16.0,
        );
        let fits = WorldRect::new(inside.x, inside.y, inside.x + 15.0, inside.y + 15.0);
        assert!(dungeon.box_walkable(fits));

        // The left edge pokes into the entrance's west wall.
        let clipped = WorldRect::new(
            f64::from(entrance.x) * 16.0 + 8.0,
            inside.y,
            inside.x,
            inside.y + 15.0,
        );
        assert!(!dungeon.box_walkable(clipped));
    }

    #[test]
    fn open_door_only_touches_closed_doors() {
        let mut dungeon = dungeon();
        let exit = dungeon.exit();
        assert!(!dungeon.open_door(exit));
        assert_eq!(dungeon.tile(exit), Tile::DoorOpen);

        let locked = dungeon.find_tile(Tile::DoorLocked).unwrap();
        assert!(dungeon.open_door(locked));
        assert_eq!(dungeon.tile(locked), Tile::DoorOpen);

        let wall = Position::ORIGIN;
        assert_eq!(dungeon.tile(wall), Tile::Wall);
        assert!(!dungeon.open_door(wall));
        assert_eq!(dungeon.tile(wall), Tile::Wall);
    }

    #[test]
    fn stream_continues_after_generation() {
        let mut first = dungeon();
        let mut second = dungeon();
        let draws: Vec<u32> = (0..4).map(|_| first.rng_mut().next_u32()).collect();
        let again: Vec<u32> = (0..4).map(|_| second.rng_mut().next_u32()).collect();
        assert_eq!(draws, again);

        // Generation consumed the head of the stream.
        let mut fresh = PcgRng::default();
        fresh.reseed(first.seed());
        let head: Vec<u32> = (0..4).map(|_| fresh.next_u32()).collect();
        assert_ne!(draws, head);
    }

    #[test]
    fn rejects_invalid_config_before_generating() {
        let config = DungeonConfig {
            tile_size: 0,
            ..DungeonConfig::default()
        };
        let error = Dungeon::new(0, config, &templates()).unwrap_err();
        assert!(matches!(error, GenerationError::InvalidConfig(_)));
    }

    #[test]
    fn gives_up_after_the_attempt_budget() {
        // A south-only stream can never leave the entrance.
        let config = DungeonConfig {
            generation_attempts: 4,
            ..DungeonConfig::default()
        };
        let rng = SequenceRng::new(vec![1]);
        let error = Dungeon::with_rng(40, config, &templates(), rng).unwrap_err();
        assert_eq!(
            error,
            GenerationError::AttemptsExhausted {
                first_seed: 40,
                attempts: 4
            }
        );
    }
}
