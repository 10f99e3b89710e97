//! Sum puzzles: target assignment and value tile placement.
//!
//! Every normal room gets a target drawn from a range that grows along the
//! chain. Its value tiles hold one or more groups that each sum to the target
//! exactly, padded with decoy values that need not sum to anything.

use crate::config::DungeonConfig;
use crate::env::RngOracle;
use crate::state::{Grid, Position, RoomBook, RoomId};

use super::partition::{self, PartitionPlan};

/// Inclusive target bounds for the first and the last room of the chain.
const FIRST_TARGET: (u32, u32) = (10, 25);
const LAST_TARGET: (u32, u32) = (100, 300);

/// Inset from the room anchor of the cells that may hold values: the wall,
/// plus the floor ring next to it that stays clear for doors.
const VALUE_INSET: i32 = 2;

/// Size of the notional value grid of a room; it widens along the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleShape {
    pub rows: u32,
    pub cols: u32,
}

impl PuzzleShape {
    pub fn for_room(id: RoomId) -> Self {
        let index = u32::from(id.0);
        Self {
            rows: 3 + index.saturating_sub(1) / 6,
            cols: 3 + (index + 2) / 6,
        }
    }

    /// Value tiles stamped into the room.
    pub fn tiles(&self) -> u32 {
        self.rows * self.cols
    }

    /// Largest number of tiles a single exact-sum group may span.
    pub fn max_group(&self) -> u32 {
        (self.rows + 1).min(self.cols + 1)
    }
}

/// Inclusive target range for room `id` in a chain of `chain_length` rooms.
pub fn target_range(id: RoomId, chain_length: u32) -> (u32, u32) {
    let t = if chain_length > 1 {
        u32::from(id.0).saturating_sub(1) as f32 / (chain_length - 1) as f32
    } else {
        0.0
    };
    (
        lerp(FIRST_TARGET.0, LAST_TARGET.0, t),
        lerp(FIRST_TARGET.1, LAST_TARGET.1, t),
    )
}

fn lerp(from: u32, to: u32, t: f32) -> u32 {
    from + (t * (to - from) as f32).round() as u32
}

/// Draws the target of room `id` and stamps its value tiles.
///
/// `anchor` is the top-left wall corner of the room. Returns the target.
pub(crate) fn configure_room<R>(
    grid: &mut Grid,
    rooms: &mut RoomBook,
    id: RoomId,
    anchor: Position,
    config: &DungeonConfig,
    rng: &mut R,
) -> u32
where
    R: RngOracle + ?Sized,
{
    let (min_target, max_target) = target_range(id, config.chain_length);
    let target = rng.range(min_target, max_target);
    rooms.configure(id, target);

    let shape = PuzzleShape::for_room(id);
    let mut remaining = shape.tiles();
    tracing::debug!(room = %id, target, rows = shape.rows, cols = shape.cols, "configuring puzzle");

    while remaining > 2 {
        let max_count = (remaining - 1).min(shape.max_group()) as usize;
        let Ok(plan) = PartitionPlan::new(target, max_count) else {
            break;
        };
        let group = partition::divide(plan, config.partition, rng);
        tracing::debug!(room = %id, ?group, "placing exact group");
        for &value in &group {
            place_value(grid, anchor, value, rng);
        }
        remaining -= group.len() as u32;
    }

    for _ in 0..remaining {
        let value = rng
            .range(target / 4, 3 * target / 4)
            .min(DungeonConfig::MAX_CELL_VALUE);
        tracing::trace!(room = %id, value, "placing extra value");
        place_value(grid, anchor, value, rng);
    }

    target
}

/// Writes `value` into a random free floor cell of the room at `anchor`.
///
/// Returns `false` without drawing when the room has no free floor left.
pub(crate) fn place_value<R>(grid: &mut Grid, anchor: Position, value: u32, rng: &mut R) -> bool
where
    R: RngOracle + ?Sized,
{
    let min = anchor.offset(VALUE_INSET, VALUE_INSET);
    let max = anchor.offset(
        DungeonConfig::ROOM_STRIDE_X - VALUE_INSET,
        DungeonConfig::ROOM_STRIDE_Y - VALUE_INSET,
    );

    let has_free_cell = (min.y..=max.y)
        .flat_map(|y| (min.x..=max.x).map(move |x| Position::new(x, y)))
        .any(|position| is_free(grid, position));
    if !has_free_cell {
        tracing::warn!(%anchor, value, "no free floor left for value tile");
        return false;
    }

    loop {
        let x = rng.range(min.x as u32, max.x as u32) as i32;
        let y = rng.range(min.y as u32, max.y as u32) as i32;
        let position = Position::new(x, y);
        if !is_free(grid, position) {
            continue;
        }
        if let Some(cell) = grid.cell_mut(position) {
            cell.value = value as u8;
            tracing::trace!(%position, value, "placed value");
            return true;
        }
    }
}

fn is_free(grid: &Grid, position: Position) -> bool {
    let cell = grid.cell(position);
    cell.tile.is_floor() && cell.value == 0
}
