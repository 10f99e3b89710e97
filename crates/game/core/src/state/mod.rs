//! Mutable dungeon state: the cell arena, its tiles and the per-room puzzle
//! bookkeeping. Pure data; generation and puzzle resolution live elsewhere.
mod common;
mod grid;
mod room;
mod tile;

pub use common::{CardinalDirection, Position, WorldPoint, WorldRect};
pub use grid::Grid;
pub use room::{Room, RoomBook};
pub use tile::{Cell, RoomId, Tile};
