//! Layout generation: the room chain, its puzzles and the value partitioner.
//!
//! A pass is a pure function of `(seed, config, templates)`. It either yields
//! a complete [`Layout`] or fails as a whole with [`ChainError`]; retrying with
//! the next seed is left to the caller (see [`crate::Dungeon::new`]).
mod chain;
mod error;
pub mod partition;
pub mod puzzle;

pub use chain::{DungeonGenerator, Layout};
pub use error::{ChainError, GenerationError};
pub use partition::{PartitionError, PartitionPlan, PartitionStrategy, divide};
pub use puzzle::{PuzzleShape, target_range};
