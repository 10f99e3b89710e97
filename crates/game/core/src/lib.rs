//! Deterministic dungeon generation and room sum puzzles.
//!
//! `dungeon-core` lays out a seeded chain of rooms on a tile grid, stamps each
//! room with a sum puzzle and resolves activations against it. Everything is
//! a pure function of the seed, the [`DungeonConfig`] and the room templates;
//! no I/O happens here. Loading templates and configuration from disk is the
//! job of `dungeon-content`.
//!
//! [`Dungeon`] is the entry point for collaborators: construct it from a seed
//! and read or mutate it through its query and command methods.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod generation;
pub mod state;

pub use config::{ConfigError, DungeonConfig};
pub use engine::{Dungeon, PuzzleEngine, PuzzleOutcome};
pub use env::{PcgRng, RngOracle, RoomTemplate, RoomTemplateLibrary, SequenceRng, TemplateError};
pub use error::{ErrorSeverity, GameError};
pub use generation::{
    ChainError, DungeonGenerator, GenerationError, Layout, PartitionError, PartitionPlan,
    PartitionStrategy,
};
pub use state::{
    CardinalDirection, Cell, Grid, Position, Room, RoomBook, RoomId, Tile, WorldPoint, WorldRect,
};
