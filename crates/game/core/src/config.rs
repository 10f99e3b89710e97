use crate::error::{ErrorSeverity, GameError};
use crate::generation::PartitionStrategy;

/// Dungeon configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DungeonConfig {
    /// World units per grid cell, used when converting positions to cells.
    pub tile_size: u32,
    /// Number of rooms chained after the entrance.
    pub chain_length: u32,
    /// Random directions tried for a single chain step before the pass fails.
    pub direction_attempts: u32,
    /// Seeds tried (`seed`, `seed + 1`, ...) before construction gives up.
    pub generation_attempts: u32,
    /// How the partitioner folds an over-budget remainder back into its parts.
    pub partition: PartitionStrategy,
}

impl DungeonConfig {
    // ===== compile-time constants =====
    /// Rooms tracked per dungeon: the entrance plus the full chain.
    pub const MAX_ROOMS: usize = 16;
    /// Interior width of every room (template width).
    pub const ROOM_WIDTH: i32 = 11;
    /// Interior height of every room (template height).
    pub const ROOM_HEIGHT: i32 = 7;
    /// Horizontal anchor offset between neighbouring rooms (walls are shared).
    pub const ROOM_STRIDE_X: i32 = 12;
    /// Vertical anchor offset between neighbouring rooms (walls are shared).
    pub const ROOM_STRIDE_Y: i32 = 8;
    /// Largest value a single puzzle tile can carry.
    pub const MAX_CELL_VALUE: u32 = 99;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TILE_SIZE: u32 = 16;
    pub const DEFAULT_CHAIN_LENGTH: u32 = 15;
    pub const DEFAULT_DIRECTION_ATTEMPTS: u32 = 10;
    pub const DEFAULT_GENERATION_ATTEMPTS: u32 = 1000;

    pub fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            chain_length: Self::DEFAULT_CHAIN_LENGTH,
            direction_attempts: Self::DEFAULT_DIRECTION_ATTEMPTS,
            generation_attempts: Self::DEFAULT_GENERATION_ATTEMPTS,
            partition: PartitionStrategy::default(),
        }
    }

    pub fn with_partition(mut self, partition: PartitionStrategy) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_chain_length(mut self, chain_length: u32) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Checks the tunables against the fixed capacities of the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.direction_attempts == 0 || self.generation_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let max = Self::MAX_ROOMS as u32 - 1;
        if self.chain_length > max {
            return Err(ConfigError::ChainTooLong {
                requested: self.chain_length,
                max,
            });
        }
        Ok(())
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration values the engine cannot honour.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("tile size must be positive")]
    ZeroTileSize,

    #[error("attempt budgets must be positive")]
    ZeroAttempts,

    #[error("chain of {requested} rooms exceeds the {max} rooms that can be tracked")]
    ChainTooLong { requested: u32, max: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTileSize => "CONFIG_ZERO_TILE_SIZE",
            Self::ZeroAttempts => "CONFIG_ZERO_ATTEMPTS",
            Self::ChainTooLong { .. } => "CONFIG_CHAIN_TOO_LONG",
        }
    }
}
