//! Dungeon configuration loader.

use std::path::Path;

use dungeon_core::DungeonConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for dungeon configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys take their defaults. The result is validated, so a
    /// returned config is always accepted by `Dungeon::new`.
    pub fn load(path: &Path) -> LoadResult<DungeonConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate config TOML held in memory.
    pub fn parse(content: &str) -> LoadResult<DungeonConfig> {
        let config: DungeonConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid dungeon config: {}", e))?;

        Ok(config)
    }
}
