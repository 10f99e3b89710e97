//! Content factory for loading dungeon data from a directory.

use std::path::{Path, PathBuf};

use dungeon_core::{DungeonConfig, RoomTemplateLibrary};

use crate::loaders::{ConfigLoader, LoadResult, TemplateLoader};

/// Content factory that loads all dungeon content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── rooms.txt
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const TEMPLATES_FILE: &'static str = "rooms.txt";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory for the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load generation settings from `config.toml`.
    ///
    /// A directory without the file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<DungeonConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(DungeonConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load room templates from `rooms.txt`.
    pub fn load_templates(&self) -> LoadResult<RoomTemplateLibrary> {
        let path = self.data_dir.join(Self::TEMPLATES_FILE);
        TemplateLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
