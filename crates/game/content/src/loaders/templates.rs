//! Room template loader.

use std::path::Path;

use dungeon_core::RoomTemplateLibrary;

use crate::loaders::{LoadResult, read_file};

/// Loader for the room template text asset.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load every template in file order.
    ///
    /// The first template is the entrance; at least one more is required.
    pub fn load(path: &Path) -> LoadResult<RoomTemplateLibrary> {
        let content = read_file(path)?;
        let library = RoomTemplateLibrary::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse room templates {}: {}", path.display(), e)
        })?;

        tracing::debug!(path = %path.display(), templates = library.len(), "loaded room templates");
        Ok(library)
    }
}
