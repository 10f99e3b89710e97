//! Data files for the dungeon and the loaders that read them.
//!
//! The crate ships the default room template asset (`data/rooms.txt`) and
//! generation settings (`data/config.toml`), and provides loaders that turn
//! files of the same formats into `dungeon-core` types:
//! - Room templates (11x7 character grids)
//! - Generation configuration (TOML)
//!
//! Nothing here touches dungeon state; the core never reads files itself.

mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{BUILTIN_TEMPLATES, builtin_templates};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, TemplateLoader};
