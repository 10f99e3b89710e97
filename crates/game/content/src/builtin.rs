//! Content compiled into the binary.

use dungeon_core::{RoomTemplateLibrary, TemplateError};

/// The bundled room template asset: the entrance followed by seven room layouts.
pub const BUILTIN_TEMPLATES: &str = include_str!("../data/rooms.txt");

/// Parses [`BUILTIN_TEMPLATES`].
pub fn builtin_templates() -> Result<RoomTemplateLibrary, TemplateError> {
    RoomTemplateLibrary::parse(BUILTIN_TEMPLATES)
}
