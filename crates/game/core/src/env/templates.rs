//! Room templates: fixed 11x7 tile stamps parsed from a character grid.
//!
//! The asset is a plain text file. Every non-empty row holds exactly
//! [`RoomTemplate::WIDTH`] characters and every [`RoomTemplate::HEIGHT`] rows
//! close one template. Characters map through [`Tile::from_template_char`]:
//!
//! ```text
//! ...........
//! ..x.....x..
//! ....lsr....
//! ...........
//! ..o.....o..
//! ...........
//! ...........
//! ```
//!
//! Template 0 is reserved for the entrance; the rest are drawn for normal rooms.

use crate::config::DungeonConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Tile;

const TEMPLATE_WIDTH: usize = DungeonConfig::ROOM_WIDTH as usize;
const TEMPLATE_HEIGHT: usize = DungeonConfig::ROOM_HEIGHT as usize;
const TEMPLATE_CELLS: usize = TEMPLATE_WIDTH * TEMPLATE_HEIGHT;

/// Immutable 11x7 tile stamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomTemplate {
    tiles: [Tile; TEMPLATE_CELLS],
}

impl RoomTemplate {
    pub const WIDTH: usize = TEMPLATE_WIDTH;
    pub const HEIGHT: usize = TEMPLATE_HEIGHT;
    pub const CELLS: usize = TEMPLATE_CELLS;

    pub const fn new(tiles: [Tile; TEMPLATE_CELLS]) -> Self {
        Self { tiles }
    }

    /// A template of plain floor.
    pub const fn open() -> Self {
        Self::new([Tile::Room; TEMPLATE_CELLS])
    }

    /// Tile at template-local coordinates; `Room` outside the stamp.
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            return Tile::Room;
        }
        self.tiles[y * Self::WIDTH + x]
    }

    pub fn tiles(&self) -> &[Tile; TEMPLATE_CELLS] {
        &self.tiles
    }
}

/// Ordered set of room templates shared read-only by every placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomTemplateLibrary {
    templates: Vec<RoomTemplate>,
}

impl RoomTemplateLibrary {
    /// Entrance plus at least one template for normal rooms.
    pub const MIN_TEMPLATES: usize = 2;

    pub fn new(templates: Vec<RoomTemplate>) -> Result<Self, TemplateError> {
        if templates.len() < Self::MIN_TEMPLATES {
            return Err(TemplateError::TooFewTemplates {
                found: templates.len(),
            });
        }
        Ok(Self { templates })
    }

    /// Parses the character-grid asset.
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut templates = Vec::new();
        let mut tiles = [Tile::Room; TEMPLATE_CELLS];
        let mut rows = 0;

        for (number, line) in text.lines().enumerate() {
            let row = line.trim_end_matches('\r');
            if row.is_empty() {
                continue;
            }

            let length = row.chars().count();
            if length != RoomTemplate::WIDTH {
                return Err(TemplateError::RowLength {
                    line: number + 1,
                    length,
                });
            }

            for (x, c) in row.chars().enumerate() {
                tiles[rows * RoomTemplate::WIDTH + x] = Tile::from_template_char(c);
            }
            rows += 1;

            if rows == RoomTemplate::HEIGHT {
                templates.push(RoomTemplate::new(tiles));
                rows = 0;
            }
        }

        if rows != 0 {
            return Err(TemplateError::IncompleteTemplate {
                index: templates.len(),
                rows,
            });
        }

        Self::new(templates)
    }

    pub fn entrance(&self) -> &RoomTemplate {
        &self.templates[0]
    }

    pub fn get(&self, index: usize) -> Option<&RoomTemplate> {
        self.templates.get(index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Index of the last template usable for a normal room.
    pub fn last_index(&self) -> usize {
        self.templates.len() - 1
    }
}

/// Malformed template asset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("line {line}: template rows must be 11 characters, found {length}")]
    RowLength { line: usize, length: usize },

    #[error("template {index} ends after {rows} of 7 rows")]
    IncompleteTemplate { index: usize, rows: usize },

    #[error("need an entrance template and at least one room template, found {found}")]
    TooFewTemplates { found: usize },
}

impl GameError for TemplateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RowLength { .. } => "TEMPLATE_ROW_LENGTH",
            Self::IncompleteTemplate { .. } => "TEMPLATE_INCOMPLETE",
            Self::TooFewTemplates { .. } => "TEMPLATE_TOO_FEW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TEMPLATES: &str = "\
...........
...........
...........
...........
...........
...........
...........

x.........r
.o.........
..s........
...l.......
...........
...........
..........x
";

    #[test]
    fn parses_templates_in_file_order() {
        let library = RoomTemplateLibrary::parse(TWO_TEMPLATES).unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.last_index(), 1);
        assert!(library.entrance().tiles().iter().all(|tile| *tile == Tile::Room));

        let room = library.get(1).unwrap();
        assert_eq!(room.tile(0, 0), Tile::Block);
        assert_eq!(room.tile(10, 0), Tile::StatueRight);
        assert_eq!(room.tile(1, 1), Tile::Pit);
        assert_eq!(room.tile(2, 2), Tile::Sand);
        assert_eq!(room.tile(3, 3), Tile::StatueLeft);
        assert_eq!(room.tile(10, 6), Tile::Block);
        assert_eq!(room.tile(5, 5), Tile::Room);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let text = TWO_TEMPLATES.replace('\n', "\r\n");
        let library = RoomTemplateLibrary::parse(&text).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn rejects_wrong_row_length() {
        let text = "..........\n";
        assert_eq!(
            RoomTemplateLibrary::parse(text),
            Err(TemplateError::RowLength { line: 1, length: 10 })
        );
    }

    #[test]
    fn rejects_trailing_partial_template() {
        let text = format!("{TWO_TEMPLATES}...........\n...........\n");
        assert_eq!(
            RoomTemplateLibrary::parse(&text),
            Err(TemplateError::IncompleteTemplate { index: 2, rows: 2 })
        );
    }

    #[test]
    fn rows_of_spaces_are_floor() {
        let mut rows: Vec<&str> = TWO_TEMPLATES.lines().collect();
        rows[10] = "           ";
        let library = RoomTemplateLibrary::parse(&rows.join("\n")).unwrap();

        assert_eq!(library.len(), 2);
        let room = library.get(1).unwrap();
        assert!((0..RoomTemplate::WIDTH).all(|x| room.tile(x, 2) == Tile::Room));
        assert_eq!(room.tile(3, 3), Tile::StatueLeft);
        assert_eq!(room.tile(10, 6), Tile::Block);
    }

    #[test]
    fn requires_a_room_template_besides_the_entrance() {
        let entrance_only: String = TWO_TEMPLATES.lines().take(7).collect::<Vec<_>>().join("\n");
        let error = RoomTemplateLibrary::parse(&entrance_only).unwrap_err();
        assert_eq!(error, TemplateError::TooFewTemplates { found: 1 });
        assert_eq!(error.severity(), ErrorSeverity::Validation);
    }
}
