use std::fmt;

/// Identifier of the room a cell belongs to. Room 0 is the entrance, which
/// is also the id carried by walls and other unassigned cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u8);

impl RoomId {
    pub const ENTRANCE: Self = Self(0);

    #[inline]
    pub const fn is_entrance(self) -> bool {
        self.0 == Self::ENTRANCE.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room {}", self.0)
    }
}

/// Tile kinds stored in the grid.
///
/// `OutOfBounds` is never stored; it is what lookups return outside the grid.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Tile {
    OutOfBounds,
    #[default]
    Wall,
    /// Plain room floor; the only tile that can carry a puzzle value.
    Room,
    Block,
    DoorLocked,
    DoorClosed,
    DoorOpen,
    Pit,
    Sand,
    StatueLeft,
    StatueRight,
}

impl Tile {
    /// Maps a character of the room template asset to a tile.
    pub const fn from_template_char(c: char) -> Self {
        match c {
            'x' => Tile::Block,
            'o' => Tile::Pit,
            's' => Tile::Sand,
            'l' => Tile::StatueLeft,
            'r' => Tile::StatueRight,
            _ => Tile::Room,
        }
    }

    pub const fn is_door(self) -> bool {
        matches!(self, Tile::DoorLocked | Tile::DoorClosed | Tile::DoorOpen)
    }

    /// Tiles a body may stand on.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Room | Tile::DoorOpen | Tile::Sand)
    }

    /// Plain floor, the only tile that carries puzzle values.
    pub const fn is_floor(self) -> bool {
        matches!(self, Tile::Room)
    }
}

/// One grid cell: tile plus puzzle bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub tile: Tile,
    pub room: RoomId,
    /// Puzzle value in `0..=99`; zero means the cell carries no value.
    pub value: u8,
    pub active: bool,
}

impl Cell {
    /// Sentinel returned for lookups outside the grid.
    pub const OUT_OF_BOUNDS: Self = Self::new(Tile::OutOfBounds);

    /// Unclaimed territory; every cell starts out as this.
    pub const WALL: Self = Self::new(Tile::Wall);

    pub const fn new(tile: Tile) -> Self {
        Self {
            tile,
            room: RoomId::ENTRANCE,
            value: 0,
            active: false,
        }
    }

    pub const fn is_door(&self) -> bool {
        self.tile.is_door()
    }

    pub const fn has_value(&self) -> bool {
        self.value > 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::WALL
    }
}
