use sha2::{Digest, Sha256};

use super::{Cell, Position, Tile};

static OUT_OF_BOUNDS: Cell = Cell::OUT_OF_BOUNDS;

/// Rectangular cell arena stored row-major in a single allocation.
///
/// Lookups outside the arena never panic: reads resolve to
/// [`Cell::OUT_OF_BOUNDS`] and writes are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `width` x `height` arena with every cell set to `cell`.
    pub fn filled(width: u32, height: u32, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.width as usize + position.x as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let width = self.width as usize;
        Position::new((index % width) as i32, (index / width) as i32)
    }

    pub fn cell(&self, position: Position) -> &Cell {
        match self.index(position) {
            Some(index) => &self.cells[index],
            None => &OUT_OF_BOUNDS,
        }
    }

    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let index = self.index(position)?;
        Some(&mut self.cells[index])
    }

    pub fn tile(&self, position: Position) -> Tile {
        self.cell(position).tile
    }

    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        if let Some(cell) = self.cell_mut(position) {
            cell.tile = tile;
        }
    }

    /// Iterates every cell with its position in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.position_of(index), cell))
    }

    /// Mutable row-major iteration; positions are computed from the index.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Position, &mut Cell)> + '_ {
        let width = self.width as usize;
        self.cells.iter_mut().enumerate().map(move |(index, cell)| {
            (
                Position::new((index % width) as i32, (index / width) as i32),
                cell,
            )
        })
    }

    /// First position in row-major order holding `tile`.
    pub fn find_tile(&self, tile: Tile) -> Option<Position> {
        self.cells
            .iter()
            .position(|cell| cell.tile == tile)
            .map(|index| self.position_of(index))
    }

    /// Copies the `width` x `height` window whose top-left corner is `origin`.
    ///
    /// Cells of the window that fall outside this grid become walls.
    pub fn crop(&self, origin: Position, width: u32, height: u32) -> Grid {
        let mut cropped = Grid::filled(width, height, Cell::WALL);
        for (position, cell) in cropped.iter_mut() {
            let source = self.cell(position.offset(origin.x, origin.y));
            if source.tile != Tile::OutOfBounds {
                *cell = *source;
            }
        }
        cropped
    }

    /// SHA-256 over dimensions and every cell, for regression checks.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.width.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        for cell in &self.cells {
            hasher.update([cell.tile as u8, cell.room.0, cell.value, cell.active as u8]);
        }
        hasher.finalize().into()
    }
}
