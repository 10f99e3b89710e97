//! Plain-text rendering of a dungeon.

use std::io::{self, Write};

use dungeon_core::{Cell, Dungeon, RngOracle, Tile};

/// Character drawn for a cell.
pub fn glyph(cell: &Cell, show_values: bool) -> char {
    if show_values && cell.has_value() {
        return '*';
    }
    match cell.tile {
        Tile::OutOfBounds => ' ',
        Tile::Wall => '#',
        Tile::Room => '.',
        Tile::Block => 'x',
        Tile::DoorLocked => 'L',
        Tile::DoorClosed => '+',
        Tile::DoorOpen => '/',
        Tile::Pit => 'o',
        Tile::Sand => 's',
        Tile::StatueLeft => 'l',
        Tile::StatueRight => 'r',
    }
}

/// Writes the grid one row per line.
pub fn write_map<W: Write, R: RngOracle>(
    out: &mut W,
    dungeon: &Dungeon<R>,
    show_values: bool,
) -> io::Result<()> {
    let grid = dungeon.grid();
    let mut line = String::with_capacity(grid.width() as usize);
    for (position, cell) in grid.iter() {
        line.push(glyph(cell, show_values));
        if position.x == grid.width() as i32 - 1 {
            writeln!(out, "{line}")?;
            line.clear();
        }
    }
    Ok(())
}

/// Writes one line per puzzle room: id, target and its value tiles.
pub fn write_rooms<W: Write, R: RngOracle>(out: &mut W, dungeon: &Dungeon<R>) -> io::Result<()> {
    writeln!(out, "{:>4}  {:>6}  values", "room", "target")?;
    for room in dungeon.rooms() {
        let values: Vec<String> = dungeon
            .grid()
            .iter()
            .filter(|(_, cell)| cell.room == room.number && cell.has_value())
            .map(|(_, cell)| cell.value.to_string())
            .collect();
        writeln!(
            out,
            "{:>4}  {:>6}  {}",
            room.number.0,
            room.target,
            values.join(" ")
        )?;
    }
    Ok(())
}
