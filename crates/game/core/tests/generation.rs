//! Whole-dungeon generation properties across many seeds.

use std::collections::BTreeSet;

use dungeon_core::generation::PuzzleShape;
use dungeon_core::{
    Dungeon, DungeonConfig, PartitionStrategy, RoomId, RoomTemplate,
    RoomTemplateLibrary, Tile,
};

fn open_templates() -> RoomTemplateLibrary {
    RoomTemplateLibrary::new(vec![RoomTemplate::open(), RoomTemplate::open()]).unwrap()
}

fn count(dungeon: &Dungeon, tile: Tile) -> usize {
    dungeon
        .grid()
        .iter()
        .filter(|(_, cell)| cell.tile == tile)
        .count()
}

#[test]
fn every_seed_terminates_quickly() {
    let templates = open_templates();
    for seed in 0..50 {
        let dungeon = Dungeon::new(seed, DungeonConfig::default(), &templates).unwrap();
        let retries = dungeon.seed() - seed;
        assert!(retries < 100, "seed {seed} needed {retries} retries");
    }
}

#[test]
fn same_seed_reproduces_the_layout() {
    let templates = open_templates();
    let first = Dungeon::new(1234, DungeonConfig::default(), &templates).unwrap();
    let second = Dungeon::new(1234, DungeonConfig::default(), &templates).unwrap();

    assert_eq!(first.seed(), second.seed());
    assert_eq!(first.grid(), second.grid());
    let digest = hex::encode(first.grid().digest());
    assert_eq!(digest, hex::encode(second.grid().digest()));
    assert_eq!(digest.len(), 64);

    let other = Dungeon::new(first.seed() + 1, DungeonConfig::default(), &templates).unwrap();
    assert_ne!(first.grid().digest(), other.grid().digest());
}

#[test]
fn grid_is_cropped_to_the_room_lattice() {
    let templates = open_templates();
    for seed in 0..20 {
        let dungeon = Dungeon::new(seed, DungeonConfig::default(), &templates).unwrap();
        let grid = dungeon.grid();
        assert_eq!((grid.width() - 1) % 12, 0);
        assert_eq!((grid.height() - 1) % 8, 0);

        // The entrance is the southernmost room and the exit sits on the edge.
        assert_eq!(dungeon.exit(), dungeon.entrance().offset(6, 8));
        assert_eq!(dungeon.exit().y, grid.height() as i32 - 1);
        assert_eq!(dungeon.tile(dungeon.exit()), Tile::DoorOpen);
        assert!(grid.iter().all(|(_, cell)| cell.tile != Tile::OutOfBounds));
    }
}

#[test]
fn chain_has_one_door_per_step() {
    let templates = open_templates();
    for seed in 0..30 {
        let dungeon = Dungeon::new(seed, DungeonConfig::default(), &templates).unwrap();
        // Exit plus the door out of the entrance.
        assert_eq!(count(&dungeon, Tile::DoorOpen), 2);
        assert_eq!(count(&dungeon, Tile::DoorLocked), 14);
        assert_eq!(count(&dungeon, Tile::DoorClosed), 0);

        for (position, cell) in dungeon.grid().iter() {
            if cell.tile != Tile::DoorLocked {
                continue;
            }
            let rooms: BTreeSet<u8> = position
                .neighbors()
                .iter()
                .map(|neighbor| dungeon.cell(*neighbor))
                .filter(|neighbor| neighbor.tile == Tile::Room)
                .map(|neighbor| neighbor.room.0)
                .collect();
            let rooms: Vec<u8> = rooms.into_iter().collect();
            assert_eq!(rooms.len(), 2, "door {position} joins {rooms:?}");
            assert_eq!(rooms[1], rooms[0] + 1, "door {position} joins {rooms:?}");
            assert!(rooms[0] >= 1);
        }
    }
}

#[test]
fn rooms_never_overlap() {
    let templates = open_templates();
    for seed in 0..30 {
        let dungeon = Dungeon::new(seed, DungeonConfig::default(), &templates).unwrap();
        for id in 0..=15u8 {
            let interior = dungeon
                .grid()
                .iter()
                .filter(|(_, cell)| cell.tile == Tile::Room && cell.room == RoomId(id))
                .count();
            assert_eq!(interior, 77, "seed {seed} room {id}");
        }
    }
}

#[test]
fn value_tiles_match_the_puzzle_shape() {
    let templates = open_templates();
    for strategy in [PartitionStrategy::CapAndCarry, PartitionStrategy::RandomFold] {
        let config = DungeonConfig::default().with_partition(strategy);
        let dungeon = Dungeon::new(77, config, &templates).unwrap();

        assert_eq!(dungeon.rooms().count(), 15);
        for room in dungeon.rooms() {
            let values: Vec<u8> = dungeon
                .grid()
                .iter()
                .filter(|(_, cell)| cell.room == room.number && cell.has_value())
                .map(|(_, cell)| cell.value)
                .collect();
            assert_eq!(values.len() as u32, PuzzleShape::for_room(room.number).tiles());
            assert!(values.iter().all(|value| (1..=99).contains(value)));
            assert_eq!(room.running_total, 0);
        }

        // The entrance carries no puzzle.
        assert!(
            dungeon
                .grid()
                .iter()
                .all(|(_, cell)| cell.room != RoomId::ENTRANCE || !cell.has_value())
        );
    }
}

#[test]
fn values_only_sit_on_plain_floor() {
    let text = include_str!("../../content/data/rooms.txt");
    let templates = RoomTemplateLibrary::parse(text).unwrap();
    for seed in 0..20 {
        let dungeon = Dungeon::new(seed, DungeonConfig::default(), &templates).unwrap();
        for (position, cell) in dungeon.grid().iter() {
            if cell.has_value() {
                assert_eq!(cell.tile, Tile::Room, "value on {} at {position}", cell.tile);
                assert!(dungeon.room(position).is_some_and(|room| room.is_configured()));
            }
        }
    }
}

#[test]
fn shorter_chains_are_supported() {
    let templates = open_templates();
    let config = DungeonConfig::default().with_chain_length(4);
    let dungeon = Dungeon::new(9, config, &templates).unwrap();
    assert_eq!(dungeon.rooms().count(), 4);
    assert_eq!(count(&dungeon, Tile::DoorLocked), 3);

    let last = dungeon.rooms().last().unwrap();
    assert_eq!(last.number, RoomId(4));
    assert!((100..=300).contains(&last.target));
}
