//! Levels domain: tests for level data parsing.

use super::{BlockDef, BlockKind, LevelDef};
use crate::config::parse_ron;

#[test]
fn test_fallback_level_has_ground_and_traps() {
    let level = LevelDef::default();
    assert!(level.blocks.iter().any(|b| b.kind == BlockKind::Ground));
    assert!(level.blocks.iter().any(|b| b.kind == BlockKind::Trap));
    assert!(level.blocks.iter().all(BlockDef::is_valid));
}

#[test]
fn test_fallback_walls_are_not_ground() {
    let level = LevelDef::default();
    let walls: Vec<_> = level
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Wall)
        .collect();
    assert_eq!(walls.len(), 2);
    assert!(walls.iter().all(|w| w.size.1 > w.size.0));
}

#[test]
fn test_parse_level_ron() {
    let source = r#"(
        name: "test",
        player_spawn: (1.0, 2.0),
        blocks: [
            (kind: Ground, position: (0.0, -1.0), size: (10.0, 1.0)),
            (kind: Trap, position: (3.0, -0.25), size: (1.0, 0.5)),
            (kind: Wall, position: (-5.5, 2.0), size: (1.0, 6.0)),
        ],
    )"#;
    let level: LevelDef = parse_ron("level.ron", source).expect("valid level");
    assert_eq!(level.name, "test");
    assert_eq!(level.player_spawn, (1.0, 2.0));
    assert_eq!(level.player_size, (0.8, 1.0));
    assert_eq!(level.blocks.len(), 3);
    assert_eq!(level.blocks[1].kind, BlockKind::Trap);
    assert_eq!(level.blocks[2].kind, BlockKind::Wall);
}

#[test]
fn test_drop_invalid_blocks() {
    let mut level = LevelDef::default();
    let valid = level.blocks.len();
    level.blocks.push(BlockDef {
        kind: BlockKind::Ground,
        position: (0.0, 0.0),
        size: (0.0, 1.0),
    });

    assert_eq!(level.drop_invalid_blocks(), 1);
    assert_eq!(level.blocks.len(), valid);
}
