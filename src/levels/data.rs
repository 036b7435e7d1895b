//! Levels domain: level layout definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{LoadError, load_ron_file};

/// What a level block does when the player touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BlockKind {
    /// Solid terrain the player can stand on
    Ground,
    /// Solid terrain on the wall layer, so pressing against it is not grounded
    Wall,
    /// Hazard sensor that kills the player
    Trap,
}

/// An axis-aligned block, in world units
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlockDef {
    pub kind: BlockKind,
    /// Center of the block
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl BlockDef {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }

    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    pub fn is_valid(&self) -> bool {
        self.size.0 > 0.0 && self.size.1 > 0.0
    }
}

/// Full level layout, loaded from `assets/levels/*.ron`
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub name: String,
    pub player_spawn: (f32, f32),
    /// Size of the player's box collider
    #[serde(default = "default_player_size")]
    pub player_size: (f32, f32),
    pub blocks: Vec<BlockDef>,
}

fn default_player_size() -> (f32, f32) {
    (0.8, 1.0)
}

impl Default for LevelDef {
    /// Built-in fallback level: a walled floor, two platforms, and a pit of spikes.
    fn default() -> Self {
        let block = |kind: BlockKind, position: (f32, f32), size: (f32, f32)| BlockDef {
            kind,
            position,
            size,
        };
        Self {
            name: "fallback".to_string(),
            player_spawn: (-8.0, 0.0),
            player_size: default_player_size(),
            blocks: vec![
                block(BlockKind::Ground, (-6.0, -4.0), (12.0, 1.0)),
                block(BlockKind::Ground, (9.0, -4.0), (8.0, 1.0)),
                block(BlockKind::Trap, (1.5, -4.25), (3.0, 0.5)),
                block(BlockKind::Ground, (-3.0, -1.0), (3.0, 0.5)),
                block(BlockKind::Ground, (4.0, 1.0), (3.0, 0.5)),
                block(BlockKind::Trap, (4.0, 1.5), (0.5, 0.5)),
                block(BlockKind::Wall, (-12.5, 0.0), (1.0, 10.0)),
                block(BlockKind::Wall, (13.5, 0.0), (1.0, 10.0)),
            ],
        }
    }
}

impl LevelDef {
    pub fn player_spawn_point(&self) -> Vec2 {
        Vec2::new(self.player_spawn.0, self.player_spawn.1)
    }

    pub fn player_extents(&self) -> Vec2 {
        Vec2::new(self.player_size.0, self.player_size.1)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let mut level: LevelDef = load_ron_file(path)?;
        level.drop_invalid_blocks();
        Ok(level)
    }

    /// Remove blocks with non-positive size, returning how many were dropped.
    pub fn drop_invalid_blocks(&mut self) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(BlockDef::is_valid);
        before - self.blocks.len()
    }
}
