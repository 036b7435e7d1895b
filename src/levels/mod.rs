//! Levels domain: level layout loading and spawning.

mod data;
mod spawn;

#[cfg(test)]
mod tests;

pub use data::{BlockDef, BlockKind, LevelDef};

use bevy::prelude::*;

use crate::core::GameState;
use crate::levels::spawn::{load_level, spawn_level, spawn_player};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelDef>()
            .add_systems(Startup, load_level)
            .add_systems(
                OnEnter(GameState::Playing),
                (spawn_level, spawn_player).chain(),
            );
    }
}
