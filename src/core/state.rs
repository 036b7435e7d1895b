//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Config and data files are being read
    #[default]
    Loading,
    /// A level is live and the player can move
    Playing,
    /// Transient state between tearing a level down and spawning it again
    Restarting,
}
