//! Sprites module for player animation playback.
//!
//! This module handles:
//! - Named animation parameters and triggers set by gameplay code
//! - Clip selection from those parameters
//! - Frame progression into the sprite's texture atlas

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, update_animators);
    }
}
