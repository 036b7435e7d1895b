//! Movement domain: components and physics layers for the player.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Side walls; solid, but never counted as ground
    Wall,
    /// Player character
    Player,
    /// Hazards that kill the player on contact
    Trap,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Gameplay tag carried by a collider, inspected by trigger handlers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColliderTag {
    #[default]
    Untagged,
    Ground,
    Trap,
}

impl ColliderTag {
    pub fn is_trap(self) -> bool {
        self == ColliderTag::Trap
    }
}

/// Which way the player sprite faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sprites are drawn facing right; left-facing means mirrored on X.
    pub fn is_mirrored(self) -> bool {
        self == Facing::Left
    }
}

/// Animation classification for the current frame.
///
/// The discriminants are the values written to the animator's `moveState`
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoveState {
    #[default]
    Idle = 0,
    Running = 1,
    Jumping = 2,
    Falling = 3,
}

impl MoveState {
    pub fn as_param(self) -> i32 {
        self as i32
    }

    pub fn from_param(value: i32) -> Option<Self> {
        match value {
            0 => Some(MoveState::Idle),
            1 => Some(MoveState::Running),
            2 => Some(MoveState::Jumping),
            3 => Some(MoveState::Falling),
            _ => None,
        }
    }
}
