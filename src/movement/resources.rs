//! Movement domain: tuning and input resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Author-time tunables for the player controller.
///
/// Loaded once from `assets/config/game.ron` and copied into every
/// [`PlayerController`](crate::movement::PlayerController) at spawn, so a
/// running actor never sees later changes.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Upward velocity applied on a grounded jump
    pub jump_force: f32,
    /// Multiplier from horizontal input to horizontal velocity
    pub move_speed: f32,
    /// How far below the collider the ground box cast reaches
    pub ground_cast_distance: f32,
    /// Vertical speed that must be exceeded before jumping/falling wins
    pub vertical_deadzone: f32,
    /// Layers the ground cast is allowed to hit
    pub ground_layers: Vec<GameLayer>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_force: 8.0,
            move_speed: 5.0,
            ground_cast_distance: 0.1,
            vertical_deadzone: 0.01,
            ground_layers: vec![GameLayer::Ground],
        }
    }
}

impl MovementTuning {
    /// Combined layer mask for the ground cast filter.
    pub fn ground_mask(&self) -> LayerMask {
        LayerMask(
            self.ground_layers
                .iter()
                .fold(0, |bits, layer| bits | layer.to_bits()),
        )
    }

    /// Replace out-of-range values with defaults, returning the names of the
    /// fields that were rejected.
    pub fn sanitize(&mut self) -> Vec<&'static str> {
        let defaults = Self::default();
        let mut rejected = Vec::new();

        let mut check = |value: &mut f32, default: f32, name: &'static str| {
            if !value.is_finite() || *value < 0.0 {
                *value = default;
                rejected.push(name);
            }
        };

        check(&mut self.jump_force, defaults.jump_force, "jump_force");
        check(&mut self.move_speed, defaults.move_speed, "move_speed");
        check(
            &mut self.ground_cast_distance,
            defaults.ground_cast_distance,
            "ground_cast_distance",
        );
        check(
            &mut self.vertical_deadzone,
            defaults.vertical_deadzone,
            "vertical_deadzone",
        );

        if self.ground_layers.is_empty() {
            self.ground_layers = defaults.ground_layers;
            rejected.push("ground_layers");
        }

        rejected
    }
}

/// Input snapshot for the current frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    /// Raw horizontal axis: -1, 0 or 1
    pub horizontal: f32,
    /// True only on the frame the jump button went down
    pub jump_pressed: bool,
}
