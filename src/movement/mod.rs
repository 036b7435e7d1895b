//! Movement domain: player controller, grounded detection, and trap deaths.

mod components;
mod controller;
mod resources;
mod systems;


pub use components::{ColliderTag, Facing, GameLayer, Ground, MoveState, Player};
pub use controller::{
    AnimationSink, BodyMode, DEATH_SOUND, DEATH_TRIGGER, FacingSink, FrameInput, GameSession,
    GroundProbe, JUMP_SOUND, MOVE_STATE_PARAM, MovableBody, MovementOutcome, PlayerController,
    SoundRequests, THEME_SOUND, classify_by_input, classify_by_vertical,
};
pub use resources::{MovementInput, MovementTuning};
#[cfg(feature = "dev-tools")]
pub(crate) use systems::{ShapeCastGroundProbe, collider_half_extents};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_player_movement, detect_trap_contacts, read_input, select_player_animation,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(
                Update,
                (
                    read_input,
                    apply_player_movement,
                    select_player_animation,
                    detect_trap_contacts,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
