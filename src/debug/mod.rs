//! Debug overlay for tuning the player controller.
//!
//! Features:
//! - F3 toggles gizmos for the player bounds and the ground probe
//! - Logs move state transitions

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{
    GroundProbe, MOVE_STATE_PARAM, MoveState, Player, PlayerController, ShapeCastGroundProbe,
    collider_half_extents,
};
use crate::sprites::Animator;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether probe gizmos are drawn
    pub show_probes: bool,
    /// Last move state seen, for transition logging
    pub last_move_state: Option<MoveState>,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_probes, draw_ground_probe, log_move_state_changes)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn toggle_probes(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.show_probes = !state.show_probes;
        info!("Debug probes: {}", state.show_probes);
    }
}

fn draw_ground_probe(
    state: Res<DebugState>,
    spatial_query: SpatialQuery,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &Collider, &PlayerController), With<Player>>,
) {
    if !state.show_probes {
        return;
    }

    for (transform, collider, controller) in &query {
        let tuning = controller.tuning();
        let probe = ShapeCastGroundProbe::new(&spatial_query, transform, collider, tuning);
        let size = collider_half_extents(collider) * 2.0;
        let center = transform.translation.truncate();

        let probe_color = if probe.is_grounded() {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };

        gizmos.rect_2d(
            Isometry2d::from_translation(center),
            size,
            Color::srgb(0.9, 0.9, 0.2),
        );
        gizmos.rect_2d(
            Isometry2d::from_translation(center - Vec2::new(0.0, tuning.ground_cast_distance)),
            size,
            probe_color,
        );
    }
}

fn log_move_state_changes(mut state: ResMut<DebugState>, query: Query<&Animator, With<Player>>) {
    let Ok(animator) = query.single() else {
        state.last_move_state = None;
        return;
    };

    let current = animator
        .integer(MOVE_STATE_PARAM)
        .and_then(MoveState::from_param);
    if current != state.last_move_state {
        debug!("Move state {:?} -> {:?}", state.last_move_state, current);
        state.last_move_state = current;
    }
}
