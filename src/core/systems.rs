//! Core domain: level flow systems and camera setup.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::LevelEntity;
use crate::core::events::GameOverEvent;
use crate::core::resources::{DisplaySettings, RestartCountdown, SessionSettings};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands, display: Res<DisplaySettings>) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: display.projection_scale(),
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Leave the loading state once startup has read every data file
pub(crate) fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// Arm the restart countdown on the first game over of a level
pub(crate) fn handle_game_over_requests(
    mut events: MessageReader<GameOverEvent>,
    settings: Res<SessionSettings>,
    mut countdown: ResMut<RestartCountdown>,
) {
    for _ in events.read() {
        if countdown.arm(settings.restart_delay_secs) {
            info!(
                "Game over, resetting level in {}s",
                settings.restart_delay_secs
            );
        } else {
            debug!("Game over already pending, ignoring repeat request");
        }
    }
}

pub(crate) fn tick_restart_countdown(
    time: Res<Time>,
    mut countdown: ResMut<RestartCountdown>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if countdown.tick(time.delta()) {
        next_state.set(GameState::Restarting);
    }
}

pub(crate) fn request_manual_restart(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        info!("Manual level restart requested");
        next_state.set(GameState::Restarting);
    }
}

/// Despawn everything that belongs to the running level
pub(crate) fn cleanup_level(
    mut commands: Commands,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut countdown: ResMut<RestartCountdown>,
) {
    let mut count = 0;
    for entity in &level_entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    countdown.clear();
    debug!("Cleaned up {} level entities", count);
}

pub(crate) fn resume_playing(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}
