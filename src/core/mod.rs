//! Core domain: game manager, level flow states, and shared settings.

mod events;
mod resources;
mod state;
mod systems;


pub use events::GameOverEvent;
pub use resources::{DisplaySettings, RestartCountdown, SessionSettings};
pub use state::GameState;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::config::load_game_config;
use crate::core::systems::{
    cleanup_level, finish_loading, handle_game_over_requests, request_manual_restart,
    resume_playing, setup_camera, tick_restart_countdown,
};
use crate::movement::GameSession;

/// Marker for entities owned by the current level, despawned on reset
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// [`GameSession`] backed by the game-over message queue.
pub struct GameOverWriter<'a, 'w> {
    writer: &'a mut MessageWriter<'w, GameOverEvent>,
}

impl<'a, 'w> GameOverWriter<'a, 'w> {
    pub fn new(writer: &'a mut MessageWriter<'w, GameOverEvent>) -> Self {
        Self { writer }
    }
}

impl GameSession for GameOverWriter<'_, '_> {
    fn game_over(&mut self) {
        self.writer.write(GameOverEvent);
    }
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SessionSettings>()
            .init_resource::<DisplaySettings>()
            .init_resource::<RestartCountdown>()
            .add_message::<GameOverEvent>()
            .add_systems(Startup, setup_camera.after(load_game_config))
            .add_systems(Update, finish_loading.run_if(in_state(GameState::Loading)))
            .add_systems(
                Update,
                (
                    handle_game_over_requests,
                    tick_restart_countdown,
                    request_manual_restart,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(OnEnter(GameState::Restarting), resume_playing);
    }
}
