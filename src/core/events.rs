//! Core domain: events for the level flow.

use bevy::ecs::message::Message;

/// Event fired when the run ends and the level should be reset
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOverEvent;

impl Message for GameOverEvent {}
