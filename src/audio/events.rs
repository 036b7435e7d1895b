//! Audio domain: sound request messages.

use bevy::ecs::message::Message;

/// Request sent to the audio manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundCommand {
    Play { name: String },
    Stop { name: String },
}

impl SoundCommand {
    pub fn play(name: impl Into<String>) -> Self {
        SoundCommand::Play { name: name.into() }
    }

    pub fn stop(name: impl Into<String>) -> Self {
        SoundCommand::Stop { name: name.into() }
    }
}

impl Message for SoundCommand {}
