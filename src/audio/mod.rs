//! Audio domain: the audio manager that plays and stops named sounds.

mod events;
mod library;
mod systems;

#[cfg(test)]
mod tests;

pub use events::SoundCommand;
pub use library::{SoundDef, SoundLibrary};
pub use systems::NamedSound;

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::systems::{load_sound_library, process_sound_commands, start_main_theme};
use crate::core::GameState;
use crate::movement::SoundRequests;

/// [`SoundRequests`] backed by the sound command queue.
pub struct SoundRequestWriter<'a, 'w> {
    writer: &'a mut MessageWriter<'w, SoundCommand>,
}

impl<'a, 'w> SoundRequestWriter<'a, 'w> {
    pub fn new(writer: &'a mut MessageWriter<'w, SoundCommand>) -> Self {
        Self { writer }
    }
}

impl SoundRequests for SoundRequestWriter<'_, '_> {
    fn play_sound(&mut self, name: &str) {
        self.writer.write(SoundCommand::play(name));
    }

    fn stop_sound(&mut self, name: &str) {
        self.writer.write(SoundCommand::stop(name));
    }
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_message::<SoundCommand>()
            .add_systems(Startup, load_sound_library)
            .add_systems(OnEnter(GameState::Playing), start_main_theme)
            .add_systems(Update, process_sound_commands);
    }
}
