//! Audio domain: systems that turn sound requests into audio entities.

use bevy::audio::Volume;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::path::Path;

use crate::audio::{SoundCommand, SoundLibrary};
use crate::movement::THEME_SOUND;

pub const SOUND_LIBRARY_PATH: &str = "assets/audio/sounds.json";

/// Name of the sound an audio entity is playing
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct NamedSound(pub String);

pub(crate) fn load_sound_library(mut library: ResMut<SoundLibrary>) {
    *library = match SoundLibrary::load(Path::new(SOUND_LIBRARY_PATH)) {
        Ok(loaded) if loaded.is_empty() => {
            warn!("{} defines no sounds; using built-in sound library", SOUND_LIBRARY_PATH);
            SoundLibrary::builtin()
        }
        Ok(loaded) => {
            info!("Loaded {} sounds from {}", loaded.len(), SOUND_LIBRARY_PATH);
            loaded
        }
        Err(e) => {
            warn!("{}; using built-in sound library", e);
            SoundLibrary::builtin()
        }
    };
}

pub(crate) fn start_main_theme(mut sounds: MessageWriter<SoundCommand>) {
    sounds.write(SoundCommand::play(THEME_SOUND));
}

pub(crate) fn process_sound_commands(
    mut commands: Commands,
    mut requests: MessageReader<SoundCommand>,
    library: Res<SoundLibrary>,
    asset_server: Res<AssetServer>,
    playing: Query<(Entity, &NamedSound)>,
) {
    // Entities spawned in this batch are not visible to `playing` yet
    let mut spawned: Vec<(Entity, String)> = Vec::new();
    let mut despawned: Vec<Entity> = Vec::new();

    for request in requests.read() {
        match request {
            SoundCommand::Play { name } => {
                let Some(def) = library.get(name) else {
                    warn!("Unknown sound '{}'", name);
                    continue;
                };

                if def.looped {
                    let already_playing = playing
                        .iter()
                        .any(|(entity, sound)| sound.0 == *name && !despawned.contains(&entity))
                        || spawned.iter().any(|(_, spawned_name)| spawned_name == name);
                    if already_playing {
                        continue;
                    }
                }

                let mode = if def.looped {
                    PlaybackSettings::LOOP
                } else {
                    PlaybackSettings::DESPAWN
                };
                let settings = mode.with_volume(Volume::Linear(def.volume));

                let entity = commands
                    .spawn((
                        NamedSound(name.clone()),
                        AudioPlayer::new(asset_server.load(def.path.clone())),
                        settings,
                    ))
                    .id();
                spawned.push((entity, name.clone()));
                debug!("Playing sound '{}'", name);
            }
            SoundCommand::Stop { name } => {
                for (entity, sound) in &playing {
                    if sound.0 == *name && !despawned.contains(&entity) {
                        commands.entity(entity).despawn();
                        despawned.push(entity);
                    }
                }
                spawned.retain(|(entity, spawned_name)| {
                    if spawned_name == name {
                        commands.entity(*entity).despawn();
                        false
                    } else {
                        true
                    }
                });
                debug!("Stopped sound '{}'", name);
            }
        }
    }
}
