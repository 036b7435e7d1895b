//! Audio domain: tests for the sound library and request adapter.

use bevy::ecs::message::{MessageWriter, Messages};
use bevy::prelude::*;

use super::systems::process_sound_commands;
use super::{NamedSound, SoundCommand, SoundDef, SoundLibrary, SoundRequestWriter};
use crate::movement::{DEATH_SOUND, JUMP_SOUND, SoundRequests, THEME_SOUND};

#[test]
fn test_builtin_library_covers_controller_sounds() {
    let library = SoundLibrary::builtin();
    for name in [THEME_SOUND, JUMP_SOUND, DEATH_SOUND] {
        assert!(library.get(name).is_some(), "missing {}", name);
    }
    assert!(library.get(THEME_SOUND).is_some_and(|def| def.looped));
    assert!(library.get(JUMP_SOUND).is_some_and(|def| !def.looped));
}

#[test]
fn test_parse_library_json() {
    let json = r#"{
        "sounds": [
            { "name": "MainTheme", "path": "audio/theme.ogg", "looped": true, "volume": 0.3 },
            { "name": "PlayerJump", "path": "audio/jump.wav" }
        ]
    }"#;
    let library = SoundLibrary::parse("sounds.json", json).expect("valid json");
    assert_eq!(library.len(), 2);
    assert_eq!(
        library.get("PlayerJump"),
        Some(&SoundDef {
            name: "PlayerJump".to_string(),
            path: "audio/jump.wav".to_string(),
            looped: false,
            volume: 1.0,
        })
    );
    assert_eq!(library.get("MainTheme").map(|def| def.volume), Some(0.3));
    assert!(library.get("Unknown").is_none());
}

#[test]
fn test_parse_library_rejects_missing_path() {
    let json = r#"{ "sounds": [ { "name": "PlayerJump" } ] }"#;
    let err = SoundLibrary::parse("sounds.json", json).unwrap_err();
    assert_eq!(err.file, "sounds.json");
}

fn request_death_sounds(mut writer: MessageWriter<SoundCommand>) {
    let mut sounds = SoundRequestWriter::new(&mut writer);
    sounds.play_sound(DEATH_SOUND);
    sounds.stop_sound(THEME_SOUND);
}

#[test]
fn test_request_writer_emits_commands_in_order() {
    let mut app = App::new();
    app.add_message::<SoundCommand>()
        .add_systems(Update, request_death_sounds);
    app.update();

    let written: Vec<SoundCommand> = app
        .world_mut()
        .resource_mut::<Messages<SoundCommand>>()
        .drain()
        .collect();
    assert_eq!(
        written,
        vec![SoundCommand::play(DEATH_SOUND), SoundCommand::stop(THEME_SOUND)]
    );
}

fn audio_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()))
        .init_asset::<AudioSource>()
        .insert_resource(SoundLibrary::builtin())
        .add_message::<SoundCommand>()
        .add_systems(Update, process_sound_commands);
    app
}

fn send(app: &mut App, requests: impl IntoIterator<Item = SoundCommand>) {
    for request in requests {
        app.world_mut().write_message(request);
    }
    app.update();
}

fn playing(app: &mut App) -> Vec<String> {
    let mut names: Vec<String> = app
        .world_mut()
        .query::<&NamedSound>()
        .iter(app.world())
        .map(|sound| sound.0.clone())
        .collect();
    names.sort();
    names
}

#[test]
fn test_looping_sound_plays_once() {
    let mut app = audio_app();
    send(
        &mut app,
        [SoundCommand::play(THEME_SOUND), SoundCommand::play(THEME_SOUND)],
    );
    send(&mut app, [SoundCommand::play(THEME_SOUND)]);

    assert_eq!(playing(&mut app), vec![THEME_SOUND.to_string()]);
}

#[test]
fn test_one_shot_sounds_stack() {
    let mut app = audio_app();
    send(
        &mut app,
        [SoundCommand::play(JUMP_SOUND), SoundCommand::play(JUMP_SOUND)],
    );

    assert_eq!(playing(&mut app).len(), 2);
}

#[test]
fn test_stop_only_removes_matching_sounds() {
    let mut app = audio_app();
    send(
        &mut app,
        [SoundCommand::play(THEME_SOUND), SoundCommand::play(JUMP_SOUND)],
    );
    send(&mut app, [SoundCommand::stop(THEME_SOUND)]);

    assert_eq!(playing(&mut app), vec![JUMP_SOUND.to_string()]);

    // Stopping something that is not playing does nothing
    send(&mut app, [SoundCommand::stop(THEME_SOUND)]);
    assert_eq!(playing(&mut app), vec![JUMP_SOUND.to_string()]);
}

#[test]
fn test_stop_in_same_batch_cancels_play() {
    let mut app = audio_app();
    send(
        &mut app,
        [
            SoundCommand::play(THEME_SOUND),
            SoundCommand::stop(THEME_SOUND),
            SoundCommand::play(DEATH_SOUND),
        ],
    );

    assert_eq!(playing(&mut app), vec![DEATH_SOUND.to_string()]);
}

#[test]
fn test_unknown_sound_spawns_nothing() {
    let mut app = audio_app();
    send(&mut app, [SoundCommand::play("NotASound")]);

    assert!(playing(&mut app).is_empty());
}
