mod audio;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod levels;
mod movement;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Pixel Adventure".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            config::ConfigPlugin,
            core::CorePlugin,
            audio::SoundPlugin,
            sprites::SpritesPlugin,
            levels::LevelsPlugin,
            movement::MovementPlugin,
        ))
        .add_plugins(dev_plugins)
        .run();
}

#[cfg(feature = "dev-tools")]
fn dev_plugins(app: &mut App) {
    app.add_plugins(debug::DebugPlugin);
}

#[cfg(not(feature = "dev-tools"))]
fn dev_plugins(_app: &mut App) {}
