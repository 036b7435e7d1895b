//! Levels domain: level and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::core::LevelEntity;
use crate::levels::{BlockDef, BlockKind, LevelDef};
use crate::movement::{ColliderTag, GameLayer, Ground, MovementTuning, Player, PlayerController};
use crate::sprites::Animator;

pub const LEVEL_PATH: &str = "assets/levels/level_1.ron";

pub(crate) fn load_level(mut commands: Commands) {
    let level = match LevelDef::load(Path::new(LEVEL_PATH)) {
        Ok(level) => {
            info!(
                "Loaded level '{}' with {} blocks",
                level.name,
                level.blocks.len()
            );
            level
        }
        Err(e) => {
            warn!("{}; using fallback level", e);
            LevelDef::default()
        }
    };
    commands.insert_resource(level);
}

pub(crate) fn spawn_level(mut commands: Commands, level: Res<LevelDef>) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let trap_layers = CollisionLayers::new(GameLayer::Trap, [GameLayer::Player]);

    for block in &level.blocks {
        match block.kind {
            BlockKind::Ground => {
                commands.spawn((
                    LevelEntity,
                    Ground,
                    ColliderTag::Ground,
                    block_sprite(block, Color::srgb(0.4, 0.5, 0.4)),
                    Transform::from_translation(block.center().extend(0.0)),
                    RigidBody::Static,
                    Collider::rectangle(block.size.0, block.size.1),
                    ground_layers,
                ));
            }
            BlockKind::Wall => {
                commands.spawn((
                    LevelEntity,
                    block_sprite(block, Color::srgb(0.3, 0.35, 0.3)),
                    Transform::from_translation(block.center().extend(0.0)),
                    RigidBody::Static,
                    Collider::rectangle(block.size.0, block.size.1),
                    wall_layers,
                ));
            }
            BlockKind::Trap => {
                commands.spawn((
                    LevelEntity,
                    ColliderTag::Trap,
                    block_sprite(block, Color::srgb(0.8, 0.2, 0.2)),
                    Transform::from_translation(block.center().extend(0.0)),
                    RigidBody::Static,
                    Collider::rectangle(block.size.0, block.size.1),
                    Sensor,
                    CollisionEventsEnabled,
                    trap_layers,
                ));
            }
        }
    }

    info!("Spawned level '{}'", level.name);
}

fn block_sprite(block: &BlockDef, color: Color) -> Sprite {
    Sprite {
        color,
        custom_size: Some(block.extents()),
        ..default()
    }
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<LevelDef>,
    tuning: Res<MovementTuning>,
) {
    let spawn = level.player_spawn_point();
    let size = level.player_extents();

    commands.spawn((
        // Identity & control
        (
            LevelEntity,
            Player,
            PlayerController::new(tuning.clone()),
            Animator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(spawn.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Trap],
            ),
        ),
    ));

    info!("Spawned player at ({}, {})", spawn.x, spawn.y);
}
