//! Movement domain: ground probing and trap contact systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{SoundCommand, SoundRequestWriter};
use crate::core::{GameOverEvent, GameOverWriter};
use crate::movement::systems::movement::PhysicsBody;
use crate::movement::{ColliderTag, GroundProbe, MovementTuning, Player, PlayerController};
use crate::sprites::Animator;

/// Half extents of a collider's bounds, with a fallback for non-box shapes.
pub(crate) fn collider_half_extents(collider: &Collider) -> Vec2 {
    match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(0.4, 0.5),
    }
}

/// [`GroundProbe`] that box-casts the collider bounds straight down.
pub(crate) struct ShapeCastGroundProbe<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    shape: Collider,
    origin: Vec2,
    distance: f32,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> ShapeCastGroundProbe<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        transform: &Transform,
        collider: &Collider,
        tuning: &MovementTuning,
    ) -> Self {
        let half_extents = collider_half_extents(collider);
        Self {
            spatial_query,
            shape: Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0),
            origin: transform.translation.truncate(),
            distance: tuning.ground_cast_distance,
            filter: SpatialQueryFilter::from_mask(tuning.ground_mask()),
        }
    }
}

impl GroundProbe for ShapeCastGroundProbe<'_, '_, '_> {
    fn is_grounded(&self) -> bool {
        self.spatial_query
            .cast_shape(
                &self.shape,
                self.origin,
                0.0,
                Dir2::NEG_Y,
                &ShapeCastConfig::from_max_distance(self.distance),
                &self.filter,
            )
            .is_some()
    }
}

/// Forward trigger overlaps involving the player to its controller
pub(crate) fn detect_trap_contacts(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    tags: Query<&ColliderTag>,
    mut players: Query<
        (
            &mut PlayerController,
            &mut Animator,
            &RigidBody,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut sound_writer: MessageWriter<SoundCommand>,
    mut game_over_writer: MessageWriter<GameOverEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other_entity) in pairs {
            let Ok((mut controller, mut animator, body, velocity)) =
                players.get_mut(player_entity)
            else {
                continue;
            };

            let tag = tags.get(other_entity).copied().unwrap_or_default();
            let died = controller.on_trigger_enter(
                tag,
                &mut *animator,
                &mut PhysicsBody::new(body, velocity, commands.entity(player_entity)),
                &mut SoundRequestWriter::new(&mut sound_writer),
                &mut GameOverWriter::new(&mut game_over_writer),
            );

            if died {
                info!("Player {:?} killed by {:?}", player_entity, other_entity);
            }
        }
    }
}
