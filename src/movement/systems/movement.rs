//! Movement domain: per-frame controller driving and physics adapters.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{SoundCommand, SoundRequestWriter};
use crate::movement::systems::collisions::ShapeCastGroundProbe;
use crate::movement::{
    BodyMode, FacingSink, FrameInput, MovableBody, MovementInput, MovementOutcome, Player,
    PlayerController,
};
use crate::sprites::Animator;

/// [`MovableBody`] over avian's rigid body and velocity components.
///
/// `RigidBody` is immutable, so a mode switch re-inserts the component
/// through commands. Until those apply, `mode()` reports the pending mode.
pub(crate) struct PhysicsBody<'a> {
    mode: BodyMode,
    velocity: Mut<'a, LinearVelocity>,
    entity: EntityCommands<'a>,
}

impl<'a> PhysicsBody<'a> {
    pub(crate) fn new(
        body: &RigidBody,
        velocity: Mut<'a, LinearVelocity>,
        entity: EntityCommands<'a>,
    ) -> Self {
        let mode = match body {
            RigidBody::Static => BodyMode::Static,
            _ => BodyMode::Dynamic,
        };
        Self {
            mode,
            velocity,
            entity,
        }
    }
}

impl MovableBody for PhysicsBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn mode(&self) -> BodyMode {
        self.mode
    }

    fn set_mode(&mut self, mode: BodyMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;

        match mode {
            BodyMode::Static => {
                self.entity.insert(RigidBody::Static);
                // Static bodies report no velocity
                self.velocity.0 = Vec2::ZERO;
            }
            BodyMode::Dynamic => {
                self.entity.insert(RigidBody::Dynamic);
            }
        }
    }
}

impl FacingSink for Sprite {
    fn set_mirrored(&mut self, mirrored: bool) {
        self.flip_x = mirrored;
    }
}

pub(crate) fn apply_player_movement(
    mut commands: Commands,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    mut sound_writer: MessageWriter<SoundCommand>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &RigidBody,
            &mut LinearVelocity,
            &mut PlayerController,
        ),
        With<Player>,
    >,
) {
    let frame = FrameInput {
        horizontal: input.horizontal,
        jump_pressed: input.jump_pressed,
    };

    for (entity, transform, collider, body, velocity, mut controller) in &mut query {
        let probe =
            ShapeCastGroundProbe::new(&spatial_query, transform, collider, controller.tuning());

        let outcome = controller.step_movement(
            frame,
            &mut PhysicsBody::new(body, velocity, commands.entity(entity)),
            &probe,
            &mut SoundRequestWriter::new(&mut sound_writer),
        );

        if outcome == MovementOutcome::Jumped {
            debug!("Player {:?} jumped", entity);
        }
    }
}

pub(crate) fn select_player_animation(
    mut query: Query<
        (&PlayerController, &LinearVelocity, &mut Animator, &mut Sprite),
        With<Player>,
    >,
) {
    for (controller, velocity, mut animator, mut sprite) in &mut query {
        controller.step_animation(velocity.y, &mut *animator, &mut *sprite);
    }
}
