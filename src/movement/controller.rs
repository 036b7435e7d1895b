//! Movement domain: engine-agnostic player controller.
//!
//! The controller never touches ECS types directly. Every collaborator is a
//! small capability trait, implemented by the bevy adapters in
//! [`super::systems`] and by recording doubles in the tests.

use bevy::prelude::*;

use crate::movement::{ColliderTag, Facing, MoveState, MovementTuning};

/// Integer animator parameter carrying [`MoveState`].
pub const MOVE_STATE_PARAM: &str = "moveState";
/// Animator trigger fired once on death.
pub const DEATH_TRIGGER: &str = "Death";

pub const JUMP_SOUND: &str = "PlayerJump";
pub const DEATH_SOUND: &str = "PlayerDeath";
pub const THEME_SOUND: &str = "MainTheme";

/// Simulation mode of the physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    #[default]
    Dynamic,
    Static,
}

/// A physics body whose velocity and mode the controller may drive.
pub trait MovableBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn mode(&self) -> BodyMode;
    fn set_mode(&mut self, mode: BodyMode);
}

/// Answers whether the body is standing on ground right now.
pub trait GroundProbe {
    fn is_grounded(&self) -> bool;
}

/// Parameter surface of an animation graph.
pub trait AnimationSink {
    fn set_integer(&mut self, name: &str, value: i32);
    fn set_trigger(&mut self, name: &str);
}

/// Anything that can mirror the rendered sprite on X.
pub trait FacingSink {
    fn set_mirrored(&mut self, mirrored: bool);
}

/// Fire-and-forget sound requests.
pub trait SoundRequests {
    fn play_sound(&mut self, name: &str);
    fn stop_sound(&mut self, name: &str);
}

/// Run-level control owned by the game manager.
pub trait GameSession {
    fn game_over(&mut self);
}

/// Input snapshot for one controller step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub horizontal: f32,
    pub jump_pressed: bool,
}

/// What the movement step did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementOutcome {
    /// Body is static; nothing was written
    Frozen,
    Moved,
    Jumped,
}

/// Classify from horizontal input alone.
///
/// Returns the facing to apply, if any. Zero (and NaN) input keeps the
/// previous facing.
pub fn classify_by_input(horizontal: f32) -> (MoveState, Option<Facing>) {
    match horizontal {
        x if x > 0.0 => (MoveState::Running, Some(Facing::Right)),
        x if x < 0.0 => (MoveState::Running, Some(Facing::Left)),
        _ => (MoveState::Idle, None),
    }
}

/// Let vertical motion override the input classification.
///
/// The deadzone is exclusive: a speed of exactly `deadzone` does not count.
pub fn classify_by_vertical(state: MoveState, vertical_velocity: f32, deadzone: f32) -> MoveState {
    if vertical_velocity > deadzone {
        MoveState::Jumping
    } else if vertical_velocity < -deadzone {
        MoveState::Falling
    } else {
        state
    }
}

/// Per-actor controller state.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    tuning: MovementTuning,
    horizontal_input: f32,
    has_died: bool,
}

impl PlayerController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            horizontal_input: 0.0,
            has_died: false,
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Last horizontal input accepted while the body was dynamic.
    pub fn horizontal_input(&self) -> f32 {
        self.horizontal_input
    }

    pub fn has_died(&self) -> bool {
        self.has_died
    }

    pub fn step_movement(
        &mut self,
        input: FrameInput,
        body: &mut impl MovableBody,
        ground: &impl GroundProbe,
        sounds: &mut impl SoundRequests,
    ) -> MovementOutcome {
        if body.mode() == BodyMode::Static {
            return MovementOutcome::Frozen;
        }

        self.horizontal_input = input.horizontal;
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(
            self.horizontal_input * self.tuning.move_speed,
            velocity.y,
        ));

        // Grounded is only probed when a jump was actually requested
        if input.jump_pressed && ground.is_grounded() {
            let velocity = body.velocity();
            body.set_velocity(Vec2::new(velocity.x, self.tuning.jump_force));
            sounds.play_sound(JUMP_SOUND);
            return MovementOutcome::Jumped;
        }

        MovementOutcome::Moved
    }

    /// Classify the frame and write it to the animator.
    ///
    /// Runs after [`Self::step_movement`], so `vertical_velocity` already
    /// includes this frame's jump.
    pub fn step_animation(
        &self,
        vertical_velocity: f32,
        animator: &mut impl AnimationSink,
        facing: &mut impl FacingSink,
    ) -> MoveState {
        let (by_input, new_facing) = classify_by_input(self.horizontal_input);
        if let Some(new_facing) = new_facing {
            facing.set_mirrored(new_facing.is_mirrored());
        }

        let state =
            classify_by_vertical(by_input, vertical_velocity, self.tuning.vertical_deadzone);
        animator.set_integer(MOVE_STATE_PARAM, state.as_param());
        state
    }

    /// Handle the start of a trigger overlap with a collider tagged `other`.
    ///
    /// Returns true when this overlap killed the player. Later overlaps in
    /// the same life are ignored.
    pub fn on_trigger_enter(
        &mut self,
        other: ColliderTag,
        animator: &mut impl AnimationSink,
        body: &mut impl MovableBody,
        sounds: &mut impl SoundRequests,
        session: &mut impl GameSession,
    ) -> bool {
        if !other.is_trap() || self.has_died {
            return false;
        }
        self.has_died = true;

        animator.set_trigger(DEATH_TRIGGER);
        sounds.play_sound(DEATH_SOUND);
        sounds.stop_sound(THEME_SOUND);
        body.set_mode(BodyMode::Static);
        session.game_over();

        info!("Player hit a trap");
        true
    }
}
