//! Animation parameters and clip playback.
//!
//! The [`Animator`] exposes a small parameter surface (named integers and
//! one-shot triggers) and resolves the clip to play from it each frame.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::movement::{AnimationSink, DEATH_TRIGGER, MOVE_STATE_PARAM, MoveState};

/// Clips available to the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Death,
}

/// Playback data for one clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipDef {
    /// Atlas index of the clip's first frame.
    pub first_index: usize,
    pub frames: usize,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationClip {
    pub fn def(self) -> ClipDef {
        match self {
            AnimationClip::Idle => ClipDef {
                first_index: 0,
                frames: 11,
                frame_duration: 0.05,
                looping: true,
            },
            AnimationClip::Run => ClipDef {
                first_index: 11,
                frames: 12,
                frame_duration: 0.05,
                looping: true,
            },
            AnimationClip::Jump => ClipDef {
                first_index: 23,
                frames: 1,
                frame_duration: 0.1,
                looping: true,
            },
            AnimationClip::Fall => ClipDef {
                first_index: 24,
                frames: 1,
                frame_duration: 0.1,
                looping: true,
            },
            AnimationClip::Death => ClipDef {
                first_index: 25,
                frames: 7,
                frame_duration: 0.08,
                looping: false,
            },
        }
    }

    pub fn for_move_state(state: MoveState) -> Self {
        match state {
            MoveState::Idle => AnimationClip::Idle,
            MoveState::Running => AnimationClip::Run,
            MoveState::Jumping => AnimationClip::Jump,
            MoveState::Falling => AnimationClip::Fall,
        }
    }
}

/// Component for parameter-driven animation playback.
#[derive(Component, Debug, Default)]
pub struct Animator {
    integers: HashMap<String, i32>,
    triggers: HashSet<String>,
    clip: AnimationClip,
    current_frame: usize,
    frame_timer: f32,
    finished: bool,
}

impl Animator {
    pub fn integer(&self, name: &str) -> Option<i32> {
        self.integers.get(name).copied()
    }

    pub fn is_trigger_pending(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    pub fn clip(&self) -> AnimationClip {
        self.clip
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Atlas index of the frame currently shown.
    pub fn atlas_index(&self) -> usize {
        self.clip.def().first_index + self.current_frame
    }

    /// Consume pending triggers and pick the clip for this frame.
    ///
    /// Death is terminal: once entered no parameter leaves it.
    pub fn resolve_clip(&mut self) {
        let next = if self.clip == AnimationClip::Death || self.triggers.remove(DEATH_TRIGGER) {
            AnimationClip::Death
        } else {
            self.integer(MOVE_STATE_PARAM)
                .and_then(MoveState::from_param)
                .map(AnimationClip::for_move_state)
                .unwrap_or_default()
        };
        self.triggers.clear();
        self.play(next);
    }

    /// Switch clip, restarting playback if it changed.
    pub fn play(&mut self, clip: AnimationClip) {
        if self.clip != clip {
            self.clip = clip;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
        }
    }

    /// Advance playback by `delta` seconds. Returns true if the frame changed.
    pub fn advance(&mut self, delta: f32) -> bool {
        if self.finished {
            return false;
        }

        let def = self.clip.def();
        let previous = self.current_frame;
        self.frame_timer += delta;

        while self.frame_timer >= def.frame_duration && !self.finished {
            self.frame_timer -= def.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= def.frames {
                if def.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = def.frames - 1;
                    self.finished = true;
                }
            }
        }

        self.current_frame != previous
    }
}

impl AnimationSink for Animator {
    fn set_integer(&mut self, name: &str, value: i32) {
        self.integers.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_string());
    }
}

/// System that resolves clips and advances frames, pushing the frame into the
/// sprite's atlas when it has one.
pub fn update_animators(time: Res<Time>, mut query: Query<(&mut Animator, &mut Sprite)>) {
    for (mut animator, mut sprite) in &mut query {
        let previous_clip = animator.clip();
        animator.resolve_clip();
        if animator.clip() != previous_clip {
            debug!("Animation clip {:?} -> {:?}", previous_clip, animator.clip());
        }
        animator.advance(time.delta_secs());

        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = animator.atlas_index();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_state_param_selects_clip() {
        let mut animator = Animator::default();
        animator.set_integer(MOVE_STATE_PARAM, MoveState::Running.as_param());
        animator.resolve_clip();
        assert_eq!(animator.clip(), AnimationClip::Run);

        animator.set_integer(MOVE_STATE_PARAM, MoveState::Falling.as_param());
        animator.resolve_clip();
        assert_eq!(animator.clip(), AnimationClip::Fall);
    }

    #[test]
    fn test_unknown_param_falls_back_to_idle() {
        let mut animator = Animator::default();
        animator.set_integer(MOVE_STATE_PARAM, 42);
        animator.resolve_clip();
        assert_eq!(animator.clip(), AnimationClip::Idle);
    }

    #[test]
    fn test_death_trigger_is_terminal() {
        let mut animator = Animator::default();
        animator.set_trigger(DEATH_TRIGGER);
        animator.resolve_clip();
        assert_eq!(animator.clip(), AnimationClip::Death);
        assert!(!animator.is_trigger_pending(DEATH_TRIGGER));

        animator.set_integer(MOVE_STATE_PARAM, MoveState::Running.as_param());
        animator.resolve_clip();
        assert_eq!(animator.clip(), AnimationClip::Death);
    }

    #[test]
    fn test_looping_clip_wraps() {
        let mut animator = Animator::default();
        animator.play(AnimationClip::Run);
        let def = AnimationClip::Run.def();

        for _ in 0..def.frames {
            animator.advance(def.frame_duration);
        }
        assert_eq!(animator.current_frame(), 0);
        assert!(!animator.is_finished());
    }

    #[test]
    fn test_death_clip_holds_last_frame() {
        let mut animator = Animator::default();
        animator.play(AnimationClip::Death);
        let def = AnimationClip::Death.def();

        animator.advance(def.frame_duration * (def.frames as f32 + 3.0));
        assert!(animator.is_finished());
        assert_eq!(animator.current_frame(), def.frames - 1);
        assert_eq!(animator.atlas_index(), def.first_index + def.frames - 1);
        assert!(!animator.advance(1.0));
    }

    #[test]
    fn test_clip_change_restarts_playback() {
        let mut animator = Animator::default();
        animator.play(AnimationClip::Run);
        animator.advance(AnimationClip::Run.def().frame_duration * 3.0);
        assert!(animator.current_frame() > 0);

        animator.play(AnimationClip::Idle);
        assert_eq!(animator.current_frame(), 0);
        assert_eq!(animator.atlas_index(), AnimationClip::Idle.def().first_index);
    }
}
