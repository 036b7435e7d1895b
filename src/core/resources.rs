//! Core domain: session settings and restart bookkeeping.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the game manager reacts to a game over.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Seconds between a game over and the level reset
    pub restart_delay_secs: f32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            restart_delay_secs: 1.0,
        }
    }
}

/// Camera and presentation settings.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Screen pixels per world unit
    pub pixels_per_unit: f32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            pixels_per_unit: 32.0,
        }
    }
}

impl DisplaySettings {
    /// Orthographic projection scale that maps one world unit to
    /// `pixels_per_unit` pixels.
    pub fn projection_scale(&self) -> f32 {
        if self.pixels_per_unit > 0.0 {
            1.0 / self.pixels_per_unit
        } else {
            1.0
        }
    }
}

/// Pending level reset after a game over.
///
/// Only one countdown runs at a time; game-over requests that arrive while
/// it is armed are dropped.
#[derive(Resource, Debug, Default)]
pub struct RestartCountdown {
    timer: Option<Timer>,
}

impl RestartCountdown {
    /// Arm the countdown. Returns false if it was already running.
    pub fn arm(&mut self, delay_secs: f32) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(Timer::from_seconds(delay_secs.max(0.0), TimerMode::Once));
        true
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Advance the countdown, returning true on the tick it expires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        timer.tick(delta);
        timer.just_finished()
    }

    pub fn clear(&mut self) {
        self.timer = None;
    }
}
