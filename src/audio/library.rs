//! Sound library loading.
//!
//! The library maps logical sound names (`PlayerJump`, `MainTheme`, ...) to
//! asset paths and playback settings. It is read from
//! `assets/audio/sounds.json`; a built-in table covers the sounds the player
//! controller relies on when the file is missing.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::config::{LoadError, load_json_file, parse_json};

/// Definition of a single named sound.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoundDef {
    pub name: String,
    /// Path to the audio file, relative to assets/.
    pub path: String,
    /// Looping sounds keep playing until stopped.
    #[serde(default)]
    pub looped: bool,
    /// Linear volume multiplier.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    1.0
}

/// Raw library JSON structure.
#[derive(Deserialize)]
struct SoundLibraryJson {
    sounds: Vec<SoundDef>,
}

/// Resource containing all known sounds, keyed by name.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    sounds: HashMap<String, SoundDef>,
}

impl SoundLibrary {
    pub fn from_defs(defs: impl IntoIterator<Item = SoundDef>) -> Self {
        Self {
            sounds: defs
                .into_iter()
                .map(|def| (def.name.clone(), def))
                .collect(),
        }
    }

    /// Sounds used by the player controller and level flow.
    pub fn builtin() -> Self {
        let def = |name: &str, path: &str, looped: bool, volume: f32| SoundDef {
            name: name.to_string(),
            path: path.to_string(),
            looped,
            volume,
        };
        Self::from_defs([
            def("MainTheme", "audio/main_theme.ogg", true, 0.5),
            def("PlayerJump", "audio/player_jump.ogg", false, 1.0),
            def("PlayerDeath", "audio/player_death.ogg", false, 1.0),
        ])
    }

    pub fn parse(file: &str, contents: &str) -> Result<Self, LoadError> {
        let raw: SoundLibraryJson = parse_json(file, contents)?;
        Ok(Self::from_defs(raw.sounds))
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw: SoundLibraryJson = load_json_file(path)?;
        Ok(Self::from_defs(raw.sounds))
    }

    pub fn get(&self, name: &str) -> Option<&SoundDef> {
        self.sounds.get(name)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
