//! Config domain: author-time tunables read from `assets/config/game.ron`.

mod loader;

pub use loader::{LoadError, load_json_file, load_ron_file, parse_json, parse_ron};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{DisplaySettings, SessionSettings};
use crate::movement::MovementTuning;

pub const GAME_CONFIG_PATH: &str = "assets/config/game.ron";

/// Top-level layout of the game config file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub movement: MovementTuning,
    pub session: SessionSettings,
    pub display: DisplaySettings,
}

impl GameConfig {
    /// Replace invalid values with defaults, logging what was rejected.
    pub fn sanitized(mut self) -> Self {
        for field in self.movement.sanitize() {
            warn!("Invalid movement.{} in game config, using default", field);
        }
        if !self.session.restart_delay_secs.is_finite() || self.session.restart_delay_secs < 0.0 {
            warn!("Invalid session.restart_delay_secs in game config, using default");
            self.session = SessionSettings::default();
        }
        if !self.display.pixels_per_unit.is_finite() || self.display.pixels_per_unit <= 0.0 {
            warn!("Invalid display.pixels_per_unit in game config, using default");
            self.display = DisplaySettings::default();
        }
        self
    }
}

/// Read the config file, falling back to defaults on any error.
pub fn load_game_config_from(path: &Path) -> GameConfig {
    match load_ron_file::<GameConfig>(path) {
        Ok(config) => {
            info!("Loaded game config from {}", path.display());
            config.sanitized()
        }
        Err(e) => {
            warn!("{}; using default game config", e);
            GameConfig::default()
        }
    }
}

pub(crate) fn load_game_config(mut commands: Commands) {
    let config = load_game_config_from(Path::new(GAME_CONFIG_PATH));
    debug!(
        "Movement tuning: jump_force={}, move_speed={}, ground_cast_distance={}",
        config.movement.jump_force, config.movement.move_speed, config.movement.ground_cast_distance
    );
    commands.insert_resource(config.movement);
    commands.insert_resource(config.session);
    commands.insert_resource(config.display);
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_game_config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::GameLayer;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GameConfig =
            parse_ron("game.ron", "(movement: (jump_force: 10.0))").expect("valid ron");
        assert_eq!(config.movement.jump_force, 10.0);
        assert_eq!(config.movement.move_speed, 5.0);
        assert_eq!(config.movement.ground_layers, vec![GameLayer::Ground]);
        assert_eq!(config.session.restart_delay_secs, 1.0);
    }

    #[test]
    fn test_full_config_parses() {
        let source = r#"(
            movement: (
                jump_force: 9.0,
                move_speed: 4.0,
                ground_cast_distance: 0.2,
                vertical_deadzone: 0.05,
                ground_layers: [Ground, Trap],
            ),
            session: (restart_delay_secs: 2.5),
            display: (pixels_per_unit: 16.0),
        )"#;
        let config: GameConfig = parse_ron("game.ron", source).expect("valid ron");
        assert_eq!(config.movement.move_speed, 4.0);
        assert_eq!(
            config.movement.ground_layers,
            vec![GameLayer::Ground, GameLayer::Trap]
        );
        assert_eq!(config.session.restart_delay_secs, 2.5);
        assert_eq!(config.display.pixels_per_unit, 16.0);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_ron::<GameConfig>("bad.ron", "(movement: ").unwrap_err();
        assert_eq!(err.file, "bad.ron");
        assert!(err.to_string().starts_with("Failed to load bad.ron"));
    }

    #[test]
    fn test_sanitize_rejects_negative_values() {
        let mut config = GameConfig::default();
        config.movement.move_speed = -3.0;
        config.movement.ground_layers.clear();
        config.display.pixels_per_unit = 0.0;

        let config = config.sanitized();
        assert_eq!(config.movement.move_speed, 5.0);
        assert_eq!(config.movement.ground_layers, vec![GameLayer::Ground]);
        assert_eq!(config.display.pixels_per_unit, 32.0);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_game_config_from(Path::new("does/not/exist.ron"));
        assert_eq!(config, GameConfig::default());
    }
}
