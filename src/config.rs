//! Play-area configuration
//!
//! Static geometry the simulation derives everything else from. A config is
//! validated once when a game is built; after that the simulation treats it
//! as trustworthy and never re-checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    GAP_IN_PLAYER_HEIGHTS, PIPE_WIDTH, PLAY_HEIGHT, PLAY_WIDTH, PLAYER_RADIUS, PLAYER_SPAWN_RISE,
};

/// Why a [`GameConfig`] was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("play area must have positive finite dimensions, got {width}x{height}")]
    BadPlayArea { width: f32, height: f32 },
    #[error("player radius must be positive and finite, got {0}")]
    BadPlayerRadius(f32),
    #[error("pipe width must be positive and finite, got {0}")]
    BadPipeWidth(f32),
    /// The gap must fit inside the offset range, so part of each column
    /// stays on screen no matter which offset is drawn.
    #[error("gap of {gap} needs a play height above {}", .gap * 2.0)]
    GapTooTall { gap: f32 },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Play-area and body dimensions for one game.
///
/// Deserializes from JSON with per-field defaults, so a config file only
/// needs the fields it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play-area width in pixels.
    pub width: f32,
    /// Play-area height in pixels.
    pub height: f32,
    /// Radius of the player's circular body.
    pub player_radius: f32,
    /// Horizontal extent of each obstacle column.
    pub pipe_width: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            player_radius: PLAYER_RADIUS,
            pipe_width: PIPE_WIDTH,
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl GameConfig {
    /// Check every dimension the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::BadPlayArea {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.player_radius) {
            return Err(ConfigError::BadPlayerRadius(self.player_radius));
        }
        if !positive(self.pipe_width) {
            return Err(ConfigError::BadPipeWidth(self.pipe_width));
        }
        if self.gap_height() >= self.height / 2.0 {
            return Err(ConfigError::GapTooTall {
                gap: self.gap_height(),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Center of the play area.
    pub fn mid(&self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y())
    }

    pub fn player_height(&self) -> f32 {
        2.0 * self.player_radius
    }

    /// Vertical opening between the two columns of an obstacle unit.
    pub fn gap_height(&self) -> f32 {
        GAP_IN_PLAYER_HEIGHTS * self.player_height()
    }

    /// Where the player starts and respawns.
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.mid_x(), self.mid_y() + self.height * PLAYER_SPAWN_RISE)
    }

    /// Column length. One play height is enough to cover the screen past
    /// either gap edge at every legal offset.
    pub fn pipe_height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_play_area() {
        let config = GameConfig {
            width: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadPlayArea { .. })
        ));

        let config = GameConfig {
            height: -100.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadPlayArea { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_dimensions() {
        let config = GameConfig {
            height: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            player_radius: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadPlayerRadius(_))
        ));
    }

    #[test]
    fn test_rejects_gap_taller_than_offset_range() {
        // Gap is 8x the radius, so radius must stay under height/16.
        let config = GameConfig {
            height: 400.0,
            player_radius: 30.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooTall { .. })
        ));
    }

    #[test]
    fn test_derived_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.player_height(), 60.0);
        assert_eq!(config.gap_height(), 240.0);
        assert_eq!(config.mid(), Vec2::new(400.0, 600.0));
        assert_eq!(config.player_spawn(), Vec2::new(400.0, 1000.0));
    }

    #[test]
    fn test_json_round_trip() {
        let config = GameConfig {
            width: 900.0,
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        let back = GameConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"height": 1000.0}"#).unwrap();
        assert_eq!(config.height, 1000.0);
        assert_eq!(config.width, PLAY_WIDTH);
        assert_eq!(config.player_radius, PLAYER_RADIUS);
    }

    #[test]
    fn test_from_json_rejects_invalid_dimensions() {
        assert!(GameConfig::from_json(r#"{"width": -5.0}"#).is_err());
        assert!(GameConfig::from_json("not json").is_err());
    }
}
