//! Tunable game constants, loaded from `~/.flappy/config.json`.
//!
//! Every field falls back to the value in `core::constants`, so a config file
//! only needs the keys a player wants to change:
//!
//! ```json
//! { "gravity": 0.4, "initial_pipe_gap": 320 }
//! ```

use crate::core::constants::*;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Reasons a config is refused. Any of these would let the simulation build
/// degenerate geometry, so the loader falls back to defaults instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must be a whole number of units (got {value})")]
    NotWholeUnits { field: &'static str, value: f64 },
    #[error("ground height {ground} must be less than screen height {screen}")]
    GroundTooTall { ground: f64, screen: f64 },
    #[error("pipe gap {gap} leaves no room for two {margin}-unit spans in a {screen}-unit screen")]
    GapTooLarge { gap: u32, margin: u32, screen: f64 },
    #[error("{field} floor {floor} is above its initial value {initial}")]
    FloorAboveInitial {
        field: &'static str,
        floor: u32,
        initial: u32,
    },
    #[error("jump impulse must point upward (negative), got {0}")]
    JumpNotUpward(f64),
    #[error("gravity must not be negative, got {0}")]
    NegativeGravity(f64),
}

/// The constants surface of the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    pub ground_height: f64,
    pub gravity: f64,
    pub jump_impulse: f64,
    pub avatar_x: f64,
    pub avatar_width: f64,
    pub avatar_height: f64,
    pub pipe_width: f64,
    pub pipe_speed: f64,
    pub pipe_margin: u32,
    pub initial_pipe_gap: u32,
    pub initial_pipe_distance: u32,
    pub min_pipe_gap: u32,
    pub min_pipe_distance: u32,
    pub difficulty_interval_ms: u64,
    pub difficulty_step: u32,
    pub top_n: usize,
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,
            pipe_margin: PIPE_MARGIN,
            initial_pipe_gap: INITIAL_PIPE_GAP,
            initial_pipe_distance: INITIAL_PIPE_DISTANCE,
            min_pipe_gap: MIN_PIPE_GAP,
            min_pipe_distance: MIN_PIPE_DISTANCE,
            difficulty_interval_ms: DIFFICULTY_INCREASE_INTERVAL_MS,
            difficulty_step: DIFFICULTY_INCREASE_AMOUNT,
            top_n: TOP_N_SCORES,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Load `~/.flappy/config.json`, falling back to defaults when the file is
    /// missing, unreadable or describes an unplayable game.
    pub fn load() -> Self {
        match persistence::data_path(CONFIG_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("No config directory ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load a config file at `path`. A missing file is created with the
    /// defaults so players have something to edit.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            if let Err(e) = persistence::save_json(path, &Self::default()) {
                log::warn!("Could not write default {}: {}", path.display(), e);
            }
            return Self::default();
        }

        let config: Self = persistence::load_json_or_default(path);
        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Largest gap an obstacle can be built with.
    pub fn max_pipe_gap(&self) -> u32 {
        let usable = self.screen_height - 2.0 * self.pipe_margin as f64;
        if usable <= 0.0 {
            0
        } else {
            usable as u32
        }
    }

    /// Y coordinate of the top of the ground band.
    pub fn ground_top(&self) -> f64 {
        self.screen_height - self.ground_height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats: [(&'static str, f64); 10] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("avatar_x", self.avatar_x),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("pipe_width", self.pipe_width),
            ("pipe_speed", self.pipe_speed),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        // Pipe spans are whole units and must add up to the screen height
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ] {
            if value.fract() != 0.0 || value > u32::MAX as f64 {
                return Err(ConfigError::NotWholeUnits { field, value });
            }
        }

        let positive: [(&'static str, f64); 10] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_height", self.ground_height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("pipe_width", self.pipe_width),
            ("pipe_speed", self.pipe_speed),
            ("difficulty_interval_ms", self.difficulty_interval_ms as f64),
            ("difficulty_step", self.difficulty_step as f64),
            ("top_n", self.top_n as f64),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::NotPositive {
                field: "tick_rate_hz",
                value: 0.0,
            });
        }
        if self.ground_height >= self.screen_height {
            return Err(ConfigError::GroundTooTall {
                ground: self.ground_height,
                screen: self.screen_height,
            });
        }
        if self.initial_pipe_gap > self.max_pipe_gap() {
            return Err(ConfigError::GapTooLarge {
                gap: self.initial_pipe_gap,
                margin: self.pipe_margin,
                screen: self.screen_height,
            });
        }
        if self.min_pipe_gap > self.initial_pipe_gap {
            return Err(ConfigError::FloorAboveInitial {
                field: "pipe_gap",
                floor: self.min_pipe_gap,
                initial: self.initial_pipe_gap,
            });
        }
        if self.min_pipe_distance > self.initial_pipe_distance {
            return Err(ConfigError::FloorAboveInitial {
                field: "pipe_distance",
                floor: self.min_pipe_distance,
                initial: self.initial_pipe_distance,
            });
        }
        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::JumpNotUpward(self.jump_impulse));
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::NegativeGravity(self.gravity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_values_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 400.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.jump_impulse, -10.0);
        assert_eq!(config.initial_pipe_gap, 300);
        assert_eq!(config.initial_pipe_distance, 300);
        assert_eq!(config.min_pipe_gap, 100);
        assert_eq!(config.min_pipe_distance, 100);
        assert_eq!(config.difficulty_interval_ms, 10_000);
        assert_eq!(config.difficulty_step, 10);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_max_pipe_gap_and_ground_top() {
        let config = GameConfig::default();
        assert_eq!(config.max_pipe_gap(), 400);
        assert_eq!(config.ground_top(), 550.0);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "gravity": 0.25, "top_n": 3 }"#).unwrap();
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.top_n, 3);
        assert_eq!(config.pipe_width, PIPE_WIDTH);
        assert_eq!(config.initial_pipe_gap, INITIAL_PIPE_GAP);
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let mut config = GameConfig::default();
        config.pipe_speed = 7.5;
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_rejects_gap_that_would_make_negative_spans() {
        let config = GameConfig {
            initial_pipe_gap: 401,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapTooLarge { gap: 401, .. })
        ));
    }

    #[test]
    fn test_accepts_largest_legal_gap() {
        let config = GameConfig {
            initial_pipe_gap: 400,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let config = GameConfig {
            min_pipe_gap: 350,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveInitial {
                field: "pipe_gap",
                ..
            })
        ));

        let config = GameConfig {
            min_pipe_distance: 301,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FloorAboveInitial {
                field: "pipe_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_fields() {
        let config = GameConfig {
            pipe_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "pipe_speed",
                ..
            })
        ));

        let config = GameConfig {
            difficulty_step: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "difficulty_step",
                ..
            })
        ));

        let config = GameConfig {
            tick_rate_hz: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            screen_width: f64::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_ground_taller_than_screen() {
        let config = GameConfig {
            ground_height: 600.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GroundTooTall { .. })
        ));
    }

    #[test]
    fn test_rejects_downward_jump_and_negative_gravity() {
        let config = GameConfig {
            jump_impulse: 2.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::JumpNotUpward(2.0)));

        let config = GameConfig {
            gravity: -0.5,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeGravity(-0.5)));
    }

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = ConfigError::GapTooLarge {
            gap: 450,
            margin: 100,
            screen: 600.0,
        };
        assert!(err.to_string().contains("450"));
        let err = ConfigError::NotPositive {
            field: "pipe_width",
            value: 0.0,
        };
        assert!(err.to_string().starts_with("pipe_width"));
    }

    fn temp_config(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "flappy_config_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn test_load_from_missing_writes_defaults() {
        let path = temp_config("missing");
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        assert!(path.exists());
        let written: GameConfig = persistence::load_json_or_default(&path);
        assert_eq!(written, GameConfig::default());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_applies_overrides() {
        let path = temp_config("overrides");
        std::fs::write(&path, r#"{ "pipe_speed": 6.0 }"#).unwrap();
        let config = GameConfig::load_from(&path);
        assert_eq!(config.pipe_speed, 6.0);
        assert_eq!(config.gravity, GRAVITY);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_rejects_invalid_config() {
        let path = temp_config("invalid");
        std::fs::write(&path, r#"{ "initial_pipe_gap": 500 }"#).unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());

        std::fs::write(&path, "not json at all").unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_rejects_non_finite_floats() {
        let config = GameConfig {
            pipe_speed: f64::INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "pipe_speed",
                ..
            })
        ));

        let config = GameConfig {
            gravity: f64::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "gravity",
                ..
            })
        ));

        let config = GameConfig {
            jump_impulse: f64::NEG_INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "jump_impulse",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_fractional_screen_size() {
        let config = GameConfig {
            screen_height: 600.5,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotWholeUnits {
                field: "screen_height",
                value: 600.5,
            })
        );

        let config = GameConfig {
            screen_width: 399.9,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotWholeUnits {
                field: "screen_width",
                ..
            })
        ));

        let config = GameConfig {
            screen_height: 1e12,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_whole_screen_height_keeps_spans_summing() {
        use crate::game::Obstacle;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let config = GameConfig {
            screen_height: 700.0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let pipe = Obstacle::new(500.0, 300, &config, &mut rng);
        assert_eq!(pipe.top_height() + pipe.gap() + pipe.bottom_height(), 700);
        assert_eq!(pipe.bottom_rect().bottom(), config.screen_height);
    }
}
