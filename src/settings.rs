//! Simulation settings and rule presets
//!
//! Loaded from JSON on native targets; every field falls back to the classic
//! tuning so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::ConfigError;

/// What happens when the player drops below `floor_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FloorMode {
    /// The floor is solid: velocity is zeroed and the player is clamped to it
    #[default]
    Solid,
    /// Falling past the floor ends the run
    Lethal,
}

/// Rule presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Ruleset {
    /// Loot and patrolling enemy, heavy gravity, solid floor
    #[default]
    Classic,
    /// Floating ledges, floaty gravity, falling off the world is fatal
    Ledges,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "Classic",
            Ruleset::Ledges => "Ledges",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Ruleset::Classic),
            "ledges" | "ledge" => Some(Ruleset::Ledges),
            _ => None,
        }
    }
}

/// Physics, camera and combat tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Movement ===
    /// Velocity added per held direction key
    pub move_step: f32,
    /// Added to vertical velocity once per tick
    pub gravity: f32,
    /// Subtracted from vertical velocity on a successful jump
    pub jump_impulse: f32,
    pub ground_grace_ticks: u32,
    pub jump_grace_ticks: u32,
    /// Rightward wall hits resolve to `previous_x + wall_snap_epsilon`
    pub wall_snap_epsilon: f32,
    /// Stop leftward movement into platforms (off by default, matching the
    /// classic rules where only rightward hits are resolved)
    pub arrest_leftward: bool,

    // === Animation ===
    /// Ticks per walk-cycle cell; the frame counter wraps at `4 * animation_cycle`
    pub animation_cycle: u32,

    // === Floor ===
    pub floor_y: f32,
    pub floor_mode: FloorMode,

    // === Camera ===
    pub forward_scroll_x: f32,
    pub backward_scroll_x: f32,
    pub backward_scroll_cap: f32,

    // === Combat ===
    pub starting_health: i32,
    pub damage_per_hit: i32,
    /// Invulnerability ticks after a hit (0 = damage every overlapping tick)
    pub damage_cooldown_ticks: u32,
    pub enemy_patrol_step: f32,
    pub enemy_patrol_period: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_grace_ticks: GROUND_GRACE_TICKS,
            jump_grace_ticks: JUMP_GRACE_TICKS,
            wall_snap_epsilon: WALL_SNAP_EPSILON,
            arrest_leftward: false,

            animation_cycle: ANIMATION_CYCLE,

            floor_y: SCREEN_HEIGHT,
            floor_mode: FloorMode::Solid,

            forward_scroll_x: FORWARD_SCROLL_X,
            backward_scroll_x: BACKWARD_SCROLL_X,
            backward_scroll_cap: BACKWARD_SCROLL_CAP,

            starting_health: STARTING_HEALTH,
            damage_per_hit: DAMAGE_PER_HIT,
            damage_cooldown_ticks: 0,
            enemy_patrol_step: ENEMY_PATROL_STEP,
            enemy_patrol_period: ENEMY_PATROL_PERIOD,
        }
    }
}

impl SimConfig {
    /// Create settings from a rule preset
    pub fn from_ruleset(ruleset: Ruleset) -> Self {
        let mut config = Self::default();
        config.apply_ruleset(ruleset);
        config
    }

    /// Apply a rule preset (overwrites the preset-dependent fields)
    pub fn apply_ruleset(&mut self, ruleset: Ruleset) {
        match ruleset {
            Ruleset::Classic => {
                self.gravity = GRAVITY;
                self.jump_impulse = JUMP_IMPULSE;
                self.floor_y = SCREEN_HEIGHT;
                self.floor_mode = FloorMode::Solid;
                self.forward_scroll_x = FORWARD_SCROLL_X;
            }
            Ruleset::Ledges => {
                self.gravity = 0.47;
                self.jump_impulse = 12.0;
                self.floor_y = 680.0;
                self.floor_mode = FloorMode::Lethal;
                self.forward_scroll_x = 590.0;
            }
        }
    }

    /// Reject tunings the tick cannot run sensibly with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("move_step", self.move_step),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("wall_snap_epsilon", self.wall_snap_epsilon),
            ("floor_y", self.floor_y),
            ("forward_scroll_x", self.forward_scroll_x),
            ("backward_scroll_x", self.backward_scroll_x),
            ("backward_scroll_cap", self.backward_scroll_cap),
            ("enemy_patrol_step", self.enemy_patrol_step),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::invalid(name, "must be finite"));
        }

        if self.animation_cycle == 0 {
            return Err(ConfigError::invalid("animation_cycle", "must be at least 1"));
        }
        if self.ground_grace_ticks == 0 || self.jump_grace_ticks == 0 {
            return Err(ConfigError::invalid(
                "ground_grace_ticks/jump_grace_ticks",
                "grace windows must be at least 1 tick",
            ));
        }
        if self.backward_scroll_x >= self.forward_scroll_x {
            return Err(ConfigError::invalid(
                "backward_scroll_x",
                "must be left of forward_scroll_x",
            ));
        }
        if self.backward_scroll_cap < 0.0 {
            return Err(ConfigError::invalid("backward_scroll_cap", "must not be negative"));
        }
        if self.enemy_patrol_period < 2 {
            return Err(ConfigError::invalid("enemy_patrol_period", "must be at least 2"));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic() {
        assert_eq!(SimConfig::default(), SimConfig::from_ruleset(Ruleset::Classic));
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_ledges_preset() {
        let config = SimConfig::from_ruleset(Ruleset::Ledges);
        assert_eq!(config.floor_mode, FloorMode::Lethal);
        assert_eq!(config.floor_y, 680.0);
        assert!((config.gravity - 0.47).abs() < 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ruleset_names() {
        assert_eq!(Ruleset::from_str("LEDGES"), Some(Ruleset::Ledges));
        assert_eq!(Ruleset::from_str(Ruleset::Classic.as_str()), Some(Ruleset::Classic));
        assert_eq!(Ruleset::from_str("hard"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{ "gravity": 1.5, "floor_mode": "lethal" }"#)
            .expect("valid settings");
        assert_eq!(config.gravity, 1.5);
        assert_eq!(config.floor_mode, FloorMode::Lethal);
        assert_eq!(config.move_step, MOVE_STEP);
    }

    #[test]
    fn test_rejects_crossed_scroll_thresholds() {
        let err = SimConfig::from_json_str(r#"{ "backward_scroll_x": 700.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSetting { .. }));
    }

    #[test]
    fn test_rejects_zero_animation_cycle() {
        let config = SimConfig {
            animation_cycle: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json_str("{ gravity: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_load_file() {
        let path = std::env::temp_dir().join(format!("ledgewalk-settings-{}.json", std::process::id()));
        let config = SimConfig::from_ruleset(Ruleset::Ledges);
        config.save(&path).expect("save");
        let loaded = SimConfig::load(&path).expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("/nonexistent/ledgewalk/settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
