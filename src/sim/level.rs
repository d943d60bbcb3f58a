//! Level description and world construction
//!
//! Levels are literal tables of rectangles. Built-in levels reproduce the
//! tutorial stages; custom ones load from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Rect;
use super::state::{Enemy, Loot, Patrol, Platform, Player, World};
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::settings::SimConfig;

/// Errors raised while loading settings or building a level
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{kind} #{index} has non-positive size {width}x{height}")]
    NonPositiveSize {
        kind: &'static str,
        index: usize,
        width: f32,
        height: f32,
    },
    #[error("{kind} #{index} has a non-finite coordinate")]
    NonFinite { kind: &'static str, index: usize },
    #[error("invalid setting `{name}`: {reason}")]
    InvalidSetting { name: String, reason: String },
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, reason: &str) -> Self {
        ConfigError::InvalidSetting {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// One placed rectangle: x, y, width, height and an image reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub image: String,
}

impl EntitySpec {
    pub fn new(x: f32, y: f32, width: f32, height: f32, image: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            image: image.to_string(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Player spawn rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_player_width")]
    pub width: f32,
    #[serde(default = "default_player_height")]
    pub height: f32,
}

fn default_player_width() -> f32 {
    PLAYER_WIDTH
}

fn default_player_height() -> f32 {
    PLAYER_HEIGHT
}

impl PlayerSpawn {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Everything needed to build a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub platforms: Vec<EntitySpec>,
    #[serde(default)]
    pub loot: Vec<EntitySpec>,
    #[serde(default)]
    pub enemies: Vec<EntitySpec>,
    pub player: PlayerSpawn,
}

impl LevelSpec {
    /// Ground, two ledges, one loot item and a patrolling owl
    pub fn classic() -> Self {
        Self {
            platforms: vec![
                EntitySpec::new(0.0, 591.0, 1920.0, 129.0, "block0.png"),
                EntitySpec::new(620.0, 427.0, 173.0, 72.0, "block1.png"),
                EntitySpec::new(860.0, 227.0, 337.0, 72.0, "block2.png"),
            ],
            loot: vec![EntitySpec::new(666.0, 355.0, 92.0, 99.0, "loot.png")],
            enemies: vec![EntitySpec::new(777.0, 531.0, 60.0, 60.0, "owl.png")],
            player: PlayerSpawn::at(10.0, 0.0),
        }
    }

    /// Four floating ledges over a bottomless pit
    pub fn ledges() -> Self {
        Self {
            platforms: vec![
                EntitySpec::new(0.0, 327.0, 1920.0, 393.0, "plat0.png"),
                EntitySpec::new(0.0, 0.0, 412.0, 392.0, "plat1.png"),
                EntitySpec::new(600.0, 100.0, 421.0, 217.0, "plat2.png"),
                EntitySpec::new(1552.0, 389.0, 368.0, 331.0, "plat3.png"),
            ],
            loot: Vec::new(),
            enemies: Vec::new(),
            player: PlayerSpawn::at(199.0, 40.0),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let level = Self::from_json_str(&json)?;
        log::info!("Loaded level from {}", path.display());
        Ok(level)
    }
}

fn checked_rect(kind: &'static str, index: usize, rect: Rect) -> Result<Rect, ConfigError> {
    if !rect.is_finite() {
        return Err(ConfigError::NonFinite { kind, index });
    }
    if !rect.has_positive_size() {
        return Err(ConfigError::NonPositiveSize {
            kind,
            index,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(rect)
}

impl World {
    /// Validate the settings and geometry and lay out the level.
    ///
    /// Entity ids are assigned in declaration order, starting at 1 and
    /// shared across platforms, loot and enemies.
    pub fn build(level: &LevelSpec, config: SimConfig) -> Result<World, ConfigError> {
        config.validate()?;

        let mut next_id = 1u32;
        let mut alloc_id = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let mut platforms = Vec::with_capacity(level.platforms.len());
        for (index, spec) in level.platforms.iter().enumerate() {
            platforms.push(Platform {
                id: alloc_id(),
                rect: checked_rect("platform", index, spec.rect())?,
                image: spec.image.clone(),
            });
        }

        let mut loot = Vec::with_capacity(level.loot.len());
        for (index, spec) in level.loot.iter().enumerate() {
            loot.push(Loot {
                id: alloc_id(),
                rect: checked_rect("loot", index, spec.rect())?,
                image: spec.image.clone(),
            });
        }

        let mut enemies = Vec::with_capacity(level.enemies.len());
        for (index, spec) in level.enemies.iter().enumerate() {
            enemies.push(Enemy {
                id: alloc_id(),
                rect: checked_rect("enemy", index, spec.rect())?,
                image: spec.image.clone(),
                patrol: Patrol::default(),
            });
        }

        let player = Player::new(checked_rect("player", 0, level.player.rect())?, &config);

        log::info!(
            "Built level: {} platforms, {} loot, {} enemies",
            platforms.len(),
            loot.len(),
            enemies.len()
        );

        Ok(World::from_parts(config, platforms, loot, enemies, player))
    }
}
