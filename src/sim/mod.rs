//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call, no wall-clock time
//! - Stable iteration order (by entity id)
//! - No rendering or platform dependencies

pub mod camera;
pub mod geometry;
pub mod intent;
pub mod level;
pub mod state;
pub mod tick;

pub use camera::{Camera, Scroll};
pub use geometry::{Bounded, Rect, overlaps_any};
pub use intent::{Intent, parse_intents};
pub use level::{ConfigError, EntitySpec, LevelSpec, PlayerSpawn};
pub use state::{
    EntityKind, Enemy, Facing, GameEvent, GamePhase, Hud, Loot, Patrol, PatrolLeg, Platform,
    Player, Sprite, World, PLAYER_ID,
};
pub use tick::tick;
