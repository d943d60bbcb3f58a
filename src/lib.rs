//! Ledgewalk - A side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, gravity, platform collisions, camera scroll)
//! - `settings`: Data-driven physics/camera tuning and rule presets
//!
//! Rendering, input polling and HUD text are left to the host: it feeds
//! [`sim::Intent`]s into [`sim::tick`] and draws [`sim::World::render_list`].

pub mod settings;
pub mod sim;

pub use settings::{FloorMode, Ruleset, SimConfig};
pub use sim::{ConfigError, GameEvent, Intent, LevelSpec, World, tick};

/// Classic tuning constants (the defaults behind [`SimConfig::default`])
pub mod consts {
    /// Frame rate the tuning values were authored for
    pub const TICKS_PER_SECOND: u32 = 40;

    /// Horizontal velocity added per held direction key
    pub const MOVE_STEP: f32 = 10.0;
    /// Downward acceleration added every tick
    pub const GRAVITY: f32 = 3.2;
    /// Upward impulse subtracted from velocity on a jump
    pub const JUMP_IMPULSE: f32 = 33.0;
    /// Coyote window: ticks after touching ground where a jump is still honored
    pub const GROUND_GRACE_TICKS: u32 = 6;
    /// Jump buffer window
    pub const JUMP_GRACE_TICKS: u32 = 6;
    /// Forward snap applied when running into a platform
    pub const WALL_SNAP_EPSILON: f32 = 9.0;
    /// Ticks per animation cell
    pub const ANIMATION_CYCLE: u32 = 4;
    /// Walk animation cells per facing
    pub const ANIMATION_CELLS: u32 = 4;

    /// Screen height, doubling as the default solid floor
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Camera scroll thresholds (screen-space x)
    pub const FORWARD_SCROLL_X: f32 = 600.0;
    pub const BACKWARD_SCROLL_X: f32 = 230.0;
    /// Per-tick cap on backward scroll
    pub const BACKWARD_SCROLL_CAP: f32 = 1.0;

    /// Player defaults
    pub const STARTING_HEALTH: i32 = 10;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 96.0;

    /// Enemy patrol
    pub const ENEMY_PATROL_STEP: f32 = 10.0;
    pub const ENEMY_PATROL_PERIOD: u32 = 200;
    pub const DAMAGE_PER_HIT: i32 = 1;
}
