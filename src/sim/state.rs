//! World state and core simulation types
//!
//! All coordinates here are level space. The camera offset is only applied
//! when producing screen-space sprites for the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::geometry::{Bounded, Rect};
use crate::consts::ANIMATION_CELLS;
use crate::settings::SimConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// Player fell past a lethal floor (absorbing)
    Terminated,
    /// Host asked to quit (absorbing)
    Quit,
}

/// Side effects of a tick, for HUD/audio/log consumers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LootCollected { id: u32 },
    DamageTaken { amount: i32 },
    /// Terminal: the session should end
    PlayerFellOut,
    /// Terminal: the host sent a quit intent
    QuitRequested,
}

impl GameEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::PlayerFellOut | GameEvent::QuitRequested)
    }
}

/// Which way the walk cycle faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Static collider, never mutated after build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
    /// Opaque to the simulation; handed back to the renderer
    pub image: String,
}

impl Bounded for Platform {
    fn bounding_box(&self) -> Rect {
        self.rect
    }
}

/// Single-use pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loot {
    pub id: u32,
    pub rect: Rect,
    pub image: String,
}

impl Bounded for Loot {
    fn bounding_box(&self) -> Rect {
        self.rect
    }
}

/// Patrol leg derived from the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolLeg {
    MovingRight,
    MovingLeft,
}

/// Back-and-forth patrol counter: first half of the period moves right,
/// second half moves left
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Patrol {
    pub counter: u32,
}

impl Patrol {
    pub fn leg(&self, period: u32) -> PatrolLeg {
        if self.counter < period / 2 {
            PatrolLeg::MovingRight
        } else {
            PatrolLeg::MovingLeft
        }
    }

    /// Horizontal displacement for this tick, then advance the counter
    pub fn step(&mut self, period: u32, speed: f32) -> f32 {
        if self.counter >= period {
            self.counter = 0;
        }
        let dx = match self.leg(period) {
            PatrolLeg::MovingRight => speed,
            PatrolLeg::MovingLeft => -speed,
        };
        self.counter += 1;
        if self.counter >= period {
            self.counter = 0;
        }
        dx
    }
}

/// Patrolling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    pub image: String,
    pub patrol: Patrol,
}

impl Enemy {
    pub fn patrol(&mut self, period: u32, speed: f32) {
        let dx = self.patrol.step(period, speed);
        self.rect.x += dx;
    }
}

impl Bounded for Enemy {
    fn bounding_box(&self) -> Rect {
        self.rect
    }
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Horizontal: sum of held direction keys. Vertical: gravity accumulator.
    pub vel: Vec2,
    /// Walk-cycle frame counter, only advances while moving horizontally
    pub frame: u32,
    pub facing: Facing,
    /// Coyote counter; reset to 0 by any resolved platform hit
    pub frames_since_ground: u32,
    /// Jump buffer counter; a jump intent resets it to 0
    pub frames_since_jump: u32,
    pub health: i32,
    pub score: u32,
    /// Remaining ticks of post-hit invulnerability
    #[serde(default)]
    pub invulnerable_ticks: u32,
}

impl Player {
    pub fn new(rect: Rect, config: &SimConfig) -> Self {
        Self {
            rect,
            vel: Vec2::ZERO,
            frame: 0,
            facing: Facing::default(),
            frames_since_ground: 0,
            // Start with the jump buffer closed so nothing fires on spawn
            frames_since_jump: config.jump_grace_ticks,
            health: config.starting_health,
            score: 0,
            invulnerable_ticks: 0,
        }
    }

    /// Whether the last tick ended resting on (or pushed by) a platform
    pub fn is_grounded(&self) -> bool {
        self.frames_since_ground == 0 && self.vel.y == 0.0
    }

    /// Sprite cell for the walk cycle: 0..4 facing left, 4..8 facing right
    pub fn sprite_index(&self, animation_cycle: u32) -> u32 {
        let cell = (self.frame / animation_cycle.max(1)).min(ANIMATION_CELLS - 1);
        match self.facing {
            Facing::Left => cell,
            Facing::Right => cell + ANIMATION_CELLS,
        }
    }

    /// Advance the walk cycle; wraps at `ANIMATION_CELLS * animation_cycle`
    pub(crate) fn advance_frame(&mut self, animation_cycle: u32) {
        if self.vel.x == 0.0 {
            return;
        }
        self.facing = if self.vel.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
        self.frame += 1;
        if self.frame >= ANIMATION_CELLS * animation_cycle {
            self.frame = 0;
        }
    }
}

impl Bounded for Player {
    fn bounding_box(&self) -> Rect {
        self.rect
    }
}

/// Kind tag for render output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Platform,
    Loot,
    Enemy,
    Player,
}

/// Screen-space drawable handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite<'a> {
    pub kind: EntityKind,
    pub id: u32,
    pub rect: Rect,
    pub image: &'a str,
}

/// Values the HUD shows after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub health: i32,
}

/// Player sprite id in render output
pub const PLAYER_ID: u32 = 0;

/// Complete simulation context for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub config: SimConfig,
    /// Read-only after build
    pub(crate) platforms: Vec<Platform>,
    /// Uncollected loot (sorted by id)
    pub(crate) loot: Vec<Loot>,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Assemble a world from already validated parts (see `World::build`)
    pub(crate) fn from_parts(
        config: SimConfig,
        platforms: Vec<Platform>,
        loot: Vec<Loot>,
        enemies: Vec<Enemy>,
        player: Player,
    ) -> Self {
        Self {
            config,
            platforms,
            loot,
            enemies,
            player,
            camera: Camera::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Loot not yet collected; empty once everything is picked up
    pub fn active_loot(&self) -> &[Loot] {
        &self.loot
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: self.player.score,
            health: self.player.health,
        }
    }

    /// Player x in the level's original coordinate space
    pub fn player_world_x(&self) -> f32 {
        self.player.rect.x
    }

    /// Player rect as drawn
    pub fn player_screen_rect(&self) -> Rect {
        self.camera.to_screen(self.player.rect)
    }

    /// Screen-space rects for every live entity, back to front
    pub fn render_list(&self) -> Vec<Sprite<'_>> {
        let mut sprites =
            Vec::with_capacity(self.platforms.len() + self.loot.len() + self.enemies.len() + 1);
        sprites.extend(self.platforms.iter().map(|p| Sprite {
            kind: EntityKind::Platform,
            id: p.id,
            rect: self.camera.to_screen(p.rect),
            image: &p.image,
        }));
        sprites.extend(self.loot.iter().map(|l| Sprite {
            kind: EntityKind::Loot,
            id: l.id,
            rect: self.camera.to_screen(l.rect),
            image: &l.image,
        }));
        sprites.push(Sprite {
            kind: EntityKind::Player,
            id: PLAYER_ID,
            rect: self.player_screen_rect(),
            image: "",
        });
        sprites.extend(self.enemies.iter().map(|e| Sprite {
            kind: EntityKind::Enemy,
            id: e.id,
            rect: self.camera.to_screen(e.rect),
            image: &e.image,
        }));
        sprites
    }
}
