//! Fixed timestep simulation tick
//!
//! Advances the world by exactly one step. Order within a tick:
//!
//! 1. quit check (short-circuits everything)
//! 2. intents -> horizontal velocity / jump buffer
//! 3. gravity, then the floor check (solid clamp or lethal fall-out)
//! 4. horizontal move, walk-cycle frame, horizontal platform resolution
//! 5. vertical move, vertical platform resolution
//! 6. jump arbitration
//! 7. loot pickup, enemy contact, enemy patrol
//! 8. camera scroll
//!
//! Gravity runs before integration so a landing leaves `vel.y == 0` at the
//! end of the tick it happens in.

use super::geometry::overlaps_any;
use super::intent::Intent;
use super::state::{GameEvent, GamePhase, Platform, Player, World};
use crate::settings::{FloorMode, SimConfig};

/// Advance the world by one tick and return what happened.
///
/// Intents are applied in order. Once the world has left `Playing` every
/// further call is a no-op that returns no events.
pub fn tick(world: &mut World, intents: &[Intent]) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if !world.is_running() {
        return events;
    }

    if intents.contains(&Intent::Quit) {
        log::info!("Quit requested at tick {}", world.time_ticks);
        world.phase = GamePhase::Quit;
        events.push(GameEvent::QuitRequested);
        return events;
    }

    world.time_ticks += 1;

    let World {
        config,
        platforms,
        loot,
        enemies,
        player,
        camera,
        phase,
        ..
    } = world;

    apply_intents(player, intents, config);

    // --- GRAVITY & FLOOR ---
    player.vel.y += config.gravity;
    if player.rect.y > config.floor_y && player.vel.y >= 0.0 {
        match config.floor_mode {
            FloorMode::Solid => {
                player.vel.y = 0.0;
                player.rect.y = config.floor_y;
            }
            FloorMode::Lethal => {
                log::info!("Player fell out at y={}", player.rect.y);
                *phase = GamePhase::Terminated;
                events.push(GameEvent::PlayerFellOut);
                return events;
            }
        }
    }

    // --- HORIZONTAL ---
    let prev_x = player.rect.x;
    player.rect.x += player.vel.x;
    player.advance_frame(config.animation_cycle);
    resolve_horizontal(player, prev_x, platforms, config);

    // --- VERTICAL ---
    let prev_y = player.rect.y;
    player.rect.y += player.vel.y;
    if player.vel.y > 0.0 && overlaps_any(&player.rect, platforms.iter()) {
        player.rect.y = prev_y;
        player.vel.y = 0.0;
        player.frames_since_ground = 0;
    }

    try_jump(player, config);

    // --- LOOT ---
    let player_rect = player.rect;
    loot.retain(|item| {
        if !item.rect.overlaps(&player_rect) {
            return true;
        }
        player.score += 1;
        log::debug!("Collected loot {} (score {})", item.id, player.score);
        events.push(GameEvent::LootCollected { id: item.id });
        false
    });

    // --- ENEMIES ---
    if player.invulnerable_ticks > 0 {
        player.invulnerable_ticks -= 1;
    } else {
        for enemy in enemies.iter() {
            if !enemy.rect.overlaps(&player_rect) {
                continue;
            }
            player.health -= config.damage_per_hit;
            player.invulnerable_ticks = config.damage_cooldown_ticks;
            log::debug!("Hit by enemy {} (health {})", enemy.id, player.health);
            events.push(GameEvent::DamageTaken {
                amount: config.damage_per_hit,
            });
            if player.invulnerable_ticks > 0 {
                break;
            }
        }
    }
    for enemy in enemies.iter_mut() {
        enemy.patrol(config.enemy_patrol_period, config.enemy_patrol_step);
    }

    // --- CAMERA ---
    camera.follow(&mut player.rect, config);

    events
}

/// Direction keys add/remove `move_step`; a jump press opens the jump buffer
fn apply_intents(player: &mut Player, intents: &[Intent], config: &SimConfig) {
    for intent in intents {
        match intent {
            Intent::Jump => player.frames_since_jump = 0,
            Intent::Quit => {}
            _ => player.vel.x += intent.horizontal_sign() * config.move_step,
        }
    }
}

/// Rightward hits snap to `prev_x + wall_snap_epsilon` and count as touching
/// ground. Leftward hits pass through unless `arrest_leftward` is set.
fn resolve_horizontal(player: &mut Player, prev_x: f32, platforms: &[Platform], config: &SimConfig) {
    if player.vel.x > 0.0 {
        if overlaps_any(&player.rect, platforms) {
            player.rect.x = prev_x + config.wall_snap_epsilon;
            player.vel.y = 0.0;
            player.frames_since_ground = 0;
        }
    } else if player.vel.x < 0.0 && config.arrest_leftward && overlaps_any(&player.rect, platforms) {
        player.rect.x = prev_x;
        player.vel.y = 0.0;
        player.frames_since_ground = 0;
    }
}

/// Jump if both the coyote window and the jump buffer are open. A successful
/// jump pushes both counters past their windows so it can't re-trigger until
/// the player touches a platform again.
fn try_jump(player: &mut Player, config: &SimConfig) -> bool {
    if player.frames_since_ground >= config.ground_grace_ticks
        || player.frames_since_jump >= config.jump_grace_ticks
    {
        return false;
    }

    player.vel.y -= config.jump_impulse;
    player.frames_since_jump = config.jump_grace_ticks * 2;
    player.frames_since_ground += config.ground_grace_ticks;
    player.frames_since_jump += config.jump_grace_ticks;
    log::debug!("Jump (vel.y {})", player.vel.y);
    true
}
