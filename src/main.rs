//! Ledgewalk entry point
//!
//! Headless driver: builds a level, runs a scripted walk through it and logs
//! what happens. A real front-end would feed key events instead.
//!
//! Usage: `ledgewalk [classic|ledges|settings.json] [level.json]`

use std::process::ExitCode;

use ledgewalk::sim::{GameEvent, Intent, LevelSpec, World, tick};
use ledgewalk::{ConfigError, Ruleset, SimConfig};

/// Ticks to simulate (15 seconds at the authored frame rate)
const DEMO_TICKS: u64 = 15 * ledgewalk::consts::TICKS_PER_SECOND as u64;

/// Scripted input: hold right, hop now and then, back off near the end
fn scripted_intents(tick_index: u64) -> Vec<Intent> {
    match tick_index {
        5 => vec![Intent::MoveRight],
        t if t > 5 && t < 400 && t % 45 == 0 => vec![Intent::Jump],
        400 => vec![Intent::StopRight, Intent::MoveLeft],
        520 => vec![Intent::StopLeft],
        _ => Vec::new(),
    }
}

fn load(args: &[String]) -> Result<World, ConfigError> {
    let (config, ruleset) = match args.first() {
        Some(arg) => match Ruleset::from_str(arg) {
            Some(ruleset) => (SimConfig::from_ruleset(ruleset), ruleset),
            None => (SimConfig::load(arg)?, Ruleset::Classic),
        },
        None => (SimConfig::default(), Ruleset::Classic),
    };

    let level = match args.get(1) {
        Some(path) => LevelSpec::load(path)?,
        None => match ruleset {
            Ruleset::Classic => LevelSpec::classic(),
            Ruleset::Ledges => LevelSpec::ledges(),
        },
    };

    log::info!("Rules: {}", ruleset.as_str());
    World::build(&level, config)
}

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Ledgewalk (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut world = match load(&args) {
        Ok(world) => world,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for t in 0..DEMO_TICKS {
        let events = tick(&mut world, &scripted_intents(t));
        for event in &events {
            match event {
                GameEvent::LootCollected { id } => log::info!("Tick {t}: picked up loot {id}"),
                GameEvent::DamageTaken { amount } => log::info!("Tick {t}: took {amount} damage"),
                GameEvent::PlayerFellOut => log::info!("Tick {t}: fell out of the world"),
                GameEvent::QuitRequested => log::info!("Tick {t}: quit"),
            }
        }
        if events.iter().any(GameEvent::is_terminal) {
            break;
        }
    }

    let hud = world.hud();
    log::info!(
        "Finished after {} ticks: score {}, health {}, world x {:.1}",
        world.time_ticks,
        hud.score,
        hud.health,
        world.player_world_x()
    );
    ExitCode::SUCCESS
}
