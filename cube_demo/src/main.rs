//! Cube demo application
//!
//! Builds the reference scene and drives the mover cube around the four
//! static cubes, relaunching it from alternating sides every few seconds.
//!
//! Usage: `cube_demo [config.toml|config.ron]`

use collision_engine::config::{Config, ConfigError, SimulationConfig};
use collision_engine::ecs::{World, WorldError};
use collision_engine::foundation::logging;
use collision_engine::foundation::time::{Stopwatch, Timer};
use collision_engine::simulation::{ReferenceScene, SimulationError};
use std::time::Duration;
use thiserror::Error;

/// Simulated seconds between relaunches of the mover
const RELAUNCH_INTERVAL: f64 = 4.0;

#[derive(Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scene error: {0}")]
    World(#[from] WorldError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

fn load_config() -> Result<SimulationConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading simulation config from {}", path);
            SimulationConfig::load_from_file(path)?
        }
        None => {
            log::info!("No config file given, using defaults");
            SimulationConfig::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Whole frames of `frame_time` that fit in `duration`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frames_in(duration: f64, frame_time: f64) -> u64 {
    (duration / frame_time).round() as u64
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    log::debug!("Simulation config: {:?}", config);

    let mut world = World::new();
    let scene = ReferenceScene::build(&mut world, &config)?;
    let mut driver = scene.driver(&config);

    let stopwatch = Stopwatch::start_new();
    let mut timer = Timer::new();
    let frames = frames_in(config.total_time, config.frame_time);
    let relaunch_every = frames_in(RELAUNCH_INTERVAL, config.frame_time).max(1);
    let mut simulated = 0.0_f64;
    let mut direction = 1.0_f32;
    let mut contacts = 0_usize;

    for frame in 1..=frames {
        let frame_time = if config.realtime {
            std::thread::sleep(Duration::from_secs_f64(config.frame_time));
            timer.tick();
            f64::from(timer.delta_time())
        } else {
            config.frame_time
        };
        simulated += frame_time;

        let summary = driver.advance(&mut world, frame_time)?;
        contacts += summary.contacts;
        if summary.decays > 0 {
            if let Some(mover) = world.get(scene.mover) {
                log::info!(
                    "t={:.2}s mover at {:?} velocity {:?}",
                    simulated,
                    mover.transform.translation(),
                    mover.transform.velocity
                );
            }
        }

        if frame % relaunch_every == 0 {
            direction = -direction;
            driver.relaunch(
                &mut world,
                ReferenceScene::relaunch_position(direction),
                config.mover_velocity,
            )?;
        }
    }

    if config.realtime {
        log::info!(
            "Measured {:.2}s of wall-clock frames over {} timer ticks",
            timer.total_time(),
            timer.frame_count()
        );
    }
    log::info!(
        "Simulated {:.2}s in {} ticks with {} contacts ({:.1} ms wall time)",
        simulated,
        driver.ticks(),
        contacts,
        stopwatch.elapsed_millis()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    log::info!("Starting cube demo...");

    if let Err(e) = run() {
        log::error!("Cube demo failed: {}", e);
        return Err(e.into());
    }

    log::info!("Cube demo finished");
    Ok(())
}
