//! Lawn demo systems wired into an [`ecs_frame::FrameLoop`].
//!
//! A single spawner entity emits walkers into lanes on a timer. Walkers
//! move left and expire after a fixed lifetime.

pub mod systems;

use ecs_frame::{FrameConfig, FrameError, FrameLoop};
use ecs_store::Entity;
use lawn_components::{Behavior, Counter, Position, Timer};

pub use systems::{ExpirySystem, LANE_HEIGHT, MovementSystem, SpawnerSystem, TimerSystem};

/// Where the spawner sits; walkers start here and head towards x = 0.
pub const SPAWN_X: f32 = 800.0;

/// Build a frame loop holding one spawner and the demo systems.
///
/// Systems run as timers, spawner, movement, expiry. Returns the loop and
/// the spawner entity.
///
/// # Errors
///
/// Returns [`FrameError::InvalidConfig`] if the config is invalid or
/// `spawn_interval` is not a positive finite number of seconds.
pub fn build(
    config: FrameConfig,
    lanes: u8,
    spawn_interval: f64,
) -> Result<(FrameLoop, Entity), FrameError> {
    if !spawn_interval.is_finite() || spawn_interval <= 0.0 {
        return Err(FrameError::InvalidConfig(format!(
            "spawn_interval must be a positive number of seconds, got {spawn_interval}"
        )));
    }
    let mut frame_loop = FrameLoop::new(config)?;

    let store = frame_loop.store_mut();
    let spawner = store.spawn();
    store.attach(spawner, Behavior::Spawner);
    store.attach(spawner, Position::new(SPAWN_X, 0.0));
    store.attach(spawner, Counter::default());
    store.attach(spawner, Timer::new(spawn_interval));

    frame_loop.add_system(TimerSystem)?;
    frame_loop.add_system(SpawnerSystem::new(lanes))?;
    frame_loop.add_system(MovementSystem)?;
    frame_loop.add_system(ExpirySystem)?;

    Ok((frame_loop, spawner))
}
