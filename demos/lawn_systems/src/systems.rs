//! The demo systems.
//!
//! Each system looks entities up by capability (which components they carry)
//! and never by any notion of entity kind.

use ecs_frame::{FrameContext, System};
use ecs_store::{Entity, QueryDescriptor, Store, StoreError};
use glam::Vec2;
use lawn_components::{Behavior, Counter, Expires, LaneState, Position, Timer, Velocity};
use tracing::{debug, warn};

/// Vertical distance between lanes, in screen units.
pub const LANE_HEIGHT: f32 = 100.0;

/// Advances every `Timer` by the frame delta.
#[derive(Debug, Default)]
pub struct TimerSystem;

impl System for TimerSystem {
    fn name(&self) -> &str {
        "timers"
    }

    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError> {
        for (_, timer) in store.iter_mut::<Timer>() {
            timer.advance(ctx.dt);
        }
        Ok(())
    }
}

/// Integrates `Position` by `Velocity`. Entities without a velocity stay put.
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError> {
        let dt = ctx.dt as f32;
        for e in store.query::<(Position, Velocity)>() {
            let velocity = *store.require::<Velocity>(e)?;
            store.require_mut::<Position>(e)?.point += velocity.linear * dt;
        }
        Ok(())
    }
}

/// Destroys expiring entities whose timer has finished.
#[derive(Debug, Default)]
pub struct ExpirySystem;

impl System for ExpirySystem {
    fn name(&self) -> &str {
        "expiry"
    }

    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError> {
        let mut expired = 0usize;
        for e in store.query::<(Timer, Expires)>() {
            if store.require::<Timer>(e)?.is_finished() && store.destroy(e) {
                expired += 1;
            }
        }
        if expired > 0 {
            debug!(frame_id = ctx.frame_id, expired, "entities expired");
        }
        Ok(())
    }
}

/// Every spawner (`Counter` + `Timer`, not expiring) emits one walker each
/// time its timer finishes. Lanes are handed out round-robin.
#[derive(Debug)]
pub struct SpawnerSystem {
    lanes: u8,
    next_lane: u8,
    walker_speed: f32,
    walker_lifetime: f64,
}

impl SpawnerSystem {
    /// Create a spawner system cycling over `lanes` lanes (at least one).
    #[must_use]
    pub fn new(lanes: u8) -> Self {
        Self {
            lanes: lanes.max(1),
            next_lane: 0,
            walker_speed: 20.0,
            walker_lifetime: 4.0,
        }
    }

    /// Override how far walkers get before they expire.
    #[must_use]
    pub fn with_walker(mut self, speed: f32, lifetime: f64) -> Self {
        self.walker_speed = speed;
        self.walker_lifetime = lifetime;
        self
    }

    fn pick_lane(&mut self) -> u8 {
        let lane = self.next_lane + 1;
        self.next_lane = (self.next_lane + 1) % self.lanes;
        lane
    }

    fn spawn_walker(&mut self, store: &mut Store, origin: Vec2) -> (Entity, u8) {
        let lane = self.pick_lane();
        let walker = store.spawn();
        store.attach(walker, Behavior::Walker);
        store.attach(walker, LaneState { index: lane });
        store.attach(
            walker,
            Position {
                point: origin + Vec2::new(0.0, f32::from(lane) * LANE_HEIGHT),
            },
        );
        store.attach(walker, Velocity::new(-self.walker_speed, 0.0));
        store.attach(walker, Timer::new(self.walker_lifetime));
        store.attach(walker, Expires);
        (walker, lane)
    }
}

impl System for SpawnerSystem {
    fn name(&self) -> &str {
        "spawner"
    }

    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError> {
        let spawners = QueryDescriptor::new()
            .with::<Counter>()
            .with::<Timer>()
            .without::<Expires>();

        for spawner in store.query_with(&spawners) {
            // A long frame can cover several intervals; each one spawns.
            let timer = store.require_mut::<Timer>(spawner)?;
            if timer.target.is_nan() || timer.target <= 0.0 {
                warn!(%spawner, target = timer.target, "spawner interval is not positive; skipped");
                continue;
            }
            let mut cycles = 0u32;
            while timer.is_finished() {
                timer.restart();
                cycles += 1;
            }
            if cycles == 0 {
                continue;
            }

            let origin = store.get::<Position>(spawner).map_or(Vec2::ZERO, |p| p.point);
            for _ in 0..cycles {
                store.require_mut::<Counter>(spawner)?.increment();
                let (walker, lane) = self.spawn_walker(store, origin);
                debug!(frame_id = ctx.frame_id, %spawner, %walker, lane, "spawned walker");
            }
        }
        Ok(())
    }
}
