//! Example component definitions for the lawn demo.
//!
//! Plain records only. What an entity "is" comes from which of these it
//! carries: a spawner has a `Counter` and a `Timer`, a walker has a
//! `Position`, a `Velocity`, a `LaneState`, and an expiring `Timer`.

use ecs_store::Component;
use glam::Vec2;

/// A 2D position in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub point: Vec2,
}

impl Position {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            point: Vec2::new(x, y),
        }
    }
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

/// A 2D velocity component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity in screen units per second.
    pub linear: Vec2,
}

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self { linear: Vec2::ZERO };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            linear: Vec2::new(x, y),
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

/// Counts up from zero towards `target`, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub current: f64,
    pub target: f64,
}

impl Timer {
    /// A fresh timer that finishes after `target` seconds.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            current: 0.0,
            target,
        }
    }

    pub fn advance(&mut self, dt: f64) {
        self.current += dt;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.target
    }

    /// Start over, carrying any overshoot into the next cycle.
    pub fn restart(&mut self) {
        self.current = (self.current - self.target).max(0.0);
    }
}

impl Component for Timer {
    fn type_name() -> &'static str {
        "Timer"
    }
}

/// What an entity does each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Spawner,
    Walker,
}

impl Component for Behavior {
    fn type_name() -> &'static str {
        "Behavior"
    }
}

/// Which lane an entity occupies, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneState {
    pub index: u8,
}

impl Component for LaneState {
    fn type_name() -> &'static str {
        "LaneState"
    }
}

/// A running tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub value: u32,
}

impl Counter {
    pub fn increment(&mut self) {
        self.value += 1;
    }
}

impl Component for Counter {
    fn type_name() -> &'static str {
        "Counter"
    }
}

/// Tag: destroy this entity once its `Timer` finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expires;

impl Component for Expires {
    fn type_name() -> &'static str {
        "Expires"
    }
}
