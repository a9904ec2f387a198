//! Component records shared by the integration tests.

#![allow(dead_code)]

use ecs_store::Component;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Component for Position {
    fn type_name() -> &'static str {
        "Position"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

impl Component for Velocity {
    fn type_name() -> &'static str {
        "Velocity"
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub current: f64,
    pub target: f64,
}

impl Component for Timer {
    fn type_name() -> &'static str {
        "Timer"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Walker,
    Shooter,
}

impl Component for Behavior {
    fn type_name() -> &'static str {
        "Behavior"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneState {
    pub index: u8,
}

impl Component for LaneState {
    fn type_name() -> &'static str {
        "LaneState"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter(pub u32);

impl Component for Counter {
    fn type_name() -> &'static str {
        "Counter"
    }
}
