//! # ecs_frame
//!
//! Frame loop for an [`ecs_store::Store`].
//!
//! This crate provides:
//!
//! - [`System`]: per-frame logic, handed the store explicitly on each run.
//! - [`FnSystem`]: a closure adapter for small systems.
//! - [`SystemRegistry`]: the ordered list of systems a frame runs.
//! - [`FrameLoop`]: runs every system once per frame, then sweeps.
//! - [`FrameConfig`]: frame rate, frame limit, and sweep policy.
//!
//! ## Usage
//!
//! ```rust
//! use ecs_frame::{FnSystem, FrameConfig, FrameContext, FrameLoop};
//! use ecs_store::{Component, Store};
//!
//! struct Age(f64);
//! impl Component for Age {}
//!
//! let mut frame_loop = FrameLoop::new(FrameConfig::default()).unwrap();
//! let e = frame_loop.store_mut().spawn();
//! frame_loop.store_mut().attach(e, Age(0.0));
//!
//! frame_loop
//!     .add_system(FnSystem::new("age", |store: &mut Store, ctx: &FrameContext| {
//!         for (_, age) in store.iter_mut::<Age>() {
//!             age.0 += ctx.dt;
//!         }
//!         Ok(())
//!     }))
//!     .unwrap();
//!
//! frame_loop.frame(0.5);
//! assert_eq!(frame_loop.store().get::<Age>(e).map(|a| a.0), Some(0.5));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod frame;
pub mod registry;
pub mod system;

pub use config::FrameConfig;
pub use context::FrameContext;
pub use error::FrameError;
pub use frame::{FrameLoop, FrameReport};
pub use registry::SystemRegistry;
pub use system::{FnSystem, System};
