//! # ecs_store
//!
//! Entity-component storage and query engine for frame-driven simulations.
//!
//! This crate provides:
//!
//! - [`Entity`]: opaque `u64` identifiers, never recycled.
//! - [`Component`]: the marker trait every stored record implements.
//! - [`ComponentTable`]: homogeneous per-type storage.
//! - [`QueryDescriptor`] / [`Query`]: "has all of these, none of those"
//!   queries driven from the smallest table.
//! - [`Store`]: the facade systems use: attach, fetch, detach, query,
//!   destroy (deferred), and sweep.
//!
//! ## Usage
//!
//! ```rust
//! use ecs_store::{Component, Store};
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Timer {
//!     current: f64,
//!     target: f64,
//! }
//!
//! impl Component for Timer {}
//!
//! let mut store = Store::new();
//! let e = store.spawn();
//! store.attach(e, Timer { current: 0.0, target: 0.2 });
//!
//! if let Some(timer) = store.get_mut::<Timer>(e) {
//!     timer.current += 0.25;
//! }
//! for entity in store.query::<(Timer,)>() {
//!     store.destroy(entity);
//! }
//!
//! // Still visible until the sweep.
//! assert!(store.has::<Timer>(e));
//! store.sweep();
//! assert!(store.get::<Timer>(e).is_none());
//! ```

pub mod component;
pub mod destruction;
pub mod entity;
pub mod error;
pub mod query;
pub mod store;
pub mod table;

pub use component::{Component, ComponentTypeId};
pub use destruction::DestructionBuffer;
pub use entity::{Entity, EntityAllocator};
pub use error::StoreError;
pub use query::{Query, QueryDescriptor};
pub use store::Store;
pub use table::{ComponentTable, ErasedTable};
