//! The [`System`] trait and a closure adapter.
//!
//! A system is per-frame logic. It owns no entity storage of its own: every
//! frame it receives the shared [`Store`], queries for the entities it cares
//! about, and mutates their components in place.

use ecs_store::{Store, StoreError};

use crate::context::FrameContext;

/// Per-frame logic driven by a [`FrameLoop`](crate::FrameLoop).
pub trait System {
    /// Unique, human-readable name used in logs and for registration.
    fn name(&self) -> &str;

    /// Run once for the current frame.
    ///
    /// # Errors
    ///
    /// A system may propagate a [`StoreError`] from the strict accessors.
    /// The frame loop logs it and moves on to the next system.
    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError>;
}

/// A [`System`] backed by a closure.
pub struct FnSystem<F> {
    name: String,
    run: F,
}

impl<F> FnSystem<F>
where
    F: FnMut(&mut Store, &FrameContext) -> Result<(), StoreError>,
{
    /// Wrap `run` as a system called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, run: F) -> Self {
        Self {
            name: name.into(),
            run,
        }
    }
}

impl<F> System for FnSystem<F>
where
    F: FnMut(&mut Store, &FrameContext) -> Result<(), StoreError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, store: &mut Store, ctx: &FrameContext) -> Result<(), StoreError> {
        (self.run)(store, ctx)
    }
}

impl<F> std::fmt::Debug for FnSystem<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSystem").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use ecs_store::Component;

    use super::*;

    struct Ticks(u64);
    impl Component for Ticks {}

    #[test]
    fn test_fn_system_runs_closure() {
        let mut store = Store::new();
        let e = store.spawn();
        store.attach(e, Ticks(0));

        let mut system = FnSystem::new("count", move |store: &mut Store, _ctx: &FrameContext| {
            store.require_mut::<Ticks>(e)?.0 += 1;
            Ok(())
        });
        assert_eq!(system.name(), "count");

        let ctx = FrameContext::new(1, 0.1);
        system.run(&mut store, &ctx).unwrap();
        system.run(&mut store, &ctx).unwrap();
        assert_eq!(store.get::<Ticks>(e).map(|t| t.0), Some(2));
    }

    #[test]
    fn test_fn_system_propagates_store_error() {
        let mut store = Store::new();
        let e = store.spawn();
        let mut system = FnSystem::new("strict", move |store: &mut Store, _ctx: &FrameContext| {
            store.require::<Ticks>(e)?;
            Ok(())
        });
        let result = system.run(&mut store, &FrameContext::new(1, 0.1));
        assert!(matches!(result, Err(StoreError::MissingComponent { .. })));
    }
}
