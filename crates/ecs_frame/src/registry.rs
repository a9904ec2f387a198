//! System registry: the ordered list of systems a frame runs.
//!
//! Systems run in registration order. Order is the only scheduling tool:
//! a system that needs to see entities destroyed earlier in the frame still
//! sees them, because the sweep only happens after the last system.

use crate::error::FrameError;
use crate::system::System;

/// Ordered registry of systems.
#[derive(Default)]
pub struct SystemRegistry {
    systems: Vec<Box<dyn System>>,
}

impl SystemRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a system to the end of the run order.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DuplicateSystem`] if a system with the same
    /// name is already registered.
    pub fn register(&mut self, system: Box<dyn System>) -> Result<(), FrameError> {
        if self.contains(system.name()) {
            return Err(FrameError::DuplicateSystem(system.name().to_string()));
        }
        self.systems.push(system);
        Ok(())
    }

    /// Remove a system by name. Returns `true` if it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        match self.systems.iter().position(|s| s.name() == name) {
            Some(pos) => {
                self.systems.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.systems.iter().any(|s| s.name() == name)
    }

    /// System names in run order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.systems.iter().map(|s| s.name()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn System>> {
        self.systems.iter_mut()
    }
}

impl std::fmt::Debug for SystemRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use ecs_store::{Store, StoreError};

    use super::*;
    use crate::context::FrameContext;
    use crate::system::FnSystem;

    fn noop(name: &str) -> Box<dyn System> {
        Box::new(FnSystem::new(
            name,
            |_: &mut Store, _: &FrameContext| -> Result<(), StoreError> { Ok(()) },
        ))
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = SystemRegistry::new();
        registry.register(noop("spawn")).unwrap();
        registry.register(noop("move")).unwrap();
        registry.register(noop("expire")).unwrap();
        assert_eq!(registry.names(), vec!["spawn", "move", "expire"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = SystemRegistry::new();
        registry.register(noop("move")).unwrap();
        let result = registry.register(noop("move"));
        assert!(matches!(result, Err(FrameError::DuplicateSystem(name)) if name == "move"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut registry = SystemRegistry::new();
        registry.register(noop("move")).unwrap();
        assert!(registry.unregister("move"));
        assert!(!registry.unregister("move"));
        assert!(registry.is_empty());
    }
}
