//! Destruction buffer.
//!
//! Entities marked for destruction accumulate here until the owning
//! [`Store`](crate::Store) sweeps. Marking never touches a table, so systems
//! can destroy entities while walking a query result without invalidating it.

use std::collections::BTreeSet;

use crate::entity::Entity;

/// The set of entities awaiting the next sweep.
///
/// Ordered so a sweep purges entities in ID order, which keeps sweep logs
/// and row removal deterministic.
#[derive(Debug, Default)]
pub struct DestructionBuffer {
    marked: BTreeSet<Entity>,
}

impl DestructionBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `entity`. Returns `true` if it was not already marked.
    pub fn mark(&mut self, entity: Entity) -> bool {
        self.marked.insert(entity)
    }

    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.marked.contains(&entity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Take every marked entity, leaving the buffer empty.
    pub fn take(&mut self) -> BTreeSet<Entity> {
        std::mem::take(&mut self.marked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent() {
        let mut buffer = DestructionBuffer::new();
        let e = Entity::from_raw(1);
        assert!(buffer.mark(e));
        assert!(!buffer.mark(e));
        assert_eq!(buffer.len(), 1);
        assert!(buffer.contains(e));
    }

    #[test]
    fn test_take_empties_buffer() {
        let mut buffer = DestructionBuffer::new();
        buffer.mark(Entity::from_raw(3));
        buffer.mark(Entity::from_raw(1));
        let taken: Vec<_> = buffer.take().into_iter().collect();
        assert_eq!(taken, vec![Entity::from_raw(1), Entity::from_raw(3)]);
        assert!(buffer.is_empty());
        assert!(buffer.take().is_empty());
    }
}
