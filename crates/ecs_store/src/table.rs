//! Per-type component tables.
//!
//! A [`ComponentTable`] stores every instance of one component type. Rows are
//! packed: `entities[i]` owns `rows[i]`, and an index map gives O(1) lookup
//! from entity to row. Removal swap-removes so the vectors stay dense.
//!
//! The [`Store`](crate::Store) keeps tables of different types side by side
//! behind the object-safe [`ErasedTable`] trait, which exposes only the
//! operations that do not need to know `T`: membership probes, the entity
//! list that drives queries, and whole-entity removal for the sweep.

use std::any::Any;
use std::collections::HashMap;

use crate::component::Component;
use crate::entity::Entity;

/// Homogeneous storage for a single component type.
#[derive(Debug)]
pub struct ComponentTable<T> {
    /// Entity IDs in row order. `entities[i]` corresponds to `rows[i]`.
    entities: Vec<Entity>,
    rows: Vec<T>,
    index: HashMap<Entity, usize>,
}

impl<T: Component> ComponentTable<T> {
    /// Create a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if `entity` has a row in this table.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.index.contains_key(&entity)
    }

    /// Returns the entities with a row, in row order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let row = *self.index.get(&entity)?;
        self.rows.get(row)
    }

    #[must_use]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let row = *self.index.get(&entity)?;
        self.rows.get_mut(row)
    }

    /// Insert or overwrite the row for `entity`.
    ///
    /// Returns the previous value if the entity already had one.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        if let Some(&row) = self.index.get(&entity) {
            return Some(std::mem::replace(&mut self.rows[row], value));
        }
        self.index.insert(entity, self.rows.len());
        self.entities.push(entity);
        self.rows.push(value);
        None
    }

    /// Remove the row for `entity`, returning its value if present.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let row = self.index.remove(&entity)?;
        self.entities.swap_remove(row);
        let value = self.rows.swap_remove(row);
        // The former last row now lives at `row`.
        if let Some(&moved) = self.entities.get(row) {
            self.index.insert(moved, row);
        }
        Some(value)
    }

    /// Iterate over `(entity, &component)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.rows.iter())
    }

    /// Iterate over `(entity, &mut component)` pairs in row order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.rows.iter_mut())
    }
}

impl<T: Component> Default for ComponentTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased view of a [`ComponentTable`].
pub trait ErasedTable: Send + Sync {
    /// Name of the component type stored in this table.
    fn type_name(&self) -> &'static str;

    /// Number of rows.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Membership probe.
    fn contains(&self, entity: Entity) -> bool;

    /// Entities with a row, in row order.
    fn entities(&self) -> &[Entity];

    /// Drop the row for `entity`. Returns `true` if a row was removed.
    fn remove_entity(&mut self, entity: Entity) -> bool;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedTable for ComponentTable<T> {
    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn len(&self) -> usize {
        ComponentTable::len(self)
    }

    fn contains(&self, entity: Entity) -> bool {
        ComponentTable::contains(self, entity)
    }

    fn entities(&self) -> &[Entity] {
        ComponentTable::entities(self)
    }

    fn remove_entity(&mut self, entity: Entity) -> bool {
        self.remove(entity).is_some()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
