//! The entity-component store.
//!
//! [`Store`] owns the entity allocator, one [`ComponentTable`] per component
//! type, and the destruction buffer. It is the only thing systems talk to:
//! every capability check, fetch, and query goes through it.
//!
//! ## Frame contract
//!
//! - [`Store::destroy`] only marks. A marked entity keeps every component,
//!   still matches queries, and still accepts [`Store::attach`] until the next
//!   [`Store::sweep`].
//! - [`Store::sweep`] purges marked entities from every table at once and
//!   retires their IDs. Nothing else ever removes an entity.
//! - Absence is never an error: fetches return `Option`, and speculative
//!   operations on dead or component-less entities are no-ops.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::component::{Component, ComponentTypeId};
use crate::destruction::DestructionBuffer;
use crate::entity::{Entity, EntityAllocator};
use crate::error::StoreError;
use crate::query::{Query, QueryDescriptor};
use crate::table::{ComponentTable, ErasedTable};

/// Entity-component storage with deferred destruction.
pub struct Store {
    allocator: EntityAllocator,
    /// Entities that have been spawned and not yet swept.
    live: HashSet<Entity>,
    tables: HashMap<ComponentTypeId, Box<dyn ErasedTable>>,
    destruction: DestructionBuffer,
}

impl Store {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            live: HashSet::new(),
            tables: HashMap::new(),
            destruction: DestructionBuffer::new(),
        }
    }

    // -- Entity lifecycle --

    /// Create a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.live.insert(entity);
        entity
    }

    /// Returns `true` if `entity` has been spawned and not yet swept.
    ///
    /// Marked entities are still alive.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Mark `entity` for destruction at the next sweep.
    ///
    /// Returns `true` if this call marked it; `false` if it was already
    /// marked or is not alive.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.destruction.mark(entity)
    }

    /// Returns `true` if `entity` is waiting for the next sweep.
    #[must_use]
    pub fn is_marked(&self, entity: Entity) -> bool {
        self.destruction.contains(entity)
    }

    /// Purge every marked entity from every table and retire its ID.
    ///
    /// Returns the number of entities purged. Sweeping with nothing marked
    /// does nothing.
    pub fn sweep(&mut self) -> usize {
        let marked = self.destruction.take();
        if marked.is_empty() {
            return 0;
        }

        let mut rows = 0usize;
        for &entity in &marked {
            for table in self.tables.values_mut() {
                if table.remove_entity(entity) {
                    rows += 1;
                }
            }
            self.live.remove(&entity);
        }

        debug!(swept = marked.len(), rows, "swept destroyed entities");
        marked.len()
    }

    // -- Component operations --

    /// Pre-create the table for `T`. Attaching creates tables lazily, so
    /// this is only needed to make [`Store::count`] and table listings
    /// report the type before its first row.
    pub fn register<T: Component>(&mut self) {
        self.tables
            .entry(ComponentTypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentTable::<T>::new()));
    }

    /// Attach `value` to `entity`, replacing any existing `T`.
    ///
    /// Returns `false` (and drops `value`) if the entity is not alive.
    pub fn attach<T: Component>(&mut self, entity: Entity, value: T) -> bool {
        if !self.is_alive(entity) {
            trace!(%entity, component = T::type_name(), "attach to dead entity ignored");
            return false;
        }
        self.register::<T>();
        match self.table_mut::<T>() {
            Some(table) => {
                table.insert(entity, value);
                true
            }
            None => false,
        }
    }

    /// Fetch `entity`'s `T`, if it has one.
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.table::<T>()?.get(entity)
    }

    /// Fetch `entity`'s `T` for in-place mutation.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.table_mut::<T>()?.get_mut(entity)
    }

    /// Returns `true` if `entity` currently carries a `T`.
    #[must_use]
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.table::<T>().is_some_and(|table| table.contains(entity))
    }

    /// Remove `entity`'s `T`, returning it. The entity itself stays alive.
    pub fn detach<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.table_mut::<T>()?.remove(entity)
    }

    /// Fetch `entity`'s `T`, treating absence as an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DeadEntity`] if the entity is not alive, or
    /// [`StoreError::MissingComponent`] if it has no `T`.
    pub fn require<T: Component>(&self, entity: Entity) -> Result<&T, StoreError> {
        if !self.is_alive(entity) {
            return Err(StoreError::DeadEntity(entity));
        }
        self.get::<T>(entity).ok_or(StoreError::MissingComponent {
            entity,
            component: T::type_name(),
        })
    }

    /// Mutable counterpart of [`Store::require`].
    ///
    /// # Errors
    ///
    /// Same as [`Store::require`].
    pub fn require_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T, StoreError> {
        if !self.is_alive(entity) {
            return Err(StoreError::DeadEntity(entity));
        }
        self.get_mut::<T>(entity).ok_or(StoreError::MissingComponent {
            entity,
            component: T::type_name(),
        })
    }

    // -- Query --

    /// Entities carrying every component type in the tuple `Q`.
    ///
    /// The result has no meaningful order and contains each entity once.
    #[must_use]
    pub fn query<Q: Query>(&self) -> Vec<Entity> {
        self.query_with(&Q::descriptor())
    }

    /// Entities matching an explicit descriptor.
    #[must_use]
    pub fn query_with(&self, descriptor: &QueryDescriptor) -> Vec<Entity> {
        descriptor.execute(&self.tables)
    }

    /// Iterate over every `(entity, &T)` pair.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.table::<T>().into_iter().flat_map(ComponentTable::iter)
    }

    /// Iterate over every `(entity, &mut T)` pair.
    pub fn iter_mut<T: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.table_mut::<T>()
            .into_iter()
            .flat_map(ComponentTable::iter_mut)
    }

    // -- Introspection --

    /// Number of live entities, including marked ones.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.live.len()
    }

    /// Number of entities waiting for the next sweep.
    #[must_use]
    pub fn pending_destruction(&self) -> usize {
        self.destruction.len()
    }

    /// Number of entities carrying a `T`.
    #[must_use]
    pub fn count<T: Component>(&self) -> usize {
        self.table::<T>().map_or(0, ComponentTable::len)
    }

    /// Total number of entity IDs issued so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.allocator.count()
    }

    /// Names of the component types `entity` carries, sorted.
    #[must_use]
    pub fn component_names(&self, entity: Entity) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .tables
            .values()
            .filter(|table| table.contains(entity))
            .map(|table| table.type_name())
            .collect();
        names.sort_unstable();
        names
    }

    fn table<T: Component>(&self) -> Option<&ComponentTable<T>> {
        self.tables
            .get(&ComponentTypeId::of::<T>())?
            .as_any()
            .downcast_ref()
    }

    fn table_mut<T: Component>(&mut self) -> Option<&mut ComponentTable<T>> {
        self.tables
            .get_mut(&ComponentTypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("entities", &self.live.len())
            .field("tables", &self.tables.len())
            .field("pending_destruction", &self.destruction.len())
            .finish()
    }
}
