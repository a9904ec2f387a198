//! Entity type and allocation utilities.
//!
//! An [`Entity`] is a lightweight `u64` identifier with no inherent data. It
//! only means something through the components attached to it in a
//! [`Store`](crate::Store).

use std::fmt;

/// An opaque entity identifier.
///
/// Entities are pure identifiers: they carry no data of their own and act as
/// the join key across every component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u64);

impl Entity {
    /// The "no entity" sentinel. Never returned by [`EntityAllocator::allocate`].
    pub const NULL: Entity = Entity(0);

    /// Create an entity handle from a raw `u64` identifier.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// Returns `true` if this is the [`Entity::NULL`] sentinel.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("Entity(null)")
        } else {
            write!(f, "Entity({})", self.0)
        }
    }
}

/// Hands out entity handles for one store.
///
/// The counter only moves forward: the handle of a swept entity stays dead
/// for the lifetime of the store, so a handle kept past its sweep resolves
/// to nothing instead of to whoever was spawned next.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    /// Highest raw ID handed out so far. Zero until the first spawn.
    high_water: u64,
}

impl EntityAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Next handle in sequence. The first one is `Entity(1)`.
    pub fn allocate(&mut self) -> Entity {
        self.high_water += 1;
        Entity(self.high_water)
    }

    /// Whether `entity` came out of this allocator, alive or not.
    #[must_use]
    pub fn issued(&self, entity: Entity) -> bool {
        !entity.is_null() && entity.0 <= self.high_water
    }

    /// How many handles have been handed out.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.high_water
    }
}
