//! Query descriptors and the intersection engine.
//!
//! A [`QueryDescriptor`] names the component types an entity must carry and,
//! optionally, types it must not carry. [`Query`] is implemented for tuples
//! of components so systems can write `store.query::<(Position, Velocity)>()`
//! and get the descriptor built for them.
//!
//! Execution drives from the smallest required table and probes the rest,
//! so cost is bounded by the rarest requested type. Results come back in the
//! driver table's row order, which is not meaningful: callers that need a
//! stable order sort the result themselves.

use std::collections::HashMap;

use crate::component::{Component, ComponentTypeId};
use crate::entity::Entity;
use crate::table::ErasedTable;

/// Describes which entities a query matches.
///
/// Duplicate types are collapsed as they are added. A descriptor with no
/// required types matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Component types an entity must have (all of them).
    required: Vec<ComponentTypeId>,
    /// Component types an entity must NOT have (any of them excludes it).
    excluded: Vec<ComponentTypeId>,
}

impl QueryDescriptor {
    /// Create a new empty query descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require component `T`.
    #[must_use]
    pub fn with<T: Component>(self) -> Self {
        self.with_type(ComponentTypeId::of::<T>())
    }

    /// Exclude entities carrying component `T`.
    #[must_use]
    pub fn without<T: Component>(self) -> Self {
        self.without_type(ComponentTypeId::of::<T>())
    }

    /// Require a component type by id.
    #[must_use]
    pub fn with_type(mut self, type_id: ComponentTypeId) -> Self {
        if !self.required.contains(&type_id) {
            self.required.push(type_id);
        }
        self
    }

    /// Exclude a component type by id.
    #[must_use]
    pub fn without_type(mut self, type_id: ComponentTypeId) -> Self {
        if !self.excluded.contains(&type_id) {
            self.excluded.push(type_id);
        }
        self
    }

    #[must_use]
    pub fn required(&self) -> &[ComponentTypeId] {
        &self.required
    }

    #[must_use]
    pub fn excluded(&self) -> &[ComponentTypeId] {
        &self.excluded
    }

    /// Evaluate this descriptor against a set of tables.
    ///
    /// A required type with no table yet means no entity can match.
    pub(crate) fn execute(
        &self,
        tables: &HashMap<ComponentTypeId, Box<dyn ErasedTable>>,
    ) -> Vec<Entity> {
        let mut required: Vec<&dyn ErasedTable> = Vec::with_capacity(self.required.len());
        for type_id in &self.required {
            match tables.get(type_id) {
                Some(table) => required.push(&**table),
                None => return Vec::new(),
            }
        }

        let Some(driver_pos) = required
            .iter()
            .enumerate()
            .min_by_key(|(_, table)| table.len())
            .map(|(pos, _)| pos)
        else {
            return Vec::new();
        };
        let driver = required.swap_remove(driver_pos);

        let excluded: Vec<&dyn ErasedTable> = self
            .excluded
            .iter()
            .filter_map(|type_id| tables.get(type_id))
            .map(|table| &**table)
            .collect();

        driver
            .entities()
            .iter()
            .copied()
            .filter(|&entity| required.iter().all(|table| table.contains(entity)))
            .filter(|&entity| !excluded.iter().any(|table| table.contains(entity)))
            .collect()
    }
}

/// A conjunction of component types, expressed as a tuple.
pub trait Query {
    /// Build the descriptor requiring every type in the tuple.
    fn descriptor() -> QueryDescriptor;
}

macro_rules! impl_query_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Component),+> Query for ($($name,)+) {
            fn descriptor() -> QueryDescriptor {
                QueryDescriptor::new()$(.with::<$name>())+
            }
        }
    };
}

impl_query_for_tuple!(A);
impl_query_for_tuple!(A, B);
impl_query_for_tuple!(A, B, C);
impl_query_for_tuple!(A, B, C, D);
impl_query_for_tuple!(A, B, C, D, E);
impl_query_for_tuple!(A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ComponentTable;

    struct Common;
    impl Component for Common {}

    struct Rare;
    impl Component for Rare {}

    struct Frozen;
    impl Component for Frozen {}

    fn e(id: u64) -> Entity {
        Entity::from_raw(id)
    }

    fn tables() -> HashMap<ComponentTypeId, Box<dyn ErasedTable>> {
        let mut common = ComponentTable::new();
        for id in 1..=10 {
            common.insert(e(id), Common);
        }
        let mut rare = ComponentTable::new();
        rare.insert(e(3), Rare);
        rare.insert(e(7), Rare);
        rare.insert(e(42), Rare);
        let mut frozen = ComponentTable::new();
        frozen.insert(e(7), Frozen);

        let mut tables: HashMap<ComponentTypeId, Box<dyn ErasedTable>> = HashMap::new();
        tables.insert(ComponentTypeId::of::<Common>(), Box::new(common));
        tables.insert(ComponentTypeId::of::<Rare>(), Box::new(rare));
        tables.insert(ComponentTypeId::of::<Frozen>(), Box::new(frozen));
        tables
    }

    fn sorted(mut entities: Vec<Entity>) -> Vec<Entity> {
        entities.sort();
        entities
    }

    #[test]
    fn test_single_type_scan() {
        let result = <(Rare,)>::descriptor().execute(&tables());
        assert_eq!(sorted(result), vec![e(3), e(7), e(42)]);
    }

    #[test]
    fn test_intersection_is_order_independent() {
        let tables = tables();
        let ab = <(Common, Rare)>::descriptor().execute(&tables);
        let ba = <(Rare, Common)>::descriptor().execute(&tables);
        assert_eq!(sorted(ab.clone()), vec![e(3), e(7)]);
        assert_eq!(sorted(ab), sorted(ba));
    }

    #[test]
    fn test_without_filter() {
        let query = QueryDescriptor::new().with::<Rare>().without::<Frozen>();
        assert_eq!(sorted(query.execute(&tables())), vec![e(3), e(42)]);
    }

    #[test]
    fn test_missing_table_matches_nothing() {
        struct Unused;
        impl Component for Unused {}

        let result = <(Common, Unused)>::descriptor().execute(&tables());
        assert!(result.is_empty());
    }

    #[test]
    fn test_excluding_unknown_type_is_ignored() {
        struct Unused;
        impl Component for Unused {}

        let query = QueryDescriptor::new().with::<Rare>().without::<Unused>();
        assert_eq!(query.execute(&tables()).len(), 3);
    }

    #[test]
    fn test_empty_descriptor_matches_nothing() {
        assert!(QueryDescriptor::new().execute(&tables()).is_empty());
    }

    #[test]
    fn test_duplicate_types_collapse() {
        let query = <(Rare, Rare)>::descriptor();
        assert_eq!(query.required().len(), 1);
        assert_eq!(query.execute(&tables()).len(), 3);
    }

    #[test]
    fn test_required_and_excluded_same_type() {
        let query = QueryDescriptor::new().with::<Rare>().without::<Rare>();
        assert!(query.execute(&tables()).is_empty());
    }
}
