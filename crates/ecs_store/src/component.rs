//! Core [`Component`] trait and type identity.
//!
//! Every record stored in a [`Store`](crate::Store) implements [`Component`].
//! Tables are keyed by [`ComponentTypeId`], which wraps the Rust [`TypeId`]
//! of the record type, so two distinct types never share a table even when
//! their names collide.

use std::any::TypeId;

/// The core component trait.
///
/// Components are plain data records. The trait has no required methods; it
/// only marks a type as storable and gives it a human-readable name for
/// diagnostics.
///
/// # Examples
///
/// ```rust
/// use ecs_store::Component;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Health {
///     current: f32,
///     max: f32,
/// }
///
/// impl Component for Health {
///     fn type_name() -> &'static str {
///         "Health"
///     }
/// }
/// ```
pub trait Component: Sized + Send + Sync + 'static {
    /// A human-readable name for this component type.
    ///
    /// Defaults to the full Rust type path.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the [`ComponentTypeId`] for this component.
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::of::<Self>()
    }
}

/// A unique identifier for a component type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(TypeId);

impl ComponentTypeId {
    /// Compute the [`ComponentTypeId`] for a component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self(TypeId::of::<T>())
    }
}
