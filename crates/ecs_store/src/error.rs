//! Store error types.
//!
//! The primitive store operations report absence through `Option`/`bool` and
//! never fail. [`StoreError`] exists for the strict accessors
//! ([`Store::require`](crate::Store::require) and friends), which let a
//! system treat a missing component as an error and propagate it with `?`.

use crate::entity::Entity;

/// Errors returned by the strict store accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The entity is alive but does not carry the requested component.
    #[error("{entity} has no {component} component")]
    MissingComponent {
        /// The entity that was probed.
        entity: Entity,
        /// Name of the component type that was requested.
        component: &'static str,
    },

    /// The entity is null, was never issued, or has already been swept.
    #[error("{0} is not alive")]
    DeadEntity(Entity),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let missing = StoreError::MissingComponent {
            entity: Entity::from_raw(4),
            component: "Timer",
        };
        assert_eq!(missing.to_string(), "Entity(4) has no Timer component");
        assert_eq!(
            StoreError::DeadEntity(Entity::NULL).to_string(),
            "Entity(null) is not alive"
        );
    }
}
