//! Entity auto-registration via the inventory crate.
//!
//! `#[derive(Entity)]` submits one [`EntityRegistration`] per struct, so a
//! generator binary only has to link the model crate to see every entity.

use crate::model::EntityDef;

/// Metadata submitted by the `Entity` derive macro.
pub struct EntityRegistration {
    /// Registry key, also the persisted discriminator (defaults to the type name).
    pub kind: &'static str,
    /// The Rust type name (e.g. "Post").
    pub type_name: &'static str,
    /// Function producing the entity description.
    pub def_fn: fn() -> EntityDef,
}

inventory::collect!(EntityRegistration);

/// All entities registered through the derive macro, in link order.
pub fn registered_entities() -> impl Iterator<Item = &'static EntityRegistration> {
    inventory::iter::<EntityRegistration>()
}

/// Look up a registered entity by its registry key.
pub fn get_entity_by_kind(kind: &str) -> Option<&'static EntityRegistration> {
    registered_entities().find(|e| e.kind == kind)
}
