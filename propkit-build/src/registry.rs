//! The set of entity kinds to generate code for.

use propkit::model::{EntityDef, EntityModel};
use propkit::registration::registered_entities;

use crate::errors::{SchemaError, SchemaResult};

/// Maps kind names to entity descriptions.
///
/// The kind name is the persisted discriminator; the entity's type name is
/// what generated identifiers are derived from. They usually match.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, EntityDef)>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every entity submitted by `#[derive(Entity)]` in the linked binary.
    pub fn from_inventory() -> Self {
        let mut registry = Self::new();
        for registration in registered_entities() {
            registry.push(registration.kind, (registration.def_fn)());
        }
        registry
    }

    /// Register `T` under its declared kind.
    pub fn register<T: EntityModel>(self) -> Self {
        self.insert(T::KIND, T::entity_def())
    }

    /// Register `T` under an explicit kind name.
    pub fn register_as<T: EntityModel>(self, kind: impl Into<String>) -> Self {
        self.insert(kind, T::entity_def())
    }

    pub fn insert(mut self, kind: impl Into<String>, def: EntityDef) -> Self {
        self.push(kind, def);
        self
    }

    pub fn extend(&mut self, other: Registry) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, kind: impl Into<String>, def: EntityDef) {
        self.entries.push((kind.into(), def));
    }

    /// Entries sorted by kind name.
    ///
    /// The same entity registered twice under one kind (explicitly and through
    /// the inventory, say) collapses to one entry; two different entities
    /// claiming one kind is an error.
    pub fn sorted_entries(&self) -> SchemaResult<Vec<(&str, &EntityDef)>> {
        let mut entries: Vec<(&str, &EntityDef)> =
            self.entries.iter().map(|(kind, def)| (kind.as_str(), def)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.type_name.cmp(&b.1.type_name)));

        let mut deduped: Vec<(&str, &EntityDef)> = Vec::with_capacity(entries.len());
        for (kind, def) in entries {
            if let Some((prev_kind, prev_def)) = deduped.last()
                && *prev_kind == kind
            {
                if *prev_def == def {
                    continue;
                }
                return Err(SchemaError::DuplicateKind {
                    kind: kind.to_string(),
                    first: prev_def.type_name.clone(),
                    second: def.type_name.clone(),
                });
            }
            deduped.push((kind, def));
        }
        Ok(deduped)
    }
}
