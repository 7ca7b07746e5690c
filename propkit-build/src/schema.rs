//! Derivation of validated per-kind schemas from entity descriptions.

use std::collections::{BTreeMap, HashMap};

use log::debug;
use propkit::ValueKind;
use propkit::model::{EntityDef, FieldDef};

use crate::errors::{SchemaError, SchemaResult};
use crate::registry::Registry;
use crate::type_map::{Unsupported, map_type};

const NO_INDEX: &str = "noindex";

/// One stored field of one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Field identifier on the struct.
    pub field: String,
    /// Property name in the store.
    pub name: String,
    pub kind: ValueKind,
    pub multiple: bool,
    pub no_index: bool,
}

/// Validated description of one kind.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Registry key, written as the kind discriminator.
    pub key: String,
    /// Rust type name; generated identifiers are derived from it.
    pub kind: String,
    /// Properties in field declaration order.
    pub properties: Vec<Property>,
    by_name: BTreeMap<String, usize>,
    by_field: BTreeMap<String, usize>,
    /// Multi-valued fields, sorted.
    pub sequence_fields: Vec<String>,
}

impl Schema {
    pub fn get_by_name(&self, name: &str) -> Option<&Property> {
        self.by_name.get(name).map(|&idx| &self.properties[idx])
    }

    pub fn get_by_field(&self, field: &str) -> Option<&Property> {
        self.by_field.get(field).map(|&idx| &self.properties[idx])
    }

    /// Properties in alphabetical order of stored name.
    pub fn by_name(&self) -> impl Iterator<Item = &Property> {
        self.by_name.values().map(|&idx| &self.properties[idx])
    }

    /// Properties in alphabetical order of field name.
    pub fn by_field(&self) -> impl Iterator<Item = &Property> {
        self.by_field.values().map(|&idx| &self.properties[idx])
    }

    /// Properties that get query constants, in declaration order.
    pub fn indexed(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|prop| !prop.no_index)
    }
}

/// Derive schemas for every registered kind, sorted by kind name.
pub fn derive_schemas(registry: &Registry) -> SchemaResult<Vec<Schema>> {
    registry
        .sorted_entries()?
        .into_iter()
        .map(|(key, def)| derive_schema(key, def))
        .collect()
}

/// Derive the schema for a single kind.
pub fn derive_schema(key: &str, def: &EntityDef) -> SchemaResult<Schema> {
    let kind = def.type_name.as_str();
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut properties = Vec::new();
    let mut by_name = BTreeMap::new();
    let mut by_field = BTreeMap::new();
    let mut sequence_fields = Vec::new();

    for field in def.fields.iter().filter(|field| field.exported) {
        let tag = match field.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                return Err(SchemaError::MissingTag {
                    kind: kind.to_string(),
                    field: field.name.clone(),
                });
            }
        };

        let (name, tagged_no_index) = parse_tag(kind, &field.name, tag)?;

        if let Some(previous) = seen.get(&name) {
            return Err(SchemaError::DuplicateName {
                name,
                kind: kind.to_string(),
                field: field.name.clone(),
                previous: previous.to_string(),
            });
        }
        seen.insert(name.clone(), &field.name);

        let mapping = map_type(&field.shape).map_err(|reason| unsupported(kind, field, reason))?;

        let idx = properties.len();
        properties.push(Property {
            field: field.name.clone(),
            name: name.clone(),
            kind: mapping.kind,
            multiple: mapping.multiple,
            no_index: tagged_no_index || mapping.force_no_index,
        });
        by_name.insert(name, idx);
        by_field.insert(field.name.clone(), idx);
        if mapping.multiple {
            sequence_fields.push(field.name.clone());
        }
    }

    sequence_fields.sort();
    sequence_fields.dedup();

    debug!(
        "derived schema for {key} ({kind}): {} properties, {} multi-valued",
        properties.len(),
        sequence_fields.len()
    );

    Ok(Schema {
        key: key.to_string(),
        kind: kind.to_string(),
        properties,
        by_name,
        by_field,
        sequence_fields,
    })
}

/// Parse `name` or `name,noindex`. Returns the trimmed name and the no-index flag.
fn parse_tag(kind: &str, field: &str, tag: &str) -> SchemaResult<(String, bool)> {
    let invalid = || SchemaError::InvalidTag {
        kind: kind.to_string(),
        field: field.to_string(),
        tag: tag.to_string(),
    };

    let segments: Vec<&str> = tag.split(',').collect();
    let (name, no_index) = match segments.as_slice() {
        [name] => (*name, false),
        [name, flag] if *flag == NO_INDEX => (*name, true),
        _ => return Err(invalid()),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(SchemaError::EmptyName {
            kind: kind.to_string(),
            field: field.to_string(),
            tag: tag.to_string(),
        });
    }
    Ok((name.to_string(), no_index))
}

fn unsupported(kind: &str, field: &FieldDef, reason: Unsupported) -> SchemaError {
    let (kind, field, ty) = (kind.to_string(), field.name.clone(), field.shape.to_string());
    match reason {
        Unsupported::Type => SchemaError::UnsupportedType { kind, field, ty },
        Unsupported::Element => SchemaError::UnsupportedElement { kind, field, ty },
    }
}
