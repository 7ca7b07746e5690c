//! Static description of entity types.
//!
//! `#[derive(Entity)]` records what it sees on the struct without judging it:
//! field visibility, the raw `#[datastore("...")]` annotation, and the
//! structural shape of each field's type. `propkit-build` validates all of it
//! when it derives schemas.

use std::fmt;

/// Structural shape of a field's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Bool,
    I64,
    F64,
    U8,
    Str,
    /// Exactly `Vec<u8>`.
    Bytes,
    /// [`crate::ByteString`].
    ByteString,
    /// Exactly `DateTime<Utc>`.
    Timestamp,
    /// `Vec<T>` for any `T` other than `u8`.
    Seq(Box<TypeShape>),
    /// Anything else, carrying the type as written.
    Unsupported(String),
}

impl TypeShape {
    pub fn seq(inner: TypeShape) -> Self {
        TypeShape::Seq(Box::new(inner))
    }

    pub fn unsupported(ty: impl Into<String>) -> Self {
        TypeShape::Unsupported(ty.into())
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Bool => f.write_str("bool"),
            TypeShape::I64 => f.write_str("i64"),
            TypeShape::F64 => f.write_str("f64"),
            TypeShape::U8 => f.write_str("u8"),
            TypeShape::Str => f.write_str("String"),
            TypeShape::Bytes => f.write_str("Vec<u8>"),
            TypeShape::ByteString => f.write_str("ByteString"),
            TypeShape::Timestamp => f.write_str("DateTime<Utc>"),
            TypeShape::Seq(inner) => write!(f, "Vec<{inner}>"),
            TypeShape::Unsupported(ty) => f.write_str(ty),
        }
    }
}

/// One declared field of an entity struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    /// True for `pub` fields. Everything else is skipped by the generator.
    pub exported: bool,
    /// Raw annotation, e.g. `"title"` or `"tags,noindex"`.
    pub tag: Option<String>,
    pub shape: TypeShape,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            name: name.into(),
            exported: true,
            tag: None,
            shape,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// Fields of one entity type in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityDef {
    pub type_name: String,
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

/// Implemented by `#[derive(Entity)]`.
pub trait EntityModel {
    /// Default registry key for this entity.
    const KIND: &'static str;

    fn entity_def() -> EntityDef;
}
