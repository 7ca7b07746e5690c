use thiserror::Error;

/// A model definition the generator refuses to emit code for.
///
/// Every variant carries enough context (kind, field, offending value) to find
/// the annotation that needs fixing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing datastore struct tag for {kind}.{field}")]
    MissingTag { kind: String, field: String },

    #[error("invalid struct tag for {kind}.{field}: {tag:?}")]
    InvalidTag { kind: String, field: String, tag: String },

    #[error("empty datastore field name for {kind}.{field}: {tag:?}")]
    EmptyName { kind: String, field: String, tag: String },

    #[error("datastore field name {name:?} for {kind}.{field} already used for {kind}.{previous}")]
    DuplicateName {
        name: String,
        kind: String,
        field: String,
        previous: String,
    },

    #[error("unsupported type {ty} specified for {kind}.{field}")]
    UnsupportedType { kind: String, field: String, ty: String },

    #[error("unsupported slice type {ty} specified for {kind}.{field}")]
    UnsupportedElement { kind: String, field: String, ty: String },

    #[error("kind {kind:?} registered for both {first} and {second}")]
    DuplicateKind { kind: String, first: String, second: String },

    #[error("generated constant {constant} for {kind}.{field} collides with an earlier constant")]
    ConstantCollision {
        constant: String,
        kind: String,
        field: String,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
