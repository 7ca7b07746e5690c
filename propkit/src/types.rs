use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PropertyResult;

/// The closed set of value kinds a property can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int64,
    Float64,
    String,
    /// Raw byte sequence. Never indexed.
    Bytes,
    /// Short indexable byte string.
    ByteString,
    Timestamp,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValueKind; 7] = [
        ValueKind::Bool,
        ValueKind::Int64,
        ValueKind::Float64,
        ValueKind::String,
        ValueKind::Bytes,
        ValueKind::ByteString,
        ValueKind::Timestamp,
    ];

    /// Name of the Rust type that holds a value of this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int64 => "i64",
            ValueKind::Float64 => "f64",
            ValueKind::String => "String",
            ValueKind::Bytes => "Vec<u8>",
            ValueKind::ByteString => "ByteString",
            ValueKind::Timestamp => "DateTime<Utc>",
        }
    }

    /// Name of the matching [`Value`] variant.
    pub const fn variant_name(self) -> &'static str {
        match self {
            ValueKind::Bool => "Bool",
            ValueKind::Int64 => "Int64",
            ValueKind::Float64 => "Float64",
            ValueKind::String => "String",
            ValueKind::Bytes => "Bytes",
            ValueKind::ByteString => "ByteString",
            ValueKind::Timestamp => "Timestamp",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A short, immutable byte string that the store can index.
///
/// Use `Vec<u8>` for blobs instead; those are always stored unindexed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for ByteString {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

/// An opaque stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    ByteString(ByteString),
    Timestamp(DateTime<Utc>),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float64(_) => ValueKind::Float64,
            Value::String(_) => ValueKind::String,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::ByteString(_) => ValueKind::ByteString,
            Value::Timestamp(_) => ValueKind::Timestamp,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<ByteString> for Value {
    fn from(value: ByteString) -> Self {
        Value::ByteString(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

/// One persisted property: a named value, optionally one of several sharing the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub no_index: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            multiple: false,
            no_index: false,
        }
    }

    /// Mark this property as one element of a multi-valued field.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Exclude this property from the store's indexes.
    pub fn no_index(mut self) -> Self {
        self.no_index = true;
        self
    }
}

/// Conversion between a record and its persisted property list.
///
/// Implementations are generated by `propkit-build`; writing one by hand is
/// possible but the generated code keeps the field/property mapping in one place.
pub trait PropertyLoadSaver {
    /// Populate `self` from stored properties. Unknown property names are ignored.
    fn load(&mut self, props: Vec<Property>) -> PropertyResult<()>;

    /// Produce the property list to store for `self`.
    fn save(&self) -> PropertyResult<Vec<Property>>;
}
