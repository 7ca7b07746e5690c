//! Classification of field types into stored value kinds.

use propkit::{TypeShape, ValueKind};

/// How a field is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub kind: ValueKind,
    pub multiple: bool,
    /// Raw byte sequences can't be indexed, whatever the annotation says.
    pub force_no_index: bool,
}

impl TypeMapping {
    const fn single(kind: ValueKind) -> Self {
        Self {
            kind,
            multiple: false,
            force_no_index: false,
        }
    }
}

/// Why a shape could not be mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// The field type itself is outside the supported set.
    Type,
    /// The field is a `Vec` whose element type is outside the supported set.
    Element,
}

pub fn map_type(shape: &TypeShape) -> Result<TypeMapping, Unsupported> {
    match shape {
        TypeShape::Bytes => Ok(TypeMapping {
            kind: ValueKind::Bytes,
            multiple: false,
            force_no_index: true,
        }),
        TypeShape::ByteString => Ok(TypeMapping::single(ValueKind::ByteString)),
        TypeShape::Timestamp => Ok(TypeMapping::single(ValueKind::Timestamp)),
        TypeShape::Bool => Ok(TypeMapping::single(ValueKind::Bool)),
        TypeShape::F64 => Ok(TypeMapping::single(ValueKind::Float64)),
        TypeShape::I64 => Ok(TypeMapping::single(ValueKind::Int64)),
        TypeShape::Str => Ok(TypeMapping::single(ValueKind::String)),
        TypeShape::Seq(element) => match element.as_ref() {
            // A list of blobs: one unindexed property per blob.
            TypeShape::Bytes => Ok(TypeMapping {
                kind: ValueKind::Bytes,
                multiple: true,
                force_no_index: true,
            }),
            TypeShape::Str => Ok(TypeMapping {
                kind: ValueKind::String,
                multiple: true,
                force_no_index: false,
            }),
            _ => Err(Unsupported::Element),
        },
        TypeShape::U8 | TypeShape::Unsupported(_) => Err(Unsupported::Type),
    }
}
