use thiserror::Error;

/// Error returned by generated `load`/`save` routines when stored data does
/// not match the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A stored property carried a value of a different kind than the field expects.
    #[error("model: property for {kind}.{field} {}is not {expected}", element_label(.element))]
    TypeMismatch {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
        /// True when the field is multi-valued and a single element failed to narrow.
        element: bool,
    },
}

impl PropertyError {
    /// Mismatch on a single-valued field.
    pub fn mismatch(kind: &'static str, field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            kind,
            field,
            expected,
            element: false,
        }
    }

    /// Mismatch on one element of a multi-valued field.
    pub fn element_mismatch(kind: &'static str, field: &'static str, expected: &'static str) -> Self {
        Self::TypeMismatch {
            kind,
            field,
            expected,
            element: true,
        }
    }
}

fn element_label(element: &bool) -> &'static str {
    if *element { "element " } else { "" }
}

pub type PropertyResult<T> = Result<T, PropertyError>;
