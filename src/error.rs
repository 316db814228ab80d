use std::fmt;

use thiserror::Error;

/// Failure classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Arity,
    Shape,
    ElementType,
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Arity => write!(f, "ArityError"),
            ErrorKind::Shape => write!(f, "ShapeError"),
            ErrorKind::ElementType => write!(f, "ElementTypeError"),
            ErrorKind::Range => write!(f, "RangeError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("Arity Error: {0}")]
    Arity(String),

    #[error("Shape Error: {0}")]
    Shape(String),

    #[error("Element Type Error: index set {set} has elements of type {found}, expected unsigned integer")]
    ElementType { set: usize, found: String },

    /// `value` is kept signed and wide so negative host values are reported as given.
    #[error("Range Error: index set {set}, element {element}: value {value} is outside [0, {length})")]
    Range {
        set: usize,
        element: usize,
        value: i128,
        length: u64,
    },
}

impl MaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MaskError::Arity(_) => ErrorKind::Arity,
            MaskError::Shape(_) => ErrorKind::Shape,
            MaskError::ElementType { .. } => ErrorKind::ElementType,
            MaskError::Range { .. } => ErrorKind::Range,
        }
    }

    /// Stable identifier hosts can map onto their own error ids.
    pub fn identifier(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Arity => "index_mask:arity",
            ErrorKind::Shape => "index_mask:shape",
            ErrorKind::ElementType => "index_mask:element_type",
            ErrorKind::Range => "index_mask:range",
        }
    }

    /// Position of the index set that failed, if the failure is tied to one.
    pub fn set_position(&self) -> Option<usize> {
        match self {
            MaskError::ElementType { set, .. } | MaskError::Range { set, .. } => Some(*set),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MaskError>;
