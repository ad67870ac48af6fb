use alloc::string::String;

use thiserror::Error;

use crate::escape::EscapeError;

/// Failure while projecting a node tree onto a target type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The node variant is not accepted by the target shape.
    #[error("node type does not match the target type")]
    TypeMismatch,
    /// A fixed-length array target saw the wrong number of elements.
    #[error("expected an array of length {expected}, found {found}")]
    ArraySizeMismatch {
        /// Length the target demands.
        expected: usize,
        /// Length the input provided.
        found: usize,
    },
    /// A positional (tuple) struct load ran out of elements before its
    /// required fields were filled.
    #[error("tuple has too few elements for the required fields")]
    TupleSizeMismatch,
    /// A required struct field was absent from the object's class.
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    /// A string that names none of the enum's variants.
    #[error("unknown enum value `{0}`")]
    UnknownEnumValue(String),
    /// A numeric value outside the target integer's range.
    #[error("integer overflow")]
    Overflow,
    /// A character that cannot appear in the target's textual form.
    #[error("invalid character")]
    InvalidCharacter,
    /// Invalid escapes found while decoding a `json_string`.
    #[error(transparent)]
    Escape(#[from] EscapeError),
}

impl LoadError {
    /// Constructor used by [`load_enum!`](crate::load_enum) expansions.
    #[doc(hidden)]
    #[must_use]
    pub fn unknown_enum(name: &str) -> Self {
        Self::UnknownEnumValue(String::from(name))
    }
}
