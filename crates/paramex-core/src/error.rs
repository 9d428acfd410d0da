//! # Binding Errors
//!
//! Every failure the engine can produce is a [`BindError`]. All of them are terminal
//! for the current bind call: nothing is retried and nothing already written is
//! rolled back.

use std::num::{ParseFloatError, ParseIntError};

/// Errors returned by a bind call.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The argument is not a writable handle to a record (passed by value, shared or absent).
    #[error("type of {type_name} is not assignable, required mutable record reference")]
    NotAssignable { type_name: &'static str },

    /// The argument is writable but does not point at a record.
    #[error("type of {type_name} is not extractable, required record type")]
    UnsupportedType { type_name: &'static str },

    /// A tagged field has a declared type the engine cannot fill from this source.
    #[error("unsupported param type [{type_name}] for field `{field}`: {reason}")]
    UnsupportedParamType {
        field: &'static str,
        type_name: &'static str,
        reason: &'static str,
    },

    /// A resolved value could not be coerced into the field's declared type.
    #[error("error unmarshalling [{value}] into [{target}] due to {source}")]
    Unmarshal {
        field: &'static str,
        value: String,
        target: &'static str,
        #[source]
        source: ParseDiagnostic,
    },
}

/// Discriminant of [`BindError`], for matching on the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotAssignable,
    UnsupportedType,
    UnsupportedParamType,
    Unmarshal,
}

impl BindError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BindError::NotAssignable { .. } => ErrorKind::NotAssignable,
            BindError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            BindError::UnsupportedParamType { .. } => ErrorKind::UnsupportedParamType,
            BindError::Unmarshal { .. } => ErrorKind::Unmarshal,
        }
    }

    /// Name of the record field the error was raised for, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BindError::UnsupportedParamType { field, .. } | BindError::Unmarshal { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}

/// Why a raw string was rejected by the coercion table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseDiagnostic {
    #[error("invalid boolean token")]
    InvalidBool,
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("invalid UUID length: {0}")]
    UuidLength(usize),
    #[error(transparent)]
    Uuid(#[from] uuid::Error),
}
