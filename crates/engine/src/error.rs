//! Errors raised while parsing navigation text, editing labels and loading references.

use gridnav_core::ReferenceError;

/// Malformed navigation command text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Unknown navigation {token:?}")]
    UnknownToken { token: String },

    #[error("Navigation {command:?} is missing its {what}")]
    MissingValue { command: String, what: &'static str },

    #[error("Invalid {what} {value:?} in navigation {command:?}")]
    InvalidValue {
        command: String,
        what: &'static str,
        value: String,
    },

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// A loader declined the request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderError {
    #[error("{operation} is not supported by this loader")]
    Unsupported { operation: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelStoreError {
    #[error("Name '{0}' already exists")]
    AlreadyExists(String),

    #[error("Name '{0}' not found")]
    NotFound(String),

    #[error("Name '{0}' cannot refer to itself")]
    SelfReference(String),
}
