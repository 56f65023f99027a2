//! Error types for reference construction, parsing and kind-specific operations.

/// All errors produced by the reference and selection model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    /// A column or row value outside `0..=max`.
    #[error("Invalid {axis} {value} not between 0 and {max}")]
    OutOfBounds {
        axis: &'static str,
        value: i64,
        max: u32,
    },

    /// Text contained a character that is not allowed at that position.
    #[error("Invalid character {character:?} at {position} in {text:?}")]
    InvalidCharacter {
        character: char,
        position: usize,
        text: String,
    },

    /// Empty or whitespace-only text where a reference was required.
    #[error("Empty {what}")]
    Empty { what: &'static str },

    /// Label text that is well formed but not acceptable as a label.
    #[error("Invalid label {text:?}: {reason}")]
    InvalidLabel { text: String, reason: &'static str },

    /// An anchor that does not fit the selection kind.
    #[error("Invalid anchor {anchor} for {selection}, valid anchors: {valid}")]
    IncompatibleAnchor {
        anchor: String,
        selection: String,
        valid: String,
    },

    /// A range with more cells than an eager structure will hold.
    #[error("Range {range} has {count} cells, more than {max}")]
    TooLarge { range: String, count: u64, max: u64 },

    /// An operation that the selection kind does not support.
    #[error("{operation} is not supported by {kind}")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReferenceError>;

impl ReferenceError {
    pub(crate) fn invalid_character(text: &str, position: usize) -> Self {
        let character = text[position..].chars().next().unwrap_or('\0');
        ReferenceError::InvalidCharacter {
            character,
            position,
            text: text.to_string(),
        }
    }

    /// Offset the reported position by `offset` bytes (used when a sub-token of a
    /// larger text failed) and replace the reported text with the full text.
    pub(crate) fn within(self, text: &str, offset: usize) -> Self {
        match self {
            ReferenceError::InvalidCharacter {
                character, position, ..
            } => ReferenceError::InvalidCharacter {
                character,
                position: position + offset,
                text: text.to_string(),
            },
            other => other,
        }
    }
}
