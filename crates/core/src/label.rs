//! Label names: case-insensitive aliases for cells, ranges, columns or rows.
//!
//! Rules:
//! - Must start with an ASCII letter
//! - Can contain letters, numbers and underscores
//! - At most [`LabelName::MAX_LENGTH`] characters
//! - Cannot be a cell reference (`A1`, `BC23`) or a column (`Tax`, `XFD`)

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{ReferenceError, Result};
use crate::reference::{is_cell_reference_text, ColumnReference};

/// A validated label. Equality, ordering and hashing ignore case, the
/// original spelling is kept for printing.
#[derive(Debug, Clone)]
pub struct LabelName {
    name: String,
}

impl LabelName {
    pub const MAX_LENGTH: usize = 255;

    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate(&name)?;
        Ok(Self { name })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

fn validate(name: &str) -> Result<()> {
    let mut chars = name.char_indices();

    match chars.next() {
        None => return Err(ReferenceError::Empty { what: "label" }),
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        Some((i, _)) => return Err(ReferenceError::invalid_character(name, i)),
    }

    if let Some((i, _)) = chars.find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(ReferenceError::invalid_character(name, i));
    }

    if name.len() > LabelName::MAX_LENGTH {
        return Err(ReferenceError::InvalidLabel {
            text: name.to_string(),
            reason: "longer than 255 characters",
        });
    }

    if is_cell_reference_text(name) {
        return Err(ReferenceError::InvalidLabel {
            text: name.to_string(),
            reason: "looks like a cell reference",
        });
    }

    if name.parse::<ColumnReference>().is_ok() {
        return Err(ReferenceError::InvalidLabel {
            text: name.to_string(),
            reason: "looks like a column reference",
        });
    }

    Ok(())
}

impl PartialEq for LabelName {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for LabelName {}

impl Hash for LabelName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.name.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for LabelName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LabelName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .bytes()
            .map(|b| b.to_ascii_lowercase())
            .cmp(other.name.bytes().map(|b| b.to_ascii_lowercase()))
    }
}

impl fmt::Display for LabelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for LabelName {
    type Err = ReferenceError;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(text)
    }
}

text_serde!(LabelName);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_valid_names() {
        assert!(LabelName::new("Revenue").is_ok());
        assert!(LabelName::new("Sales2024").is_ok());
        assert!(LabelName::new("total_cost").is_ok());
        assert!(LabelName::new("XFE1").is_ok()); // beyond the last column
    }

    #[test]
    fn test_invalid_characters_report_position() {
        let err = LabelName::new("has space").unwrap_err();
        assert_eq!(
            err,
            ReferenceError::InvalidCharacter { character: ' ', position: 3, text: "has space".into() }
        );
        let err = LabelName::new("1abc").unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '1', position: 0, .. }));
        let err = LabelName::new("_private").unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidCharacter { character: '_', position: 0, .. }));
    }

    #[test]
    fn test_cell_reference_rejected() {
        assert!(matches!(LabelName::new("A1"), Err(ReferenceError::InvalidLabel { .. })));
        assert!(matches!(LabelName::new("xfd1048576"), Err(ReferenceError::InvalidLabel { .. })));
    }

    #[test]
    fn test_column_reference_rejected() {
        for text in ["Tax", "sum", "A", "XFD"] {
            assert!(
                matches!(LabelName::new(text), Err(ReferenceError::InvalidLabel { .. })),
                "{text} should be rejected"
            );
        }
        // Past the last column, so only a label can mean it.
        assert!(LabelName::new("XFE").is_ok());
        assert!(LabelName::new("Taxes").is_ok());
    }

    #[test]
    fn test_empty_and_too_long() {
        assert!(matches!(LabelName::new(""), Err(ReferenceError::Empty { .. })));
        let long = "a".repeat(LabelName::MAX_LENGTH + 1);
        assert!(matches!(LabelName::new(long), Err(ReferenceError::InvalidLabel { .. })));
        assert!(LabelName::new("a".repeat(LabelName::MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_case_insensitive_equality() {
        let a = LabelName::new("Revenue").unwrap();
        let b = LabelName::new("REVENUE").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(b.to_string(), "REVENUE"); // keeps spelling

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ordering() {
        let mut names: Vec<LabelName> = ["beta", "Alpha", "gamma"]
            .iter()
            .map(|n| LabelName::new(*n).unwrap())
            .collect();
        names.sort();
        let printed: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(printed, vec!["Alpha", "beta", "gamma"]);
    }
}
