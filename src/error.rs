//! Error types

use std::fmt;

/// Error returned when an alphabet table fails validation
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TableError {
    /// A code point is one of the forms of two different letters.
    Collision {
        ch: char,
        first: &'static str,
        second: &'static str,
    },
    /// A non-connecting-after entry does not belong to the table.
    UnknownNonConnecting(char),
    /// A letter's base code point is not a letter by general category.
    NotALetter { name: &'static str, ch: char },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Collision { ch, first, second } => write!(
                f,
                "U+{:04X} is claimed by both {} and {}",
                u32::from(*ch),
                first,
                second
            ),
            TableError::UnknownNonConnecting(ch) => write!(
                f,
                "non-connecting letter U+{:04X} is not in the alphabet",
                u32::from(*ch)
            ),
            TableError::NotALetter { name, ch } => {
                write!(f, "{} base U+{:04X} is not a letter", name, u32::from(*ch))
            }
        }
    }
}

impl std::error::Error for TableError {}
