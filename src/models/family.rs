//! Family model.
//!
//! A family selects which hourly rate schedule applies to a job.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// One of the three families the babysitter works for.
///
/// Codes are case-insensitive on input and always uppercase on output.
///
/// # Example
///
/// ```
/// use babysitter_pay::models::Family;
///
/// let family: Family = "b".parse().unwrap();
/// assert_eq!(family, Family::B);
/// assert_eq!(family.code(), 'B');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    /// Family A.
    A,
    /// Family B.
    B,
    /// Family C.
    C,
}

impl Family {
    /// All families, in code order.
    pub const ALL: [Family; 3] = [Family::A, Family::B, Family::C];

    /// Returns the uppercase single-letter code.
    pub fn code(self) -> char {
        match self {
            Family::A => 'A',
            Family::B => 'B',
            Family::C => 'C',
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Family {
    type Err = EngineError;

    /// Parses a single-letter family code, ignoring case.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let family = match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_uppercase() {
                'A' => Some(Family::A),
                'B' => Some(Family::B),
                'C' => Some(Family::C),
                _ => None,
            },
            _ => None,
        };

        family.ok_or_else(|| EngineError::InvalidFamily {
            code: code.to_string(),
        })
    }
}
