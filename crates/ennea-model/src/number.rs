//! TypeNumber and Center
//!
//! [`TypeNumber`] can only hold `1..=9`, so every downstream lookup keyed by
//! it is in-domain by construction.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the nine personality types
///
/// Serialized as a bare integer; deserializing a value outside `1..=9` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TypeNumber(u8);

impl TypeNumber {
    /// Every type number in ascending order
    pub const ALL: [TypeNumber; 9] = [
        TypeNumber(1),
        TypeNumber(2),
        TypeNumber(3),
        TypeNumber(4),
        TypeNumber(5),
        TypeNumber(6),
        TypeNumber(7),
        TypeNumber(8),
        TypeNumber(9),
    ];

    /// Create from a raw integer
    ///
    /// # Errors
    /// Returns [`ModelError::TypeOutOfRange`] unless `1 <= value <= 9`
    #[inline]
    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=9).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::TypeOutOfRange(value))
        }
    }

    /// Raw integer value
    #[inline]
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, `0..9`
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// The center this type belongs to
    #[must_use]
    pub fn center(self) -> Center {
        match self.0 {
            8 | 9 | 1 => Center::Gut,
            2..=4 => Center::Heart,
            _ => Center::Head,
        }
    }

    /// Following type, wrapping 9 back to 1
    #[inline]
    #[must_use]
    pub fn next_wrapping(self) -> Self {
        Self(self.0 % 9 + 1)
    }
}

impl TryFrom<u8> for TypeNumber {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeNumber> for u8 {
    fn from(value: TypeNumber) -> Self {
        value.0
    }
}

impl FromStr for TypeNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| ModelError::invalid_type_number(trimmed))?;
        Self::new(value)
    }
}

impl Display for TypeNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Intelligence center grouping three types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Center {
    /// Types 8, 9 and 1
    Gut,
    /// Types 2, 3 and 4
    Heart,
    /// Types 5, 6 and 7
    Head,
}

impl Center {
    /// All centers in conventional order
    pub const ALL: [Center; 3] = [Center::Gut, Center::Heart, Center::Head];

    /// Member types in conventional order
    #[must_use]
    pub fn types(self) -> [TypeNumber; 3] {
        let [one, two, three, four, five, six, seven, eight, nine] = TypeNumber::ALL;
        match self {
            Center::Gut => [eight, nine, one],
            Center::Heart => [two, three, four],
            Center::Head => [five, six, seven],
        }
    }

    /// Lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Center::Gut => "gut",
            Center::Heart => "heart",
            Center::Head => "head",
        }
    }
}

impl Display for Center {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
