//! Lookup keys
//!
//! - [`SubtypeKey`]: `(type, instinct)`, text form `4sx`
//! - [`TypePair`]: unordered pair of distinct types, text form `2/7`
//! - [`RelationshipKey`]: ordered pair of subtypes, text form `4sx-8so`

use crate::error::ModelError;
use crate::instinct::Instinct;
use crate::number::TypeNumber;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A cell of the 9x3 subtype grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubtypeKey {
    type_number: TypeNumber,
    instinct: Instinct,
}

impl SubtypeKey {
    /// Create key
    #[inline]
    #[must_use]
    pub fn new(type_number: TypeNumber, instinct: Instinct) -> Self {
        Self {
            type_number,
            instinct,
        }
    }

    /// Type component
    #[inline]
    #[must_use]
    pub fn type_number(&self) -> TypeNumber {
        self.type_number
    }

    /// Instinct component
    #[inline]
    #[must_use]
    pub fn instinct(&self) -> Instinct {
        self.instinct
    }

    /// Every key, type-major then sp/so/sx
    #[must_use]
    pub fn all() -> Vec<SubtypeKey> {
        TypeNumber::ALL
            .into_iter()
            .flat_map(|t| Instinct::ALL.into_iter().map(move |i| SubtypeKey::new(t, i)))
            .collect()
    }

    /// Flat grid position, `0..27`
    #[inline]
    #[must_use]
    pub fn grid_index(&self) -> usize {
        self.type_number.index() * 3 + self.instinct.index()
    }
}

impl FromStr for SubtypeKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidSubtypeKey(trimmed.to_string());
        if trimmed.len() != 3 || !trimmed.is_ascii() {
            return Err(invalid());
        }
        let (digit, code) = trimmed.split_at(1);
        let type_number = digit.parse::<TypeNumber>().map_err(|_| invalid())?;
        let instinct = code.parse::<Instinct>().map_err(|_| invalid())?;
        Ok(Self::new(type_number, instinct))
    }
}

impl TryFrom<String> for SubtypeKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubtypeKey> for String {
    fn from(value: SubtypeKey) -> Self {
        value.to_string()
    }
}

impl Display for SubtypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.type_number, self.instinct)
    }
}

/// Unordered pair of two distinct types
///
/// Stored normalized so that `low < high`; `TypePair::new(a, b)` and
/// `TypePair::new(b, a)` are equal. Serialized as `"2/7"`; deserialization
/// goes through [`TypePair::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypePair {
    low: TypeNumber,
    high: TypeNumber,
}

impl TypePair {
    /// Create normalized pair
    ///
    /// # Errors
    /// Returns [`ModelError::SameTypePair`] when `a == b`
    pub fn new(a: TypeNumber, b: TypeNumber) -> Result<Self, ModelError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(ModelError::SameTypePair(a)),
        }
    }

    /// Smaller member
    #[inline]
    #[must_use]
    pub fn low(&self) -> TypeNumber {
        self.low
    }

    /// Larger member
    #[inline]
    #[must_use]
    pub fn high(&self) -> TypeNumber {
        self.high
    }

    /// Whether `t` is a member
    #[inline]
    #[must_use]
    pub fn contains(&self, t: TypeNumber) -> bool {
        self.low == t || self.high == t
    }

    /// The member that is not `t`, if `t` is a member
    #[must_use]
    pub fn partner_of(&self, t: TypeNumber) -> Option<TypeNumber> {
        if t == self.low {
            Some(self.high)
        } else if t == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    /// Every possible pair, lexicographic
    #[must_use]
    pub fn all() -> Vec<TypePair> {
        let mut pairs = Vec::with_capacity(36);
        for (i, a) in TypeNumber::ALL.iter().enumerate() {
            for b in &TypeNumber::ALL[i + 1..] {
                pairs.push(TypePair { low: *a, high: *b });
            }
        }
        pairs
    }
}

impl FromStr for TypePair {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (a, b) = trimmed
            .split_once('/')
            .ok_or_else(|| ModelError::InvalidTypePair(trimmed.to_string()))?;
        Self::new(a.parse()?, b.parse()?)
    }
}

impl TryFrom<String> for TypePair {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypePair> for String {
    fn from(value: TypePair) -> Self {
        value.to_string()
    }
}

impl Display for TypePair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.low, self.high)
    }
}

/// Key of a relationship narrative: two subtypes in authored order
///
/// Whether the reversed key resolves to the same narrative is decided by the
/// store's key-order policy, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelationshipKey {
    first: SubtypeKey,
    second: SubtypeKey,
}

impl RelationshipKey {
    /// Create key in the given order
    #[inline]
    #[must_use]
    pub fn new(first: SubtypeKey, second: SubtypeKey) -> Self {
        Self { first, second }
    }

    /// Create from the four selector values
    #[inline]
    #[must_use]
    pub fn from_parts(
        type_a: TypeNumber,
        instinct_a: Instinct,
        type_b: TypeNumber,
        instinct_b: Instinct,
    ) -> Self {
        Self::new(
            SubtypeKey::new(type_a, instinct_a),
            SubtypeKey::new(type_b, instinct_b),
        )
    }

    /// First subtype
    #[inline]
    #[must_use]
    pub fn first(&self) -> SubtypeKey {
        self.first
    }

    /// Second subtype
    #[inline]
    #[must_use]
    pub fn second(&self) -> SubtypeKey {
        self.second
    }

    /// Same subtypes, swapped
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Order-independent form (smaller subtype first)
    #[must_use]
    pub fn canonical(&self) -> Self {
        if self.second < self.first {
            self.reversed()
        } else {
            *self
        }
    }

    /// Whether either side is `key`
    #[inline]
    #[must_use]
    pub fn involves(&self, key: SubtypeKey) -> bool {
        self.first == key || self.second == key
    }
}

impl FromStr for RelationshipKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ModelError::InvalidRelationshipKey(trimmed.to_string());
        let (first, second) = trimmed.split_once('-').ok_or_else(invalid)?;
        let first = first.parse::<SubtypeKey>().map_err(|_| invalid())?;
        let second = second.parse::<SubtypeKey>().map_err(|_| invalid())?;
        Ok(Self::new(first, second))
    }
}

impl TryFrom<String> for RelationshipKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RelationshipKey> for String {
    fn from(value: RelationshipKey) -> Self {
        value.to_string()
    }
}

impl Display for RelationshipKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(n: u8) -> TypeNumber {
        TypeNumber::new(n).unwrap()
    }

    #[test]
    fn subtype_key_parse_and_display() {
        let key: SubtypeKey = "4sx".parse().unwrap();
        assert_eq!(key.type_number(), t(4));
        assert_eq!(key.instinct(), Instinct::Sexual);
        assert_eq!(key.to_string(), "4sx");
    }

    #[test]
    fn subtype_key_rejects_malformed() {
        for raw in ["", "4", "0sp", "4xx", "10sp", "4spx", "é4s"] {
            assert!(raw.parse::<SubtypeKey>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn subtype_key_grid_is_dense() {
        let keys = SubtypeKey::all();
        assert_eq!(keys.len(), 27);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(key.grid_index(), i);
        }
    }

    #[test]
    fn type_pair_normalizes() {
        let ab = TypePair::new(t(6), t(2)).unwrap();
        let ba = TypePair::new(t(2), t(6)).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.low(), t(2));
        assert_eq!(ab.partner_of(t(6)), Some(t(2)));
        assert_eq!(ab.partner_of(t(5)), None);
    }

    #[test]
    fn type_pair_rejects_same_type() {
        assert_eq!(TypePair::new(t(3), t(3)), Err(ModelError::SameTypePair(t(3))));
    }

    #[test]
    fn type_pair_parses_either_order() {
        let pair: TypePair = "7/2".parse().unwrap();
        assert_eq!(pair, TypePair::new(t(2), t(7)).unwrap());
        assert_eq!(pair.to_string(), "2/7");
        assert!("2-7".parse::<TypePair>().is_err());
        assert!("2/0".parse::<TypePair>().is_err());
    }

    #[test]
    fn type_pair_deserialize_is_checked() {
        let pair: TypePair = serde_json::from_str("\"7/2\"").unwrap();
        assert_eq!(pair, TypePair::new(t(2), t(7)).unwrap());
        assert_eq!(serde_json::to_string(&pair).unwrap(), "\"2/7\"");

        assert!(serde_json::from_str::<TypePair>("\"3/3\"").is_err());
        assert!(serde_json::from_str::<TypePair>(r#"{"low":3,"high":3}"#).is_err());
        assert!(serde_json::from_str::<TypePair>(r#"{"low":7,"high":2}"#).is_err());
    }

    #[test]
    fn all_pairs_count() {
        assert_eq!(TypePair::all().len(), 36);
    }

    #[test]
    fn relationship_key_round_trip() {
        let key: RelationshipKey = "4sx-8so".parse().unwrap();
        assert_eq!(key.first().to_string(), "4sx");
        assert_eq!(key.reversed().to_string(), "8so-4sx");
        assert_eq!(key.reversed().canonical(), key);
        assert!("4sx".parse::<RelationshipKey>().is_err());
        assert!("4sx-8".parse::<RelationshipKey>().is_err());
    }

    #[test]
    fn relationship_key_serde_as_string() {
        let key: RelationshipKey = "1sp-2so".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"1sp-2so\"");
    }
}
