//! Error types for key parsing and construction

use crate::number::TypeNumber;

/// Errors raised when raw input does not fit the closed domains
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Integer outside `1..=9`
    #[error("type number out of range: {0} (expected 1-9)")]
    TypeOutOfRange(u8),

    /// Text that is not an integer type number
    #[error("invalid type number: '{0}'")]
    InvalidTypeNumber(String),

    /// Instinct code other than sp/so/sx
    #[error("unknown instinct code: '{0}' (expected sp, so or sx)")]
    UnknownInstinct(String),

    /// Malformed subtype key such as `"4xx"`
    #[error("invalid subtype key: '{0}'")]
    InvalidSubtypeKey(String),

    /// Malformed relationship key such as `"4sx"` without a partner
    #[error("invalid relationship key: '{0}'")]
    InvalidRelationshipKey(String),

    /// Malformed type pair such as `"2-7"`
    #[error("invalid type pair: '{0}' (expected two types such as 2/7)")]
    InvalidTypePair(String),

    /// Display mode other than single/compare
    #[error("unknown display mode: '{0}' (expected single or compare)")]
    UnknownDisplayMode(String),

    /// A comparison pair needs two distinct types
    #[error("comparison pair must contain two distinct types, got {0} twice")]
    SameTypePair(TypeNumber),
}

impl ModelError {
    /// Create invalid type number error from raw text
    pub fn invalid_type_number(raw: impl Into<String>) -> Self {
        Self::InvalidTypeNumber(raw.into())
    }

    /// Create unknown instinct error from raw text
    pub fn unknown_instinct(raw: impl Into<String>) -> Self {
        Self::UnknownInstinct(raw.into())
    }
}
