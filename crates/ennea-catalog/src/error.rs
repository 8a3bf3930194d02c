//! Error types for catalog construction
//!
//! Every variant describes a content defect found while building a catalog.
//! Lookups never fail: total catalogs are proven total when they are built,
//! and sparse catalogs report absence with `Option`.

use ennea_model::{ModelError, RelationshipKey, SubtypeKey, TypeNumber, TypePair};

/// Catalog integrity violations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A cell of the 9x3 subtype grid has no record
    #[error("subtype catalog is missing {0}")]
    MissingSubtype(SubtypeKey),

    /// A cell of the subtype grid has more than one record
    #[error("subtype catalog has more than one record for {0}")]
    DuplicateSubtype(SubtypeKey),

    /// A type has no vignette
    #[error("vignette catalog is missing type {0}")]
    MissingVignette(TypeNumber),

    /// A type has more than one vignette
    #[error("vignette catalog has more than one record for type {0}")]
    DuplicateVignette(TypeNumber),

    /// A type has no profile
    #[error("type profiles are missing type {0}")]
    MissingProfile(TypeNumber),

    /// A type has more than one profile
    #[error("type profiles have more than one record for type {0}")]
    DuplicateProfile(TypeNumber),

    /// Profile names a center other than the type's own
    #[error("profile for type {type_number} claims center {claimed}, expected {expected}")]
    CenterMismatch {
        /// Profiled type
        type_number: TypeNumber,
        /// Center written in the record
        claimed: String,
        /// Center implied by the type number
        expected: String,
    },

    /// Two scenarios filed under the same unordered pair
    #[error("comparison pair {0} is curated more than once")]
    DuplicateComparison(TypePair),

    /// Both responses of a scenario name the same type
    #[error("comparison responses must name two distinct types, got {0} twice")]
    ResponseMismatch(TypeNumber),

    /// Two narratives share an id
    #[error("relationship narrative {0} is defined more than once")]
    DuplicateNarrative(RelationshipKey),

    /// Symmetric store holds both orderings of one pair
    #[error("relationship narrative {key} mirrors {existing} in a symmetric store")]
    MirroredNarrative {
        /// Narrative being inserted
        key: RelationshipKey,
        /// Narrative already holding the swapped key
        existing: RelationshipKey,
    },

    /// Required text field is blank
    #[error("{record}: field '{field}' must not be empty")]
    EmptyField {
        /// Record identifier
        record: String,
        /// Field name
        field: &'static str,
    },

    /// Narrative document is not valid JSON for the record shape
    #[error("narrative document error: {0}")]
    Document(#[from] serde_json::Error),

    /// Out-of-domain raw value in a seed table
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl CatalogError {
    /// Create empty field error
    pub fn empty_field(record: impl ToString, field: &'static str) -> Self {
        Self::EmptyField {
            record: record.to_string(),
            field,
        }
    }
}

/// Result type alias for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Reject blank text fields
pub(crate) fn require_text(
    record: &impl ToString,
    field: &'static str,
    value: &str,
) -> CatalogResult<()> {
    if value.trim().is_empty() {
        Err(CatalogError::empty_field(record.to_string(), field))
    } else {
        Ok(())
    }
}

/// Reject an empty list or a blank entry
pub(crate) fn require_items(
    record: &impl ToString,
    field: &'static str,
    items: &[String],
) -> CatalogResult<()> {
    if items.is_empty() {
        return Err(CatalogError::empty_field(record.to_string(), field));
    }
    items
        .iter()
        .try_for_each(|item| require_text(record, field, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_subtype_display() {
        let key: SubtypeKey = "4sx".parse().unwrap();
        let err = CatalogError::MissingSubtype(key);
        assert_eq!(err.to_string(), "subtype catalog is missing 4sx");
    }

    #[test]
    fn require_text_rejects_whitespace() {
        let err = require_text(&"3sp", "name", "   ").unwrap_err();
        assert!(err.to_string().contains("'name'"));
        assert!(require_text(&"3sp", "name", "Security").is_ok());
    }

    #[test]
    fn require_items_rejects_empty_and_blank() {
        assert!(require_items(&"3sp", "blind_spots", &[]).is_err());
        let blank = vec!["Hoarding".to_string(), " ".to_string()];
        assert!(require_items(&"3sp", "blind_spots", &blank).is_err());
        assert!(require_items(&"3sp", "blind_spots", &blank[..1]).is_ok());
    }

    #[test]
    fn model_error_converts() {
        let err: CatalogError = ModelError::TypeOutOfRange(0).into();
        assert!(matches!(err, CatalogError::Model(_)));
    }
}
