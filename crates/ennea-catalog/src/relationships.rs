//! Relationship narrative store
//!
//! Narratives are keyed by [`RelationshipKey`]. Whether `(A, B)` and `(B, A)`
//! resolve to the same narrative is decided once, when the store is built,
//! by its [`KeyOrder`].
//!
//! The persisted form is a [`NarrativeDocument`]: a JSON array of records in
//! authored order. The runtime store and the migration tool share it.

use crate::error::{require_text, CatalogError, CatalogResult};
use ennea_model::{Instinct, RelationshipKey, RelationshipNarrative, SubtypeKey, TypeNumber};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key-order policy for narrative lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyOrder {
    /// `(A, B)` and `(B, A)` are distinct entries
    #[default]
    Ordered,
    /// `(A, B)` also answers `(B, A)`; one narrative per unordered pair
    Symmetric,
}

/// Read-only narrative store
#[derive(Debug, Clone)]
pub struct RelationshipStore {
    by_key: IndexMap<RelationshipKey, RelationshipNarrative>,
    order: KeyOrder,
}

impl RelationshipStore {
    /// Build and validate
    ///
    /// # Errors
    /// - [`CatalogError::DuplicateNarrative`] if an id repeats
    /// - [`CatalogError::MirroredNarrative`] if a symmetric store receives
    ///   both orderings of one pair
    /// - [`CatalogError::EmptyField`] for a blank title, subtitle or narrative
    pub fn new(records: Vec<RelationshipNarrative>, order: KeyOrder) -> CatalogResult<Self> {
        let mut by_key: IndexMap<RelationshipKey, RelationshipNarrative> =
            IndexMap::with_capacity(records.len());

        for record in records {
            let key = record.key;
            require_text(&key, "title", &record.title)?;
            require_text(&key, "subtitle", &record.subtitle)?;
            require_text(&key, "narrative", &record.narrative)?;

            if by_key.contains_key(&key) {
                return Err(CatalogError::DuplicateNarrative(key));
            }
            let mirrored = key.reversed();
            if order == KeyOrder::Symmetric && mirrored != key && by_key.contains_key(&mirrored) {
                return Err(CatalogError::MirroredNarrative {
                    key,
                    existing: mirrored,
                });
            }
            by_key.insert(key, record);
        }

        tracing::debug!(
            "Relationship store built with {} narratives ({:?})",
            by_key.len(),
            order
        );
        Ok(Self { by_key, order })
    }

    /// Empty store with the given policy
    #[must_use]
    pub fn empty(order: KeyOrder) -> Self {
        Self {
            by_key: IndexMap::new(),
            order,
        }
    }

    /// Policy fixed at construction
    #[inline]
    #[must_use]
    pub fn key_order(&self) -> KeyOrder {
        self.order
    }

    /// Lookup by key under the store's policy
    #[must_use]
    pub fn get(&self, key: &RelationshipKey) -> Option<&RelationshipNarrative> {
        match self.order {
            KeyOrder::Ordered => self.by_key.get(key),
            KeyOrder::Symmetric => self
                .by_key
                .get(key)
                .or_else(|| self.by_key.get(&key.reversed())),
        }
    }

    /// Lookup by the four selector values
    #[must_use]
    pub fn story(
        &self,
        type_a: TypeNumber,
        instinct_a: Instinct,
        type_b: TypeNumber,
        instinct_b: Instinct,
    ) -> Option<&RelationshipNarrative> {
        self.get(&RelationshipKey::from_parts(type_a, instinct_a, type_b, instinct_b))
    }

    /// Lookup by textual id such as `4sx-8so`
    ///
    /// Malformed ids are a miss.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&RelationshipNarrative> {
        let key = id.parse::<RelationshipKey>().ok()?;
        self.get(&key)
    }

    /// Every narrative that involves `subtype`, in authored order
    #[must_use]
    pub fn stories_for_subtype(&self, subtype: SubtypeKey) -> Vec<&RelationshipNarrative> {
        self.by_key
            .values()
            .filter(|n| n.key.involves(subtype))
            .collect()
    }

    /// All narratives in authored order
    pub fn iter(&self) -> impl Iterator<Item = &RelationshipNarrative> {
        self.by_key.values()
    }

    /// Number of narratives
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Whether the store holds no narratives
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Persisted narrative records, in authored order
///
/// Serialized as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NarrativeDocument {
    records: Vec<RelationshipNarrative>,
}

impl NarrativeDocument {
    /// Wrap records
    #[inline]
    #[must_use]
    pub fn new(records: Vec<RelationshipNarrative>) -> Self {
        Self { records }
    }

    /// Parse JSON text
    ///
    /// # Errors
    /// Returns [`CatalogError::Document`] for malformed JSON or invalid ids
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render as pretty JSON with a trailing newline
    ///
    /// # Errors
    /// Returns [`CatalogError::Document`] if serialization fails
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Records in document order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[RelationshipNarrative] {
        &self.records
    }

    /// Record with exactly this id
    #[must_use]
    pub fn get(&self, key: &RelationshipKey) -> Option<&RelationshipNarrative> {
        self.records.iter().find(|r| r.key == *key)
    }

    /// Mutable record with exactly this id
    pub fn get_mut(&mut self, key: &RelationshipKey) -> Option<&mut RelationshipNarrative> {
        self.records.iter_mut().find(|r| r.key == *key)
    }

    /// Unwrap into records
    #[inline]
    #[must_use]
    pub fn into_records(self) -> Vec<RelationshipNarrative> {
        self.records
    }
}
