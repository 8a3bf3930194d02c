//! Pair comparison scenarios
//!
//! A sparse table keyed by unordered [`TypePair`]. Misses are ordinary: most
//! pairs have no curated scenario.

use crate::error::{require_text, CatalogError, CatalogResult};
use ennea_model::{PairComparison, TypeNumber, TypePair};
use indexmap::IndexMap;

/// Sparse, symmetric table of comparison scenarios
#[derive(Debug, Clone, Default)]
pub struct ComparisonCatalog {
    /// Pair -> scenario, in table insertion order
    by_pair: IndexMap<TypePair, PairComparison>,
}

impl ComparisonCatalog {
    /// Build and validate
    ///
    /// # Errors
    /// - [`CatalogError::ResponseMismatch`] if both responses name one type
    /// - [`CatalogError::DuplicateComparison`] if a pair is curated twice in
    ///   either order
    /// - [`CatalogError::EmptyField`] for blank text
    pub fn new(records: Vec<PairComparison>) -> CatalogResult<Self> {
        let mut by_pair = IndexMap::with_capacity(records.len());
        for record in records {
            let pair = record
                .pair()
                .ok_or(CatalogError::ResponseMismatch(record.type_a_response.type_number))?;
            let id = format!("comparison {pair}");
            require_text(&id, "scenario", &record.scenario)?;
            require_text(&id, "key_distinction", &record.key_distinction)?;
            require_text(&id, "type_a_response", &record.type_a_response.response)?;
            require_text(&id, "type_b_response", &record.type_b_response.response)?;

            if by_pair.insert(pair, record).is_some() {
                return Err(CatalogError::DuplicateComparison(pair));
            }
        }
        Ok(Self { by_pair })
    }

    /// Scenario for `a` and `b` in either order
    ///
    /// `None` when the pair is uncurated or `a == b`.
    #[must_use]
    pub fn comparison_for_pair(&self, a: TypeNumber, b: TypeNumber) -> Option<&PairComparison> {
        let pair = TypePair::new(a, b).ok()?;
        self.by_pair.get(&pair)
    }

    /// Every scenario that includes `type_number`, in insertion order
    #[must_use]
    pub fn comparisons_for_type(&self, type_number: TypeNumber) -> Vec<&PairComparison> {
        self.by_pair
            .iter()
            .filter(|(pair, _)| pair.contains(type_number))
            .map(|(_, record)| record)
            .collect()
    }

    /// Curated pairs in insertion order
    pub fn pairs(&self) -> impl Iterator<Item = TypePair> + '_ {
        self.by_pair.keys().copied()
    }

    /// All scenarios in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PairComparison> {
        self.by_pair.values()
    }

    /// Number of curated pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_pair.len()
    }

    /// Whether no pair is curated
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_pair.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ennea_model::TypeResponse;

    fn t(n: u8) -> TypeNumber {
        TypeNumber::new(n).unwrap()
    }

    fn scenario(a: u8, b: u8, text: &str) -> PairComparison {
        PairComparison {
            scenario: text.into(),
            type_a_response: TypeResponse {
                type_number: t(a),
                response: format!("{a} responds"),
            },
            type_b_response: TypeResponse {
                type_number: t(b),
                response: format!("{b} responds"),
            },
            key_distinction: "distinct".into(),
        }
    }

    #[test]
    fn lookup_is_symmetric() {
        let catalog = ComparisonCatalog::new(vec![scenario(9, 2, "move")]).unwrap();
        let forward = catalog.comparison_for_pair(t(2), t(9)).unwrap();
        let backward = catalog.comparison_for_pair(t(9), t(2)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.scenario, "move");
    }

    #[test]
    fn same_type_lookup_is_none() {
        let catalog = ComparisonCatalog::new(vec![scenario(1, 6, "x")]).unwrap();
        assert!(catalog.comparison_for_pair(t(1), t(1)).is_none());
    }

    #[test]
    fn reversed_duplicate_is_rejected() {
        let err = ComparisonCatalog::new(vec![scenario(4, 5, "a"), scenario(5, 4, "b")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateComparison(_)));
    }

    #[test]
    fn same_type_responses_are_rejected() {
        let err = ComparisonCatalog::new(vec![scenario(3, 3, "a")]).unwrap_err();
        assert!(matches!(err, CatalogError::ResponseMismatch(_)));
    }

    #[test]
    fn comparisons_for_type_keeps_insertion_order() {
        let catalog = ComparisonCatalog::new(vec![
            scenario(4, 6, "first"),
            scenario(1, 6, "second"),
            scenario(2, 9, "third"),
            scenario(6, 8, "fourth"),
        ])
        .unwrap();
        let scenarios: Vec<_> = catalog
            .comparisons_for_type(t(6))
            .into_iter()
            .map(|c| c.scenario.as_str())
            .collect();
        assert_eq!(scenarios, vec!["first", "second", "fourth"]);
    }
}
