//! Side-by-side comparison panel
//!
//! Resolves compare-mode content: both profiles, the instinct-filtered
//! subtypes of each side, the curated scenario if one exists and, when both
//! sides name a specific instinct, the relationship narrative.

use crate::config::ViewConfig;
use ennea_catalog::Catalog;
use ennea_model::{
    InstinctFilter, PairComparison, RelationshipNarrative, Subtype, TypeNumber, TypeProfile,
};

/// One column of the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSide<'c> {
    /// Column's type profile
    pub profile: &'c TypeProfile,
    /// Subtypes admitted by the column's instinct selector
    pub subtypes: Vec<&'c Subtype>,
}

/// Resolved compare-mode content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePanel<'c> {
    /// Primary type column
    pub left: CompareSide<'c>,
    /// Second type column
    pub right: CompareSide<'c>,
    /// Curated scenario, absent for most pairs
    pub scenario: Option<&'c PairComparison>,
    /// Narrative for the two selected subtypes
    pub story: Option<&'c RelationshipNarrative>,
}

impl<'c> ComparePanel<'c> {
    /// Resolve from explicit selections
    #[must_use]
    pub fn resolve(
        catalog: &'c Catalog,
        left: (TypeNumber, InstinctFilter),
        right: (TypeNumber, InstinctFilter),
    ) -> Self {
        let side = |(type_number, filter): (TypeNumber, InstinctFilter)| CompareSide {
            profile: catalog.profile(type_number),
            subtypes: catalog.subtypes().select(type_number, filter),
        };

        let story = match (left.1, right.1) {
            (InstinctFilter::Only(a), InstinctFilter::Only(b)) => {
                catalog.subtype_relationship_story(left.0, a, right.0, b)
            }
            _ => None,
        };

        Self {
            left: side(left),
            right: side(right),
            scenario: catalog.comparison_for_pair(left.0, right.0),
            story,
        }
    }

    /// Resolve from the page configuration, whatever its mode
    #[must_use]
    pub fn from_config(catalog: &'c Catalog, config: &ViewConfig) -> Self {
        Self::resolve(
            catalog,
            (config.type_number, config.instinct),
            (config.compare_type, config.compare_instinct),
        )
    }

    /// Whether the optional scenario section has content
    #[inline]
    #[must_use]
    pub fn has_scenario(&self) -> bool {
        self.scenario.is_some()
    }
}
