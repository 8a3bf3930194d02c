//! Catalog aggregate
//!
//! [`Catalog`] owns every content table. Build it once at startup and pass
//! `&Catalog` to whatever needs lookups; tests build their own with
//! [`Catalog::from_parts`].

use crate::builtin;
use crate::comparisons::ComparisonCatalog;
use crate::error::CatalogResult;
use crate::profiles::TypeProfiles;
use crate::relationships::RelationshipStore;
use crate::subtypes::SubtypeCatalog;
use crate::vignettes::VignetteCatalog;
use ennea_model::{
    Instinct, PairComparison, RelationshipNarrative, Subtype, TypeEssenceVignette, TypeNumber,
    TypeProfile,
};

/// All read-only content tables
#[derive(Debug, Clone)]
pub struct Catalog {
    subtypes: SubtypeCatalog,
    profiles: TypeProfiles,
    vignettes: VignetteCatalog,
    comparisons: ComparisonCatalog,
    relationships: RelationshipStore,
}

impl Catalog {
    /// Shipped content
    ///
    /// # Errors
    /// Returns an error if shipped content violates an invariant
    pub fn builtin() -> CatalogResult<Self> {
        builtin::load()
    }

    /// Assemble from already-validated tables
    #[must_use]
    pub fn from_parts(
        subtypes: SubtypeCatalog,
        profiles: TypeProfiles,
        vignettes: VignetteCatalog,
        comparisons: ComparisonCatalog,
        relationships: RelationshipStore,
    ) -> Self {
        Self {
            subtypes,
            profiles,
            vignettes,
            comparisons,
            relationships,
        }
    }

    /// Replace the relationship store, keeping every other table
    #[must_use]
    pub fn with_relationships(mut self, relationships: RelationshipStore) -> Self {
        self.relationships = relationships;
        self
    }

    /// Subtype table
    #[inline]
    #[must_use]
    pub fn subtypes(&self) -> &SubtypeCatalog {
        &self.subtypes
    }

    /// Type profiles
    #[inline]
    #[must_use]
    pub fn profiles(&self) -> &TypeProfiles {
        &self.profiles
    }

    /// Vignette table
    #[inline]
    #[must_use]
    pub fn vignettes(&self) -> &VignetteCatalog {
        &self.vignettes
    }

    /// Comparison table
    #[inline]
    #[must_use]
    pub fn comparisons(&self) -> &ComparisonCatalog {
        &self.comparisons
    }

    /// Relationship narratives
    #[inline]
    #[must_use]
    pub fn relationships(&self) -> &RelationshipStore {
        &self.relationships
    }

    /// See [`SubtypeCatalog::subtypes_by_type`]
    #[must_use]
    pub fn subtypes_by_type(&self, type_number: TypeNumber) -> Vec<&Subtype> {
        self.subtypes.subtypes_by_type(type_number)
    }

    /// See [`SubtypeCatalog::get_subtype`]
    #[must_use]
    pub fn get_subtype(&self, type_number: TypeNumber, instinct: Instinct) -> Option<&Subtype> {
        self.subtypes.get_subtype(type_number, instinct)
    }

    /// See [`SubtypeCatalog::subtypes_by_instinct`]
    #[must_use]
    pub fn subtypes_by_instinct(&self, instinct: Instinct) -> Vec<&Subtype> {
        self.subtypes.subtypes_by_instinct(instinct)
    }

    /// See [`TypeProfiles::profile`]
    #[must_use]
    pub fn profile(&self, type_number: TypeNumber) -> &TypeProfile {
        self.profiles.profile(type_number)
    }

    /// See [`VignetteCatalog::vignette_for_type`]
    #[must_use]
    pub fn vignette_for_type(&self, type_number: TypeNumber) -> &TypeEssenceVignette {
        self.vignettes.vignette_for_type(type_number)
    }

    /// See [`ComparisonCatalog::comparison_for_pair`]
    #[must_use]
    pub fn comparison_for_pair(&self, a: TypeNumber, b: TypeNumber) -> Option<&PairComparison> {
        self.comparisons.comparison_for_pair(a, b)
    }

    /// See [`ComparisonCatalog::comparisons_for_type`]
    #[must_use]
    pub fn comparisons_for_type(&self, type_number: TypeNumber) -> Vec<&PairComparison> {
        self.comparisons.comparisons_for_type(type_number)
    }

    /// See [`RelationshipStore::story`]
    #[must_use]
    pub fn subtype_relationship_story(
        &self,
        type_a: TypeNumber,
        instinct_a: Instinct,
        type_b: TypeNumber,
        instinct_b: Instinct,
    ) -> Option<&RelationshipNarrative> {
        self.relationships.story(type_a, instinct_a, type_b, instinct_b)
    }
}
