//! Built-in content tables
//!
//! Static seeds are written with `&'static str` so the tables stay readable;
//! [`load`] turns them into owned records and runs the same validation as any
//! injected fixture.

use crate::catalog::Catalog;
use crate::comparisons::ComparisonCatalog;
use crate::error::CatalogError;
use crate::profiles::TypeProfiles;
use crate::relationships::{KeyOrder, NarrativeDocument, RelationshipStore};
use crate::subtypes::SubtypeCatalog;
use crate::vignettes::VignetteCatalog;
use ennea_model::{
    Center, Instinct, PairComparison, Subtype, SubtypeKey, TypeEssenceVignette, TypeNumber,
    TypeProfile, TypeResponse,
};

mod comparisons;
mod profiles;
mod subtypes;
mod vignettes;

/// Relationship narratives as persisted on disk; the migration tool edits this file
pub const RELATIONSHIP_NARRATIVES_JSON: &str = include_str!("../../data/relationship_narratives.json");

/// Key-order policy of the built-in narrative store
pub const BUILTIN_KEY_ORDER: KeyOrder = KeyOrder::Symmetric;

pub(crate) struct SubtypeSeed {
    pub(crate) type_number: u8,
    pub(crate) instinct: Instinct,
    pub(crate) name: &'static str,
    pub(crate) ichazo_title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) characteristics: &'static [&'static str],
    pub(crate) blind_spots: &'static [&'static str],
    pub(crate) growth_path: &'static str,
}

pub(crate) struct ProfileSeed {
    pub(crate) type_number: u8,
    pub(crate) name: &'static str,
    pub(crate) center: Center,
    pub(crate) core_desire: &'static str,
    pub(crate) core_fear: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) struct VignetteSeed {
    pub(crate) type_number: u8,
    pub(crate) title: &'static str,
    pub(crate) inner_voice: &'static str,
    pub(crate) core_question: &'static str,
}

pub(crate) struct ComparisonSeed {
    pub(crate) scenario: &'static str,
    pub(crate) type_a: u8,
    pub(crate) type_a_response: &'static str,
    pub(crate) type_b: u8,
    pub(crate) type_b_response: &'static str,
    pub(crate) key_distinction: &'static str,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl SubtypeSeed {
    fn to_record(&self) -> Result<Subtype, CatalogError> {
        Ok(Subtype {
            key: SubtypeKey::new(TypeNumber::new(self.type_number)?, self.instinct),
            name: self.name.to_string(),
            ichazo_title: self.ichazo_title.to_string(),
            description: self.description.to_string(),
            characteristics: owned(self.characteristics),
            blind_spots: owned(self.blind_spots),
            growth_path: self.growth_path.to_string(),
        })
    }
}

impl ProfileSeed {
    fn to_record(&self) -> Result<TypeProfile, CatalogError> {
        Ok(TypeProfile {
            type_number: TypeNumber::new(self.type_number)?,
            name: self.name.to_string(),
            center: self.center,
            core_desire: self.core_desire.to_string(),
            core_fear: self.core_fear.to_string(),
            summary: self.summary.to_string(),
        })
    }
}

impl VignetteSeed {
    fn to_record(&self) -> Result<TypeEssenceVignette, CatalogError> {
        Ok(TypeEssenceVignette {
            type_number: TypeNumber::new(self.type_number)?,
            title: self.title.to_string(),
            inner_voice: self.inner_voice.to_string(),
            core_question: self.core_question.to_string(),
        })
    }
}

impl ComparisonSeed {
    fn to_record(&self) -> Result<PairComparison, CatalogError> {
        Ok(PairComparison {
            scenario: self.scenario.to_string(),
            type_a_response: TypeResponse {
                type_number: TypeNumber::new(self.type_a)?,
                response: self.type_a_response.to_string(),
            },
            type_b_response: TypeResponse {
                type_number: TypeNumber::new(self.type_b)?,
                response: self.type_b_response.to_string(),
            },
            key_distinction: self.key_distinction.to_string(),
        })
    }
}

/// Build the built-in catalog
///
/// # Errors
/// Returns an error if a built-in table violates a catalog invariant; the
/// workspace tests guarantee this does not happen for shipped content.
pub fn load() -> Result<Catalog, CatalogError> {
    let subtypes = subtypes::SUBTYPES
        .iter()
        .map(SubtypeSeed::to_record)
        .collect::<Result<Vec<_>, _>>()?;
    let profiles = profiles::PROFILES
        .iter()
        .map(ProfileSeed::to_record)
        .collect::<Result<Vec<_>, _>>()?;
    let vignettes = vignettes::VIGNETTES
        .iter()
        .map(VignetteSeed::to_record)
        .collect::<Result<Vec<_>, _>>()?;
    let comparisons = comparisons::COMPARISONS
        .iter()
        .map(ComparisonSeed::to_record)
        .collect::<Result<Vec<_>, _>>()?;
    let document = NarrativeDocument::from_json(RELATIONSHIP_NARRATIVES_JSON)?;

    Ok(Catalog::from_parts(
        SubtypeCatalog::new(subtypes)?,
        TypeProfiles::new(profiles)?,
        VignetteCatalog::new(vignettes)?,
        ComparisonCatalog::new(comparisons)?,
        RelationshipStore::new(document.into_records(), BUILTIN_KEY_ORDER)?,
    ))
}
