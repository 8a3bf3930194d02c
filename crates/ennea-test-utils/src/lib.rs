//! Testing utilities for the Ennea workspace
//!
//! Shared fixtures: synthetic total tables, sparse comparison tables and
//! scratch files.

#![allow(missing_docs)]

use ennea_catalog::{
    Catalog, ComparisonCatalog, KeyOrder, RelationshipStore, SubtypeCatalog, TypeProfiles,
    VignetteCatalog,
};
use ennea_model::{
    PairComparison, RelationshipNarrative, Subtype, SubtypeKey, TypeEssenceVignette, TypeNumber,
    TypeProfile, TypeResponse,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn t(n: u8) -> TypeNumber {
    TypeNumber::new(n).unwrap()
}

pub fn fixture_subtype(key: SubtypeKey) -> Subtype {
    Subtype {
        key,
        name: format!("Fixture {key}"),
        ichazo_title: format!("Ichazo {key}"),
        description: format!("Description of {key}."),
        characteristics: vec!["steady".to_string(), "curious".to_string()],
        blind_spots: vec!["hurried".to_string()],
        growth_path: format!("{key} grows by slowing down."),
    }
}

pub fn fixture_subtypes() -> Vec<Subtype> {
    SubtypeKey::all().into_iter().map(fixture_subtype).collect()
}

pub fn fixture_profiles() -> Vec<TypeProfile> {
    TypeNumber::ALL
        .into_iter()
        .map(|type_number| TypeProfile {
            type_number,
            name: format!("Fixture Type {type_number}"),
            center: type_number.center(),
            core_desire: "to be whole".to_string(),
            core_fear: "to be lost".to_string(),
            summary: "A fixture profile.".to_string(),
        })
        .collect()
}

pub fn fixture_vignettes() -> Vec<TypeEssenceVignette> {
    TypeNumber::ALL
        .into_iter()
        .map(|type_number| TypeEssenceVignette {
            type_number,
            title: format!("Vignette {type_number}"),
            inner_voice: format!("I am type {type_number} and this is how I see things."),
            core_question: format!("What does {type_number} want?"),
        })
        .collect()
}

pub fn fixture_comparison(a: u8, b: u8) -> PairComparison {
    PairComparison {
        scenario: format!("Scenario {a} vs {b}"),
        type_a_response: TypeResponse {
            type_number: t(a),
            response: format!("Type {a} responds."),
        },
        type_b_response: TypeResponse {
            type_number: t(b),
            response: format!("Type {b} responds."),
        },
        key_distinction: format!("{a} and {b} differ."),
    }
}

pub fn fixture_comparisons(pairs: &[(u8, u8)]) -> Vec<PairComparison> {
    pairs.iter().map(|(a, b)| fixture_comparison(*a, *b)).collect()
}

pub fn fixture_narrative(id: &str) -> RelationshipNarrative {
    RelationshipNarrative {
        key: id.parse().unwrap(),
        title: format!("Story {id}"),
        subtitle: format!("Subtitle {id}"),
        narrative: format!("Opening of {id}.\n\nClosing of {id}."),
    }
}

/// Catalog built entirely from fixtures
pub fn fixture_catalog(pairs: &[(u8, u8)], narratives: &[&str], order: KeyOrder) -> Catalog {
    Catalog::from_parts(
        SubtypeCatalog::new(fixture_subtypes()).unwrap(),
        TypeProfiles::new(fixture_profiles()).unwrap(),
        VignetteCatalog::new(fixture_vignettes()).unwrap(),
        ComparisonCatalog::new(fixture_comparisons(pairs)).unwrap(),
        RelationshipStore::new(
            narratives.iter().map(|id| fixture_narrative(id)).collect(),
            order,
        )
        .unwrap(),
    )
}

/// Write `contents` to `name` inside a fresh temporary directory
///
/// Keep the returned [`TempDir`] alive for as long as the file is needed.
pub fn scratch_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}
