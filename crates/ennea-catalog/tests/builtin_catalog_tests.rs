use ennea_catalog::builtin::{BUILTIN_KEY_ORDER, RELATIONSHIP_NARRATIVES_JSON};
use ennea_catalog::{Catalog, KeyOrder, NarrativeDocument};
use ennea_model::{Instinct, SubtypeKey, TypeNumber, TypePair};
use std::collections::HashSet;

fn catalog() -> Catalog {
    Catalog::builtin().expect("shipped content must validate")
}

fn t(n: u8) -> TypeNumber {
    TypeNumber::new(n).unwrap()
}

#[test]
fn subtype_lookup_is_total() {
    let catalog = catalog();
    for type_number in TypeNumber::ALL {
        for instinct in Instinct::ALL {
            let subtype = catalog
                .get_subtype(type_number, instinct)
                .unwrap_or_else(|| panic!("missing {type_number}{instinct}"));
            assert_eq!(subtype.type_number(), type_number);
            assert_eq!(subtype.instinct(), instinct);
            assert!(!subtype.characteristics.is_empty());
            assert!(!subtype.blind_spots.is_empty());
        }
    }
}

#[test]
fn subtypes_by_type_partitions_the_catalog() {
    let catalog = catalog();
    let mut seen = HashSet::new();
    for type_number in TypeNumber::ALL {
        let group = catalog.subtypes_by_type(type_number);
        assert_eq!(group.len(), 3, "type {type_number}");
        for subtype in group {
            assert_eq!(subtype.type_number(), type_number);
            assert!(seen.insert(subtype.key), "duplicate {}", subtype.key);
        }
    }
    assert_eq!(seen.len(), 27);
    let all: HashSet<SubtypeKey> = catalog.subtypes().iter().map(|s| s.key).collect();
    assert_eq!(seen, all);
}

#[test]
fn subtypes_by_type_is_ordered_sp_so_sx() {
    let catalog = catalog();
    let instincts: Vec<_> = catalog
        .subtypes_by_type(t(5))
        .into_iter()
        .map(|s| s.instinct())
        .collect();
    assert_eq!(instincts, Instinct::ALL.to_vec());
}

#[test]
fn instinct_filter_is_complete() {
    let catalog = catalog();
    for instinct in Instinct::ALL {
        let group = catalog.subtypes_by_instinct(instinct);
        assert_eq!(group.len(), 9);
        let types: Vec<_> = group.iter().map(|s| s.type_number()).collect();
        assert_eq!(types, TypeNumber::ALL.to_vec());
        assert!(group.iter().all(|s| s.instinct() == instinct));
    }
}

#[test]
fn vignettes_are_total_and_well_formed() {
    let catalog = catalog();
    for type_number in TypeNumber::ALL {
        let vignette = catalog.vignette_for_type(type_number);
        assert_eq!(vignette.type_number, type_number);
        assert!(!vignette.inner_voice.trim().is_empty());
        assert!(vignette.core_question.trim().ends_with('?'));
        let words = vignette.word_count();
        assert!((60..=100).contains(&words), "type {type_number} has {words} words");
    }
}

#[test]
fn profiles_agree_with_centers() {
    let catalog = catalog();
    for type_number in TypeNumber::ALL {
        let profile = catalog.profile(type_number);
        assert_eq!(profile.type_number, type_number);
        assert_eq!(profile.center, type_number.center());
    }
}

#[test]
fn curated_pairs_are_symmetric() {
    let catalog = catalog();
    assert!(!catalog.comparisons().is_empty());
    for pair in catalog.comparisons().pairs() {
        let forward = catalog.comparison_for_pair(pair.low(), pair.high()).unwrap();
        let backward = catalog.comparison_for_pair(pair.high(), pair.low()).unwrap();
        assert_eq!(forward.scenario, backward.scenario);
        assert_eq!(forward.key_distinction, backward.key_distinction);
        assert!(forward.response_for(pair.low()).is_some());
        assert!(forward.response_for(pair.high()).is_some());
    }
}

#[test]
fn uncurated_pair_is_absent() {
    let catalog = catalog();
    assert!(catalog.comparison_for_pair(t(1), t(9)).is_none());
    assert!(catalog.comparison_for_pair(t(9), t(1)).is_none());
}

#[test]
fn comparison_table_is_sparse() {
    let catalog = catalog();
    let curated = catalog.comparisons().len();
    assert!(curated < TypePair::all().len());
}

#[test]
fn comparisons_for_type_match_membership() {
    let catalog = catalog();
    for type_number in TypeNumber::ALL {
        let expected = catalog
            .comparisons()
            .pairs()
            .filter(|p| p.contains(type_number))
            .count();
        let found = catalog.comparisons_for_type(type_number);
        assert_eq!(found.len(), expected);
        assert!(found.iter().all(|c| c.response_for(type_number).is_some()));
    }
}

#[test]
fn builtin_store_is_symmetric() {
    let catalog = catalog();
    assert_eq!(BUILTIN_KEY_ORDER, KeyOrder::Symmetric);
    assert_eq!(catalog.relationships().key_order(), KeyOrder::Symmetric);

    let story = catalog
        .subtype_relationship_story(t(8), Instinct::Social, t(4), Instinct::Sexual)
        .expect("4sx-8so is shipped");
    assert_eq!(story.key.to_string(), "4sx-8so");
    assert!(story.paragraphs().count() >= 2);
}

#[test]
fn every_shipped_story_resolves_both_ways() {
    let catalog = catalog();
    for narrative in catalog.relationships().iter() {
        let reversed = narrative.key.reversed();
        assert_eq!(catalog.relationships().get(&reversed), Some(narrative));
    }
}

#[test]
fn shipped_document_matches_store_order() {
    let document = NarrativeDocument::from_json(RELATIONSHIP_NARRATIVES_JSON).unwrap();
    let catalog = catalog();
    let doc_ids: Vec<_> = document.records().iter().map(|r| r.key).collect();
    let store_ids: Vec<_> = catalog.relationships().iter().map(|r| r.key).collect();
    assert_eq!(doc_ids, store_ids);
}
