use ennea_model::{Instinct, InstinctFilter, RelationshipKey, SubtypeKey, TypeNumber, TypePair};
use proptest::prelude::*;

fn type_number() -> impl Strategy<Value = TypeNumber> {
    (1u8..=9).prop_map(|n| TypeNumber::new(n).unwrap())
}

fn instinct() -> impl Strategy<Value = Instinct> {
    prop_oneof![
        Just(Instinct::SelfPreservation),
        Just(Instinct::Social),
        Just(Instinct::Sexual),
    ]
}

fn subtype_key() -> impl Strategy<Value = SubtypeKey> {
    (type_number(), instinct()).prop_map(|(t, i)| SubtypeKey::new(t, i))
}

proptest! {
    #[test]
    fn prop_type_number_accepts_exactly_one_to_nine(raw in any::<u8>()) {
        let parsed = TypeNumber::new(raw);
        prop_assert_eq!(parsed.is_ok(), (1..=9).contains(&raw));
    }

    #[test]
    fn prop_subtype_key_text_round_trip(key in subtype_key()) {
        let text = key.to_string();
        prop_assert_eq!(text.parse::<SubtypeKey>().unwrap(), key);
    }

    #[test]
    fn prop_relationship_key_text_round_trip(a in subtype_key(), b in subtype_key()) {
        let key = RelationshipKey::new(a, b);
        prop_assert_eq!(key.to_string().parse::<RelationshipKey>().unwrap(), key);
    }

    #[test]
    fn prop_canonical_ignores_order(a in subtype_key(), b in subtype_key()) {
        let key = RelationshipKey::new(a, b);
        prop_assert_eq!(key.canonical(), key.reversed().canonical());
    }

    #[test]
    fn prop_type_pair_is_symmetric(a in type_number(), b in type_number()) {
        prop_assume!(a != b);
        let ab = TypePair::new(a, b).unwrap();
        let ba = TypePair::new(b, a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ab.low() < ab.high());
        prop_assert!(ab.contains(a) && ab.contains(b));
    }

    #[test]
    fn prop_filter_only_admits_its_instinct(selected in instinct(), probe in instinct()) {
        let filter = InstinctFilter::Only(selected);
        prop_assert_eq!(filter.matches(probe), selected == probe);
        prop_assert!(InstinctFilter::All.matches(probe));
    }
}
