use ennea_catalog::{Catalog, KeyOrder};
use ennea_model::{Instinct, InstinctFilter, SubtypeKey};
use ennea_test_utils::{fixture_catalog, t};
use ennea_view::{
    CardRequest, ComparePanel, DisplayMode, ExplorerState, Panel, ShareCard, Tab, ViewConfig,
    CARD_SIZE,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn builtin() -> Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn subtypes_tab_follows_filter_and_expansion() {
    let catalog = fixture_catalog(&[], &[], KeyOrder::Symmetric);
    let mut state = ExplorerState::new(t(4));
    state.select_tab(Tab::Subtypes);

    let sx = SubtypeKey::new(t(4), Instinct::Sexual);
    state.toggle_card(sx);

    let Panel::Subtypes { cards } = state.panel(&catalog) else {
        panic!("expected subtypes panel");
    };
    let keys: Vec<_> = cards.iter().map(|c| c.subtype.key.to_string()).collect();
    assert_eq!(keys, vec!["4sp", "4so", "4sx"]);
    let open: Vec<_> = cards.iter().map(|c| c.expanded).collect();
    assert_eq!(open, vec![false, false, true]);

    state.set_filter(InstinctFilter::Only(Instinct::Social));
    let Panel::Subtypes { cards } = state.panel(&catalog) else {
        panic!("expected subtypes panel");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].subtype.key.to_string(), "4so");
}

#[test]
fn overview_lists_center_peers() {
    let catalog = builtin();
    let state = ExplorerState::new(t(3));
    let Panel::Overview {
        profile,
        center_peers,
    } = state.panel(&catalog)
    else {
        panic!("expected overview panel");
    };
    assert_eq!(profile.type_number, t(3));
    let peers: Vec<_> = center_peers.iter().map(|p| p.type_number).collect();
    assert_eq!(peers, vec![t(2), t(4)]);
}

#[test]
fn essence_tab_is_total() {
    let catalog = builtin();
    let mut state = ExplorerState::new(t(1));
    state.select_tab(Tab::Essence);
    for _ in 0..9 {
        let Panel::Essence { vignette } = state.panel(&catalog) else {
            panic!("expected essence panel");
        };
        assert_eq!(vignette.type_number, state.type_number());
        state.next_type();
    }
    assert_eq!(state.type_number(), t(1));
}

#[test]
fn comparisons_tab_reports_partners() {
    let catalog = fixture_catalog(&[(1, 6), (6, 4), (2, 9)], &[], KeyOrder::Symmetric);
    let mut state = ExplorerState::new(t(6));
    state.select_tab(Tab::Comparisons);
    let Panel::Comparisons { entries } = state.panel(&catalog) else {
        panic!("expected comparisons panel");
    };
    let partners: Vec<_> = entries.iter().map(|e| e.partner).collect();
    assert_eq!(partners, vec![t(1), t(4)]);

    state.select_type(t(5));
    let Panel::Comparisons { entries } = state.panel(&catalog) else {
        panic!("expected comparisons panel");
    };
    assert!(entries.is_empty());
}

#[test]
fn compare_panel_from_query() {
    let catalog = builtin();
    let config = ViewConfig::from_query("?type=8&instinct=so&mode=compare&type2=4&instinct2=sx");
    assert_eq!(config.mode, DisplayMode::Compare);

    let panel = ComparePanel::from_config(&catalog, &config);
    assert_eq!(panel.left.profile.type_number, t(8));
    assert_eq!(panel.right.profile.type_number, t(4));
    assert_eq!(panel.left.subtypes.len(), 1);
    assert_eq!(panel.right.subtypes.len(), 1);
    let story = panel.story.expect("4sx-8so is shipped");
    assert_eq!(story.key.to_string(), "4sx-8so");
}

#[test]
fn compare_panel_without_curated_scenario() {
    let catalog = builtin();
    let config = ViewConfig::new().with_type(t(1)).comparing(t(9), InstinctFilter::All);
    let panel = ComparePanel::from_config(&catalog, &config);
    assert!(!panel.has_scenario());
    assert!(panel.story.is_none());
    assert_eq!(panel.left.subtypes.len(), 3);
    assert_eq!(panel.right.subtypes.len(), 3);
}

#[test]
fn compare_panel_needs_both_instincts_for_story() {
    let catalog = builtin();
    let panel = ComparePanel::resolve(
        &catalog,
        (t(4), InstinctFilter::Only(Instinct::Sexual)),
        (t(8), InstinctFilter::All),
    );
    assert!(panel.story.is_none());
}

#[test]
fn share_card_ready_for_shipped_story() {
    let catalog = builtin();
    let request = CardRequest::parse("8", "so", "4", "sx").unwrap();
    let card = ShareCard::resolve(&catalog, &request);
    let story = catalog.relationships().get_by_id("4sx-8so").unwrap();
    assert_eq!(
        card,
        ShareCard::Ready {
            id: "4sx-8so".to_string(),
            title: story.title.clone(),
            subtitle: story.subtitle.clone(),
            width: CARD_SIZE,
            height: CARD_SIZE,
        }
    );
}

#[test]
fn share_card_degrades_when_story_missing() {
    let catalog = fixture_catalog(&[], &["1sp-2so"], KeyOrder::Ordered);
    let card = ShareCard::from_selection(&catalog, "2", "so", "1", "sp");
    assert!(!card.is_ready());
    assert!(matches!(card, ShareCard::InvalidComparison { .. }));

    let card = ShareCard::from_selection(&catalog, "1", "sp", "2", "so");
    assert!(card.is_ready());
}

#[test]
fn share_card_degrades_on_bad_input() {
    let catalog = builtin();
    for (a, b, c, d) in [("", "sx", "8", "so"), ("4", "xx", "8", "so"), ("4", "sx", "10", "so")] {
        let card = ShareCard::from_selection(&catalog, a, b, c, d);
        assert!(matches!(card, ShareCard::InvalidComparison { .. }), "{a} {b} {c} {d}");
    }
}

proptest! {
    #[test]
    fn prop_any_query_yields_valid_config(query in ".{0,64}") {
        let config = ViewConfig::from_query(&query);
        prop_assert!((1..=9).contains(&config.type_number.get()));
        prop_assert!((1..=9).contains(&config.compare_type.get()));
        if config.mode == DisplayMode::Compare {
            prop_assert_ne!(config.type_number, config.compare_type);
        }
    }

    #[test]
    fn prop_canonical_query_round_trips(
        a in 1u8..=9,
        b in 1u8..=9,
        compare in any::<bool>(),
    ) {
        let mut config = ViewConfig::new().with_type(t(a));
        if compare {
            config = config.comparing(t(b), InstinctFilter::Only(Instinct::Social));
        }
        prop_assert_eq!(ViewConfig::from_query(&config.to_query()), config);
    }
}
