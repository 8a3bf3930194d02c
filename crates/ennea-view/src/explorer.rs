//! Single-type explorer state
//!
//! Mirrors the tabbed type page: a selected type, an active tab, the instinct
//! selector and the set of expanded subtype cards. [`ExplorerState::panel`]
//! resolves what the active tab shows from a borrowed [`Catalog`].

use crate::config::ViewConfig;
use ennea_catalog::Catalog;
use ennea_model::{
    InstinctFilter, PairComparison, Subtype, SubtypeKey, TypeEssenceVignette, TypeNumber,
    TypeProfile,
};
use std::collections::BTreeSet;

/// Tabs of the type page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Profile and center
    #[default]
    Overview,
    /// Instinctual subtypes
    Subtypes,
    /// Essence vignette
    Essence,
    /// Curated comparisons with other types
    Comparisons,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Subtypes, Tab::Essence, Tab::Comparisons];
}

/// Interactive selection on the type page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    type_number: TypeNumber,
    tab: Tab,
    filter: InstinctFilter,
    expanded: BTreeSet<SubtypeKey>,
}

/// A subtype card and whether it is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeCard<'c> {
    /// Record shown on the card
    pub subtype: &'c Subtype,
    /// Whether the card shows its full detail
    pub expanded: bool,
}

/// A comparison seen from the selected type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonEntry<'c> {
    /// The other type in the scenario
    pub partner: TypeNumber,
    /// Scenario record
    pub comparison: &'c PairComparison,
}

/// Content of the active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<'c> {
    /// Overview tab
    Overview {
        /// Selected type's profile
        profile: &'c TypeProfile,
        /// Other profiles in the same center
        center_peers: Vec<&'c TypeProfile>,
    },
    /// Subtypes tab, already filtered by the instinct selector
    Subtypes {
        /// Cards in sp/so/sx order
        cards: Vec<SubtypeCard<'c>>,
    },
    /// Essence tab
    Essence {
        /// The type's vignette
        vignette: &'c TypeEssenceVignette,
    },
    /// Comparisons tab; empty when nothing is curated for the type
    Comparisons {
        /// Scenarios in table order
        entries: Vec<ComparisonEntry<'c>>,
    },
}

impl ExplorerState {
    /// Start on the overview tab of `type_number`
    #[must_use]
    pub fn new(type_number: TypeNumber) -> Self {
        Self {
            type_number,
            tab: Tab::default(),
            filter: InstinctFilter::default(),
            expanded: BTreeSet::new(),
        }
    }

    /// Initial state from the page configuration
    #[must_use]
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut state = Self::new(config.type_number);
        state.filter = config.instinct;
        if let InstinctFilter::Only(_) = config.instinct {
            state.tab = Tab::Subtypes;
        }
        state
    }

    /// Selected type
    #[inline]
    #[must_use]
    pub fn type_number(&self) -> TypeNumber {
        self.type_number
    }

    /// Active tab
    #[inline]
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Instinct selector
    #[inline]
    #[must_use]
    pub fn filter(&self) -> InstinctFilter {
        self.filter
    }

    /// Navigate to another type; open cards are closed
    pub fn select_type(&mut self, type_number: TypeNumber) {
        if self.type_number != type_number {
            self.type_number = type_number;
            self.expanded.clear();
        }
    }

    /// Navigate to the following type, wrapping 9 to 1
    pub fn next_type(&mut self) {
        self.select_type(self.type_number.next_wrapping());
    }

    /// Switch tab
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Change the instinct selector
    pub fn set_filter(&mut self, filter: InstinctFilter) {
        self.filter = filter;
    }

    /// Open or close a card; returns whether it is now open
    ///
    /// Keys of other types are ignored and report `false`.
    pub fn toggle_card(&mut self, key: SubtypeKey) -> bool {
        if key.type_number() != self.type_number {
            return false;
        }
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Whether a card is open
    #[inline]
    #[must_use]
    pub fn is_expanded(&self, key: SubtypeKey) -> bool {
        self.expanded.contains(&key)
    }

    /// Resolve the active tab's content
    #[must_use]
    pub fn panel<'c>(&self, catalog: &'c Catalog) -> Panel<'c> {
        match self.tab {
            Tab::Overview => {
                let profile = catalog.profile(self.type_number);
                let center_peers = catalog
                    .profiles()
                    .profiles_in_center(self.type_number.center())
                    .into_iter()
                    .filter(|p| p.type_number != self.type_number)
                    .collect();
                Panel::Overview {
                    profile,
                    center_peers,
                }
            }
            Tab::Subtypes => Panel::Subtypes {
                cards: catalog
                    .subtypes()
                    .select(self.type_number, self.filter)
                    .into_iter()
                    .map(|subtype| SubtypeCard {
                        subtype,
                        expanded: self.is_expanded(subtype.key),
                    })
                    .collect(),
            },
            Tab::Essence => Panel::Essence {
                vignette: catalog.vignette_for_type(self.type_number),
            },
            Tab::Comparisons => Panel::Comparisons {
                entries: catalog
                    .comparisons_for_type(self.type_number)
                    .into_iter()
                    .filter_map(|comparison| {
                        let partner = comparison.pair()?.partner_of(self.type_number)?;
                        Some(ComparisonEntry {
                            partner,
                            comparison,
                        })
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ennea_model::Instinct;

    fn t(n: u8) -> TypeNumber {
        TypeNumber::new(n).unwrap()
    }

    #[test]
    fn toggle_card_round_trip() {
        let mut state = ExplorerState::new(t(4));
        let key = SubtypeKey::new(t(4), Instinct::Sexual);
        assert!(state.toggle_card(key));
        assert!(state.is_expanded(key));
        assert!(!state.toggle_card(key));
        assert!(!state.is_expanded(key));
    }

    #[test]
    fn toggle_ignores_other_types() {
        let mut state = ExplorerState::new(t(4));
        assert!(!state.toggle_card(SubtypeKey::new(t(5), Instinct::Social)));
    }

    #[test]
    fn changing_type_closes_cards() {
        let mut state = ExplorerState::new(t(9));
        let key = SubtypeKey::new(t(9), Instinct::Social);
        state.toggle_card(key);
        state.next_type();
        assert_eq!(state.type_number(), t(1));
        assert!(!state.is_expanded(key));
    }

    #[test]
    fn config_with_instinct_opens_subtypes_tab() {
        let config = ViewConfig::from_query("type=3&instinct=so");
        let state = ExplorerState::from_config(&config);
        assert_eq!(state.tab(), Tab::Subtypes);
        assert_eq!(state.filter(), InstinctFilter::Only(Instinct::Social));

        let default_state = ExplorerState::from_config(&ViewConfig::default());
        assert_eq!(default_state.tab(), Tab::Overview);
    }
}
