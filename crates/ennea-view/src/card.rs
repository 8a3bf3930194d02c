//! Share card resolution
//!
//! The export tool renders a relationship narrative's title and subtitle onto
//! a fixed-size square card. Resolution never yields a half-filled card: a
//! missing narrative or unparseable selection becomes
//! [`ShareCard::InvalidComparison`].

use ennea_catalog::Catalog;
use ennea_model::{Instinct, ModelError, SubtypeKey, TypeNumber};
use serde::Serialize;
use std::fmt;

/// Card edge length in pixels
pub const CARD_SIZE: u32 = 1080;

/// Two subtypes chosen in the export dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardRequest {
    /// Left dropdown
    pub first: SubtypeKey,
    /// Right dropdown
    pub second: SubtypeKey,
}

impl CardRequest {
    /// Request for two known subtypes
    #[inline]
    #[must_use]
    pub fn new(first: SubtypeKey, second: SubtypeKey) -> Self {
        Self { first, second }
    }

    /// Parse raw dropdown values
    ///
    /// # Errors
    ///
    /// Returns the first [`ModelError`] among the four values.
    pub fn parse(
        type1: &str,
        instinct1: &str,
        type2: &str,
        instinct2: &str,
    ) -> Result<Self, ModelError> {
        let first = SubtypeKey::new(type1.parse::<TypeNumber>()?, instinct1.parse::<Instinct>()?);
        let second = SubtypeKey::new(type2.parse::<TypeNumber>()?, instinct2.parse::<Instinct>()?);
        Ok(Self { first, second })
    }
}

impl fmt::Display for CardRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Render-ready card state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareCard {
    /// A narrative exists for the selection
    Ready {
        /// Stored narrative id, which may list the subtypes in either order
        id: String,
        /// Card headline
        title: String,
        /// Card subheading
        subtitle: String,
        /// Pixel width
        width: u32,
        /// Pixel height
        height: u32,
    },
    /// Nothing to render
    InvalidComparison {
        /// Message shown in place of the card
        reason: String,
    },
}

impl ShareCard {
    /// Resolve a parsed request against the relationship store
    #[must_use]
    pub fn resolve(catalog: &Catalog, request: &CardRequest) -> Self {
        let story = catalog.subtype_relationship_story(
            request.first.type_number(),
            request.first.instinct(),
            request.second.type_number(),
            request.second.instinct(),
        );

        match story {
            Some(narrative) => ShareCard::Ready {
                id: narrative.key.to_string(),
                title: narrative.title.clone(),
                subtitle: narrative.subtitle.clone(),
                width: CARD_SIZE,
                height: CARD_SIZE,
            },
            None => {
                tracing::debug!("No relationship narrative for {}", request);
                ShareCard::InvalidComparison {
                    reason: format!("No relationship story for {request}"),
                }
            }
        }
    }

    /// Resolve raw dropdown values; parse failures degrade to
    /// [`ShareCard::InvalidComparison`]
    #[must_use]
    pub fn from_selection(
        catalog: &Catalog,
        type1: &str,
        instinct1: &str,
        type2: &str,
        instinct2: &str,
    ) -> Self {
        match CardRequest::parse(type1, instinct1, type2, instinct2) {
            Ok(request) => Self::resolve(catalog, &request),
            Err(e) => {
                tracing::debug!("Rejected share card selection: {}", e);
                ShareCard::InvalidComparison {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Whether the card can be rendered
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, ShareCard::Ready { .. })
    }
}
