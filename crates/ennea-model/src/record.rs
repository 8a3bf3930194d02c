//! Content records served by the catalogs
//!
//! Records are plain owned data. They carry no behavior beyond small helpers
//! for reading their own fields.

use crate::instinct::Instinct;
use crate::key::{RelationshipKey, SubtypeKey, TypePair};
use crate::number::{Center, TypeNumber};
use serde::{Deserialize, Serialize};

/// One of the 27 instinctual subtypes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtype {
    /// Grid cell
    pub key: SubtypeKey,
    /// Short label
    pub name: String,
    /// Traditional alternate name
    pub ichazo_title: String,
    /// Descriptive paragraph
    pub description: String,
    /// Ordered characteristic phrases
    pub characteristics: Vec<String>,
    /// Ordered blind spots
    pub blind_spots: Vec<String>,
    /// Single growth sentence
    pub growth_path: String,
}

impl Subtype {
    /// Type component of the key
    #[inline]
    #[must_use]
    pub fn type_number(&self) -> TypeNumber {
        self.key.type_number()
    }

    /// Instinct component of the key
    #[inline]
    #[must_use]
    pub fn instinct(&self) -> Instinct {
        self.key.instinct()
    }
}

/// Headline description of a type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeProfile {
    /// Type described
    pub type_number: TypeNumber,
    /// Common name, e.g. "The Reformer"
    pub name: String,
    /// Center the profile claims; must agree with [`TypeNumber::center`]
    pub center: Center,
    /// What the type most wants
    pub core_desire: String,
    /// What the type most fears
    pub core_fear: String,
    /// Short overview
    pub summary: String,
}

/// First-person vignette capturing a type's core motivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEssenceVignette {
    /// Type described
    pub type_number: TypeNumber,
    /// Heading
    pub title: String,
    /// First-person narrative, 60-100 words
    pub inner_voice: String,
    /// Single rhetorical question
    pub core_question: String,
}

impl TypeEssenceVignette {
    /// Whitespace-separated word count of the inner voice
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.inner_voice.split_whitespace().count()
    }
}

/// How one type responds within a comparison scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResponse {
    /// Responding type
    pub type_number: TypeNumber,
    /// Response text
    pub response: String,
}

/// Curated scenario contrasting two commonly confused types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairComparison {
    /// Situational prompt
    pub scenario: String,
    /// First response, in authored order
    pub type_a_response: TypeResponse,
    /// Second response, in authored order
    pub type_b_response: TypeResponse,
    /// Clarifying sentence
    pub key_distinction: String,
}

impl PairComparison {
    /// Unordered pair this scenario is filed under
    ///
    /// `None` when both responses name the same type, which catalog
    /// construction rejects.
    #[must_use]
    pub fn pair(&self) -> Option<TypePair> {
        TypePair::new(self.type_a_response.type_number, self.type_b_response.type_number).ok()
    }

    /// Response given by `t`, if `t` is part of the scenario
    #[must_use]
    pub fn response_for(&self, t: TypeNumber) -> Option<&TypeResponse> {
        if self.type_a_response.type_number == t {
            Some(&self.type_a_response)
        } else if self.type_b_response.type_number == t {
            Some(&self.type_b_response)
        } else {
            None
        }
    }
}

/// Long-form story about the dynamic between two subtypes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipNarrative {
    /// Stable record identifier, e.g. `4sx-8so`
    #[serde(rename = "id")]
    pub key: RelationshipKey,
    /// Heading
    pub title: String,
    /// Secondary heading
    pub subtitle: String,
    /// Paragraphs separated by blank lines
    pub narrative: String,
}

impl RelationshipNarrative {
    /// Non-empty paragraphs in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.narrative
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
