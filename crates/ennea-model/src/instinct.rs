//! Instinctual variants and the instinct selector

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Instinctual variant combined with a type to form a subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instinct {
    /// Self-preservation (`sp`)
    #[serde(rename = "sp")]
    SelfPreservation,
    /// Social (`so`)
    #[serde(rename = "so")]
    Social,
    /// Sexual / one-to-one (`sx`)
    #[serde(rename = "sx")]
    Sexual,
}

impl Instinct {
    /// All instincts in catalog order
    pub const ALL: [Instinct; 3] = [Instinct::SelfPreservation, Instinct::Social, Instinct::Sexual];

    /// Two-letter code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Instinct::SelfPreservation => "sp",
            Instinct::Social => "so",
            Instinct::Sexual => "sx",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Instinct::SelfPreservation => "Self-Preservation",
            Instinct::Social => "Social",
            Instinct::Sexual => "Sexual (One-to-One)",
        }
    }

    /// Zero-based position in [`Instinct::ALL`]
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Instinct::SelfPreservation => 0,
            Instinct::Social => 1,
            Instinct::Sexual => 2,
        }
    }
}

impl FromStr for Instinct {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sp" => Ok(Instinct::SelfPreservation),
            "so" => Ok(Instinct::Social),
            "sx" => Ok(Instinct::Sexual),
            other => Err(ModelError::unknown_instinct(other)),
        }
    }
}

impl Display for Instinct {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Selector state for the instinct toggle
///
/// Either a single instinct or all three. Matching is exhaustive, so there is
/// no unchecked "any" value to fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InstinctFilter {
    /// Show only the given instinct
    Only(Instinct),
    /// Show every instinct
    #[default]
    All,
}

impl InstinctFilter {
    /// Whether `instinct` passes the filter
    #[inline]
    #[must_use]
    pub fn matches(self, instinct: Instinct) -> bool {
        match self {
            InstinctFilter::Only(selected) => selected == instinct,
            InstinctFilter::All => true,
        }
    }

    /// Instincts admitted by the filter, in catalog order
    #[must_use]
    pub fn instincts(self) -> Vec<Instinct> {
        Instinct::ALL.into_iter().filter(|i| self.matches(*i)).collect()
    }

    /// Code used in query strings
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            InstinctFilter::Only(instinct) => instinct.code(),
            InstinctFilter::All => "all",
        }
    }
}

impl From<Instinct> for InstinctFilter {
    fn from(value: Instinct) -> Self {
        InstinctFilter::Only(value)
    }
}

impl FromStr for InstinctFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(InstinctFilter::All);
        }
        s.parse::<Instinct>().map(InstinctFilter::Only)
    }
}

impl Display for InstinctFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instinct_codes_round_trip() {
        for instinct in Instinct::ALL {
            assert_eq!(instinct.code().parse::<Instinct>().unwrap(), instinct);
        }
    }

    #[test]
    fn instinct_parse_is_case_insensitive() {
        assert_eq!("SX".parse::<Instinct>().unwrap(), Instinct::Sexual);
        assert!("xx".parse::<Instinct>().is_err());
    }

    #[test]
    fn instinct_serde_uses_codes() {
        let json = serde_json::to_string(&Instinct::Social).unwrap();
        assert_eq!(json, "\"so\"");
        let back: Instinct = serde_json::from_str("\"sp\"").unwrap();
        assert_eq!(back, Instinct::SelfPreservation);
    }

    #[test]
    fn filter_matches() {
        let sp = InstinctFilter::Only(Instinct::SelfPreservation);
        assert!(sp.matches(Instinct::SelfPreservation));
        assert!(!sp.matches(Instinct::Sexual));
        assert_eq!(InstinctFilter::All.instincts(), Instinct::ALL.to_vec());
        assert_eq!(sp.instincts(), vec![Instinct::SelfPreservation]);
    }

    #[test]
    fn filter_parse() {
        assert_eq!("ALL".parse::<InstinctFilter>().unwrap(), InstinctFilter::All);
        assert_eq!(
            "so".parse::<InstinctFilter>().unwrap(),
            InstinctFilter::Only(Instinct::Social)
        );
        assert!("any".parse::<InstinctFilter>().is_err());
        assert_eq!(InstinctFilter::default(), InstinctFilter::All);
    }
}
