//! Query-string view configuration
//!
//! The host page is initialized from its query string:
//! `?type=4&instinct=sx&mode=compare&type2=8&instinct2=so`. Values outside
//! the closed domains fall back to the default for that key, so invalid input
//! never reaches a catalog lookup.

use ennea_model::{InstinctFilter, ModelError, TypeNumber};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use url::form_urlencoded;

/// Whether one type or two are on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// One type
    #[default]
    Single,
    /// Two types side by side
    Compare,
}

impl DisplayMode {
    /// Query-string value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Single => "single",
            DisplayMode::Compare => "compare",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(DisplayMode::Single),
            "compare" => Ok(DisplayMode::Compare),
            other => Err(ModelError::UnknownDisplayMode(other.to_string())),
        }
    }
}

impl Display for DisplayMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initial selection for the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Primary type (`type`)
    pub type_number: TypeNumber,
    /// Instinct selector for the primary type (`instinct`)
    pub instinct: InstinctFilter,
    /// Single or compare (`mode`)
    pub mode: DisplayMode,
    /// Second type, used in compare mode (`type2`)
    pub compare_type: TypeNumber,
    /// Instinct selector for the second type (`instinct2`)
    pub compare_instinct: InstinctFilter,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let [one, two, ..] = TypeNumber::ALL;
        Self {
            type_number: one,
            instinct: InstinctFilter::All,
            mode: DisplayMode::Single,
            compare_type: two,
            compare_instinct: InstinctFilter::All,
        }
    }
}

impl ViewConfig {
    /// Default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`
    ///
    /// Unknown keys are ignored; for repeated keys the last value wins.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let defaults = Self::default();
        let mut config = defaults;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "type" => config.type_number = parse_or("type", &value, defaults.type_number),
                "instinct" => config.instinct = parse_or("instinct", &value, defaults.instinct),
                "mode" => config.mode = parse_or("mode", &value, defaults.mode),
                "type2" => {
                    config.compare_type = parse_or("type2", &value, defaults.compare_type);
                }
                "instinct2" => {
                    config.compare_instinct =
                        parse_or("instinct2", &value, defaults.compare_instinct);
                }
                _ => {}
            }
        }

        config.normalized()
    }

    /// Canonical query string without the leading `?`
    ///
    /// Compare-only keys are omitted in single mode.
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("type", &self.type_number.to_string())
            .append_pair("instinct", self.instinct.code())
            .append_pair("mode", self.mode.as_str());
        if self.mode == DisplayMode::Compare {
            serializer
                .append_pair("type2", &self.compare_type.to_string())
                .append_pair("instinct2", self.compare_instinct.code());
        }
        serializer.finish()
    }

    /// With primary type
    #[inline]
    #[must_use]
    pub fn with_type(mut self, type_number: TypeNumber) -> Self {
        self.type_number = type_number;
        self.normalized()
    }

    /// With primary instinct selector
    #[inline]
    #[must_use]
    pub fn with_instinct(mut self, instinct: InstinctFilter) -> Self {
        self.instinct = instinct;
        self
    }

    /// Switch to compare mode against `other`
    #[inline]
    #[must_use]
    pub fn comparing(mut self, other: TypeNumber, instinct: InstinctFilter) -> Self {
        self.mode = DisplayMode::Compare;
        self.compare_type = other;
        self.compare_instinct = instinct;
        self.normalized()
    }

    /// Compare mode needs two distinct types; a clash moves `type2` on by one
    fn normalized(mut self) -> Self {
        if self.mode == DisplayMode::Compare && self.compare_type == self.type_number {
            let replacement = self.type_number.next_wrapping();
            tracing::debug!(
                "type2 equals type ({}), using {} instead",
                self.type_number,
                replacement
            );
            self.compare_type = replacement;
        }
        self
    }
}

fn parse_or<T>(key: &str, raw: &str, fallback: T) -> T
where
    T: FromStr + Copy,
    T::Err: Display,
{
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Ignoring query parameter {}={:?}: {}", key, raw, e);
            fallback
        }
    }
}
