//! Country records
//!
//! A `Country` is read-only once built. Its official name is the identity key:
//! guesses and the target are compared on it, never on the display name.

use super::clue::{ClueCategory, ClueValue};
use super::geo::Coordinates;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Error for a country record that cannot be used in a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountryError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyName(&'static str),

    #[error("invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

/// The attributes revealed one by one as clues
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClueAttributes {
    /// Area in square kilometres
    pub area: f64,
    pub population: u64,
    pub landlocked: bool,
    pub region: String,
    /// Language code to language name
    pub languages: BTreeMap<String, String>,
    pub capital: Vec<String>,
    /// ISO 3166-1 alpha-3 codes of neighbouring countries
    pub borders: Vec<String>,
    pub flag_image_url: String,
}

/// A country that can be guessed
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    common_name: String,
    official_name: String,
    flag_emoji: String,
    coordinates: Coordinates,
    clues: ClueAttributes,
}

impl Country {
    /// Build a country record
    ///
    /// # Errors
    /// Returns `CountryError::EmptyName` if either name is blank.
    pub fn new(
        common_name: impl Into<String>,
        official_name: impl Into<String>,
        flag_emoji: impl Into<String>,
        coordinates: Coordinates,
        clues: ClueAttributes,
    ) -> Result<Self, CountryError> {
        let common_name = common_name.into().trim().to_string();
        let official_name = official_name.into().trim().to_string();

        if common_name.is_empty() {
            return Err(CountryError::EmptyName("name.common"));
        }
        if official_name.is_empty() {
            return Err(CountryError::EmptyName("name.official"));
        }

        Ok(Self {
            common_name,
            official_name,
            flag_emoji: flag_emoji.into(),
            coordinates,
            clues,
        })
    }

    #[inline]
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Unique identity key of the country
    #[inline]
    #[must_use]
    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    #[inline]
    #[must_use]
    pub fn flag_emoji(&self) -> &str {
        &self.flag_emoji
    }

    #[inline]
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[inline]
    #[must_use]
    pub const fn clues(&self) -> &ClueAttributes {
        &self.clues
    }

    /// Whether two records describe the same country
    #[inline]
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.official_name == other.official_name
    }

    /// The unguarded value of a clue attribute
    ///
    /// Only the game session decides whether a value may be shown, so this
    /// stays crate-private.
    pub(crate) fn clue(&self, category: ClueCategory) -> ClueValue<'_> {
        let clues = &self.clues;
        match category {
            ClueCategory::Area => ClueValue::Area(clues.area),
            ClueCategory::Population => ClueValue::Population(clues.population),
            ClueCategory::Landlocked => ClueValue::Landlocked(clues.landlocked),
            ClueCategory::Region => ClueValue::Region(&clues.region),
            ClueCategory::Languages => {
                ClueValue::Languages(clues.languages.values().map(String::as_str).collect())
            }
            ClueCategory::Capital => ClueValue::Capital(&clues.capital),
            ClueCategory::Borders => ClueValue::Borders(&clues.borders),
            ClueCategory::FlagImage => ClueValue::FlagImage(&clues.flag_image_url),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flag_emoji.is_empty() {
            f.write_str(&self.common_name)
        } else {
            write!(f, "{} {}", self.flag_emoji, self.common_name)
        }
    }
}
