//! Core domain types for the country guessing game
//!
//! Countries, clue categories and the geographic feedback math. Everything here
//! is pure and free of I/O.

mod clue;
mod country;
mod geo;

pub use clue::{
    CLUE_ORDER, ClueCategory, ClueValue, group_thousands, is_revealed, reveal_next,
};
pub use country::{ClueAttributes, Country, CountryError};
pub use geo::{
    BEARING_TOLERANCE_DEG, Bearing, Coordinates, EARTH_RADIUS_KM, bearing_arrow, distance_km,
};

#[cfg(test)]
pub(crate) use country::fixtures;
