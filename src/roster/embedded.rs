//! Offline roster snapshot
//!
//! Compiled into the binary so the game works without network access.

/// Country records in the endpoint's JSON layout
pub const EMBEDDED_COUNTRIES: &str = include_str!("../../data/countries.json");
