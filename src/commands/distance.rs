//! Distance command
//!
//! Measures the feedback a guess of one country would get if the other were
//! the hidden target.

use crate::core::{Country, bearing_arrow, distance_km};
use crate::game::{Excluded, Feedback, resolve_guess};

/// Result of measuring between two countries
pub struct DistanceResult<'a> {
    pub from: &'a Country,
    pub to: &'a Country,
    pub feedback: Feedback,
}

/// Resolve both names and measure from `from` towards `to`
///
/// # Errors
///
/// Returns an error naming the query that matches no country.
pub fn measure_distance<'a>(
    roster: &'a [Country],
    from: &str,
    to: &str,
) -> Result<DistanceResult<'a>, String> {
    let none = Excluded::default();
    let resolve = |query: &str| {
        resolve_guess(roster, &none, query).ok_or_else(|| format!("No country matches '{query}'"))
    };

    let from = resolve(from)?;
    let to = resolve(to)?;

    let feedback = Feedback {
        bearing: bearing_arrow(to.coordinates(), from.coordinates()),
        distance_km: distance_km(to.coordinates(), from.coordinates()),
    };

    Ok(DistanceResult { from, to, feedback })
}
