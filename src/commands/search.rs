//! Country search command
//!
//! Runs the autocomplete filter over the whole roster.

use crate::core::Country;
use crate::game::{Excluded, SUGGESTION_LIMIT, filter};

/// Result of a search
pub struct SearchResult<'a> {
    pub query: String,
    pub shown: Vec<&'a Country>,
    pub total: usize,
}

/// Find countries whose common name contains `query`
///
/// Shows at most [`SUGGESTION_LIMIT`] entries unless `all` is set.
#[must_use]
pub fn search_countries<'a>(roster: &'a [Country], query: &str, all: bool) -> SearchResult<'a> {
    let mut shown = filter(roster, &Excluded::default(), query);
    let total = shown.len();
    if !all {
        shown.truncate(SUGGESTION_LIMIT);
    }

    SearchResult {
        query: query.to_string(),
        shown,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{EMBEDDED_COUNTRIES, loader::parse_roster};

    #[test]
    fn search_caps_results() {
        let roster = parse_roster(EMBEDDED_COUNTRIES).unwrap();
        let result = search_countries(&roster, "", false);

        assert_eq!(result.shown.len(), SUGGESTION_LIMIT);
        assert_eq!(result.total, roster.len());
        assert_eq!(result.shown[0].common_name(), "Afghanistan");
    }

    #[test]
    fn search_all_lifts_cap() {
        let roster = parse_roster(EMBEDDED_COUNTRIES).unwrap();
        let result = search_countries(&roster, "", true);
        assert_eq!(result.shown.len(), roster.len());
    }

    #[test]
    fn search_substring() {
        let roster = parse_roster(EMBEDDED_COUNTRIES).unwrap();
        let result = search_countries(&roster, "guinea", false);
        let names: Vec<&str> = result.shown.iter().map(|c| c.common_name()).collect();

        assert_eq!(names, vec!["Equatorial Guinea", "Guinea", "Guinea-Bissau"]);
        assert_eq!(result.total, 3);
    }
}
