//! Country lookup by (partial) common name
//!
//! Used twice per keystroke cycle: `filter` feeds the autocomplete list and
//! `resolve_guess` turns submitted text into a country.

use crate::core::Country;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Maximum number of suggestions shown by the autocomplete list
pub const SUGGESTION_LIMIT: usize = 8;

/// Official names of countries that must not be offered again
pub type Excluded<'a> = FxHashSet<&'a str>;

/// Countries whose common name contains `query`, sorted by common name
///
/// Countries in `excluded` (by official name) are removed. Matching ignores
/// case and an empty query matches everything. The sort is stable.
#[must_use]
pub fn filter<'a>(roster: &'a [Country], excluded: &Excluded<'_>, query: &str) -> Vec<&'a Country> {
    let needle = query.to_lowercase();

    let mut matches: Vec<&Country> = roster
        .iter()
        .filter(|country| !excluded.contains(country.official_name()))
        .filter(|country| country.common_name().to_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| compare_names(a.common_name(), b.common_name()));
    matches
}

/// Resolve submitted text to a single country
///
/// Among non-excluded countries, a case-insensitive exact match on the common
/// name wins. Otherwise the first country in roster order whose common name
/// contains the query is returned. Blank queries resolve to nothing.
#[must_use]
pub fn resolve_guess<'a>(
    roster: &'a [Country],
    excluded: &Excluded<'_>,
    query: &str,
) -> Option<&'a Country> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let candidates = roster
        .iter()
        .filter(|country| !excluded.contains(country.official_name()));

    let mut first_partial = None;
    for country in candidates {
        let name = country.common_name().to_lowercase();
        if name == needle {
            return Some(country);
        }
        if first_partial.is_none() && name.contains(&needle) {
            first_partial = Some(country);
        }
    }

    first_partial
}

/// Whether `query` names `country` exactly (ignoring case and outer whitespace)
#[must_use]
pub fn names_exactly(country: &Country, query: &str) -> bool {
    country.common_name().to_lowercase() == query.trim().to_lowercase()
}

/// Ordering used for every name list shown to the player
///
/// Compares diacritic-folded lowercase keys first so "Åland Islands" sorts with
/// the A's, then the raw names to keep the order total.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Lowercase name with Latin diacritics folded to their base letter
#[must_use]
pub fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        match fold_latin(ch) {
            Some(folded) => key.push_str(folded),
            None => key.push(ch),
        }
    }
    key
}

fn fold_latin(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'æ' => "ae",
        'ç' | 'č' | 'ć' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ě' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'ñ' | 'ń' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'œ' => "oe",
        'ş' | 'š' | 'ś' => "s",
        'ß' => "ss",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => "u",
        'ý' | 'ÿ' => "y",
        'ž' | 'ź' | 'ż' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::country;

    fn roster() -> Vec<Country> {
        vec![
            country("Equatorial Guinea", "Republic of Equatorial Guinea", 2.0, 10.0),
            country("Guinea", "Republic of Guinea", 11.0, -10.0),
            country("Guinea-Bissau", "Republic of Guinea-Bissau", 12.0, -15.0),
            country("Niger", "Republic of Niger", 16.0, 8.0),
            country("Nigeria", "Federal Republic of Nigeria", 10.0, 8.0),
            country("Åland Islands", "Åland Islands", 60.1, 19.9),
            country("Austria", "Republic of Austria", 47.3, 13.3),
        ]
    }

    fn names(countries: &[&Country]) -> Vec<String> {
        countries.iter().map(|c| c.common_name().to_string()).collect()
    }

    #[test]
    fn filter_empty_query_returns_all_sorted() {
        let roster = roster();
        let all = filter(&roster, &Excluded::default(), "");

        assert_eq!(
            names(&all),
            vec![
                "Åland Islands",
                "Austria",
                "Equatorial Guinea",
                "Guinea",
                "Guinea-Bissau",
                "Niger",
                "Nigeria",
            ]
        );
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let roster = roster();
        let found = filter(&roster, &Excluded::default(), "GUINEA");
        assert_eq!(names(&found), vec!["Equatorial Guinea", "Guinea", "Guinea-Bissau"]);
    }

    #[test]
    fn filter_removes_excluded() {
        let roster = roster();
        let excluded: Excluded = ["Republic of Guinea"].into_iter().collect();
        let found = filter(&roster, &excluded, "guinea");
        assert_eq!(names(&found), vec!["Equatorial Guinea", "Guinea-Bissau"]);
    }

    #[test]
    fn filter_result_is_subset_of_unfiltered() {
        let roster = roster();
        let excluded: Excluded = ["Republic of Niger"].into_iter().collect();
        let all = filter(&roster, &excluded, "");

        for query in ["a", "ni", "Islands", "zzz", " "] {
            for country in filter(&roster, &excluded, query) {
                assert!(all.iter().any(|c| c.same_as(country)));
            }
        }
    }

    #[test]
    fn resolve_prefers_exact_name() {
        let roster = roster();
        let found = resolve_guess(&roster, &Excluded::default(), "guinea").unwrap();
        assert_eq!(found.common_name(), "Guinea");

        let found = resolve_guess(&roster, &Excluded::default(), " Niger ").unwrap();
        assert_eq!(found.common_name(), "Niger");
    }

    #[test]
    fn resolve_partial_takes_first_in_roster_order() {
        let roster = roster();
        let found = resolve_guess(&roster, &Excluded::default(), "nige").unwrap();
        assert_eq!(found.common_name(), "Niger");

        let found = resolve_guess(&roster, &Excluded::default(), "bissau").unwrap();
        assert_eq!(found.common_name(), "Guinea-Bissau");
    }

    #[test]
    fn resolve_skips_excluded() {
        let roster = roster();
        let excluded: Excluded = ["Republic of Niger"].into_iter().collect();
        let found = resolve_guess(&roster, &excluded, "niger").unwrap();
        assert_eq!(found.common_name(), "Nigeria");
    }

    #[test]
    fn resolve_blank_or_unknown_is_none() {
        let roster = roster();
        assert!(resolve_guess(&roster, &Excluded::default(), "").is_none());
        assert!(resolve_guess(&roster, &Excluded::default(), "   ").is_none());
        assert!(resolve_guess(&roster, &Excluded::default(), "Atlantis").is_none());
    }

    #[test]
    fn collation_key_folds_diacritics() {
        assert_eq!(collation_key("Åland Islands"), "aland islands");
        assert_eq!(collation_key("Curaçao"), "curacao");
        assert_eq!(collation_key("São Tomé and Príncipe"), "sao tome and principe");
        assert_eq!(compare_names("Côte d'Ivoire", "Croatia"), Ordering::Less);
    }
}
