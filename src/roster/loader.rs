//! Roster construction from country JSON
//!
//! Accepts the record layout of the public country endpoint. Records that are
//! missing a required field, carry a wrong type, or repeat an official name are
//! dropped with a warning; the rest of the roster still loads.

use super::RosterError;
use crate::core::{ClueAttributes, Coordinates, Country, CountryError};
use crate::game::matcher::compare_names;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const FLAG_IMAGE_BASE: &str = "https://flagcdn.com/w320";

#[derive(Debug, Deserialize)]
struct RawName {
    common: Option<String>,
    official: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    png: Option<String>,
}

/// One record as served by the endpoint; every field is optional here so that
/// validation can name what is missing
#[derive(Debug, Deserialize)]
struct RawCountry {
    name: Option<RawName>,
    cca2: Option<String>,
    flag: Option<String>,
    flags: Option<RawFlags>,
    latlng: Option<Vec<f64>>,
    area: Option<f64>,
    population: Option<u64>,
    landlocked: Option<bool>,
    region: Option<String>,
    languages: Option<BTreeMap<String, String>>,
    capital: Option<Vec<String>>,
    borders: Option<Vec<String>>,
}

impl TryFrom<RawCountry> for Country {
    type Error = CountryError;

    fn try_from(raw: RawCountry) -> Result<Self, Self::Error> {
        let name = raw.name.ok_or(CountryError::MissingField("name"))?;
        let common = name.common.ok_or(CountryError::MissingField("name.common"))?;
        let official = name
            .official
            .ok_or(CountryError::MissingField("name.official"))?;

        let coordinates = match raw.latlng.as_deref() {
            Some(&[lat, lng]) => Coordinates::new(lat, lng)
                .ok_or(CountryError::InvalidCoordinates { lat, lng })?,
            _ => return Err(CountryError::MissingField("latlng")),
        };

        let cca2 = raw.cca2.filter(|code| is_country_code(code));
        let flag_image_url = raw
            .flags
            .and_then(|flags| flags.png)
            .or_else(|| cca2.as_deref().map(flag_image_url))
            .ok_or(CountryError::MissingField("flags.png"))?;
        let flag_emoji = raw
            .flag
            .or_else(|| cca2.as_deref().map(flag_emoji))
            .unwrap_or_default();

        let clues = ClueAttributes {
            area: raw.area.ok_or(CountryError::MissingField("area"))?,
            population: raw.population.ok_or(CountryError::MissingField("population"))?,
            landlocked: raw.landlocked.ok_or(CountryError::MissingField("landlocked"))?,
            region: raw.region.ok_or(CountryError::MissingField("region"))?,
            languages: raw.languages.ok_or(CountryError::MissingField("languages"))?,
            capital: raw.capital.ok_or(CountryError::MissingField("capital"))?,
            borders: raw.borders.ok_or(CountryError::MissingField("borders"))?,
            flag_image_url,
        };

        Self::new(common, official, flag_emoji, coordinates, clues)
    }
}

fn is_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Regional-indicator flag emoji for a two-letter country code
fn flag_emoji(cca2: &str) -> String {
    cca2.to_ascii_uppercase()
        .bytes()
        .filter_map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

fn flag_image_url(cca2: &str) -> String {
    format!("{FLAG_IMAGE_BASE}/{}.png", cca2.to_ascii_lowercase())
}

/// Build a roster from a JSON array of country records
///
/// The result is sorted by common name and has unique official names.
///
/// # Errors
///
/// Returns `RosterError::Json` if the text is not a JSON array. Individual
/// bad records are skipped, not reported as errors.
pub fn parse_roster(json: &str) -> Result<Vec<Country>, RosterError> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let total = records.len();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut roster = Vec::with_capacity(total);

    for (index, record) in records.into_iter().enumerate() {
        let country = serde_json::from_value::<RawCountry>(record)
            .map_err(|e| e.to_string())
            .and_then(|raw| Country::try_from(raw).map_err(|e| e.to_string()));

        match country {
            Ok(country) if seen.insert(country.official_name().to_string()) => {
                roster.push(country);
            }
            Ok(country) => {
                warn!(index, official = country.official_name(), "dropping duplicate country");
            }
            Err(reason) => warn!(index, %reason, "dropping malformed country record"),
        }
    }

    roster.sort_by(|a, b| compare_names(a.common_name(), b.common_name()));
    debug!(kept = roster.len(), total, "roster parsed");

    Ok(roster)
}

/// Load a roster from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Country>, RosterError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_roster(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FRANCE: &str = r#"{
        "name": {"common": "France", "official": "French Republic"},
        "flag": "🇫🇷",
        "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
        "latlng": [46.0, 2.0],
        "area": 551695.0,
        "population": 67391582,
        "landlocked": false,
        "region": "Europe",
        "languages": {"fra": "French"},
        "capital": ["Paris"],
        "borders": ["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"]
    }"#;

    const GERMANY: &str = r#"{
        "name": {"common": "Germany", "official": "Federal Republic of Germany"},
        "cca2": "de",
        "latlng": [51, 9],
        "area": 357114,
        "population": 83240525,
        "landlocked": false,
        "region": "Europe",
        "languages": {"deu": "German"},
        "capital": ["Berlin"],
        "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"]
    }"#;

    fn names(roster: &[Country]) -> Vec<&str> {
        roster.iter().map(Country::common_name).collect()
    }

    #[test]
    fn parse_full_records() {
        let roster = parse_roster(&format!("[{GERMANY}, {FRANCE}]")).unwrap();
        assert_eq!(names(&roster), vec!["France", "Germany"]);

        let france = &roster[0];
        assert_eq!(france.official_name(), "French Republic");
        assert_eq!(france.flag_emoji(), "🇫🇷");
        assert_eq!(france.coordinates(), Coordinates::new(46.0, 2.0).unwrap());
        assert_eq!(france.clues().capital, vec!["Paris".to_string()]);
        assert_eq!(france.clues().flag_image_url, "https://flagcdn.com/w320/fr.png");
    }

    #[test]
    fn flag_derived_from_country_code() {
        let roster = parse_roster(&format!("[{GERMANY}]")).unwrap();
        let germany = &roster[0];
        assert_eq!(germany.flag_emoji(), "🇩🇪");
        assert_eq!(germany.clues().flag_image_url, "https://flagcdn.com/w320/de.png");
        assert!((germany.clues().area - 357_114.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_records_are_dropped() {
        let missing_coords = FRANCE.replace(r#""latlng": [46.0, 2.0],"#, "");
        let bad_coords = FRANCE.replace("[46.0, 2.0]", "[146.0, 2.0]");
        let wrong_type = FRANCE.replace(r#""landlocked": false"#, r#""landlocked": "no""#);
        let missing_languages = FRANCE.replace(r#""languages": {"fra": "French"},"#, "");
        let json = format!(
            "[{missing_coords}, {bad_coords}, {wrong_type}, {missing_languages}, 42, {GERMANY}]"
        );

        let roster = parse_roster(&json).unwrap();
        assert_eq!(names(&roster), vec!["Germany"]);
    }

    #[test]
    fn duplicate_official_names_are_dropped() {
        let renamed = FRANCE.replace(r#""common": "France""#, r#""common": "Gaul""#);
        let roster = parse_roster(&format!("[{FRANCE}, {renamed}]")).unwrap();
        assert_eq!(names(&roster), vec!["France"]);
    }

    #[test]
    fn non_array_is_an_error() {
        assert!(matches!(parse_roster("{}"), Err(RosterError::Json(_))));
        assert!(matches!(parse_roster("not json"), Err(RosterError::Json(_))));
    }

    #[test]
    fn empty_array_parses_to_empty_roster() {
        assert!(parse_roster("[]").unwrap().is_empty());
    }

    #[test]
    fn load_from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{FRANCE}]").unwrap();

        let roster = load_from_file(file.path()).unwrap();
        assert_eq!(names(&roster), vec!["France"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(RosterError::Io { .. })));
    }

    #[test]
    fn flag_emoji_from_code() {
        assert_eq!(flag_emoji("fr"), "🇫🇷");
        assert_eq!(flag_emoji("JP"), "🇯🇵");
        assert!(!is_country_code("FRA"));
        assert!(!is_country_code("1A"));
    }
}
