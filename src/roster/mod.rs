//! Country roster sources
//!
//! The roster comes from the public endpoint, a JSON file with the same
//! layout, or the snapshot compiled into the binary.

mod embedded;
pub mod fetch;
pub mod loader;

pub use embedded::EMBEDDED_COUNTRIES;

use crate::core::Country;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Failure to produce a usable roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("country data is not a JSON array: {0}")]
    Json(#[from] serde_json::Error),

    #[error("country request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no usable countries in the roster")]
    Empty,
}

/// Where the roster is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    /// Public endpoint, falling back to the embedded snapshot on failure
    Online,
    Embedded,
    File(PathBuf),
}

impl RosterSource {
    /// Parse a source name: `online`, `embedded`, or anything else as a file path
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "online" => Self::Online,
            "embedded" | "offline" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// A loaded roster and, when the online source failed, why the embedded
/// snapshot was used instead
#[derive(Debug)]
pub struct LoadedRoster {
    pub countries: Vec<Country>,
    pub fallback_reason: Option<String>,
}

/// Load and validate the roster from `source`
///
/// # Errors
///
/// Returns an error if the source cannot be read or parsed, or if no record
/// survives validation.
pub fn load_roster(source: &RosterSource) -> Result<Vec<Country>, RosterError> {
    load_roster_reporting(source).map(|loaded| loaded.countries)
}

/// Like [`load_roster`], but also reports an online-to-embedded fallback
///
/// # Errors
///
/// As [`load_roster`].
pub fn load_roster_reporting(source: &RosterSource) -> Result<LoadedRoster, RosterError> {
    let online = match source {
        RosterSource::Online => Some(
            fetch::fetch_roster_json(fetch::COUNTRIES_URL)
                .and_then(|json| loader::parse_roster(&json)),
        ),
        RosterSource::Embedded | RosterSource::File(_) => None,
    };
    let loaded = resolve_source(source, online)?;

    if loaded.countries.is_empty() {
        return Err(RosterError::Empty);
    }

    info!(source = ?source, countries = loaded.countries.len(), "roster loaded");
    Ok(loaded)
}

/// Pick the roster for `source`; `online` is the outcome of the fetch, if one was made
fn resolve_source(
    source: &RosterSource,
    online: Option<Result<Vec<Country>, RosterError>>,
) -> Result<LoadedRoster, RosterError> {
    let fallback_reason = match (source, online) {
        (RosterSource::File(path), _) => {
            return Ok(LoadedRoster {
                countries: loader::load_from_file(path)?,
                fallback_reason: None,
            });
        }
        (RosterSource::Online, Some(Ok(countries))) if !countries.is_empty() => {
            return Ok(LoadedRoster {
                countries,
                fallback_reason: None,
            });
        }
        (RosterSource::Online, Some(Ok(_))) => Some("online roster is empty".to_string()),
        (RosterSource::Online, Some(Err(err))) => Some(format!("online roster unavailable: {err}")),
        _ => None,
    };

    if let Some(reason) = &fallback_reason {
        warn!(%reason, "using embedded snapshot");
    }

    Ok(LoadedRoster {
        countries: loader::parse_roster(EMBEDDED_COUNTRIES)?,
        fallback_reason,
    })
}
