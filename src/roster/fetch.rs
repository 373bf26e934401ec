//! Download of the country list from the public endpoint

use super::RosterError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Public country-information endpoint with the fields the game needs
///
/// The endpoint caps `fields` at ten, so the flag emoji and flag image are
/// derived from `cca2` instead of being requested.
pub const COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name,cca2,latlng,area,population,landlocked,region,languages,capital,borders";

/// Upper bound for the whole request
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetch the raw roster JSON from `url`
///
/// Shows a spinner on stderr while waiting.
///
/// # Errors
///
/// Returns `RosterError::Http` on connection failure, timeout, or a non-2xx status.
pub fn fetch_roster_json(url: &str) -> Result<String, RosterError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching countries...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = request(url);
    spinner.finish_and_clear();

    let body = result?;
    info!(url, bytes = body.len(), "country list downloaded");
    Ok(body)
}

fn request(url: &str) -> Result<String, RosterError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("countrdle/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let body = client.get(url).send()?.error_for_status()?.text()?;
    Ok(body)
}
