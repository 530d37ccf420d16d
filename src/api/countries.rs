use std::collections::BTreeMap;

use gloo_net::http::Request;
use serde::Deserialize;

use super::{FetchError, body_text};
use crate::config::ExplorerConfig;
use crate::model::{CLIMATE_PLACEHOLDER, CountryDirectory, CountryRecord, UNKNOWN};

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RawCountry {
    cca2: String,
    name: RawName,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    area: f64,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    region: String,
    #[serde(default)]
    languages: BTreeMap<String, String>,
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        let language = raw.languages.into_values().collect::<Vec<_>>().join(", ");
        let or_unknown = |s: String| if s.trim().is_empty() { UNKNOWN.to_string() } else { s };
        CountryRecord {
            id: raw.cca2,
            name: raw.name.common,
            population: raw.population,
            area_km2: raw.area,
            capital: or_unknown(raw.capital.into_iter().next().unwrap_or_default()),
            region: or_unknown(raw.region),
            language: or_unknown(language),
            climate: CLIMATE_PLACEHOLDER.to_string(),
        }
    }
}

pub fn parse_countries(body: &str) -> Result<CountryDirectory, FetchError> {
    let raw: Vec<RawCountry> = serde_json::from_str(body)?;
    if raw.is_empty() {
        return Err(FetchError::Empty("country list"));
    }
    Ok(CountryDirectory::from_records(raw.into_iter().map(CountryRecord::from)))
}

/// Loaded once at startup; the caller decides how to degrade on failure.
pub async fn fetch_countries(cfg: &ExplorerConfig) -> Result<CountryDirectory, FetchError> {
    let body = body_text(Request::get(&cfg.countries_url)).await?;
    parse_countries(&body)
}
