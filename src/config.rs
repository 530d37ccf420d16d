//! Endpoints and credentials for the external services.
//!
//! Keys are injected at build time through environment variables and are
//! never committed with the source. A missing key is left empty; the remote
//! API then rejects the call and the affected panel shows its placeholder.

use std::ops::RangeInclusive;

const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";
const DEFAULT_MAP_URL: &str = "world-map.svg";
const DEFAULT_WEATHER_URL: &str = "https://api.weatherapi.com/v1/current.json";
const DEFAULT_GDP_URL: &str = "https://api.api-ninjas.com/v1/gdp";
const DEFAULT_LANDMARKS_URL: &str = "https://api.map-places.com/place";
const DEFAULT_LANDMARKS_HOST: &str = "map-places.p.rapidapi.com";

pub const GDP_YEAR_WINDOW: RangeInclusive<u32> = 2024..=2029;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub countries_url: String,
    pub map_url: String,
    pub weather_url: String,
    pub weather_api_key: String,
    pub gdp_url: String,
    pub gdp_api_key: String,
    pub gdp_years: RangeInclusive<u32>,
    pub landmarks_url: String,
    pub landmarks_host: String,
    pub landmarks_api_key: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            countries_url: env_or(option_env!("COUNTRIES_URL"), DEFAULT_COUNTRIES_URL),
            map_url: env_or(option_env!("MAP_URL"), DEFAULT_MAP_URL),
            weather_url: env_or(option_env!("WEATHER_URL"), DEFAULT_WEATHER_URL),
            weather_api_key: option_env!("WEATHER_API_KEY").unwrap_or_default().to_string(),
            gdp_url: env_or(option_env!("GDP_URL"), DEFAULT_GDP_URL),
            gdp_api_key: option_env!("GDP_API_KEY").unwrap_or_default().to_string(),
            gdp_years: GDP_YEAR_WINDOW,
            landmarks_url: env_or(option_env!("LANDMARKS_URL"), DEFAULT_LANDMARKS_URL),
            landmarks_host: env_or(option_env!("LANDMARKS_HOST"), DEFAULT_LANDMARKS_HOST),
            landmarks_api_key: option_env!("LANDMARK_API_KEY").unwrap_or_default().to_string(),
        }
    }
}

impl ExplorerConfig {
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.weather_api_key.trim().is_empty() {
            out.push("WEATHER_API_KEY");
        }
        if self.gdp_api_key.trim().is_empty() {
            out.push("GDP_API_KEY");
        }
        if self.landmarks_api_key.trim().is_empty() {
            out.push("LANDMARK_API_KEY");
        }
        out
    }
}

fn env_or(value: Option<&'static str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(weather: &str, gdp: &str, landmarks: &str) -> ExplorerConfig {
        ExplorerConfig {
            weather_api_key: weather.into(),
            gdp_api_key: gdp.into(),
            landmarks_api_key: landmarks.into(),
            ..Default::default()
        }
    }

    #[test]
    fn all_keys_present() {
        assert!(keyed("w", "g", "l").missing_keys().is_empty());
        assert_eq!(ExplorerConfig::default().gdp_years, 2024..=2029);
    }

    #[test]
    fn blank_keys_are_reported() {
        assert_eq!(keyed("  ", "", "k").missing_keys(), vec!["WEATHER_API_KEY", "GDP_API_KEY"]);
    }

    #[test]
    fn env_fallback() {
        assert_eq!(env_or(None, "x"), "x");
        assert_eq!(env_or(Some(" "), "x"), "x");
        assert_eq!(env_or(Some("y"), "x"), "y");
    }
}
