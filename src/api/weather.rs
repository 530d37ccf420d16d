use gloo_net::http::Request;
use serde::Deserialize;

use super::{FetchError, body_text};
use crate::config::ExplorerConfig;
use crate::model::{UNAVAILABLE, UNKNOWN};
use crate::util::cwarn;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub temp_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Available(WeatherRecord),
    Unavailable,
}

impl WeatherReport {
    pub fn temperature(&self) -> String {
        match self {
            WeatherReport::Available(w) => format!("{:.1}", w.temp_c),
            WeatherReport::Unavailable => UNAVAILABLE.to_string(),
        }
    }

    pub fn condition(&self) -> &str {
        match self {
            WeatherReport::Available(w) => &w.condition,
            WeatherReport::Unavailable => UNKNOWN,
        }
    }

    /// One-line form used by the details panel.
    pub fn summary(&self) -> String {
        match self {
            WeatherReport::Available(_) => format!("{}°C, {}", self.temperature(), self.condition()),
            WeatherReport::Unavailable => UNAVAILABLE.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct WeatherBody {
    current: Option<Current>,
}

#[derive(Deserialize)]
struct Current {
    temp_c: Option<f64>,
    condition: Option<Condition>,
}

#[derive(Deserialize)]
struct Condition {
    text: Option<String>,
}

pub fn parse_weather(body: &str) -> Result<WeatherRecord, FetchError> {
    let parsed: WeatherBody = serde_json::from_str(body)?;
    let current = parsed.current.ok_or(FetchError::Empty("current"))?;
    let temp_c = current.temp_c.ok_or(FetchError::Empty("current.temp_c"))?;
    let condition = current
        .condition
        .and_then(|c| c.text)
        .filter(|t| !t.trim().is_empty())
        .ok_or(FetchError::Empty("current.condition.text"))?;
    Ok(WeatherRecord { temp_c, condition })
}

async fn request_weather(cfg: &ExplorerConfig, location: &str) -> Result<WeatherRecord, FetchError> {
    let request = Request::get(&cfg.weather_url).query([
        ("key", cfg.weather_api_key.as_str()),
        ("q", location),
    ]);
    let body = body_text(request).await?;
    parse_weather(&body)
}

impl From<Result<WeatherRecord, FetchError>> for WeatherReport {
    fn from(result: Result<WeatherRecord, FetchError>) -> Self {
        match result {
            Ok(w) => WeatherReport::Available(w),
            Err(_) => WeatherReport::Unavailable,
        }
    }
}

pub async fn fetch_weather(cfg: &ExplorerConfig, location: &str) -> WeatherReport {
    let result = request_weather(cfg, location).await;
    if let Err(e) = &result {
        cwarn(&format!("weather for {}: {}", location, e));
    }
    result.into()
}
