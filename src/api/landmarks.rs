use gloo_net::http::Request;
use serde::Deserialize;

use super::{FetchError, body_text};
use crate::config::ExplorerConfig;
use crate::model::LandmarkKind;
use crate::util::cwarn;

#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LandmarkReport {
    Found(Vec<Landmark>),
    Unavailable,
}

impl LandmarkReport {
    pub fn names(&self) -> Vec<&str> {
        match self {
            LandmarkReport::Found(list) => list.iter().map(|l| l.name.as_str()).collect(),
            LandmarkReport::Unavailable => Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawLandmark {
    name: Option<String>,
}

/// Entries without a usable name are dropped.
pub fn parse_landmarks(body: &str) -> Result<Vec<Landmark>, FetchError> {
    let raw: Vec<RawLandmark> = serde_json::from_str(body)?;
    Ok(raw
        .into_iter()
        .filter_map(|r| r.name)
        .filter(|n| !n.trim().is_empty())
        .map(|name| Landmark { name })
        .collect())
}

async fn request_landmarks(
    cfg: &ExplorerConfig,
    kind: LandmarkKind,
    location: &str,
) -> Result<Vec<Landmark>, FetchError> {
    let request = Request::get(&cfg.landmarks_url)
        .query([("type", kind.as_str()), ("location", location)])
        .header("X-RapidAPI-Host", &cfg.landmarks_host)
        .header("X-RapidAPI-Key", &cfg.landmarks_api_key);
    let body = body_text(request).await?;
    parse_landmarks(&body)
}

pub async fn fetch_landmarks(cfg: &ExplorerConfig, kind: LandmarkKind, location: &str) -> LandmarkReport {
    match request_landmarks(cfg, kind, location).await {
        Ok(list) => LandmarkReport::Found(list),
        Err(e) => {
            cwarn(&format!("{} landmarks for {}: {}", kind.as_str(), location, e));
            LandmarkReport::Unavailable
        }
    }
}
