use gloo_net::http::Request;

use super::{FetchError, body_text};
use crate::config::ExplorerConfig;

/// Raw SVG markup of the world map, injected inline by the map view.
pub async fn fetch_map_svg(cfg: &ExplorerConfig) -> Result<String, FetchError> {
    let body = body_text(Request::get(&cfg.map_url)).await?;
    if !body.contains("<svg") {
        return Err(FetchError::Empty("svg document"));
    }
    Ok(body)
}
