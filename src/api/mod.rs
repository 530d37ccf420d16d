//! HTTP fetchers for the external services.
//!
//! Every public fetcher resolves to a report type with an `Unavailable`
//! variant; `FetchError` never leaves this module tree.

pub mod countries;
pub mod gdp;
pub mod landmarks;
pub mod map_asset;
pub mod weather;

use futures_util::FutureExt;
use futures_util::future::LocalBoxFuture;
use gloo_net::http::{RequestBuilder, Response};
use thiserror::Error;

use crate::config::ExplorerConfig;
use gdp::{GdpReport, fetch_gdp};
use weather::{WeatherReport, fetch_weather};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("http status {status}: {text}")]
    Status { status: u16, text: String },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("empty payload: {0}")]
    Empty(&'static str),
}

pub(crate) async fn send_checked(request: RequestBuilder) -> Result<Response, FetchError> {
    let resp = request.send().await?;
    if !resp.ok() {
        return Err(FetchError::Status {
            status: resp.status(),
            text: resp.status_text(),
        });
    }
    Ok(resp)
}

pub(crate) async fn body_text(request: RequestBuilder) -> Result<String, FetchError> {
    let resp = send_checked(request).await?;
    Ok(resp.text().await?)
}

/// Per-country remote lookups used by the detail and ranking flows.
///
/// Futures are boxed and not `Send`; everything runs on the browser's
/// single thread.
pub trait CountrySource {
    fn weather<'a>(&'a self, location: &'a str) -> LocalBoxFuture<'a, WeatherReport>;

    fn gdp<'a>(&'a self, country: &'a str) -> LocalBoxFuture<'a, GdpReport>;
}

impl CountrySource for ExplorerConfig {
    fn weather<'a>(&'a self, location: &'a str) -> LocalBoxFuture<'a, WeatherReport> {
        fetch_weather(self, location).boxed_local()
    }

    fn gdp<'a>(&'a self, country: &'a str) -> LocalBoxFuture<'a, GdpReport> {
        fetch_gdp(self, country).boxed_local()
    }
}

/// Canned answers for exercising the flows without a network.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct StubSource {
    pub gdp: std::collections::HashMap<String, GdpReport>,
    pub weather: Option<WeatherReport>,
    pub gdp_calls: std::cell::Cell<usize>,
}

#[cfg(test)]
impl CountrySource for StubSource {
    fn weather<'a>(&'a self, _location: &'a str) -> LocalBoxFuture<'a, WeatherReport> {
        let report = self.weather.clone().unwrap_or(WeatherReport::Unavailable);
        async move { report }.boxed_local()
    }

    fn gdp<'a>(&'a self, country: &'a str) -> LocalBoxFuture<'a, GdpReport> {
        self.gdp_calls.set(self.gdp_calls.get() + 1);
        let report = self.gdp.get(country).cloned().unwrap_or(GdpReport::Unavailable);
        async move { report }.boxed_local()
    }
}
