use thiserror::Error;

use crate::api::CountrySource;
use crate::api::gdp::{GdpMemo, GdpReport, fetch_gdp_memoized};
use crate::api::weather::WeatherReport;
use crate::model::{CountryDirectory, CountryRecord};
use crate::util::format_thousands;

#[derive(Debug, Error, PartialEq)]
pub enum DetailError {
    #[error("country data not found: {0}")]
    UnknownCountry(String),
}

/// Everything the details panel shows for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDetail {
    pub country: CountryRecord,
    pub weather: WeatherReport,
    pub gdp: GdpReport,
}

impl CountryDetail {
    pub fn new(country: CountryRecord, weather: WeatherReport, gdp: GdpReport) -> Self {
        Self { country, weather, gdp }
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(String, String)> {
        let c = &self.country;
        vec![
            ("Population".into(), format_thousands(c.population)),
            ("Capital".into(), c.capital.clone()),
            ("Region".into(), c.region.clone()),
            ("Language".into(), c.language.clone()),
            ("Weather".into(), self.weather.summary()),
            ("Climate".into(), c.climate.clone()),
            (format!("GDP Nominal (in {})", self.gdp.year()), self.gdp.nominal()),
            ("GDP Growth".into(), self.gdp.growth()),
            ("GDP Per Capita (Nominal)".into(), self.gdp.per_capita()),
            ("GDP PPP".into(), self.gdp.ppp()),
        ]
    }
}

pub fn lookup<'a>(dir: &'a CountryDirectory, id: &str) -> Result<&'a CountryRecord, DetailError> {
    dir.get(id).ok_or_else(|| DetailError::UnknownCountry(id.to_string()))
}

/// Weather and GDP are requested together; the detail is built once both
/// have resolved.
pub async fn load_detail<S: CountrySource + ?Sized>(
    source: &S,
    memo: &GdpMemo,
    country: CountryRecord,
) -> CountryDetail {
    let (weather, gdp) = futures_util::join!(
        source.weather(&country.name),
        fetch_gdp_memoized(source, memo, &country.name)
    );
    CountryDetail::new(country, weather, gdp)
}
