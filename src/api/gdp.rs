use std::cell::RefCell;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::rc::Rc;

use gloo_net::http::Request;
use serde::Deserialize;

use super::{CountrySource, FetchError, body_text};
use crate::config::ExplorerConfig;
use crate::model::{UNAVAILABLE, UNKNOWN};
use crate::util::{clog, cwarn, format_billions, format_dollars};

/// One yearly row as returned by the GDP API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GdpEntry {
    pub year: Option<u32>,
    pub gdp_nominal: Option<f64>,
    pub gdp_growth: Option<f64>,
    pub gdp_per_capita_nominal: Option<f64>,
    pub gdp_ppp: Option<f64>,
}

/// Zero and missing figures are both treated as "no data".
#[derive(Debug, Clone, PartialEq)]
pub struct GdpRecord {
    pub year: u32,
    pub nominal_billions: Option<f64>,
    pub growth_pct: Option<f64>,
    pub per_capita: Option<f64>,
    pub ppp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GdpReport {
    Available(GdpRecord),
    Unavailable,
}

fn nonzero(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0 && x.is_finite())
}

fn or_unavailable(v: Option<f64>, fmt: impl Fn(f64) -> String) -> String {
    v.map(fmt).unwrap_or_else(|| UNAVAILABLE.to_string())
}

impl GdpReport {
    fn record(&self) -> Option<&GdpRecord> {
        match self {
            GdpReport::Available(r) => Some(r),
            GdpReport::Unavailable => None,
        }
    }

    /// Figure used for ranking; countries without data rank at zero.
    pub fn nominal_or_zero(&self) -> f64 {
        self.record().and_then(|r| r.nominal_billions).unwrap_or(0.0)
    }

    pub fn year(&self) -> String {
        self.record()
            .map(|r| r.year.to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn nominal(&self) -> String {
        or_unavailable(self.record().and_then(|r| r.nominal_billions), format_billions)
    }

    pub fn growth(&self) -> String {
        or_unavailable(self.record().and_then(|r| r.growth_pct), |g| format!("{}%", g))
    }

    pub fn per_capita(&self) -> String {
        or_unavailable(self.record().and_then(|r| r.per_capita), format_dollars)
    }

    pub fn ppp(&self) -> String {
        or_unavailable(self.record().and_then(|r| r.ppp), format_dollars)
    }
}

/// First entry whose year falls inside `years`.
pub fn select_in_window<'a>(entries: &'a [GdpEntry], years: &RangeInclusive<u32>) -> Option<&'a GdpEntry> {
    entries
        .iter()
        .find(|e| e.year.is_some_and(|y| years.contains(&y)))
}

pub fn parse_gdp(body: &str, years: &RangeInclusive<u32>) -> Result<GdpRecord, FetchError> {
    let entries: Vec<GdpEntry> = serde_json::from_str(body)?;
    if entries.is_empty() {
        return Err(FetchError::Empty("gdp entries"));
    }
    let entry = select_in_window(&entries, years).ok_or(FetchError::Empty("gdp year window"))?;
    Ok(GdpRecord {
        year: entry.year.unwrap_or_default(),
        nominal_billions: nonzero(entry.gdp_nominal),
        growth_pct: nonzero(entry.gdp_growth),
        per_capita: nonzero(entry.gdp_per_capita_nominal),
        ppp: nonzero(entry.gdp_ppp),
    })
}

impl From<Result<GdpRecord, FetchError>> for GdpReport {
    fn from(result: Result<GdpRecord, FetchError>) -> Self {
        match result {
            Ok(r) => GdpReport::Available(r),
            Err(_) => GdpReport::Unavailable,
        }
    }
}

async fn request_gdp(cfg: &ExplorerConfig, country: &str) -> Result<GdpRecord, FetchError> {
    let request = Request::get(&cfg.gdp_url)
        .query([("country", country)])
        .header("X-Api-Key", &cfg.gdp_api_key);
    let body = body_text(request).await?;
    parse_gdp(&body, &cfg.gdp_years)
}

pub async fn fetch_gdp(cfg: &ExplorerConfig, country: &str) -> GdpReport {
    let result = request_gdp(cfg, country).await;
    if let Err(e) = &result {
        cwarn(&format!("gdp for {}: {}", country, e));
    }
    result.into()
}

/// Session-long GDP results keyed by country name. Never evicted.
///
/// Only successful lookups are kept, so a failed request is retried the
/// next time the country is needed.
#[derive(Clone, Default)]
pub struct GdpMemo(Rc<RefCell<HashMap<String, GdpReport>>>);

impl GdpMemo {
    pub fn get(&self, country: &str) -> Option<GdpReport> {
        self.0.borrow().get(country).cloned()
    }

    /// Stores `report` if it is available; returns whether it was kept.
    pub fn insert(&self, country: &str, report: GdpReport) -> bool {
        if report == GdpReport::Unavailable {
            return false;
        }
        self.0.borrow_mut().insert(country.to_string(), report);
        true
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

/// Looks the country up in the memo first; fetches and records on a miss.
pub async fn fetch_gdp_memoized<S: CountrySource + ?Sized>(
    source: &S,
    memo: &GdpMemo,
    country: &str,
) -> GdpReport {
    if let Some(hit) = memo.get(country) {
        return hit;
    }
    let report = source.gdp(country).await;
    if memo.insert(country, report.clone()) && memo.len() % 50 == 0 {
        clog(&format!("gdp memo holds {} countries", memo.len()));
    }
    report
}

#[cfg(test)]
mod tests {
    use futures_util::FutureExt;

    use super::*;
    use crate::api::StubSource;
    use crate::config::GDP_YEAR_WINDOW;

    fn entry(year: u32, nominal: f64) -> String {
        format!(
            r#"{{"country":"FR","year":{},"gdp_nominal":{},"gdp_growth":1.1,"gdp_per_capita_nominal":44000.5,"gdp_ppp":3900.25}}"#,
            year, nominal
        )
    }

    #[test]
    fn selects_entry_inside_window() {
        let body = format!("[{},{},{}]", entry(2022, 2780.0), entry(2025, 3100.0), entry(2030, 3600.0));
        let r = parse_gdp(&body, &GDP_YEAR_WINDOW).unwrap();
        assert_eq!(r.year, 2025);
        assert_eq!(r.nominal_billions, Some(3100.0));
        let report = GdpReport::Available(r);
        assert_eq!(report.nominal(), "$3100.00 Billion");
        assert_eq!(report.growth(), "1.1%");
        assert_eq!(report.per_capita(), "$44000.50");
        assert_eq!(report.ppp(), "$3900.25");
        assert_eq!(report.year(), "2025");
    }

    #[test]
    fn first_match_wins() {
        let body = format!("[{},{}]", entry(2027, 1.0), entry(2024, 2.0));
        assert_eq!(parse_gdp(&body, &GDP_YEAR_WINDOW).unwrap().year, 2027);
    }

    #[test]
    fn out_of_window_is_unavailable() {
        let body = format!("[{},{}]", entry(2019, 1.0), entry(2030, 2.0));
        let result = parse_gdp(&body, &GDP_YEAR_WINDOW);
        assert!(matches!(result, Err(FetchError::Empty(_))));
        assert_eq!(GdpReport::from(result), GdpReport::Unavailable);
        assert!(matches!(parse_gdp("[]", &GDP_YEAR_WINDOW), Err(FetchError::Empty(_))));
        assert!(matches!(
            parse_gdp(r#"{"error":"Invalid API Key."}"#, &GDP_YEAR_WINDOW),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn zero_or_missing_fields_read_unavailable() {
        let body = r#"[{"year":2026,"gdp_nominal":0,"gdp_growth":null}]"#;
        let report = GdpReport::from(parse_gdp(body, &GDP_YEAR_WINDOW));
        assert_eq!(report.year(), "2026");
        assert_eq!(report.nominal(), UNAVAILABLE);
        assert_eq!(report.growth(), UNAVAILABLE);
        assert_eq!(report.nominal_or_zero(), 0.0);
    }

    #[test]
    fn error_status_reads_sentinels() {
        let report = GdpReport::from(Err(FetchError::Status {
            status: 500,
            text: "Internal Server Error".into(),
        }));
        assert_eq!(report.year(), UNKNOWN);
        for field in [report.nominal(), report.growth(), report.per_capita(), report.ppp()] {
            assert_eq!(field, UNAVAILABLE);
        }
    }

    #[test]
    fn memo_shares_storage_between_clones() {
        let memo = GdpMemo::default();
        let other = memo.clone();
        assert_eq!(memo.len(), 0);
        assert!(other.insert("France", available(2024, 3031.8)));
        assert_eq!(memo.get("France"), Some(available(2024, 3031.8)));
        assert_eq!(GdpMemo::default().get("France"), None);
    }

    fn available(year: u32, nominal: f64) -> GdpReport {
        GdpReport::Available(GdpRecord {
            year,
            nominal_billions: Some(nominal),
            growth_pct: None,
            per_capita: None,
            ppp: None,
        })
    }

    #[test]
    fn memo_hit_skips_the_source() {
        let memo = GdpMemo::default();
        memo.insert("France", available(2024, 3031.8));
        let source = StubSource::default();
        let report = fetch_gdp_memoized(&source, &memo, "France").now_or_never().unwrap();
        assert_eq!(report, available(2024, 3031.8));
        assert_eq!(source.gdp_calls.get(), 0);
    }

    #[test]
    fn miss_fetches_and_records() {
        let memo = GdpMemo::default();
        let source = StubSource {
            gdp: HashMap::from([("Chile".to_string(), available(2025, 344.4))]),
            ..Default::default()
        };
        let first = fetch_gdp_memoized(&source, &memo, "Chile").now_or_never().unwrap();
        let second = fetch_gdp_memoized(&source, &memo, "Chile").now_or_never().unwrap();
        assert_eq!(first, available(2025, 344.4));
        assert_eq!(second, first);
        assert_eq!(source.gdp_calls.get(), 1);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn failed_lookup_is_retried() {
        let memo = GdpMemo::default();
        assert!(!memo.insert("France", GdpReport::Unavailable));
        assert_eq!(memo.get("France"), None);

        let mut source = StubSource::default();
        let first = fetch_gdp_memoized(&source, &memo, "France").now_or_never().unwrap();
        assert_eq!(first, GdpReport::Unavailable);
        assert_eq!(memo.len(), 0);

        source.gdp.insert("France".into(), available(2024, 3031.8));
        let second = fetch_gdp_memoized(&source, &memo, "France").now_or_never().unwrap();
        assert_eq!(second, available(2024, 3031.8));
        assert_eq!(source.gdp_calls.get(), 2);
        assert_eq!(memo.get("France"), Some(available(2024, 3031.8)));
    }
}
