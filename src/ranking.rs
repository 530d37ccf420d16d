use std::cmp::Ordering;
use std::collections::HashMap;

use futures_util::future::join_all;

use crate::api::CountrySource;
use crate::api::gdp::{GdpMemo, fetch_gdp_memoized};
use crate::model::{Category, CountryDirectory, CountryRecord, ExplorerAction};
use crate::util::{format_billions, format_decimal, format_thousands};

pub const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
    pub value: String,
}

fn sort_key(rec: &CountryRecord, category: Category, gdp: &HashMap<String, f64>) -> f64 {
    match category {
        Category::Population => rec.population as f64,
        Category::Area => rec.area_km2,
        Category::Gdp => gdp.get(&rec.name).copied().unwrap_or(0.0),
    }
}

fn format_value(value: f64, rec: &CountryRecord, category: Category) -> String {
    match category {
        Category::Population => format_thousands(rec.population),
        Category::Area => format!("{} km²", format_decimal(rec.area_km2)),
        Category::Gdp => format_billions(value),
    }
}

/// Top entries for `category`, largest first. `gdp` maps country name to
/// nominal GDP in billions and is only consulted for [`Category::Gdp`].
/// Equal values keep directory order.
pub fn rank(dir: &CountryDirectory, category: Category, gdp: &HashMap<String, f64>) -> Vec<RankedEntry> {
    let mut keyed: Vec<(f64, &CountryRecord)> = dir
        .iter()
        .map(|rec| (sort_key(rec, category, gdp), rec))
        .collect();
    keyed.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    keyed
        .into_iter()
        .take(TOP_N)
        .enumerate()
        .map(|(i, (value, rec))| RankedEntry {
            rank: i + 1,
            name: rec.name.clone(),
            value: format_value(value, rec, category),
        })
        .collect()
}

/// Nominal GDP for every country, fetched concurrently through the memo.
pub async fn load_gdp_figures<S: CountrySource + ?Sized>(
    source: &S,
    memo: &GdpMemo,
    dir: &CountryDirectory,
) -> HashMap<String, f64> {
    let lookups = dir.iter().map(|rec| async move {
        let report = fetch_gdp_memoized(source, memo, &rec.name).await;
        (rec.name.clone(), report.nominal_or_zero())
    });
    join_all(lookups).await.into_iter().collect()
}

pub async fn load_ranking<S: CountrySource + ?Sized>(
    source: &S,
    memo: &GdpMemo,
    dir: &CountryDirectory,
    category: Category,
) -> Vec<RankedEntry> {
    let gdp = match category {
        Category::Gdp => load_gdp_figures(source, memo, dir).await,
        _ => HashMap::new(),
    };
    rank(dir, category, &gdp)
}

/// Loads the ranking and emits it under `generation`. With `finish_loading`
/// the loader is dismissed only after the entries have been emitted.
pub async fn deliver_ranking<S: CountrySource + ?Sized>(
    source: &S,
    memo: &GdpMemo,
    dir: &CountryDirectory,
    category: Category,
    generation: u64,
    finish_loading: bool,
    emit: impl Fn(ExplorerAction),
) {
    let entries = load_ranking(source, memo, dir, category).await;
    emit(ExplorerAction::RankingLoaded { generation, entries });
    if finish_loading {
        emit(ExplorerAction::LoadingFinished);
    }
}

#[cfg(test)]
mod tests {
    use futures_util::FutureExt;

    use super::*;
    use crate::api::StubSource;
    use crate::api::gdp::{GdpRecord, GdpReport};
    use crate::model::CLIMATE_PLACEHOLDER;

    fn rec(id: &str, population: u64, area: f64) -> CountryRecord {
        CountryRecord {
            id: id.into(),
            name: format!("Country {}", id),
            population,
            area_km2: area,
            capital: "x".into(),
            region: "x".into(),
            language: "x".into(),
            climate: CLIMATE_PLACEHOLDER.into(),
        }
    }

    fn names(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn population_descending_with_stable_ties() {
        let dir = CountryDirectory::from_records([
            rec("A", 10, 1.0),
            rec("B", 50, 1.0),
            rec("C", 30, 1.0),
            rec("D", 50, 1.0),
            rec("E", 1_000_000, 1.0),
        ]);
        let top = rank(&dir, Category::Population, &HashMap::new());
        assert_eq!(names(&top), vec!["Country E", "Country B", "Country D", "Country C", "Country A"]);
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[0].value, "1,000,000");
        assert_eq!(top[4].rank, 5);
    }

    #[test]
    fn only_top_five_are_kept() {
        let dir = CountryDirectory::from_records((0..12).map(|i| rec(&i.to_string(), i, i as f64)));
        let top = rank(&dir, Category::Area, &HashMap::new());
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0].name, "Country 11");
        assert_eq!(top[0].value, "11 km²");
        assert_eq!(top[4].name, "Country 7");
    }

    #[test]
    fn area_values_are_grouped() {
        let dir = CountryDirectory::from_records([rec("RU", 1, 17_098_242.0), rec("VA", 1, 0.49)]);
        let top = rank(&dir, Category::Area, &HashMap::new());
        assert_eq!(top[0].value, "17,098,242 km²");
        assert_eq!(top[1].value, "0.49 km²");
    }

    #[test]
    fn gdp_uses_fetched_figures_and_defaults_to_zero() {
        let dir = CountryDirectory::from_records([rec("A", 1, 1.0), rec("B", 1, 1.0), rec("C", 1, 1.0)]);
        let gdp = HashMap::from([
            ("Country B".to_string(), 2100.456),
            ("Country C".to_string(), 25462.7),
        ]);
        let top = rank(&dir, Category::Gdp, &gdp);
        assert_eq!(names(&top), vec!["Country C", "Country B", "Country A"]);
        assert_eq!(top[0].value, "$25462.70 Billion");
        assert_eq!(top[1].value, "$2100.46 Billion");
        assert_eq!(top[2].value, "$0.00 Billion");
    }

    #[test]
    fn empty_directory_ranks_nothing() {
        assert!(rank(&CountryDirectory::default(), Category::Population, &HashMap::new()).is_empty());
    }

    fn nominal(billions: f64) -> GdpReport {
        GdpReport::Available(GdpRecord {
            year: 2024,
            nominal_billions: Some(billions),
            growth_pct: None,
            per_capita: None,
            ppp: None,
        })
    }

    #[test]
    fn gdp_ranking_reads_memo_and_source() {
        let dir = CountryDirectory::from_records([rec("A", 1, 1.0), rec("B", 1, 1.0), rec("C", 1, 1.0)]);
        let memo = GdpMemo::default();
        memo.insert("Country A", nominal(120.0));
        let source = StubSource {
            gdp: HashMap::from([("Country C".to_string(), nominal(980.25))]),
            ..Default::default()
        };
        let top = load_ranking(&source, &memo, &dir, Category::Gdp).now_or_never().unwrap();
        assert_eq!(names(&top), vec!["Country C", "Country A", "Country B"]);
        assert_eq!(top[1].value, "$120.00 Billion");
        assert_eq!(top[2].value, "$0.00 Billion");
        // A is served from the memo; B failed and stays out of it.
        assert_eq!(source.gdp_calls.get(), 2);
        assert_eq!(memo.get("Country B"), None);
        assert_eq!(memo.get("Country C"), Some(nominal(980.25)));
    }

    #[test]
    fn non_gdp_ranking_fetches_nothing() {
        let dir = CountryDirectory::from_records([rec("A", 7, 1.0), rec("B", 9, 1.0)]);
        let source = StubSource::default();
        let top = load_ranking(&source, &GdpMemo::default(), &dir, Category::Population)
            .now_or_never()
            .unwrap();
        assert_eq!(names(&top), vec!["Country B", "Country A"]);
        assert_eq!(source.gdp_calls.get(), 0);
    }

    #[test]
    fn loader_is_dismissed_after_first_ranking() {
        use std::cell::RefCell;

        let dir = CountryDirectory::from_records([rec("A", 3, 1.0), rec("B", 8, 1.0)]);
        let emitted = RefCell::new(Vec::new());
        deliver_ranking(
            &StubSource::default(),
            &GdpMemo::default(),
            &dir,
            Category::Population,
            1,
            true,
            |a| emitted.borrow_mut().push(a),
        )
        .now_or_never()
        .unwrap();
        let emitted = emitted.into_inner();
        assert_eq!(emitted.len(), 2);
        match &emitted[0] {
            ExplorerAction::RankingLoaded { generation, entries } => {
                assert_eq!(*generation, 1);
                assert_eq!(names(entries), vec!["Country B", "Country A"]);
            }
            _ => panic!("ranking must be emitted first"),
        }
        assert!(matches!(emitted[1], ExplorerAction::LoadingFinished));
    }
}
