//! Application state for the explorer.
//!
//! Everything the UI shows is derived from [`ExplorerState`]; components only
//! dispatch [`ExplorerAction`]s and run the network effects.

use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

use crate::api::landmarks::LandmarkReport;
use crate::detail::CountryDetail;
use crate::ranking::RankedEntry;
use crate::state::gesture::{GestureState, Point, wheel_zoom_delta};
use crate::state::transform::ViewTransform;

pub const UNAVAILABLE: &str = "unavailable";
pub const UNKNOWN: &str = "unknown";
pub const CLIMATE_PLACEHOLDER: &str = "Varied";

#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code; matches the map path ids.
    pub id: String,
    pub name: String,
    pub population: u64,
    pub area_km2: f64,
    pub capital: String,
    pub region: String,
    pub language: String,
    pub climate: String,
}

/// Countries keyed by id, iterated in upstream order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryDirectory {
    records: Vec<CountryRecord>,
    index: HashMap<String, usize>,
}

impl CountryDirectory {
    pub fn from_records(records: impl IntoIterator<Item = CountryRecord>) -> Self {
        let mut dir = Self::default();
        for rec in records {
            match dir.index.get(&rec.id) {
                Some(&i) => dir.records[i] = rec,
                None => {
                    dir.index.insert(rec.id.clone(), dir.records.len());
                    dir.records.push(rec);
                }
            }
        }
        dir
    }

    pub fn get(&self, id: &str) -> Option<&CountryRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Population,
    Area,
    Gdp,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Population, Category::Area, Category::Gdp];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Population => "Population",
            Category::Area => "Area",
            Category::Gdp => "GDP",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkKind {
    Natural,
    Historic,
    Modern,
}

impl LandmarkKind {
    pub const ALL: [LandmarkKind; 3] = [LandmarkKind::Natural, LandmarkKind::Historic, LandmarkKind::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            LandmarkKind::Natural => "natural",
            LandmarkKind::Historic => "historic",
            LandmarkKind::Modern => "modern",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandmarkKind::Natural => "Natural",
            LandmarkKind::Historic => "Historic",
            LandmarkKind::Modern => "Modern",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailPanel {
    #[default]
    Empty,
    Loading { name: String },
    Ready(Rc<CountryDetail>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LandmarkPanel {
    #[default]
    Idle,
    NoCountry,
    Loading,
    Ready(LandmarkReport),
}

/// Latest request token per panel. Results carrying an older token are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generations {
    pub detail: u64,
    pub ranking: u64,
    pub landmarks: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Detail,
    Ranking,
    Landmarks,
}

impl Generations {
    /// Hands out the next token for `panel`. Kept outside the reducer so the
    /// token is known before the async work starts.
    pub fn issue(&mut self, panel: Panel) -> u64 {
        let slot = match panel {
            Panel::Detail => &mut self.detail,
            Panel::Ranking => &mut self.ranking,
            Panel::Landmarks => &mut self.landmarks,
        };
        *slot += 1;
        *slot
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerState {
    pub loading: bool,
    pub directory: Rc<CountryDirectory>,
    pub view: ViewTransform,
    pub gesture: GestureState,
    pub selected: Option<String>,
    pub detail: DetailPanel,
    pub category: Category,
    pub ranking: Vec<RankedEntry>,
    pub ranking_loading: bool,
    pub landmark_kind: Option<LandmarkKind>,
    pub landmarks: LandmarkPanel,
    pub latest: Generations,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            loading: true,
            directory: Rc::new(CountryDirectory::default()),
            view: ViewTransform::default(),
            gesture: GestureState::default(),
            selected: None,
            detail: DetailPanel::Empty,
            category: Category::default(),
            ranking: Vec::new(),
            ranking_loading: false,
            landmark_kind: None,
            landmarks: LandmarkPanel::Idle,
            latest: Generations::default(),
        }
    }
}

impl ExplorerState {
    pub fn selected_country(&self) -> Option<&CountryRecord> {
        self.selected.as_deref().and_then(|id| self.directory.get(id))
    }
}

pub enum ExplorerAction {
    CountriesLoaded(Rc<CountryDirectory>),
    LoadingFinished,
    ZoomBy(f64),
    ResetView,
    Wheel { delta_y: f64 },
    MouseDown(Point),
    MouseMove(Point),
    MouseUp,
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd { remaining: usize },
    DetailRequested { generation: u64, id: String },
    DetailLoaded { generation: u64, detail: Rc<CountryDetail> },
    RankingRequested { generation: u64, category: Category },
    RankingLoaded { generation: u64, entries: Vec<RankedEntry> },
    LandmarksRequested { generation: u64, kind: LandmarkKind },
    LandmarksLoaded { generation: u64, report: LandmarkReport },
}

impl Reducible for ExplorerState {
    type Action = ExplorerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ExplorerAction::*;
        let mut new = (*self).clone();
        match action {
            CountriesLoaded(dir) => new.directory = dir,
            LoadingFinished => new.loading = false,
            ZoomBy(delta) => new.view.zoom_by(delta),
            ResetView => new.view.reset(),
            Wheel { delta_y } => new.view.zoom_by(wheel_zoom_delta(delta_y)),
            MouseDown(at) => new.gesture.mouse_down(at),
            MouseMove(at) => {
                if !new.gesture.mouse_move(at, &mut new.view) {
                    return self;
                }
            }
            MouseUp => {
                if !new.gesture.mouse_panning {
                    return self;
                }
                new.gesture.mouse_up();
            }
            TouchStart(points) => {
                let view = new.view;
                new.gesture.touch_start(&points, &view);
            }
            TouchMove(points) => {
                if !new.gesture.touch_move(&points, &mut new.view) {
                    return self;
                }
            }
            TouchEnd { remaining } => new.gesture.touch_end(remaining),
            DetailRequested { generation, id } => {
                // Unknown ids leave the panel untouched.
                let Some(rec) = new.directory.get(&id) else { return self };
                new.detail = DetailPanel::Loading { name: rec.name.clone() };
                new.selected = Some(id);
                new.latest.detail = generation;
                // Landmarks listed for the previous country no longer apply.
                new.landmarks = LandmarkPanel::Idle;
                new.landmark_kind = None;
            }
            DetailLoaded { generation, detail } => {
                if generation != new.latest.detail {
                    return self;
                }
                new.detail = DetailPanel::Ready(detail);
            }
            RankingRequested { generation, category } => {
                new.category = category;
                new.ranking_loading = true;
                new.latest.ranking = generation;
            }
            RankingLoaded { generation, entries } => {
                if generation != new.latest.ranking {
                    return self;
                }
                new.ranking = entries;
                new.ranking_loading = false;
            }
            LandmarksRequested { generation, kind } => {
                new.landmark_kind = Some(kind);
                new.latest.landmarks = generation;
                new.landmarks = if new.selected.is_some() {
                    LandmarkPanel::Loading
                } else {
                    LandmarkPanel::NoCountry
                };
            }
            LandmarksLoaded { generation, report } => {
                if generation != new.latest.landmarks || new.landmarks != LandmarkPanel::Loading {
                    return self;
                }
                new.landmarks = LandmarkPanel::Ready(report);
            }
        }
        new.into()
    }
}
