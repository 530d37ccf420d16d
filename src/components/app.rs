use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    country_details::CountryDetails, landmark_panel::LandmarkPanelView, loading_screen::LoadingScreen,
    map_controls::MapControls, map_view::MapView, ranking_panel::RankingPanel, sidebar::Sidebar,
};
use crate::api::countries::fetch_countries;
use crate::api::gdp::GdpMemo;
use crate::api::landmarks::fetch_landmarks;
use crate::api::map_asset::fetch_map_svg;
use crate::config::ExplorerConfig;
use crate::detail::{load_detail, lookup};
use crate::model::{
    Category, CountryDirectory, ExplorerAction, ExplorerState, Generations, LandmarkKind, Panel, UNKNOWN,
};
use crate::ranking::deliver_ranking;
use crate::state::sidebar::MOBILE_BREAKPOINT_PX;
use crate::state::transform::ZOOM_STEP;
use crate::util::{cerror, clog, cwarn};

/// Shared, session-long services handed to the async flows.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<ExplorerConfig>,
    pub memo: GdpMemo,
}

fn is_mobile_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w <= MOBILE_BREAKPOINT_PX)
        .unwrap_or(false)
}

async fn run_ranking(
    state: UseReducerDispatcher<ExplorerState>,
    ctx: AppContext,
    dir: Rc<CountryDirectory>,
    category: Category,
    generation: u64,
    finish_loading: bool,
) {
    if category == Category::Gdp {
        clog(&format!("fetching GDP for {} countries", dir.len()));
    }
    deliver_ranking(ctx.config.as_ref(), &ctx.memo, &dir, category, generation, finish_loading, |action| {
        state.dispatch(action)
    })
    .await;
}

fn begin_ranking(
    state: &UseReducerDispatcher<ExplorerState>,
    generations: &RefCell<Generations>,
    category: Category,
) -> u64 {
    let generation = generations.borrow_mut().issue(Panel::Ranking);
    state.dispatch(ExplorerAction::RankingRequested { generation, category });
    generation
}

fn request_ranking(
    state: UseReducerDispatcher<ExplorerState>,
    generations: Rc<RefCell<Generations>>,
    ctx: AppContext,
    dir: Rc<CountryDirectory>,
    category: Category,
) {
    let generation = begin_ranking(&state, &generations, category);
    spawn_local(run_ranking(state, ctx, dir, category, generation, false));
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(ExplorerState::default);
    let ctx = use_memo((), |_| AppContext {
        config: Rc::new(ExplorerConfig::default()),
        memo: GdpMemo::default(),
    });
    let generations = use_mut_ref(Generations::default);
    let svg = use_state(|| None::<AttrValue>);
    let mobile = use_state(is_mobile_viewport);

    // Bootstrap: country metadata, then the map, then the first ranking;
    // the loader stays up until that ranking has arrived.
    {
        let dispatch = state.dispatcher();
        let ctx = (*ctx).clone();
        let generations = generations.clone();
        let svg = svg.clone();
        use_effect_with((), move |_| {
            let missing = ctx.config.missing_keys();
            if !missing.is_empty() {
                cwarn(&format!("API keys not configured: {}", missing.join(", ")));
            }
            spawn_local(async move {
                let dir = match fetch_countries(&ctx.config).await {
                    Ok(dir) => {
                        clog(&format!("loaded {} countries", dir.len()));
                        Rc::new(dir)
                    }
                    Err(e) => {
                        cerror(&format!("Error during initialization: {}", e));
                        Rc::new(CountryDirectory::default())
                    }
                };
                if dir.is_empty() {
                    cwarn("no country metadata; map clicks will be ignored");
                }
                dispatch.dispatch(ExplorerAction::CountriesLoaded(dir.clone()));
                match fetch_map_svg(&ctx.config).await {
                    Ok(markup) => svg.set(Some(AttrValue::from(markup))),
                    Err(e) => cerror(&format!("map asset unavailable: {}", e)),
                }
                let generation = begin_ranking(&dispatch, &generations, Category::Population);
                run_ranking(dispatch, ctx, dir, Category::Population, generation, true).await;
            });
            || ()
        });
    }

    let on_select_country = {
        let dispatch = state.dispatcher();
        let dir = state.directory.clone();
        let ctx = (*ctx).clone();
        let generations = generations.clone();
        Callback::from(move |id: String| {
            let country = match lookup(&dir, &id) {
                Ok(rec) => rec.clone(),
                Err(e) => {
                    cerror(&e.to_string());
                    return;
                }
            };
            let generation = generations.borrow_mut().issue(Panel::Detail);
            dispatch.dispatch(ExplorerAction::DetailRequested { generation, id });
            let dispatch = dispatch.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                let detail = load_detail(ctx.config.as_ref(), &ctx.memo, country).await;
                dispatch.dispatch(ExplorerAction::DetailLoaded {
                    generation,
                    detail: Rc::new(detail),
                });
            });
        })
    };

    let on_category = {
        let dispatch = state.dispatcher();
        let dir = state.directory.clone();
        let ctx = (*ctx).clone();
        let generations = generations.clone();
        Callback::from(move |category: Category| {
            request_ranking(dispatch.clone(), generations.clone(), ctx.clone(), dir.clone(), category);
        })
    };

    let on_landmark = {
        let dispatch = state.dispatcher();
        let location = state.selected_country().map(|c| {
            if c.capital == UNKNOWN { c.name.clone() } else { c.capital.clone() }
        });
        let ctx = (*ctx).clone();
        let generations = generations.clone();
        Callback::from(move |kind: LandmarkKind| {
            let generation = generations.borrow_mut().issue(Panel::Landmarks);
            dispatch.dispatch(ExplorerAction::LandmarksRequested { generation, kind });
            let Some(location) = location.clone() else { return };
            let dispatch = dispatch.clone();
            let ctx = ctx.clone();
            spawn_local(async move {
                let report = fetch_landmarks(&ctx.config, kind, &location).await;
                dispatch.dispatch(ExplorerAction::LandmarksLoaded { generation, report });
            });
        })
    };

    let zoom = |delta: f64| {
        let dispatch = state.dispatcher();
        Callback::from(move |_: ()| dispatch.dispatch(ExplorerAction::ZoomBy(delta)))
    };
    let reset = {
        let dispatch = state.dispatcher();
        Callback::from(move |_: ()| dispatch.dispatch(ExplorerAction::ResetView))
    };

    html! {
        <div style="position:fixed; inset:0; display:flex; flex-direction:column; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <LoadingScreen show={state.loading} />
            <div id="top-bar" style="padding:8px 14px; border-bottom:1px solid #30363d; font-weight:600;">{"World Explorer"}</div>
            <div style="position:relative; flex:1; display:flex; min-height:0;">
                <div style="position:relative; flex:1; display:flex;">
                    <MapView
                        svg={(*svg).clone()}
                        transform={AttrValue::from(state.view.css())}
                        dispatch={state.dispatcher()}
                        on_select={on_select_country}
                    />
                    <MapControls on_zoom_in={zoom(ZOOM_STEP)} on_zoom_out={zoom(-ZOOM_STEP)} on_reset={reset} />
                </div>
                <Sidebar mobile={*mobile}>
                    <CountryDetails panel={state.detail.clone()} />
                    <RankingPanel
                        category={state.category}
                        entries={state.ranking.clone()}
                        loading={state.ranking_loading}
                        on_select={on_category}
                    />
                    <LandmarkPanelView kind={state.landmark_kind} panel={state.landmarks.clone()} on_select={on_landmark} />
                </Sidebar>
            </div>
        </div>
    }
}
