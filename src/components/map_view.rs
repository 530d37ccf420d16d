use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, MouseEvent, TouchEvent, TouchList, WheelEvent};
use yew::prelude::*;

use crate::model::{ExplorerAction, ExplorerState};
use crate::state::gesture::Point;
use crate::util::{cerror, clog};

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub svg: Option<AttrValue>,
    pub transform: AttrValue,
    pub dispatch: UseReducerDispatcher<ExplorerState>,
    pub on_select: Callback<String>,
}

fn touch_points(list: &TouchList) -> Vec<Point> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(t.page_x() as f64, t.page_y() as f64))
        .collect()
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.page_x() as f64, e.page_y() as f64)
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();

    // Pointer listeners are attached by hand so wheel and touch can be non-passive.
    {
        let container_ref = container_ref.clone();
        let dispatch = props.dispatch.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let container = container_ref.cast::<HtmlElement>();
            let opts = AddEventListenerOptions::new();
            opts.set_passive(false);

            let mousedown_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    if e.button() == 0 {
                        dispatch.dispatch(ExplorerAction::MouseDown(mouse_point(&e)));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: MouseEvent| {
                    dispatch.dispatch(ExplorerAction::MouseMove(mouse_point(&e)));
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |_e: MouseEvent| {
                    dispatch.dispatch(ExplorerAction::MouseUp);
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    e.prevent_default();
                    dispatch.dispatch(ExplorerAction::Wheel { delta_y: e.delta_y() });
                }) as Box<dyn FnMut(_)>)
            };
            let touch_start_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    dispatch.dispatch(ExplorerAction::TouchStart(touch_points(&e.touches())));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_move_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    dispatch.dispatch(ExplorerAction::TouchMove(touch_points(&e.touches())));
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let dispatch = dispatch.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let remaining = e.touches().length() as usize;
                    dispatch.dispatch(ExplorerAction::TouchEnd { remaining });
                }) as Box<dyn FnMut(_)>)
            };

            match &container {
                Some(el) => {
                    let _ = el.add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref());
                    let _ = el.add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());
                    let _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                        &opts,
                    );
                    let _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                        &opts,
                    );
                    let _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                        "touchmove",
                        touch_move_cb.as_ref().unchecked_ref(),
                        &opts,
                    );
                    let _ = el.add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref());
                    let _ = el.add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref());
                }
                None => cerror("map container is not mounted; pan/zoom disabled"),
            }
            if let Some(w) = &window {
                let _ = w.add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
            }

            move || {
                if let Some(el) = &container {
                    let _ = el.remove_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref());
                    let _ = el.remove_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref());
                }
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());
                }
            }
        });
    }

    // Once the SVG is injected, make sure it actually carries country shapes.
    {
        let container_ref = container_ref.clone();
        use_effect_with(props.svg.clone(), move |svg| {
            if svg.is_some() {
                let paths = container_ref
                    .cast::<Element>()
                    .and_then(|el| el.query_selector_all("svg path").ok())
                    .map(|list| list.length())
                    .unwrap_or(0);
                if paths == 0 {
                    cerror("No countries found in the SVG.");
                } else {
                    clog(&format!("map ready with {} country shapes", paths));
                }
            }
            || ()
        });
    }

    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            let path = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("path").ok().flatten());
            if let Some(path) = path {
                let id = path.id();
                if !id.is_empty() {
                    clog(&format!("clicked on country: {}", id));
                    on_select.emit(id);
                }
            }
        })
    };

    html! {
        <div id="map-container" ref={container_ref} style="position:relative; flex:1; overflow:hidden; touch-action:none; cursor:grab; background:#0d1117;">
            <div id="svg-wrapper" {onclick} style={format!("transform:{}; transform-origin:center center; width:100%; height:100%;", props.transform)}>
                { match &props.svg {
                    Some(svg) => Html::from_html_unchecked(svg.clone()),
                    None => html! {},
                } }
            </div>
        </div>
    }
}
