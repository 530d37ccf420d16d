use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::state::sidebar::SidebarDrag;

const SNAP_TRANSITION: &str = "transform 0.3s ease";
const PANEL_STYLE: &str = "background:rgba(22,27,34,0.95); border:1px solid #30363d; display:flex; flex-direction:column; gap:14px; padding:12px 14px; overflow-y:auto; color:#c9d1d9;";

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub mobile: bool,
    #[prop_or_default]
    pub children: Html,
}

fn set_sheet_style(sheet: &NodeRef, transform: &str, transition: &str) {
    if let Some(el) = sheet.cast::<HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("transition", transition);
        let _ = style.set_property("transform", transform);
    }
}

fn sheet_height(sheet: &NodeRef) -> f64 {
    sheet
        .cast::<HtmlElement>()
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().item(0).map(|t| t.client_y() as f64)
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let sheet_ref = use_node_ref();
    let drag = use_mut_ref(SidebarDrag::default);
    let expanded = use_state(|| false);

    if !props.mobile {
        return html! {
            <aside class="sidebar" style={format!("width:340px; {}", PANEL_STYLE)}>
                { props.children.clone() }
            </aside>
        };
    }

    let ontouchstart = {
        let drag = drag.clone();
        let sheet_ref = sheet_ref.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else { return };
            let mut d = drag.borrow_mut();
            let offset = d.rest_offset(sheet_height(&sheet_ref));
            d.begin(y, offset);
            set_sheet_style(&sheet_ref, &format!("translateY({}px)", offset), "none");
        })
    };
    let ontouchmove = {
        let drag = drag.clone();
        let sheet_ref = sheet_ref.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(y) = first_touch_y(&e) else { return };
            let offset = drag.borrow_mut().drag_to(y, sheet_height(&sheet_ref));
            if let Some(offset) = offset {
                set_sheet_style(&sheet_ref, &format!("translateY({}px)", offset), "none");
            }
        })
    };
    let ontouchend = {
        let drag = drag.clone();
        let sheet_ref = sheet_ref.clone();
        let expanded = expanded.clone();
        Callback::from(move |_e: TouchEvent| {
            let mut d = drag.borrow_mut();
            if let Some(open) = d.release() {
                set_sheet_style(&sheet_ref, d.css(), SNAP_TRANSITION);
                expanded.set(open);
            }
        })
    };
    let onclick = {
        let drag = drag.clone();
        let sheet_ref = sheet_ref.clone();
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            let mut d = drag.borrow_mut();
            if d.tap(js_sys::Date::now()) {
                e.prevent_default();
                set_sheet_style(&sheet_ref, d.css(), SNAP_TRANSITION);
                expanded.set(d.expanded);
            }
        })
    };

    let class = if *expanded { "sidebar mobile expanded" } else { "sidebar mobile" };
    let transform = drag.borrow().css();
    html! {
        <aside
            ref={sheet_ref}
            class={class}
            style={format!("position:fixed; left:0; right:0; bottom:0; max-height:80vh; border-radius:14px 14px 0 0; transform:{}; transition:{}; {}", transform, SNAP_TRANSITION, PANEL_STYLE)}
        >
            <div class="sidebar-drag-handle" {ontouchstart} {ontouchmove} {ontouchend} {onclick}
                style="align-self:center; width:48px; height:6px; border-radius:3px; background:#30363d; margin:4px 0 8px 0; flex-shrink:0;">
            </div>
            <div class="sidebar-content" style="display:flex; flex-direction:column; gap:14px;">
                { props.children.clone() }
            </div>
        </aside>
    }
}
