use crate::model::{LandmarkKind, LandmarkPanel};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LandmarkPanelProps {
    pub kind: Option<LandmarkKind>,
    pub panel: LandmarkPanel,
    pub on_select: Callback<LandmarkKind>,
}

#[function_component(LandmarkPanelView)]
pub fn landmark_panel(props: &LandmarkPanelProps) -> Html {
    let note = |text: &str| html! { <p style="font-size:12px; color:#8b949e; margin:0;">{ text.to_string() }</p> };
    let body = match &props.panel {
        LandmarkPanel::Idle => html! {},
        LandmarkPanel::NoCountry => note("Select a country first"),
        LandmarkPanel::Loading => note("Searching..."),
        LandmarkPanel::Ready(report) => {
            let names = report.names();
            if names.is_empty() {
                note("No landmarks found")
            } else {
                html! {<>
                    { for names.into_iter().map(|n| html! { <div class="landmark-item" style="font-size:13px;">{ n.to_string() }</div> }) }
                </>}
            }
        }
    };
    html! {
        <section style="display:flex; flex-direction:column; gap:6px;">
            <div style="font-weight:600;">{"Landmarks"}</div>
            <div style="display:flex; gap:6px;">
                { for LandmarkKind::ALL.iter().map(|&kind| {
                    let cb = props.on_select.clone();
                    let onclick = Callback::from(move |_| cb.emit(kind));
                    let active = props.kind == Some(kind);
                    html! {
                        <button
                            id={format!("btn-{}", kind.as_str())}
                            class={if active { "landmark-btn active" } else { "landmark-btn" }}
                            style={if active { "padding:4px 10px; font-size:12px; border-color:#2ea043; color:#2ea043;" } else { "padding:4px 10px; font-size:12px;" }}
                            {onclick}
                        >{ kind.label() }</button>
                    }
                }) }
            </div>
            <div id="landmark-list" style="display:flex; flex-direction:column; gap:3px;">{ body }</div>
        </section>
    }
}
