use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingScreenProps {
    pub show: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let class = if props.show { "loading-screen" } else { "loading-screen hidden" };
    let display = if props.show { "flex" } else { "none" };
    html! {
        <div class={class} style={format!("position:fixed; inset:0; z-index:50; display:{}; flex-direction:column; align-items:center; justify-content:center; gap:12px; background:rgba(0,0,0,0.87); color:#c9d1d9;", display)}>
            <h2 style="margin:0; font-size:22px; color:#58a6ff;">{"World Explorer"}</h2>
            <div style="font-size:14px; opacity:0.85;">{"Loading countries and map..."}</div>
        </div>
    }
}
