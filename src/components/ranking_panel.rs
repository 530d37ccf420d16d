use crate::model::Category;
use crate::ranking::RankedEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RankingPanelProps {
    pub category: Category,
    pub entries: Vec<RankedEntry>,
    pub loading: bool,
    pub on_select: Callback<Category>,
}

#[function_component(RankingPanel)]
pub fn ranking_panel(props: &RankingPanelProps) -> Html {
    let buttons = Category::ALL.iter().map(|&cat| {
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(cat));
        let class = if cat == props.category { "category-btn active" } else { "category-btn" };
        let style = if cat == props.category {
            "padding:4px 10px; font-size:12px; border-color:#58a6ff; color:#58a6ff;"
        } else {
            "padding:4px 10px; font-size:12px;"
        };
        html! { <button class={class} style={style} {onclick}>{ cat.label() }</button> }
    });
    html! {
        <section style="display:flex; flex-direction:column; gap:6px;">
            <div style="font-weight:600;">{"Top Countries"}</div>
            <div style="display:flex; gap:6px;">{ for buttons }</div>
            { if props.loading { html!{<div style="font-size:11px; color:#8b949e;">{"Updating..."}</div>} } else { html!{} } }
            <ul id="top-countries-list" style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:4px;">
                { for props.entries.iter().map(|e| html! {
                    <li style="display:flex; justify-content:space-between; gap:8px; font-size:13px;">
                        <span>{ format!("{}. {}", e.rank, e.name) }</span>
                        <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ e.value.clone() }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}
