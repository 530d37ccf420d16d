use crate::model::DetailPanel;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CountryDetailsProps {
    pub panel: DetailPanel,
}

#[function_component]
pub fn CountryDetails(props: &CountryDetailsProps) -> Html {
    let row_style = "margin:2px 0; font-size:13px;";
    let body = match &props.panel {
        DetailPanel::Empty => html! {
            <p style="font-size:12px; color:#8b949e;">{"Click a country on the map to see its details."}</p>
        },
        DetailPanel::Loading { name } => html! {<>
            <h4 style="margin:0 0 6px 0;">{ name.clone() }</h4>
            <p style="font-size:12px; color:#8b949e;">{"Fetching weather and GDP..."}</p>
        </>},
        DetailPanel::Ready(detail) => html! {<>
            <h4 style="margin:0 0 6px 0;">{ detail.country.name.clone() }</h4>
            { for detail.rows().into_iter().map(|(label, value)| html! {
                <p style={row_style}><strong>{ format!("{}:", label) }</strong>{" "}{ value }</p>
            }) }
        </>},
    };
    html! {
        <section id="country-details" style="display:flex; flex-direction:column;">
            <div style="font-weight:600; margin-bottom:6px;">{"Country Details"}</div>
            { body }
        </section>
    }
}
