mod api;
mod components;
mod config;
mod detail;
mod model;
mod ranking;
mod state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
