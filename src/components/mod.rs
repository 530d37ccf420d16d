pub mod app;
pub mod country_details;
pub mod landmark_panel;
pub mod loading_screen;
pub mod map_controls;
pub mod map_view;
pub mod ranking_panel;
pub mod sidebar;

pub use app::App;
