mod app;
mod commands;
mod effects;
mod logging;
mod picker;
mod render;
mod settings;

pub use app::run_app;
