mod app;
mod config;
mod effects;
mod history;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
