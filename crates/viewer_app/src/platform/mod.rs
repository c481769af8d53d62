mod app;
mod effects;
mod input;
mod output;
mod ui;

pub use app::run_app;
