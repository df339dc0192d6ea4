mod app;
mod effects;
pub mod logging;
mod ui;

pub use app::{run, RunConfig};
