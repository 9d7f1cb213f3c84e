pub mod activity;
pub mod calendar;
pub mod pinned;
pub mod viewer;

pub use calendar::HeatmapSeries;
pub use viewer::{ProfileViewer, ViewState};
