pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod profile;
pub mod taxonomy;

pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use profile::{HeatmapSeries, ProfileViewer, ViewState};
