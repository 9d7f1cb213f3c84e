pub mod client;
pub mod graphql;

pub use client::GitHubClient;
