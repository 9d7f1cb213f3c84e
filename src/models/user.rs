use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile snapshot from `GET /users/{username}`.
///
/// Every field the sidebar renders is optional or defaultable so the
/// gateway can hand back a blank profile when the fetch fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubUser {
    #[serde(default)]
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub blog: Option<String>,
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub public_repos: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl GitHubUser {
    /// A fetch that failed leaves the login blank; the display layer shows
    /// an empty shell instead of crashing.
    pub fn is_blank(&self) -> bool {
        self.login.is_empty()
    }
}

/// Repository entry from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub private: bool,
    pub updated_at: Option<DateTime<Utc>>,
}
