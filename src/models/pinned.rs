use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryLanguage {
    pub name: String,
    pub color: String,
}

/// Reduced repository projection for the pinned-repos grid. Identical shape
/// whether it came from true pins or the star-ranked fallback, so the
/// display layer never learns which path produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinnedRepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "primaryLanguage")]
    pub primary_language: Option<PrimaryLanguage>,
    #[serde(rename = "stargazerCount")]
    pub stargazer_count: u32,
    #[serde(rename = "forkCount")]
    pub fork_count: u32,
    #[serde(rename = "isPrivate", default)]
    pub is_private: bool,
}
