use crate::github::GitHubClient;
use crate::models::{PinnedRepoSummary, PrimaryLanguage, Repository};

/// At most six repositories appear on the overview grid, pinned or not.
pub const MAX_PINNED: usize = 6;

/// Neutral language color used when the REST payload has no color data.
pub const FALLBACK_LANG_COLOR: &str = "#8b949e";

/// Resolves the pinned-repositories section: curated pins when the GraphQL
/// query yields any, otherwise the user's top repositories by stars. A
/// missing credential, a rejected query, and a genuinely empty pin set all
/// take the fallback path; the output shape never reveals which.
pub async fn resolve_pinned(client: &GitHubClient, username: &str) -> Vec<PinnedRepoSummary> {
    let mut pins = client.get_pinned_repos(username).await;
    if !pins.is_empty() {
        pins.truncate(MAX_PINNED);
        return pins;
    }

    tracing::debug!("No pinned repos for {}, falling back to top-starred", username);
    top_repos_by_stars(&client.get_repos(username).await)
}

/// Ranks repositories by star count descending and projects the first six
/// into the pinned summary shape. The sort is stable, so star ties keep
/// their original relative order.
pub fn top_repos_by_stars(repos: &[Repository]) -> Vec<PinnedRepoSummary> {
    let mut ranked: Vec<&Repository> = repos.iter().collect();
    ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));

    ranked.into_iter().take(MAX_PINNED).map(project).collect()
}

fn project(repo: &Repository) -> PinnedRepoSummary {
    PinnedRepoSummary {
        name: repo.name.clone(),
        description: repo.description.clone(),
        url: repo.html_url.clone(),
        primary_language: repo.language.as_ref().map(|name| PrimaryLanguage {
            name: name.clone(),
            color: FALLBACK_LANG_COLOR.to_string(),
        }),
        stargazer_count: repo.stargazers_count,
        fork_count: repo.forks_count,
        is_private: repo.private,
    }
}
