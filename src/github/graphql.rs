use serde::Deserialize;
use serde_json::Value;

use crate::models::{ContributionCalendar, PinnedRepoSummary};

/// Contributions query: `(username, from, to)` window over the
/// contribution calendar.
pub const CONTRIBUTIONS_QUERY: &str = "\
query($username: String!, $from: DateTime!, $to: DateTime!) {
    user(login: $username) {
        contributionsCollection(from: $from, to: $to) {
            contributionCalendar {
                totalContributions
                weeks {
                    contributionDays {
                        date
                        contributionCount
                        color
                    }
                }
            }
        }
    }
}";

/// Pinned-items query: up to 6 curated repositories.
pub const PINNED_ITEMS_QUERY: &str = "\
query($username: String!) {
    user(login: $username) {
        pinnedItems(first: 6, types: REPOSITORY) {
            nodes {
                ... on Repository {
                    name
                    description
                    url
                    primaryLanguage { name color }
                    stargazerCount
                    forkCount
                    isPrivate
                }
            }
        }
    }
}";

#[derive(Debug, serde::Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsData {
    pub user: Option<ContributionsUser>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsUser {
    #[serde(rename = "contributionsCollection")]
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsCollection {
    #[serde(rename = "contributionCalendar")]
    pub contribution_calendar: Option<ContributionCalendar>,
}

impl GraphqlResponse<ContributionsData> {
    pub fn into_calendar(self) -> Option<ContributionCalendar> {
        self.data?
            .user?
            .contributions_collection
            .contribution_calendar
    }
}

#[derive(Debug, Deserialize)]
pub struct PinnedData {
    pub user: Option<PinnedUser>,
}

#[derive(Debug, Deserialize)]
pub struct PinnedUser {
    #[serde(rename = "pinnedItems")]
    pub pinned_items: PinnedItems,
}

#[derive(Debug, Deserialize)]
pub struct PinnedItems {
    #[serde(default)]
    pub nodes: Vec<PinnedRepoSummary>,
}

impl GraphqlResponse<PinnedData> {
    pub fn into_nodes(self) -> Option<Vec<PinnedRepoSummary>> {
        Some(self.data?.user?.pinned_items.nodes)
    }
}
