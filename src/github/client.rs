use chrono::{DateTime, Utc};
use reqwest::{header, Client, RequestBuilder};
use serde_json::json;

use crate::error::{Error, Result};
use crate::github::graphql::{
    ContributionsData, GraphqlRequest, GraphqlResponse, PinnedData, CONTRIBUTIONS_QUERY,
    PINNED_ITEMS_QUERY,
};
use crate::models::{ContributionCalendar, GitHubUser, PinnedRepoSummary, RawEvent, Repository};

const API_VERSION: &str = "2022-11-28";
const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = "octoview/0.1";

/// Gateway to the GitHub REST and GraphQL APIs.
///
/// Every public query operation fails soft: transport errors and malformed
/// responses are logged and collapsed to the type's empty default, so the
/// display layer always has a fully-formed value to render. Semantically
/// empty results (a calendar with zero weeks, an empty pin list) are passed
/// through as-is for higher layers to interpret.
pub struct GitHubClient {
    client: Client,
    auth: Option<header::HeaderValue>,
    api_url: String,
    graphql_url: String,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        Self::with_base_url(token, "https://api.github.com")
    }

    /// Point the client at a different API host. Used by tests to target a
    /// mock server; the header decoration follows the configured host.
    pub fn with_base_url(token: Option<&str>, base_url: &str) -> Result<Self> {
        let auth = token
            .map(|t| header::HeaderValue::from_str(&format!("Bearer {}", t)))
            .transpose()?;

        Ok(Self {
            client: Client::new(),
            auth,
            api_url: base_url.trim_end_matches('/').to_string(),
            graphql_url: format!("{}/graphql", base_url.trim_end_matches('/')),
        })
    }

    /// Attaches the fixed GitHub headers to requests targeting the API
    /// host; requests to any other host pass through unmodified. The
    /// bearer token is attached only when a credential is configured.
    fn decorate(&self, req: RequestBuilder, url: &str) -> RequestBuilder {
        if !url.starts_with(&self.api_url) {
            return req;
        }
        let mut req = req
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(header::ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(header::USER_AGENT, USER_AGENT);
        if let Some(auth) = &self.auth {
            req = req.header(header::AUTHORIZATION, auth.clone());
        }
        req
    }

    pub async fn get_user(&self, username: &str) -> GitHubUser {
        match self.fetch_user(username).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("GitHub API error (get_user {}): {}", username, e);
                GitHubUser::default()
            }
        }
    }

    pub async fn get_repos(&self, username: &str) -> Vec<Repository> {
        match self.fetch_repos(username).await {
            Ok(repos) => repos,
            Err(e) => {
                tracing::warn!("GitHub API error (get_repos {}): {}", username, e);
                Vec::new()
            }
        }
    }

    pub async fn get_events(&self, username: &str) -> Vec<RawEvent> {
        match self.fetch_events(username).await {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("GitHub API error (get_events {}): {}", username, e);
                Vec::new()
            }
        }
    }

    /// Contribution calendar for the `[from, to]` window. A response that
    /// lacks the calendar payload entirely (missing credential, rejected
    /// query) collapses to the zero default like any other failure.
    pub async fn get_contribution_calendar(
        &self,
        username: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ContributionCalendar {
        match self.fetch_contribution_calendar(username, from, to).await {
            Ok(calendar) => calendar,
            Err(e) => {
                tracing::warn!(
                    "GitHub GraphQL error (get_contribution_calendar {}): {}",
                    username,
                    e
                );
                ContributionCalendar::default()
            }
        }
    }

    /// Curated pins only; empty on failure. The fallback ranking lives in
    /// the pinned-repos resolver, not here.
    pub async fn get_pinned_repos(&self, username: &str) -> Vec<PinnedRepoSummary> {
        match self.fetch_pinned_repos(username).await {
            Ok(pins) => pins,
            Err(e) => {
                tracing::warn!("GitHub GraphQL error (get_pinned_repos {}): {}", username, e);
                Vec::new()
            }
        }
    }

    async fn fetch_user(&self, username: &str) -> Result<GitHubUser> {
        let url = format!("{}/users/{}", self.api_url, username);
        tracing::debug!("Fetching user: {}", username);
        self.get_json(&url).await
    }

    async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page=30",
            self.api_url, username
        );
        tracing::debug!("Fetching repositories for: {}", username);
        self.get_json(&url).await
    }

    async fn fetch_events(&self, username: &str) -> Result<Vec<RawEvent>> {
        let url = format!("{}/users/{}/events?per_page=100", self.api_url, username);
        tracing::debug!("Fetching events for: {}", username);
        self.get_json(&url).await
    }

    async fn fetch_contribution_calendar(
        &self,
        username: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<ContributionCalendar> {
        let request = GraphqlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: json!({
                "username": username,
                "from": from.to_rfc3339(),
                "to": to.to_rfc3339(),
            }),
        };

        let response: GraphqlResponse<ContributionsData> = self.post_graphql(&request).await?;
        response
            .into_calendar()
            .ok_or(Error::MissingData("contributionCalendar"))
    }

    async fn fetch_pinned_repos(&self, username: &str) -> Result<Vec<PinnedRepoSummary>> {
        let request = GraphqlRequest {
            query: PINNED_ITEMS_QUERY,
            variables: json!({ "username": username }),
        };

        let response: GraphqlResponse<PinnedData> = self.post_graphql(&request).await?;
        response
            .into_nodes()
            .ok_or(Error::MissingData("pinnedItems"))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let req = self.decorate(self.client.get(url), url);
        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!("{}: {} - {}", url, status, body)));
        }

        Ok(response.json().await?)
    }

    async fn post_graphql<T: serde::de::DeserializeOwned>(
        &self,
        request: &GraphqlRequest<'_>,
    ) -> Result<T> {
        let req = self
            .decorate(self.client.post(&self.graphql_url), &self.graphql_url)
            .json(request);
        let response = req.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "{}: {} - {}",
                self.graphql_url, status, body
            )));
        }

        Ok(response.json().await?)
    }
}
