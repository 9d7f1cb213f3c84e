use std::sync::Arc;

use chrono::{Datelike, Utc};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::github::GitHubClient;
use crate::models::{ActivityDayGroup, GitHubUser, PinnedRepoSummary};
use crate::profile::activity::recent_activity;
use crate::profile::calendar::{self, HeatmapSeries};
use crate::profile::pinned::resolve_pinned;

/// Result slots for one fetch cycle. Every slot is `None` until its query
/// completes, so the display layer can render partial state at any
/// interleaving of completions.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    cycle: u64,
    pub user: Option<GitHubUser>,
    pub available_years: Option<Vec<i32>>,
    pub heatmap: Option<HeatmapSeries>,
    pub activity: Option<Vec<ActivityDayGroup>>,
    pub pinned: Option<Vec<PinnedRepoSummary>>,
}

/// Runs fetch cycles against the gateway and owns the view-model slots.
///
/// The four query families are independent and complete in any order.
/// Each cycle is tagged with an identifier; a task re-checks the tag under
/// the state lock before writing, so results from a superseded cycle are
/// discarded instead of overwriting newer state. That check is the only
/// cancellation there is; in-flight requests are left to finish.
pub struct ProfileViewer {
    client: Arc<GitHubClient>,
    state: Arc<Mutex<ViewState>>,
}

impl ProfileViewer {
    pub fn new(client: GitHubClient) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(ViewState::default())),
        }
    }

    /// Begins a new fetch cycle for `username`, discarding all prior state.
    /// Returns the join handles so a caller that wants the complete page
    /// can await them; the slots fill in as each query lands.
    pub async fn load(&self, username: &str, year: Option<i32>) -> Vec<JoinHandle<()>> {
        let cycle = {
            let mut state = self.state.lock().await;
            let next = state.cycle + 1;
            *state = ViewState {
                cycle: next,
                ..ViewState::default()
            };
            next
        };

        tracing::info!("Starting fetch cycle {} for {}", cycle, username);

        vec![
            self.spawn_user(cycle, username),
            self.spawn_calendar(cycle, username, year),
            self.spawn_activity(cycle, username),
            self.spawn_pinned(cycle, username),
        ]
    }

    /// Re-runs only the calendar query for a newly selected year. The slot
    /// is cleared first so the consumer sees a loading state, and the
    /// result is still subject to the staleness check.
    pub async fn select_year(&self, username: &str, year: i32) -> JoinHandle<()> {
        let cycle = {
            let mut state = self.state.lock().await;
            state.heatmap = None;
            state.cycle
        };

        self.spawn_calendar(cycle, username, Some(year))
    }

    /// Clones the current slots for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    fn spawn_user(&self, cycle: u64, username: &str) -> JoinHandle<()> {
        let client = self.client.clone();
        let state = self.state.clone();
        let username = username.to_string();

        tokio::spawn(async move {
            let user = client.get_user(&username).await;
            let years = calendar::available_years(user.created_at, Utc::now().year());

            let mut state = state.lock().await;
            if state.cycle != cycle {
                tracing::debug!("Discarding stale user result for {}", username);
                return;
            }
            state.available_years = Some(years);
            state.user = Some(user);
        })
    }

    fn spawn_calendar(&self, cycle: u64, username: &str, year: Option<i32>) -> JoinHandle<()> {
        let client = self.client.clone();
        let state = self.state.clone();
        let username = username.to_string();

        tokio::spawn(async move {
            let (from, to) = calendar::resolve_window(year);
            let calendar = client.get_contribution_calendar(&username, from, to).await;
            let heatmap = HeatmapSeries::from_calendar(&calendar);

            let mut state = state.lock().await;
            if state.cycle != cycle {
                tracing::debug!("Discarding stale calendar result for {}", username);
                return;
            }
            state.heatmap = Some(heatmap);
        })
    }

    fn spawn_activity(&self, cycle: u64, username: &str) -> JoinHandle<()> {
        let client = self.client.clone();
        let state = self.state.clone();
        let username = username.to_string();

        tokio::spawn(async move {
            let events = client.get_events(&username).await;
            let groups = recent_activity(&events);

            let mut state = state.lock().await;
            if state.cycle != cycle {
                tracing::debug!("Discarding stale activity result for {}", username);
                return;
            }
            state.activity = Some(groups);
        })
    }

    fn spawn_pinned(&self, cycle: u64, username: &str) -> JoinHandle<()> {
        let client = self.client.clone();
        let state = self.state.clone();
        let username = username.to_string();

        tokio::spawn(async move {
            let pins = resolve_pinned(&client, &username).await;

            let mut state = state.lock().await;
            if state.cycle != cycle {
                tracing::debug!("Discarding stale pinned result for {}", username);
                return;
            }
            state.pinned = Some(pins);
        })
    }
}
