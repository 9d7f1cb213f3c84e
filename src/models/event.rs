use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event entry as it arrives from `GET /users/{username}/events`. The
/// payload shape depends on the `type` tag, so it stays raw JSON until
/// normalization picks out the fields each kind actually uses.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Normalized activity entry: a kind tag plus only the payload fields the
/// label table interpolates.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    pub kind: EventKind,
    pub repo: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Push { commits: u32 },
    Create { ref_type: String },
    Delete { ref_type: String },
    PullRequest { action: String },
    PullRequestReview,
    Issues { action: String },
    IssueComment,
    Watch,
    Fork,
    Release { tag: String },
    Unknown { kind: String },
}

impl ActivityEvent {
    /// Events without a usable timestamp are dropped from the feed.
    pub fn from_raw(raw: &RawEvent) -> Option<Self> {
        let created_at = raw.created_at?;
        Some(Self {
            kind: EventKind::from_raw(&raw.kind, &raw.payload),
            repo: raw.repo.name.clone(),
            created_at,
        })
    }
}

impl EventKind {
    pub fn from_raw(kind: &str, payload: &Value) -> Self {
        match kind {
            "PushEvent" => EventKind::Push {
                commits: payload["commits"]
                    .as_array()
                    .map(|c| c.len() as u32)
                    .unwrap_or(1),
            },
            "CreateEvent" => EventKind::Create {
                ref_type: str_field(payload, "ref_type", "repository"),
            },
            "DeleteEvent" => EventKind::Delete {
                ref_type: str_field(payload, "ref_type", "branch"),
            },
            "PullRequestEvent" => EventKind::PullRequest {
                action: str_field(payload, "action", "opened"),
            },
            "PullRequestReviewEvent" => EventKind::PullRequestReview,
            "IssuesEvent" => EventKind::Issues {
                action: str_field(payload, "action", "opened"),
            },
            "IssueCommentEvent" => EventKind::IssueComment,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            "ReleaseEvent" => EventKind::Release {
                tag: payload["release"]["tag_name"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string(),
            },
            other => EventKind::Unknown {
                kind: other.to_string(),
            },
        }
    }
}

fn str_field(payload: &Value, key: &str, default: &str) -> String {
    payload[key].as_str().unwrap_or(default).to_string()
}

/// All events that share a calendar day, in the feed's original
/// (most-recent-first) order.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityDayGroup {
    pub date: String,
    pub events: Vec<ActivityEvent>,
}
