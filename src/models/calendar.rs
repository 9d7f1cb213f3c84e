use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One cell of the contribution heatmap, as returned by the GraphQL
/// contributions query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(rename = "contributionCount")]
    pub contribution_count: u32,
    /// Display color token supplied by GitHub.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionWeek {
    #[serde(rename = "contributionDays")]
    pub contribution_days: Vec<ContributionDay>,
}

/// Calendar for one `[from, to]` window. Flattening the weeks yields the
/// days in chronological order covering exactly the requested window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionCalendar {
    #[serde(rename = "totalContributions")]
    pub total_contributions: u32,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}
