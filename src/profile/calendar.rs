use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::models::ContributionCalendar;

/// Flattened heatmap input: one `(date, count)` pair per day, ascending.
///
/// An empty day sequence means the calendar could not be loaded; the
/// consumer shows an error affordance for it. Truly-zero activity and a
/// rejected query are indistinguishable here by design.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeatmapSeries {
    pub total: u32,
    pub days: Vec<(NaiveDate, u32)>,
}

impl HeatmapSeries {
    pub fn from_calendar(calendar: &ContributionCalendar) -> Self {
        let days = calendar
            .weeks
            .iter()
            .flat_map(|week| &week.contribution_days)
            .map(|day| (day.date, day.contribution_count))
            .collect();

        Self {
            total: calendar.total_contributions,
            days,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        self.days.is_empty()
    }
}

/// Resolves the effective contribution window for a target year.
///
/// The current year shows the rolling trailing 365 days, matching GitHub's
/// own default profile view; any past year shows the fixed Jan 1 through
/// Dec 31 calendar year.
pub fn resolve_window(target_year: Option<i32>) -> (DateTime<Utc>, DateTime<Utc>) {
    let now = Utc::now();
    resolve_window_at(target_year.unwrap_or_else(|| now.year()), now)
}

pub fn resolve_window_at(target_year: i32, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    if target_year == now.year() {
        (now - Duration::days(365), now)
    } else {
        let from = Utc.with_ymd_and_hms(target_year, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(target_year, 12, 31, 23, 59, 59).unwrap();
        (from, to)
    }
}

/// Selectable years for the year sidebar: every year from the account's
/// creation year through the current year, descending. Accounts without a
/// creation timestamp get a five-year range.
pub fn available_years(created_at: Option<DateTime<Utc>>, current_year: i32) -> Vec<i32> {
    let created_year = created_at
        .map(|ts| ts.year())
        .unwrap_or(current_year - 5);

    (created_year..=current_year).rev().collect()
}

/// Heatmap intensity bucket for a day's count, 0 (none) through 4 (most).
/// Thresholds match the profile graph's piecewise color scale.
pub fn contribution_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=3 => 1,
        4..=6 => 2,
        7..=9 => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContributionDay, ContributionWeek};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_current_year_window_is_rolling_365_days() {
        let now = fixed_now();
        let (from, to) = resolve_window_at(2024, now);
        assert_eq!(to, now);
        assert_eq!(from, now - Duration::days(365));
    }

    #[test]
    fn test_past_year_window_is_full_calendar_year() {
        let (from, to) = resolve_window_at(2022, fixed_now());
        assert_eq!(from, Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(to, Utc.with_ymd_and_hms(2022, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_window_resolution_is_idempotent() {
        let now = fixed_now();
        assert_eq!(resolve_window_at(2024, now), resolve_window_at(2024, now));
        assert_eq!(resolve_window_at(2021, now), resolve_window_at(2021, now));
    }

    #[test]
    fn test_available_years_descending_from_creation() {
        let created = Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(
            available_years(Some(created), 2024),
            vec![2024, 2023, 2022, 2021]
        );
    }

    #[test]
    fn test_available_years_defaults_to_five_back() {
        assert_eq!(
            available_years(None, 2024),
            vec![2024, 2023, 2022, 2021, 2020, 2019]
        );
    }

    fn day(date: &str, count: u32) -> ContributionDay {
        ContributionDay {
            date: date.parse().unwrap(),
            contribution_count: count,
            color: "#39d353".to_string(),
        }
    }

    #[test]
    fn test_heatmap_flattens_weeks_in_order() {
        let calendar = ContributionCalendar {
            total_contributions: 7,
            weeks: vec![
                ContributionWeek {
                    contribution_days: vec![day("2023-01-01", 2), day("2023-01-02", 0)],
                },
                ContributionWeek {
                    contribution_days: vec![day("2023-01-08", 5)],
                },
            ],
        };

        let series = HeatmapSeries::from_calendar(&calendar);
        assert_eq!(series.total, 7);
        assert_eq!(
            series.days,
            vec![
                ("2023-01-01".parse().unwrap(), 2),
                ("2023-01-02".parse().unwrap(), 0),
                ("2023-01-08".parse().unwrap(), 5),
            ]
        );
        assert!(!series.is_unavailable());

        // flattened dates are non-decreasing
        assert!(series.days.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn test_zero_week_calendar_flags_unavailable() {
        let series = HeatmapSeries::from_calendar(&ContributionCalendar::default());
        assert_eq!(series.total, 0);
        assert!(series.is_unavailable());
    }

    #[test]
    fn test_contribution_level_buckets() {
        assert_eq!(contribution_level(0), 0);
        assert_eq!(contribution_level(1), 1);
        assert_eq!(contribution_level(3), 1);
        assert_eq!(contribution_level(4), 2);
        assert_eq!(contribution_level(6), 2);
        assert_eq!(contribution_level(7), 3);
        assert_eq!(contribution_level(9), 3);
        assert_eq!(contribution_level(10), 4);
        assert_eq!(contribution_level(250), 4);
    }
}
