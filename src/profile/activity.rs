use crate::models::{ActivityDayGroup, ActivityEvent, EventKind, RawEvent};

/// Only the most recent events feed the activity timeline.
pub const RECENT_EVENT_LIMIT: usize = 30;

/// Builds the activity timeline from the raw event feed: truncate to the
/// most recent 30, drop events without a timestamp, group by calendar day.
pub fn recent_activity(raw: &[RawEvent]) -> Vec<ActivityDayGroup> {
    let events: Vec<ActivityEvent> = raw
        .iter()
        .take(RECENT_EVENT_LIMIT)
        .filter_map(ActivityEvent::from_raw)
        .collect();

    group_events_by_date(&events)
}

/// Groups events by the UTC date portion of their timestamp. Grouping is
/// stable: each day keeps its events in feed order (most recent first, per
/// GitHub's event feed contract). Day groups come out in descending date
/// order.
pub fn group_events_by_date(events: &[ActivityEvent]) -> Vec<ActivityDayGroup> {
    let mut groups: Vec<ActivityDayGroup> = Vec::new();

    for event in events {
        let date = event.created_at.date_naive().to_string();
        match groups.iter_mut().find(|g| g.date == date) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(ActivityDayGroup {
                date,
                events: vec![event.clone()],
            }),
        }
    }

    // ISO date strings compare lexicographically in chronological order
    groups.sort_by(|a, b| b.date.cmp(&a.date));
    groups
}

/// Human-readable verb phrase for an event. Total over `EventKind`: every
/// kind maps to a defined phrase, unrecognized kinds get the generic
/// "<kind> in" form.
pub fn event_label(kind: &EventKind) -> String {
    match kind {
        EventKind::Push { commits } => {
            let plural = if *commits == 1 { "" } else { "s" };
            format!("Pushed {} commit{} to", commits, plural)
        }
        EventKind::Create { ref_type } => format!("Created {}", ref_type),
        EventKind::Delete { ref_type } => format!("Deleted {}", ref_type),
        EventKind::PullRequest { action } => {
            format!("{} a pull request in", capitalize(action))
        }
        // Recognized for its icon, but labeled with the generic phrase
        EventKind::PullRequestReview => "PullRequestReview in".to_string(),
        EventKind::Issues { action } => format!("{} an issue in", capitalize(action)),
        EventKind::IssueComment => "Commented on an issue in".to_string(),
        EventKind::Watch => "Starred".to_string(),
        EventKind::Fork => "Forked".to_string(),
        EventKind::Release { tag } => format!("Released {} in", tag),
        EventKind::Unknown { kind } => {
            format!("{} in", kind.trim_end_matches("Event"))
        }
    }
}

/// Icon glyph for an event kind, with a generic default.
pub fn event_icon(kind: &EventKind) -> &'static str {
    match kind {
        EventKind::Push { .. } => "⬆️",
        EventKind::Create { .. } => "✨",
        EventKind::Delete { .. } => "🗑️",
        EventKind::PullRequest { .. } => "🔀",
        EventKind::PullRequestReview => "👁️",
        EventKind::Issues { .. } => "🔵",
        EventKind::IssueComment => "💬",
        EventKind::Watch => "⭐",
        EventKind::Fork => "🍴",
        EventKind::Release { .. } => "🏷️",
        EventKind::Unknown { .. } => "📌",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(kind: &str, repo: &str, created_at: Option<&str>, payload: serde_json::Value) -> RawEvent {
        serde_json::from_value(json!({
            "type": kind,
            "repo": { "name": repo },
            "created_at": created_at,
            "payload": payload,
        }))
        .unwrap()
    }

    #[test]
    fn test_groups_by_day_descending_with_stable_intra_day_order() {
        let events = [
            raw("WatchEvent", "a/b", Some("2024-01-02T10:00:00Z"), json!({})),
            raw(
                "PushEvent",
                "a/b",
                Some("2024-01-02T09:00:00Z"),
                json!({ "commits": [{}, {}] }),
            ),
            raw("ForkEvent", "c/d", Some("2024-01-01T05:00:00Z"), json!({})),
        ];

        let groups = recent_activity(&events);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].date, "2024-01-02");
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[0].events[0].kind, EventKind::Watch);
        assert_eq!(groups[0].events[1].kind, EventKind::Push { commits: 2 });
        assert_eq!(
            event_label(&groups[0].events[1].kind),
            "Pushed 2 commits to"
        );

        assert_eq!(groups[1].date, "2024-01-01");
        assert_eq!(groups[1].events[0].kind, EventKind::Fork);
    }

    #[test]
    fn test_no_date_key_appears_twice() {
        let events = [
            raw("WatchEvent", "a/b", Some("2024-03-05T23:59:59Z"), json!({})),
            raw("ForkEvent", "a/b", Some("2024-03-06T00:00:01Z"), json!({})),
            raw("WatchEvent", "c/d", Some("2024-03-05T01:00:00Z"), json!({})),
        ];

        let groups = recent_activity(&events);
        let mut dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-06", "2024-03-05"]);
        dates.dedup();
        assert_eq!(dates.len(), groups.len());
    }

    #[test]
    fn test_events_without_timestamp_are_dropped() {
        let events = [
            raw("WatchEvent", "a/b", None, json!({})),
            raw("ForkEvent", "c/d", Some("2024-01-01T05:00:00Z"), json!({})),
        ];

        let groups = recent_activity(&events);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].events.len(), 1);
        assert_eq!(groups[0].events[0].kind, EventKind::Fork);
    }

    #[test]
    fn test_feed_truncated_to_recent_limit() {
        let events: Vec<RawEvent> = (0..40)
            .map(|i| {
                raw(
                    "WatchEvent",
                    "a/b",
                    Some(&format!("2024-01-01T{:02}:{:02}:00Z", i / 60, i % 60)),
                    json!({}),
                )
            })
            .collect();

        let groups = recent_activity(&events);
        let total: usize = groups.iter().map(|g| g.events.len()).sum();
        assert_eq!(total, RECENT_EVENT_LIMIT);
    }

    #[test]
    fn test_push_label_pluralization() {
        assert_eq!(
            event_label(&EventKind::Push { commits: 1 }),
            "Pushed 1 commit to"
        );
        assert_eq!(
            event_label(&EventKind::Push { commits: 5 }),
            "Pushed 5 commits to"
        );
    }

    #[test]
    fn test_push_defaults_to_one_commit_without_payload() {
        let event = raw("PushEvent", "a/b", Some("2024-01-01T00:00:00Z"), json!({}));
        let normalized = ActivityEvent::from_raw(&event).unwrap();
        assert_eq!(normalized.kind, EventKind::Push { commits: 1 });
    }

    #[test]
    fn test_action_verbs_are_capitalized() {
        assert_eq!(
            event_label(&EventKind::PullRequest {
                action: "closed".to_string()
            }),
            "Closed a pull request in"
        );
        assert_eq!(
            event_label(&EventKind::Issues {
                action: "reopened".to_string()
            }),
            "Reopened an issue in"
        );
    }

    #[test]
    fn test_create_and_delete_use_ref_type() {
        let event = raw(
            "CreateEvent",
            "a/b",
            Some("2024-01-01T00:00:00Z"),
            json!({ "ref_type": "branch" }),
        );
        let normalized = ActivityEvent::from_raw(&event).unwrap();
        assert_eq!(event_label(&normalized.kind), "Created branch");

        let event = raw("DeleteEvent", "a/b", Some("2024-01-01T00:00:00Z"), json!({}));
        let normalized = ActivityEvent::from_raw(&event).unwrap();
        assert_eq!(event_label(&normalized.kind), "Deleted branch");
    }

    #[test]
    fn test_release_label_includes_tag() {
        let event = raw(
            "ReleaseEvent",
            "a/b",
            Some("2024-01-01T00:00:00Z"),
            json!({ "release": { "tag_name": "v1.2.0" } }),
        );
        let normalized = ActivityEvent::from_raw(&event).unwrap();
        assert_eq!(event_label(&normalized.kind), "Released v1.2.0 in");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_generic_phrase() {
        let kind = EventKind::Unknown {
            kind: "GollumEvent".to_string(),
        };
        assert_eq!(event_label(&kind), "Gollum in");
        assert_eq!(event_icon(&kind), "📌");
    }
}
