use super::event::Activity;
use chrono::{DateTime, Duration, Utc};

/// Fixed lookback applied before display.
pub const RECENCY_WINDOW_HOURS: i64 = 48;

/// Keep only activities created strictly less than 48 hours before `now`,
/// preserving feed order.
///
/// Only the upper bound on age is checked, so future-dated activities
/// pass the filter. An activity exactly 48 hours old is excluded.
pub fn filter_recent(activities: Vec<Activity>, now: DateTime<Utc>) -> Vec<Activity> {
    activities
        .into_iter()
        .filter(|activity| {
            now.signed_duration_since(activity.created_at) < Duration::hours(RECENCY_WINDOW_HOURS)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{Actor, Payload, Repo};

    fn activity_at(id: &str, created_at: DateTime<Utc>) -> Activity {
        Activity {
            id: id.to_string(),
            event_type: "PushEvent".to_string(),
            actor: Actor::default(),
            repo: Repo::default(),
            payload: Payload::default(),
            created_at,
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-03-10T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_keeps_recent_drops_old() {
        let activities = vec![
            activity_at("recent", now() - Duration::hours(1)),
            activity_at("old", now() - Duration::hours(50)),
        ];

        let recent = filter_recent(activities, now());
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, "recent");
    }

    #[test]
    fn test_exact_boundary_is_excluded() {
        let activities = vec![
            activity_at("at-boundary", now() - Duration::hours(48)),
            activity_at("just-inside", now() - Duration::hours(48) + Duration::seconds(1)),
        ];

        let recent = filter_recent(activities, now());
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, "just-inside");
    }

    #[test]
    fn test_future_activities_are_retained() {
        let activities = vec![activity_at("future", now() + Duration::hours(5))];

        let recent = filter_recent(activities, now());
        assert_eq!(recent.len(), 1);
    }

    #[test]
    fn test_preserves_feed_order() {
        let activities = vec![
            activity_at("a", now() - Duration::hours(1)),
            activity_at("b", now() - Duration::hours(72)),
            activity_at("c", now() - Duration::hours(2)),
            activity_at("d", now() - Duration::minutes(5)),
        ];

        let recent = filter_recent(activities, now());
        let ids: Vec<&str> = recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "d"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_recent(Vec::new(), now()).is_empty());
    }
}
