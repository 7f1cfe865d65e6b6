//! Activity feed data structures
//!
//! Defines the decoded shape of one feed entry and the classified event
//! sum type the formatter renders from.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::taxonomy;

/// One unit of user behavior reported by the public events feed.
///
/// Unknown fields are ignored; optional payload fields default to
/// zero values when the feed omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub actor: Actor,
    #[serde(default)]
    pub repo: Repo,
    #[serde(default)]
    pub payload: Payload,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub display_login: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Repo {
    #[serde(default)]
    pub name: String,
}

/// Loosely typed payload bag; which fields are present depends on the
/// event type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub ref_type: String,
    #[serde(default)]
    pub size: i64,
}

/// The closed set of recognized event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Issue,
    IssueComment,
    Create,
    Delete,
    CommitComment,
    Fork,
    Wiki,
    Member,
    Public,
    Push,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestReviewThread,
    Star,
}

/// A classified activity, carrying only the fields its display template
/// needs. Feed types outside the recognized set fall into `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Issue { action: String, repo: String },
    IssueComment { action: String, repo: String },
    CommitComment { action: String, repo: String },
    PullRequest { action: String, repo: String },
    PullRequestReview { action: String, repo: String },
    PullRequestReviewComment { action: String, repo: String },
    PullRequestReviewThread { action: String, repo: String },
    Member { repo: String },
    Star { repo: String },
    Create { ref_type: String },
    Delete { ref_type: String },
    Fork { repo: String },
    Wiki,
    Public { repo: String },
    Push { size: i64, repo: String },
    Unknown { event_type: String },
}

impl Event {
    /// Classify a decoded activity by its type tag.
    pub fn classify(activity: &Activity) -> Event {
        let repo = activity.repo.name.clone();
        let payload = &activity.payload;

        match taxonomy::kind_for_type(&activity.event_type) {
            Some(EventKind::Issue) => Event::Issue {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::IssueComment) => Event::IssueComment {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::CommitComment) => Event::CommitComment {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::PullRequest) => Event::PullRequest {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::PullRequestReview) => Event::PullRequestReview {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::PullRequestReviewComment) => Event::PullRequestReviewComment {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::PullRequestReviewThread) => Event::PullRequestReviewThread {
                action: payload.action.clone(),
                repo,
            },
            Some(EventKind::Member) => Event::Member { repo },
            Some(EventKind::Star) => Event::Star { repo },
            Some(EventKind::Create) => Event::Create {
                ref_type: payload.ref_type.clone(),
            },
            Some(EventKind::Delete) => Event::Delete {
                ref_type: payload.ref_type.clone(),
            },
            Some(EventKind::Fork) => Event::Fork { repo },
            Some(EventKind::Wiki) => Event::Wiki,
            Some(EventKind::Public) => Event::Public { repo },
            Some(EventKind::Push) => Event::Push {
                size: payload.size,
                repo,
            },
            None => Event::Unknown {
                event_type: activity.event_type.clone(),
            },
        }
    }

    /// Recognized kind, or `None` for the unknown catch-all.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Event::Issue { .. } => Some(EventKind::Issue),
            Event::IssueComment { .. } => Some(EventKind::IssueComment),
            Event::CommitComment { .. } => Some(EventKind::CommitComment),
            Event::PullRequest { .. } => Some(EventKind::PullRequest),
            Event::PullRequestReview { .. } => Some(EventKind::PullRequestReview),
            Event::PullRequestReviewComment { .. } => Some(EventKind::PullRequestReviewComment),
            Event::PullRequestReviewThread { .. } => Some(EventKind::PullRequestReviewThread),
            Event::Member { .. } => Some(EventKind::Member),
            Event::Star { .. } => Some(EventKind::Star),
            Event::Create { .. } => Some(EventKind::Create),
            Event::Delete { .. } => Some(EventKind::Delete),
            Event::Fork { .. } => Some(EventKind::Fork),
            Event::Wiki => Some(EventKind::Wiki),
            Event::Public { .. } => Some(EventKind::Public),
            Event::Push { .. } => Some(EventKind::Push),
            Event::Unknown { .. } => None,
        }
    }
}

/// Decode a feed response body into activities.
///
/// Empty or malformed input yields an empty list with a stderr notice;
/// callers continue with zero activities rather than aborting.
pub fn decode_activities(body: &[u8]) -> Vec<Activity> {
    if body.is_empty() {
        return Vec::new();
    }

    match serde_json::from_slice(body) {
        Ok(activities) => activities,
        Err(err) => {
            eprintln!("Error decoding github api response: {}", err);
            Vec::new()
        }
    }
}
