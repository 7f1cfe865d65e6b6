//! Activity report rendering
//!
//! Classifies decoded activities, renders one display line per event in
//! feed order, and tallies per-kind counts for the optional summary.

use super::event::{Activity, Event, EventKind};
use super::taxonomy;
use super::window::RECENCY_WINDOW_HOURS;
use std::collections::HashMap;

/// Per-kind tallies accumulated during classification.
#[derive(Debug, Clone, Default)]
pub struct KindCounts {
    counts: HashMap<EventKind, usize>,
    unknown: usize,
}

impl KindCounts {
    pub fn record(&mut self, kind: Option<EventKind>) {
        match kind {
            Some(kind) => *self.counts.entry(kind).or_insert(0) += 1,
            None => self.unknown += 1,
        }
    }

    pub fn get(&self, kind: EventKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn unknown(&self) -> usize {
        self.unknown
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unknown
    }
}

/// Everything produced by one classification pass.
#[derive(Debug, Clone)]
pub struct Report {
    /// One rendered line per displayable activity, in feed order
    pub lines: Vec<String>,
    pub counts: KindCounts,
    /// Diagnostics for the caller to log: unknown event types and
    /// out-of-range actions
    pub notices: Vec<String>,
}

/// Renders the activity report for one user.
pub struct ReportGenerator {
    username: String,
}

impl ReportGenerator {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    /// Header announcing the user and window.
    pub fn header(&self) -> String {
        format!(
            "Activity in the Last {} Hours of the User : {}",
            RECENCY_WINDOW_HOURS, self.username
        )
    }

    /// Classify and render the given activities.
    ///
    /// Unknown event types are counted, noticed, and produce no line.
    /// Actions outside the documented set for their kind are noticed but
    /// still rendered verbatim.
    pub fn generate(&self, activities: &[Activity]) -> Report {
        let mut counts = KindCounts::default();
        let mut notices = Vec::new();
        let mut lines = Vec::new();

        for activity in activities {
            let event = Event::classify(activity);
            let kind = event.kind();
            counts.record(kind);

            match kind {
                None => {
                    notices.push(format!("unknown event type: {}", activity.event_type));
                }
                Some(kind) => {
                    if !taxonomy::is_documented_action(kind, &activity.payload.action) {
                        notices.push(format!(
                            "undocumented action \"{}\" for {}",
                            activity.payload.action, activity.event_type
                        ));
                    }
                    if let Some(line) = render_line(&event, &self.username) {
                        lines.push(line);
                    }
                }
            }
        }

        Report {
            lines,
            counts,
            notices,
        }
    }

    /// Per-kind count block, in taxonomy order; zero-count kinds are
    /// omitted and unknown occurrences come last.
    pub fn summary(&self, counts: &KindCounts) -> Vec<String> {
        let mut lines = vec!["Event counts:".to_string()];

        for spec in taxonomy::taxonomy() {
            let count = counts.get(spec.kind);
            if count > 0 {
                lines.push(format!("  {}: {}", spec.label, count));
            }
        }
        if counts.unknown() > 0 {
            lines.push(format!("  unknown: {}", counts.unknown()));
        }

        lines
    }
}

/// Render one display line; `None` for the unknown catch-all.
fn render_line(event: &Event, user: &str) -> Option<String> {
    let line = match event {
        Event::Issue { action, repo } => action_line(user, action, EventKind::Issue, repo),
        Event::IssueComment { action, repo } => {
            action_line(user, action, EventKind::IssueComment, repo)
        }
        Event::CommitComment { action, repo } => {
            action_line(user, action, EventKind::CommitComment, repo)
        }
        Event::PullRequest { action, repo } => {
            action_line(user, action, EventKind::PullRequest, repo)
        }
        Event::PullRequestReview { action, repo } => {
            action_line(user, action, EventKind::PullRequestReview, repo)
        }
        Event::PullRequestReviewComment { action, repo } => {
            action_line(user, action, EventKind::PullRequestReviewComment, repo)
        }
        Event::PullRequestReviewThread { action, repo } => {
            action_line(user, action, EventKind::PullRequestReviewThread, repo)
        }
        Event::Member { repo } => format!("{} has joined {}", user, repo),
        Event::Star { repo } => format!("{} has Starred a {}", user, repo),
        Event::Create { ref_type } => format!("{} has Created a new {}", user, ref_type),
        Event::Delete { ref_type } => format!("{} has Deleted a {}", user, ref_type),
        Event::Fork { repo } => format!("{} has Forked {}", user, repo),
        Event::Wiki => format!("{} has Updated/Created a wiki", user),
        Event::Public { repo } => format!("{} has made the Repo : {} Public", user, repo),
        Event::Push { size, repo } => format!("{} Pushed {} commits to {}", user, size, repo),
        Event::Unknown { .. } => return None,
    };
    Some(line)
}

/// `<user> has <action> <kind-phrase> in <repo>`, with the action passed
/// through verbatim.
fn action_line(user: &str, action: &str, kind: EventKind, repo: &str) -> String {
    let phrase = taxonomy::phrase(kind).unwrap_or("");
    format!("{} has {} {} in {}", user, action, phrase, repo)
}
