//! Event kind taxonomy
//!
//! Process-wide immutable tables describing the recognized event kinds:
//! their feed type tags, summary labels, the noun phrase used by
//! action-bearing templates, and the actions the feed documents per kind.

use super::event::EventKind;
use std::sync::OnceLock;

/// Static description of one recognized event kind.
pub struct KindSpec {
    pub kind: EventKind,
    /// Type tag as it appears in the feed (e.g. "PushEvent")
    pub type_tag: &'static str,
    /// Short label used in the summary block
    pub label: &'static str,
    /// Noun phrase for action-bearing templates; `None` for
    /// fixed-template kinds
    pub phrase: Option<&'static str>,
    /// Actions the feed documents for this kind; empty when the kind
    /// carries no sub-action
    pub allowed_actions: &'static [&'static str],
}

/// Built once per process, on first lookup.
static TAXONOMY: OnceLock<Vec<KindSpec>> = OnceLock::new();

pub fn taxonomy() -> &'static [KindSpec] {
    TAXONOMY.get_or_init(|| {
        vec![
            KindSpec {
                kind: EventKind::Issue,
                type_tag: "IssuesEvent",
                label: "issue",
                phrase: Some("an issue"),
                allowed_actions: &[
                    "opened",
                    "edited",
                    "closed",
                    "reopened",
                    "assigned",
                    "unassigned",
                    "labeled",
                    "unlabeled",
                ],
            },
            KindSpec {
                kind: EventKind::IssueComment,
                type_tag: "IssueCommentEvent",
                label: "issue-comment",
                phrase: Some("an issue comment"),
                allowed_actions: &["created", "edited", "deleted"],
            },
            KindSpec {
                kind: EventKind::Create,
                type_tag: "CreateEvent",
                label: "create",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::Delete,
                type_tag: "DeleteEvent",
                label: "delete",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::CommitComment,
                type_tag: "CommitCommentEvent",
                label: "commit-comment",
                phrase: Some("a commit comment"),
                allowed_actions: &["created"],
            },
            KindSpec {
                kind: EventKind::Fork,
                type_tag: "ForkEvent",
                label: "fork",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::Wiki,
                type_tag: "GollumEvent",
                label: "wiki",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::Member,
                type_tag: "MemberEvent",
                label: "member",
                phrase: None,
                allowed_actions: &["added"],
            },
            KindSpec {
                kind: EventKind::Public,
                type_tag: "PublicEvent",
                label: "public",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::Push,
                type_tag: "PushEvent",
                label: "push",
                phrase: None,
                allowed_actions: &[],
            },
            KindSpec {
                kind: EventKind::PullRequest,
                type_tag: "PullRequestEvent",
                label: "pull-request",
                phrase: Some("a pull request"),
                allowed_actions: &[
                    "opened",
                    "edited",
                    "closed",
                    "reopened",
                    "assigned",
                    "unassigned",
                    "review_requested",
                    "review_request_removed",
                    "labeled",
                    "unlabeled",
                    "synchronize",
                ],
            },
            KindSpec {
                kind: EventKind::PullRequestReview,
                type_tag: "PullRequestReviewEvent",
                label: "pr-review",
                phrase: Some("a pull request review"),
                allowed_actions: &["created"],
            },
            KindSpec {
                kind: EventKind::PullRequestReviewComment,
                type_tag: "PullRequestReviewCommentEvent",
                label: "pr-review-comment",
                phrase: Some("a pull request review comment"),
                allowed_actions: &["created"],
            },
            KindSpec {
                kind: EventKind::PullRequestReviewThread,
                type_tag: "PullRequestReviewThreadEvent",
                label: "pr-review-thread",
                phrase: Some("a pull request review thread"),
                allowed_actions: &["resolved", "unresolved"],
            },
            KindSpec {
                kind: EventKind::Star,
                type_tag: "WatchEvent",
                label: "star",
                phrase: None,
                allowed_actions: &[],
            },
        ]
    })
}

/// Map a feed type tag to its recognized kind.
pub fn kind_for_type(type_tag: &str) -> Option<EventKind> {
    taxonomy()
        .iter()
        .find(|spec| spec.type_tag == type_tag)
        .map(|spec| spec.kind)
}

pub fn spec_for(kind: EventKind) -> &'static KindSpec {
    taxonomy()
        .iter()
        .find(|spec| spec.kind == kind)
        .expect("every EventKind has a taxonomy entry")
}

/// Noun phrase for action-bearing templates.
pub fn phrase(kind: EventKind) -> Option<&'static str> {
    spec_for(kind).phrase
}

/// Whether `action` is within the documented set for `kind`.
///
/// Kinds that declare no action list accept anything.
pub fn is_documented_action(kind: EventKind, action: &str) -> bool {
    let allowed = spec_for(kind).allowed_actions;
    allowed.is_empty() || allowed.contains(&action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_has_fifteen_kinds() {
        assert_eq!(taxonomy().len(), 15);
    }

    #[test]
    fn test_type_tags_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in taxonomy() {
            assert!(seen.insert(spec.type_tag), "duplicate tag {}", spec.type_tag);
        }
    }

    #[test]
    fn test_kind_for_type() {
        assert_eq!(kind_for_type("PushEvent"), Some(EventKind::Push));
        assert_eq!(kind_for_type("WatchEvent"), Some(EventKind::Star));
        assert_eq!(kind_for_type("GollumEvent"), Some(EventKind::Wiki));
        assert_eq!(kind_for_type("SponsorshipEvent"), None);
        assert_eq!(kind_for_type("pushevent"), None);
    }

    #[test]
    fn test_action_bearing_kinds_have_phrases() {
        let action_bearing = [
            EventKind::Issue,
            EventKind::IssueComment,
            EventKind::CommitComment,
            EventKind::PullRequest,
            EventKind::PullRequestReview,
            EventKind::PullRequestReviewComment,
            EventKind::PullRequestReviewThread,
        ];
        for kind in action_bearing {
            assert!(phrase(kind).is_some(), "{:?} should have a phrase", kind);
        }
        assert!(phrase(EventKind::Push).is_none());
        assert!(phrase(EventKind::Member).is_none());
    }

    #[test]
    fn test_is_documented_action() {
        assert!(is_documented_action(EventKind::Issue, "opened"));
        assert!(is_documented_action(EventKind::Issue, "unlabeled"));
        assert!(!is_documented_action(EventKind::Issue, "destroyed"));
        assert!(is_documented_action(EventKind::Member, "added"));
        assert!(!is_documented_action(EventKind::Member, "removed"));
        assert!(is_documented_action(
            EventKind::PullRequest,
            "review_requested"
        ));
    }

    #[test]
    fn test_kinds_without_action_list_accept_anything() {
        assert!(is_documented_action(EventKind::Push, ""));
        assert!(is_documented_action(EventKind::Star, "started"));
        assert!(is_documented_action(EventKind::Create, "whatever"));
    }
}
