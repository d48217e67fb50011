//! Reason priority ordering for notification triage.
//!
//! GitHub tags every notification with the reason it was delivered. Triage
//! ranks those reasons with a fixed order so that, within a repository, the
//! notifications most likely to need attention come first.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::error::TriageError;
use super::models::Notification;

/// The user was assigned to the thread.
pub const REASON_ASSIGNED: &str = "assigned";
/// The user created the thread.
pub const REASON_AUTHOR: &str = "author";
/// The user was asked to review a pull request.
pub const REASON_REVIEW_REQUESTED: &str = "review_requested";
/// A team the user belongs to was mentioned.
pub const REASON_TEAM_MENTION: &str = "team_mention";
/// The user was mentioned directly.
pub const REASON_MENTION: &str = "mention";
/// The user commented on the thread.
pub const REASON_COMMENT: &str = "comment";

/// Default reason order, from lowest to highest priority.
pub const DEFAULT_REASON_ORDER: [&str; 6] = [
    REASON_ASSIGNED,
    REASON_AUTHOR,
    REASON_REVIEW_REQUESTED,
    REASON_TEAM_MENTION,
    REASON_MENTION,
    REASON_COMMENT,
];

/// Where reasons absent from the priority order are ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownReasonPlacement {
    /// Unknown reasons rank below every known reason and sort last within
    /// their repository.
    ///
    /// Matches ordering by index lookup, where an unlisted reason's `-1`
    /// index never outranks a listed one.
    #[default]
    Last,
    /// Unknown reasons rank above every known reason and sort first within
    /// their repository.
    First,
}

impl UnknownReasonPlacement {
    /// Parses a placement name (`last` or `first`), ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] for any other value.
    pub fn parse(value: &str) -> Result<Self, TriageError> {
        if value.eq_ignore_ascii_case("last") {
            Ok(Self::Last)
        } else if value.eq_ignore_ascii_case("first") {
            Ok(Self::First)
        } else {
            Err(TriageError::Configuration {
                message: format!("unknown reason placement must be `last` or `first`, got `{value}`"),
            })
        }
    }
}

/// Position of a reason relative to the configured order.
///
/// Variant order matters: the derived `Ord` ranks `BelowKnown` lowest and
/// `AboveKnown` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Standing {
    BelowKnown,
    Known(usize),
    AboveKnown,
}

/// Immutable ranking of notification reasons.
///
/// # Example
///
/// ```
/// use prinbox::github::priority::ReasonPriority;
///
/// let priority = ReasonPriority::default();
/// assert_eq!(priority.rank("assigned"), Some(0));
/// assert_eq!(priority.rank("comment"), Some(5));
/// assert_eq!(priority.rank("subscribed"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonPriority {
    order: Vec<String>,
    unknown: UnknownReasonPlacement,
}

impl Default for ReasonPriority {
    fn default() -> Self {
        Self {
            order: DEFAULT_REASON_ORDER.iter().map(|&reason| reason.to_owned()).collect(),
            unknown: UnknownReasonPlacement::default(),
        }
    }
}

impl ReasonPriority {
    /// Builds a custom order, listed from lowest to highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidPriorityOrder`] when the order is empty,
    /// contains a blank reason, or repeats a reason.
    pub fn new<I, S>(order: I) -> Result<Self, TriageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let reasons: Vec<String> = order.into_iter().map(Into::into).collect();
        if reasons.is_empty() {
            return Err(TriageError::InvalidPriorityOrder {
                message: "order must contain at least one reason".to_owned(),
            });
        }

        let mut seen = HashSet::with_capacity(reasons.len());
        for reason in &reasons {
            if reason.trim().is_empty() {
                return Err(TriageError::InvalidPriorityOrder {
                    message: "reasons must not be blank".to_owned(),
                });
            }
            if !seen.insert(reason.as_str()) {
                return Err(TriageError::InvalidPriorityOrder {
                    message: format!("reason `{reason}` appears more than once"),
                });
            }
        }

        Ok(Self {
            order: reasons,
            unknown: UnknownReasonPlacement::default(),
        })
    }

    /// Sets where reasons absent from the order are ranked.
    #[must_use]
    pub const fn with_unknown_placement(mut self, placement: UnknownReasonPlacement) -> Self {
        self.unknown = placement;
        self
    }

    /// Returns the configured placement for unknown reasons.
    #[must_use]
    pub const fn unknown_placement(&self) -> UnknownReasonPlacement {
        self.unknown
    }

    /// Reasons from lowest to highest priority.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Position of `reason` in the order, or `None` when it is not listed.
    #[must_use]
    pub fn rank(&self, reason: &str) -> Option<usize> {
        self.order.iter().position(|known| known == reason)
    }

    fn standing(&self, reason: &str) -> Standing {
        match (self.rank(reason), self.unknown) {
            (Some(rank), _) => Standing::Known(rank),
            (None, UnknownReasonPlacement::Last) => Standing::BelowKnown,
            (None, UnknownReasonPlacement::First) => Standing::AboveKnown,
        }
    }

    /// Orders two reasons so the higher priority one comes first.
    #[must_use]
    pub fn compare_reasons(&self, left: &str, right: &str) -> Ordering {
        self.standing(right).cmp(&self.standing(left))
    }

    /// Orders notifications by ascending repository full name, then by
    /// descending reason priority.
    #[must_use]
    pub fn compare(&self, left: &Notification, right: &Notification) -> Ordering {
        left.repository_full_name
            .cmp(&right.repository_full_name)
            .then_with(|| self.compare_reasons(&left.reason, &right.reason))
    }

    /// Sorts notifications in place with [`Self::compare`].
    ///
    /// The sort is stable: notifications that compare equal keep their
    /// relative order.
    pub fn sort(&self, notifications: &mut [Notification]) {
        notifications.sort_by(|left, right| self.compare(left, right));
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rstest::rstest;

    use super::{DEFAULT_REASON_ORDER, ReasonPriority, UnknownReasonPlacement};
    use crate::github::error::TriageError;
    use crate::github::models::test_support::unread_pull_request;

    #[test]
    fn default_order_lists_each_reason_once() {
        let priority = ReasonPriority::default();
        for (index, reason) in DEFAULT_REASON_ORDER.iter().enumerate() {
            assert_eq!(priority.rank(reason), Some(index), "rank of {reason}");
        }
        assert_eq!(priority.order().len(), 6);
    }

    #[rstest]
    #[case::comment_beats_mention("comment", "mention", Ordering::Less)]
    #[case::assigned_loses_to_author("assigned", "author", Ordering::Greater)]
    #[case::review_beats_assigned("review_requested", "assigned", Ordering::Less)]
    #[case::same_reason("team_mention", "team_mention", Ordering::Equal)]
    fn compare_reasons_puts_higher_priority_first(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(
            ReasonPriority::default().compare_reasons(left, right),
            expected
        );
    }

    #[rstest]
    #[case::original_index_ordering(UnknownReasonPlacement::Last, Ordering::Greater)]
    #[case::first(UnknownReasonPlacement::First, Ordering::Less)]
    fn unknown_reason_follows_configured_placement(
        #[case] placement: UnknownReasonPlacement,
        #[case] expected: Ordering,
    ) {
        let priority = ReasonPriority::default().with_unknown_placement(placement);

        assert_eq!(priority.compare_reasons("subscribed", "assigned"), expected);
        assert_eq!(priority.compare_reasons("subscribed", "comment"), expected);
        assert_eq!(
            priority.compare_reasons("subscribed", "ci_activity"),
            Ordering::Equal,
            "two unknown reasons rank equally"
        );
    }

    #[test]
    fn repository_name_dominates_reason() {
        let priority = ReasonPriority::default();
        let low_in_a = unread_pull_request("1", "a/repo", "assigned", 1);
        let high_in_b = unread_pull_request("2", "b/repo", "comment", 2);

        assert_eq!(priority.compare(&low_in_a, &high_in_b), Ordering::Less);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let priority = ReasonPriority::default();
        let mut notifications = vec![
            unread_pull_request("first", "octo/repo", "mention", 1),
            unread_pull_request("second", "octo/repo", "mention", 2),
            unread_pull_request("third", "octo/repo", "mention", 3),
        ];

        priority.sort(&mut notifications);

        let ids: Vec<_> = notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[rstest]
    #[case::empty(Vec::new(), "at least one reason")]
    #[case::blank(vec!["assigned", " "], "blank")]
    #[case::duplicate(vec!["assigned", "mention", "assigned"], "more than once")]
    fn custom_order_rejects_invalid_input(#[case] order: Vec<&str>, #[case] expected: &str) {
        let result = ReasonPriority::new(order);
        assert!(
            matches!(&result, Err(TriageError::InvalidPriorityOrder { message }) if message.contains(expected)),
            "expected InvalidPriorityOrder mentioning {expected:?}, got {result:?}"
        );
    }

    #[test]
    fn custom_order_ranks_by_position() {
        let priority =
            ReasonPriority::new(["mention", "assigned"]).expect("order should be valid");

        assert_eq!(priority.rank("mention"), Some(0));
        assert_eq!(priority.rank("assigned"), Some(1));
        assert_eq!(priority.rank("comment"), None);
        assert_eq!(
            priority.compare_reasons("assigned", "mention"),
            Ordering::Less
        );
    }

    #[rstest]
    #[case("last", UnknownReasonPlacement::Last)]
    #[case("FIRST", UnknownReasonPlacement::First)]
    fn placement_parses_known_names(#[case] input: &str, #[case] expected: UnknownReasonPlacement) {
        assert_eq!(UnknownReasonPlacement::parse(input), Ok(expected));
    }

    #[test]
    fn placement_rejects_unknown_names() {
        assert!(matches!(
            UnknownReasonPlacement::parse("middle"),
            Err(TriageError::Configuration { .. })
        ));
    }
}
