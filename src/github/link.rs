//! Pull request web links derived from notification subjects.
//!
//! A pull request notification's subject URL points at the REST resource,
//! e.g. `https://api.github.com/repos/octo/repo/pulls/42`. The trailing
//! segment is the pull request number.

use super::models::Notification;

/// Sentinel returned by [`derive_pull_request_id`] when no number can be
/// read from the subject URL. It never names a real pull request.
pub const UNKNOWN_PULL_REQUEST_ID: i64 = -1;

const GITHUB_WEB_BASE: &str = "https://github.com";

fn trailing_segment_number(url: Option<&str>) -> Option<i64> {
    url?.rsplit('/').next()?.parse().ok()
}

/// Reads the pull request number from the last segment of the subject URL.
///
/// Returns [`UNKNOWN_PULL_REQUEST_ID`] when the subject has no URL or the
/// segment is not an integer; callers must check for it before treating the
/// value as a real number.
///
/// # Example
///
/// ```
/// use prinbox::github::link::{UNKNOWN_PULL_REQUEST_ID, derive_pull_request_id};
/// use prinbox::github::models::test_support::NotificationBuilder;
///
/// let numbered = NotificationBuilder::new("N1", "foo/bar")
///     .subject_url("https://api.github.com/repos/foo/bar/pulls/42")
///     .build();
/// assert_eq!(derive_pull_request_id(&numbered), 42);
///
/// let odd = NotificationBuilder::new("N2", "foo/bar")
///     .subject_url("https://api.github.com/repos/foo/bar/pulls/abc")
///     .build();
/// assert_eq!(derive_pull_request_id(&odd), UNKNOWN_PULL_REQUEST_ID);
/// ```
#[must_use]
pub fn derive_pull_request_id(notification: &Notification) -> i64 {
    trailing_segment_number(notification.subject.url.as_deref())
        .unwrap_or(UNKNOWN_PULL_REQUEST_ID)
}

/// Typed variant of [`derive_pull_request_id`]: `None` unless the trailing
/// segment is a positive integer.
#[must_use]
pub fn pull_request_number(notification: &Notification) -> Option<u64> {
    trailing_segment_number(notification.subject.url.as_deref())
        .and_then(|number| u64::try_from(number).ok())
        .filter(|&number| number > 0)
}

/// Formats the pull request web URL that marks the notification as the
/// referrer.
///
/// The number comes from [`derive_pull_request_id`] and is embedded even when
/// it is the `-1` sentinel.
#[must_use]
pub fn derive_pull_request_url(notification: &Notification) -> String {
    format!(
        "{GITHUB_WEB_BASE}/{repository}/pull/{number}?notification_referrer_id={id}",
        repository = notification.repository_full_name,
        number = derive_pull_request_id(notification),
        id = notification.id
    )
}
