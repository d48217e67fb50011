//! Test helpers for constructing `Notification` fixtures.
//!
//! # Examples
//!
//! ```
//! use prinbox::github::models::test_support::{NotificationBuilder, unread_pull_request};
//!
//! let notification = unread_pull_request("1", "octo/repo", "mention", 42);
//! assert!(notification.unread);
//!
//! let issue = NotificationBuilder::new("2", "octo/repo")
//!     .kind("Issue")
//!     .reason("assigned")
//!     .build();
//! assert_eq!(issue.subject.kind, "Issue");
//! ```

use super::{Notification, NotificationSubject, PULL_REQUEST_SUBJECT};

/// Fluent builder for [`Notification`] fixtures.
///
/// Defaults to an unread pull request notification with reason `subscribed`
/// and no subject URL.
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    notification: Notification,
}

impl NotificationBuilder {
    /// Starts a builder for the given notification ID and repository.
    #[must_use]
    pub fn new(id: &str, repository_full_name: &str) -> Self {
        Self {
            notification: Notification {
                id: id.to_owned(),
                unread: true,
                reason: "subscribed".to_owned(),
                subject: NotificationSubject {
                    kind: PULL_REQUEST_SUBJECT.to_owned(),
                    title: None,
                    url: None,
                },
                repository_full_name: repository_full_name.to_owned(),
                updated_at: None,
            },
        }
    }

    /// Sets the unread flag.
    #[must_use]
    pub const fn unread(mut self, unread: bool) -> Self {
        self.notification.unread = unread;
        self
    }

    /// Sets the notification reason.
    #[must_use]
    pub fn reason(mut self, reason: &str) -> Self {
        reason.clone_into(&mut self.notification.reason);
        self
    }

    /// Sets the subject type tag.
    #[must_use]
    pub fn kind(mut self, kind: &str) -> Self {
        kind.clone_into(&mut self.notification.subject.kind);
        self
    }

    /// Sets the subject title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.notification.subject.title = Some(title.to_owned());
        self
    }

    /// Sets the subject reference URL verbatim.
    #[must_use]
    pub fn subject_url(mut self, url: &str) -> Self {
        self.notification.subject.url = Some(url.to_owned());
        self
    }

    /// Points the subject URL at the given pull request number.
    #[must_use]
    pub fn pull_number(self, number: u64) -> Self {
        let url = format!(
            "https://api.github.com/repos/{}/pulls/{number}",
            self.notification.repository_full_name
        );
        self.subject_url(&url)
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Notification {
        self.notification
    }
}

/// Creates an unread pull request notification with a numbered subject URL.
#[must_use]
pub fn unread_pull_request(
    id: &str,
    repository_full_name: &str,
    reason: &str,
    number: u64,
) -> Notification {
    NotificationBuilder::new(id, repository_full_name)
        .reason(reason)
        .pull_number(number)
        .build()
}
