//! Data models representing GitHub notifications.
//!
//! Types prefixed with `Api` are internal deserialisation targets. Every field
//! on them is optional so a sparse record never fails the whole response; the
//! conversion into [`Notification`] decides which fields are required.

use serde::Deserialize;

use super::error::TriageError;

#[cfg(feature = "test-support")]
pub mod test_support;

/// Subject type tag GitHub uses for pull request notifications.
pub const PULL_REQUEST_SUBJECT: &str = "PullRequest";

/// A notification thread for the authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification thread identifier.
    pub id: String,
    /// Whether the thread is still unread.
    pub unread: bool,
    /// Why the user received the notification (e.g. `review_requested`).
    pub reason: String,
    /// The issue, pull request, or other object the thread is about.
    pub subject: NotificationSubject,
    /// Repository full name in `owner/name` form.
    pub repository_full_name: String,
    /// Last update timestamp (ISO 8601 format).
    pub updated_at: Option<String>,
}

impl Notification {
    /// Returns true when the subject is a pull request.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.subject.kind == PULL_REQUEST_SUBJECT
    }
}

/// Subject of a notification thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSubject {
    /// Subject type tag, e.g. `PullRequest` or `Issue`.
    pub kind: String,
    /// Subject title.
    pub title: Option<String>,
    /// API reference URL of the subject. Absent for some subject types.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiNotification {
    pub(super) id: Option<String>,
    pub(super) unread: Option<bool>,
    pub(super) reason: Option<String>,
    pub(super) subject: Option<ApiSubject>,
    pub(super) repository: Option<ApiRepository>,
    pub(super) updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiSubject {
    #[serde(rename = "type")]
    pub(super) kind: Option<String>,
    pub(super) title: Option<String>,
    pub(super) url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRepository {
    pub(super) full_name: Option<String>,
}

impl TryFrom<ApiNotification> for Notification {
    type Error = TriageError;

    fn try_from(value: ApiNotification) -> Result<Self, Self::Error> {
        let id = value.id.ok_or(TriageError::MissingField { field: "id" })?;
        let unread = value
            .unread
            .ok_or(TriageError::MissingField { field: "unread" })?;
        let reason = value
            .reason
            .ok_or(TriageError::MissingField { field: "reason" })?;
        let subject = value
            .subject
            .ok_or(TriageError::MissingField { field: "subject" })?;
        let kind = subject
            .kind
            .ok_or(TriageError::MissingField {
                field: "subject.type",
            })?;
        let repository_full_name = value
            .repository
            .and_then(|repository| repository.full_name)
            .ok_or(TriageError::MissingField {
                field: "repository.full_name",
            })?;

        Ok(Self {
            id,
            unread,
            reason,
            subject: NotificationSubject {
                kind,
                title: subject.title,
                url: subject.url,
            },
            repository_full_name,
            updated_at: value.updated_at,
        })
    }
}
