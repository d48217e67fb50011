//! Unread pull request triage over the notification gateway.

use std::time::Duration;

use super::error::TriageError;
use super::gateway::{ListNotificationsParams, NotificationGateway};
use super::models::Notification;
use super::priority::ReasonPriority;

/// Returns true for unread notifications about a pull request.
#[must_use]
pub fn is_unread_pull_request(notification: &Notification) -> bool {
    notification.unread && notification.is_pull_request()
}

/// Keeps unread pull request notifications and orders them with `priority`.
///
/// An input with nothing matching yields an empty list.
#[must_use]
pub fn select_unread_pull_requests(
    notifications: Vec<Notification>,
    priority: &ReasonPriority,
) -> Vec<Notification> {
    let mut selected: Vec<Notification> = notifications
        .into_iter()
        .filter(is_unread_pull_request)
        .collect();
    priority.sort(&mut selected);
    selected
}

/// Fetches notifications through a gateway and triages them.
pub struct NotificationTriage<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    client: &'client Gateway,
    priority: ReasonPriority,
}

impl<'client, Gateway> NotificationTriage<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Create a triage facade using the provided gateway and reason order.
    #[must_use]
    pub const fn new(client: &'client Gateway, priority: ReasonPriority) -> Self {
        Self { client, priority }
    }

    /// The reason order used for sorting.
    #[must_use]
    pub const fn priority(&self) -> &ReasonPriority {
        &self.priority
    }

    /// Lists unread pull request notifications, ordered by repository name
    /// and then by descending reason priority.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway unchanged,
    /// including authentication errors and network problems.
    pub async fn unread_pull_requests(
        &self,
        params: &ListNotificationsParams,
    ) -> Result<Vec<Notification>, TriageError> {
        let notifications = self.client.list_notifications(params).await?;
        let received = notifications.len();
        let selected = select_unread_pull_requests(notifications, &self.priority);
        tracing::debug!(
            received,
            selected = selected.len(),
            "triaged unread pull request notifications"
        );
        Ok(selected)
    }

    /// Same as [`Self::unread_pull_requests`] but gives up once `deadline`
    /// has elapsed.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::DeadlineExceeded`] when the request does not
    /// finish in time, otherwise propagates gateway failures.
    pub async fn unread_pull_requests_within(
        &self,
        params: &ListNotificationsParams,
        deadline: Duration,
    ) -> Result<Vec<Notification>, TriageError> {
        tokio::time::timeout(deadline, self.unread_pull_requests(params))
            .await
            .map_err(|_| {
                tracing::warn!("notification request cancelled after {deadline:?}");
                TriageError::DeadlineExceeded { deadline }
            })?
    }
}
