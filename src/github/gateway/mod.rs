//! Gateways for loading notifications through Octocrab.
//!
//! The trait keeps triage logic independent of HTTP so it can be exercised
//! with mocks, while the Octocrab implementation performs the real request.

mod client;
mod error_mapping;
mod notifications;
mod params;

pub use notifications::OctocrabNotificationGateway;
pub use params::{ListNotificationsParams, MAX_NOTIFICATIONS_PER_PAGE};

use async_trait::async_trait;

use crate::github::error::TriageError;
use crate::github::models::Notification;

/// Gateway that can list the authenticated user's notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch one page of notification threads.
    ///
    /// Records that lack fields triage depends on are dropped rather than
    /// failing the whole call.
    async fn list_notifications(
        &self,
        params: &ListNotificationsParams,
    ) -> Result<Vec<Notification>, TriageError>;
}
