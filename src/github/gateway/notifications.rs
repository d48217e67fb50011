//! Octocrab implementation of the notification gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::endpoint::{AccessToken, ApiBase};
use crate::github::error::TriageError;
use crate::github::models::{ApiNotification, Notification};

use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{ListNotificationsParams, NotificationGateway};

const NOTIFICATIONS_PATH: &str = "/notifications";

/// Octocrab-backed notification gateway.
pub struct OctocrabNotificationGateway {
    client: Octocrab,
}

impl OctocrabNotificationGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway authenticated with `token` against `api_base`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidUrl` when the base URI cannot be parsed or
    /// `TriageError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &AccessToken, api_base: &ApiBase) -> Result<Self, TriageError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl NotificationGateway for OctocrabNotificationGateway {
    async fn list_notifications(
        &self,
        params: &ListNotificationsParams,
    ) -> Result<Vec<Notification>, TriageError> {
        params.validate()?;

        let query = if params.is_empty() { None } else { Some(params) };
        let records: Vec<ApiNotification> = self
            .client
            .get(NOTIFICATIONS_PATH, query)
            .await
            .map_err(|error| map_octocrab_error("list notifications", &error))?;

        let received = records.len();
        let notifications: Vec<Notification> = records
            .into_iter()
            .filter_map(|record| match Notification::try_from(record) {
                Ok(notification) => Some(notification),
                Err(error) => {
                    tracing::warn!("skipping notification record: {error}");
                    None
                }
            })
            .collect();

        tracing::debug!(
            received,
            kept = notifications.len(),
            "listed notifications"
        );
        Ok(notifications)
    }
}
