//! Lists unread pull request notifications for the authenticated user.

use std::time::Duration;

use prinbox::{
    ListNotificationsParams, Notification, NotificationGateway, NotificationTriage,
    OctocrabNotificationGateway, PrinboxConfig, ReasonPriority, TriageError,
};

use super::output::write_notifications;

/// Fetches, triages, and prints unread pull request notifications.
///
/// # Errors
///
/// Returns [`TriageError::MissingToken`] or [`TriageError::Configuration`]
/// when configuration is incomplete, and propagates gateway failures such
/// as [`TriageError::Authentication`].
pub async fn run(config: &PrinboxConfig) -> Result<(), TriageError> {
    let token = config.resolve_token()?;
    let api_base = config.api_base()?;
    let format = config.output_format()?;
    let priority = config.reason_priority()?;
    let params = config.list_params();

    let gateway = OctocrabNotificationGateway::for_token(&token, &api_base)?;
    let notifications = load(&gateway, priority, &params, config.deadline()).await?;

    write_notifications(&notifications, format)
}

/// Runs the triage, bounded by `deadline` when one is configured.
async fn load<Gateway: NotificationGateway>(
    gateway: &Gateway,
    priority: ReasonPriority,
    params: &ListNotificationsParams,
    deadline: Option<Duration>,
) -> Result<Vec<Notification>, TriageError> {
    let triage = NotificationTriage::new(gateway, priority);
    match deadline {
        Some(limit) => triage.unread_pull_requests_within(params, limit).await,
        None => triage.unread_pull_requests(params).await,
    }
}
