//! GitHub notification triage.
//!
//! This module wraps Octocrab to list the authenticated user's notifications,
//! keeps the unread pull request threads, orders them by repository and
//! reason priority, and derives pull request links from them. Octocrab
//! failures are mapped into [`TriageError`] so callers never handle Octocrab
//! types directly.

pub mod endpoint;
pub mod error;
pub mod gateway;
pub mod link;
pub mod models;
pub mod priority;
pub mod triage;

pub use endpoint::{AccessToken, ApiBase};
pub use error::TriageError;
pub use gateway::{ListNotificationsParams, NotificationGateway, OctocrabNotificationGateway};
pub use link::{
    UNKNOWN_PULL_REQUEST_ID, derive_pull_request_id, derive_pull_request_url,
    pull_request_number,
};
pub use models::{Notification, NotificationSubject};
pub use priority::{ReasonPriority, UnknownReasonPlacement};
pub use triage::{NotificationTriage, is_unread_pull_request, select_unread_pull_requests};
