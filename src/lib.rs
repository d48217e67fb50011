//! Prinbox library crate for triaging GitHub pull request notifications.
//!
//! The library wraps Octocrab to fetch the authenticated user's
//! notifications, keeps the unread pull request threads, orders them by
//! repository and reason priority, and derives the pull request web links a
//! reviewer would open next.

pub mod config;
pub mod github;

pub use config::{OutputFormat, PrinboxConfig};
pub use github::{
    AccessToken, ApiBase, ListNotificationsParams, Notification, NotificationGateway,
    NotificationTriage, OctocrabNotificationGateway, ReasonPriority, TriageError,
    UnknownReasonPlacement, derive_pull_request_id, derive_pull_request_url,
};
