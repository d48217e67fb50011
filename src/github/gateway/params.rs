//! Query parameters for listing notifications.

use serde::Serialize;

use crate::github::error::TriageError;

/// Largest page size the notifications endpoint accepts.
pub const MAX_NOTIFICATIONS_PER_PAGE: u8 = 50;

/// Parameters for listing notifications.
///
/// Every field defaults to `None`, which leaves the choice to GitHub and
/// sends no query string at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListNotificationsParams {
    /// Include threads already marked as read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<bool>,
    /// Only threads where the user is directly participating or mentioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participating: Option<bool>,
    /// Items per page (1 to 50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u8>,
}

impl ListNotificationsParams {
    /// Returns true when no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.all.is_none() && self.participating.is_none() && self.per_page.is_none()
    }

    /// Checks that the parameters are within the ranges GitHub accepts.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidParameters`] when `per_page` is zero or
    /// exceeds [`MAX_NOTIFICATIONS_PER_PAGE`].
    pub fn validate(&self) -> Result<(), TriageError> {
        match self.per_page {
            Some(0) => Err(TriageError::InvalidParameters {
                message: "per_page must be at least 1".to_owned(),
            }),
            Some(per_page) if per_page > MAX_NOTIFICATIONS_PER_PAGE => {
                Err(TriageError::InvalidParameters {
                    message: format!("per_page must not exceed {MAX_NOTIFICATIONS_PER_PAGE}"),
                })
            }
            _ => Ok(()),
        }
    }
}
