//! CLI operation handlers.
//!
//! - [`unread_pull_requests`]: fetch, triage, and print unread pull request
//!   notifications
//!
//! Output formatting lives in [`output`].

pub mod output;
pub mod unread_pull_requests;
