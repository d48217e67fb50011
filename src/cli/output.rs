//! Output formatting for triaged notifications.

use std::io::{self, Write};

use prinbox::github::link::{derive_pull_request_id, derive_pull_request_url};
use prinbox::{Notification, OutputFormat, TriageError};
use serde::Serialize;

/// One JSONL line per notification.
#[derive(Debug, Serialize)]
struct UnreadPullRequestRecord<'a> {
    id: &'a str,
    repository: &'a str,
    reason: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    pull_request_id: i64,
    url: String,
}

impl<'a> From<&'a Notification> for UnreadPullRequestRecord<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            id: &notification.id,
            repository: &notification.repository_full_name,
            reason: &notification.reason,
            title: notification.subject.title.as_deref(),
            pull_request_id: derive_pull_request_id(notification),
            url: derive_pull_request_url(notification),
        }
    }
}

/// Writes notifications to stdout in the requested format.
pub fn write_notifications(
    notifications: &[Notification],
    format: OutputFormat,
) -> Result<(), TriageError> {
    let mut stdout = io::stdout().lock();
    write_notifications_to(&mut stdout, notifications, format)
}

/// Writes notifications to the given writer in the requested format.
pub fn write_notifications_to<W: Write>(
    writer: &mut W,
    notifications: &[Notification],
    format: OutputFormat,
) -> Result<(), TriageError> {
    match format {
        OutputFormat::Text => write_text(writer, notifications),
        OutputFormat::Jsonl => write_jsonl(writer, notifications),
    }
}

fn write_text<W: Write>(writer: &mut W, notifications: &[Notification]) -> Result<(), TriageError> {
    for notification in notifications {
        writeln!(
            writer,
            "{repository}\t{reason}\t{url}",
            repository = notification.repository_full_name,
            reason = notification.reason,
            url = derive_pull_request_url(notification)
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

fn write_jsonl<W: Write>(writer: &mut W, notifications: &[Notification]) -> Result<(), TriageError> {
    for notification in notifications {
        serde_json::to_writer(&mut *writer, &UnreadPullRequestRecord::from(notification)).map_err(
            |e| TriageError::Io {
                message: format!("JSON serialization failed: {e}"),
            },
        )?;
        writeln!(writer).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Converts an I/O error to a [`TriageError::Io`].
fn io_error(error: &io::Error) -> TriageError {
    TriageError::Io {
        message: error.to_string(),
    }
}
