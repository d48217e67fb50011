//! Application configuration loaded from CLI, environment, and files.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.prinbox.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `PRINBOX_TOKEN`, `PRINBOX_API_BASE`, ...,
//!    plus the legacy `GITHUB_TOKEN` fallback for the token
//! 4. **Command-line arguments** – `--token`/`-t`, `--format`/`-f`, ...
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! api_base = "https://ghe.example.com/api/v3"
//! format = "jsonl"
//! participating = true
//! per_page = 50
//! timeout_seconds = 10
//! unknown_reasons = "last"
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::endpoint::{AccessToken, ApiBase};
use crate::github::error::TriageError;
use crate::github::gateway::ListNotificationsParams;
use crate::github::priority::{ReasonPriority, UnknownReasonPlacement};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// How the CLI prints triaged notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One tab-separated line per notification.
    #[default]
    Text,
    /// One JSON object per line.
    Jsonl,
}

impl OutputFormat {
    /// Parses a format name (`text` or `jsonl`), ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] for any other value.
    pub fn parse(value: &str) -> Result<Self, TriageError> {
        if value.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if value.eq_ignore_ascii_case("jsonl") {
            Ok(Self::Jsonl)
        } else {
            Err(TriageError::Configuration {
                message: format!("output format must be `text` or `jsonl`, got `{value}`"),
            })
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use prinbox::PrinboxConfig;
///
/// let config = PrinboxConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PRINBOX",
    discovery(
        dotfile_name = ".prinbox.toml",
        config_file_name = "prinbox.toml",
        app_name = "prinbox"
    )
)]
pub struct PrinboxConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `PRINBOX_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// REST API base URL. Defaults to `https://api.github.com`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-base <URL>` or `-a <URL>`
    /// - Environment: `PRINBOX_API_BASE`
    /// - Config file: `api_base = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_base: Option<String>,

    /// Output format, `text` (default) or `jsonl`.
    ///
    /// Can be provided via:
    /// - CLI: `--format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `PRINBOX_FORMAT`
    /// - Config file: `format = "..."`
    #[ortho_config(cli_short = 'f')]
    pub format: Option<String>,

    /// Only list threads the user participates in or is mentioned on.
    ///
    /// Can be provided via:
    /// - CLI: `--participating` / `-p`
    /// - Config file: `participating = true`
    #[ortho_config(cli_short = 'p')]
    pub participating: bool,

    /// Page size requested from GitHub (1 to 50).
    ///
    /// Can be provided via:
    /// - CLI: `--per-page <N>`
    /// - Environment: `PRINBOX_PER_PAGE`
    /// - Config file: `per_page = 50`
    #[ortho_config()]
    pub per_page: Option<u8>,

    /// Seconds to wait for GitHub before giving up; `0` waits indefinitely.
    ///
    /// Defaults to 30 seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// Where reasons outside the priority order sort, `last` (default) or
    /// `first`.
    ///
    /// Can be provided via:
    /// - CLI: `--unknown-reasons <PLACEMENT>`
    /// - Environment: `PRINBOX_UNKNOWN_REASONS`
    /// - Config file: `unknown_reasons = "..."`
    #[ortho_config()]
    pub unknown_reasons: Option<String>,
}

impl Default for PrinboxConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: None,
            format: None,
            participating: false,
            per_page: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            unknown_reasons: None,
        }
    }
}

impl PrinboxConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values count as absent. The token itself is not checked; GitHub
    /// rejects bad tokens on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<AccessToken, TriageError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
            .map(AccessToken::new)
            .ok_or(TriageError::MissingToken)
    }

    /// Returns the configured API base, or the public GitHub API.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidUrl`] when the configured value is not a
    /// valid `http`/`https` URL.
    pub fn api_base(&self) -> Result<ApiBase, TriageError> {
        self.api_base
            .as_deref()
            .map_or_else(ApiBase::public, ApiBase::parse)
    }

    /// Returns the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] for an unknown format name.
    pub fn output_format(&self) -> Result<OutputFormat, TriageError> {
        self.format
            .as_deref()
            .map_or(Ok(OutputFormat::Text), OutputFormat::parse)
    }

    /// Builds the notification listing parameters.
    #[must_use]
    pub fn list_params(&self) -> ListNotificationsParams {
        ListNotificationsParams {
            all: None,
            participating: self.participating.then_some(true),
            per_page: self.per_page,
        }
    }

    /// The request deadline, or `None` when `timeout_seconds` is zero.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        if self.timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_seconds))
        }
    }

    /// Builds the default reason order with the configured placement for
    /// unknown reasons.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] for an unknown placement name.
    pub fn reason_priority(&self) -> Result<ReasonPriority, TriageError> {
        let placement = self
            .unknown_reasons
            .as_deref()
            .map_or(Ok(UnknownReasonPlacement::Last), UnknownReasonPlacement::parse)?;
        Ok(ReasonPriority::default().with_unknown_placement(placement))
    }
}

#[cfg(test)]
mod tests;
