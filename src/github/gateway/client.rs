//! Octocrab client construction for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::endpoint::{AccessToken, ApiBase};
use crate::github::error::TriageError;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client authenticated with a static token.
///
/// Nothing is sent to GitHub here, so a rejected token is only reported by
/// the first request made with the client.
///
/// # Errors
///
/// Returns `TriageError::InvalidUrl` when the base URI cannot be parsed or
/// `TriageError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &AccessToken,
    api_base: &ApiBase,
) -> Result<Octocrab, TriageError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| TriageError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.value())
        .base_uri(base_uri)
        .map_err(|error| TriageError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
