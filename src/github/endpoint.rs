//! Identity wrappers for the access token and the API endpoint.

use url::Url;

use super::error::TriageError;

/// Public GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Static access token used to authenticate API calls.
///
/// The value is stored as given. GitHub decides whether it is valid, so a bad
/// or expired token only surfaces on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// REST API base URL the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(Url);

impl ApiBase {
    /// Parses an API base such as `https://api.github.com` or
    /// `https://ghe.example.com/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidUrl`] when the input does not parse, is
    /// not `http`/`https`, or has no host.
    pub fn parse(input: &str) -> Result<Self, TriageError> {
        let parsed =
            Url::parse(input).map_err(|error| TriageError::InvalidUrl(error.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(TriageError::InvalidUrl(format!(
                "unsupported scheme `{}`",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none() {
            return Err(TriageError::InvalidUrl(
                "URL must include a host".to_owned(),
            ));
        }

        Ok(Self(parsed))
    }

    /// The public `api.github.com` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidUrl`] if the built-in base fails to parse.
    pub fn public() -> Result<Self, TriageError> {
        Self::parse(DEFAULT_API_BASE)
    }

    /// Borrow the base as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
