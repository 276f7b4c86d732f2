//! Credentials management infrastructure
//!
//! The GitHub access token is only ever taken from the environment; it is
//! never read from or written to a config file.

use std::fmt;
use thiserror::Error;

/// Environment variable holding the GitHub access token.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("GITHUB_ACCESS_TOKEN environment variable not set")]
    MissingToken,
}

/// Access token for the GitHub API.
#[derive(Clone)]
pub struct GithubCredentials {
    token: String,
}

impl GithubCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from `GITHUB_ACCESS_TOKEN`.
    ///
    /// An unset, non-unicode or blank value counts as missing.
    pub fn from_env() -> Result<Self, CredentialError> {
        match std::env::var(GITHUB_TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token.trim())),
            _ => Err(CredentialError::MissingToken),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Never print the token itself.
impl fmt::Debug for GithubCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubCredentials")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
