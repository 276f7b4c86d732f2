use thiserror::Error;

use crate::domain::errors::SearchError;

/// Errors that can occur when calling the GitHub REST API
#[derive(Error, Debug)]
pub enum GithubApiError {
    /// Missing, expired or under-scoped token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Primary or secondary rate limit hit
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The search query was rejected as unprocessable
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// API server encountered an internal error
    #[error("API server error (HTTP {status}): {body}")]
    ServerError { status: u16, body: String },

    /// Network error occurred during request
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Response body was not the expected JSON document
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Unknown error occurred
    #[error("Unexpected response (HTTP {status}): {body}")]
    Unknown { status: u16, body: String },
}

impl GithubApiError {
    /// Create error from HTTP status code and response body
    ///
    /// - 401: Authentication failed
    /// - 403: Rate limit exceeded when the body says so, authentication otherwise
    /// - 422: Validation failed (malformed search query)
    /// - 429: Rate limit exceeded
    /// - 5xx: Server error
    /// - Other: Unknown error
    ///
    /// # Examples
    ///
    /// ```
    /// use agenda::infrastructure::github::GithubApiError;
    /// use reqwest::StatusCode;
    ///
    /// let error = GithubApiError::from_status(
    ///     StatusCode::TOO_MANY_REQUESTS,
    ///     "slow down".to_string(),
    /// );
    /// assert!(matches!(error, GithubApiError::RateLimitExceeded(_)));
    /// ```
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(body),
            403 if body.to_lowercase().contains("rate limit") => Self::RateLimitExceeded(body),
            403 => Self::AuthenticationFailed(body),
            422 => Self::ValidationFailed(body),
            429 => Self::RateLimitExceeded(body),
            code @ 500..=599 => Self::ServerError { status: code, body },
            code => Self::Unknown { status: code, body },
        }
    }
}

impl From<GithubApiError> for SearchError {
    fn from(err: GithubApiError) -> Self {
        match err {
            GithubApiError::AuthenticationFailed(msg) => Self::Authentication(msg),
            GithubApiError::RateLimitExceeded(msg) => Self::RateLimited(msg),
            GithubApiError::ValidationFailed(msg) => Self::InvalidQuery(msg),
            GithubApiError::ServerError { status, body }
            | GithubApiError::Unknown { status, body } => Self::Api {
                status,
                message: body,
            },
            GithubApiError::NetworkError(e) if e.is_decode() => Self::InvalidResponse(e.to_string()),
            GithubApiError::NetworkError(e) => Self::Network(e.to_string()),
            GithubApiError::Decode(msg) => Self::InvalidResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_unauthorized() {
        let error = GithubApiError::from_status(StatusCode::UNAUTHORIZED, "Bad credentials".into());
        assert!(matches!(error, GithubApiError::AuthenticationFailed(msg) if msg == "Bad credentials"));
    }

    #[test]
    fn test_from_status_forbidden_rate_limit() {
        let error = GithubApiError::from_status(
            StatusCode::FORBIDDEN,
            "API rate limit exceeded for user ID 1.".into(),
        );
        assert!(matches!(error, GithubApiError::RateLimitExceeded(_)));
    }

    #[test]
    fn test_from_status_forbidden_other() {
        let error = GithubApiError::from_status(StatusCode::FORBIDDEN, "Resource not accessible".into());
        assert!(matches!(error, GithubApiError::AuthenticationFailed(_)));
    }

    #[test]
    fn test_from_status_unprocessable() {
        let error = GithubApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "Validation Failed".into());
        assert!(matches!(error, GithubApiError::ValidationFailed(_)));
    }

    #[test]
    fn test_from_status_server_error() {
        let error = GithubApiError::from_status(StatusCode::BAD_GATEWAY, "oops".into());
        assert!(matches!(error, GithubApiError::ServerError { status: 502, .. }));
    }

    #[test]
    fn test_from_status_unknown() {
        let error = GithubApiError::from_status(StatusCode::IM_A_TEAPOT, "short and stout".into());
        assert!(matches!(error, GithubApiError::Unknown { status: 418, .. }));
        assert_eq!(error.to_string(), "Unexpected response (HTTP 418): short and stout");
    }

    #[test]
    fn test_into_search_error() {
        let search: SearchError =
            GithubApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "down".into()).into();
        assert!(matches!(search, SearchError::Api { status: 503, .. }));

        let search: SearchError = GithubApiError::Decode("missing field `items`".into()).into();
        assert!(matches!(search, SearchError::InvalidResponse(_)));
    }
}
