use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::GithubApiError;
use super::types::SearchIssuesResponse;
use crate::domain::errors::SearchError;
use crate::domain::models::{ActivityRecord, GithubConfig, SearchQuery};
use crate::domain::ports::IssueSearch;
use crate::infrastructure::credentials::GithubCredentials;

/// REST API version pinned in every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Configuration for the GitHub search client
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Access token
    pub credentials: GithubCredentials,

    /// Base URL of the REST API (overridable for tests and GHES)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Results per search; only the first page is ever fetched
    pub per_page: u8,
}

impl GithubClientConfig {
    pub fn new(credentials: GithubCredentials, github: &GithubConfig) -> Self {
        Self {
            credentials,
            base_url: github.api_url.clone(),
            timeout_secs: github.timeout_secs,
            per_page: github.per_page,
        }
    }
}

/// HTTP client for the issue search endpoint
///
/// Requests are sent once; there is no retry and no pagination.
pub struct GithubSearchClient {
    http_client: ReqwestClient,
    config: GithubClientConfig,
}

impl GithubSearchClient {
    pub fn new(config: GithubClientConfig) -> Result<Self, GithubApiError> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search/issues", self.config.base_url.trim_end_matches('/'))
    }

    /// Send the request and decode the first page
    async fn send_request(&self, query: &str) -> Result<SearchIssuesResponse, GithubApiError> {
        let per_page = self.config.per_page.to_string();
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("q", query), ("per_page", per_page.as_str())])
            .bearer_auth(self.config.credentials.token())
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GithubApiError::from_status(status, body));
        }

        serde_json::from_str(&body).map_err(|e| GithubApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl IssueSearch for GithubSearchClient {
    #[instrument(skip_all, fields(query = %query))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ActivityRecord>, SearchError> {
        let response = self.send_request(&query.to_query_string()).await?;

        if response.incomplete_results {
            warn!("search timed out server-side; results may be incomplete");
        }
        if response.total_count > response.items.len() as u64 {
            warn!(
                total_count = response.total_count,
                returned = response.items.len(),
                "more matches than fit on one page; extra results are dropped"
            );
        }
        debug!(count = response.items.len(), "search completed");

        Ok(response.items.into_iter().map(ActivityRecord::from).collect())
    }
}
