//! GitHub REST API integration
//!
//! Implements the `IssueSearch` port on top of `GET /search/issues`.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GithubClientConfig, GithubSearchClient, GITHUB_API_VERSION};
pub use error::GithubApiError;
pub use types::{SearchIssueItem, SearchIssuesResponse};
