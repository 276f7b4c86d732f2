use async_trait::async_trait;

use crate::domain::errors::SearchError;
use crate::domain::models::{ActivityRecord, SearchQuery};

/// Port for the remote issue/pull request search.
///
/// Implementations run one query and return the first page of matches,
/// already normalized to activity records.
#[async_trait]
pub trait IssueSearch: Send + Sync {
    /// Run a single search.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ActivityRecord>, SearchError>;
}
