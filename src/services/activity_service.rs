//! Activity service collecting the four agenda sections.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::errors::SearchError;
use crate::domain::models::{ActivityCategory, ActivityRecord, Agenda, DateWindow, SearchQuery};
use crate::domain::ports::IssueSearch;
use crate::infrastructure::logging::SecretScrubber;

/// Result of collecting all categories for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedActivity {
    pub agenda: Agenda,
    /// Categories whose search failed and were left empty
    pub failed: Vec<ActivityCategory>,
}

pub struct ActivityService<S: IssueSearch> {
    search: Arc<S>,
    repository: String,
    scrubber: SecretScrubber,
}

impl<S: IssueSearch> ActivityService<S> {
    pub fn new(search: Arc<S>, repository: impl Into<String>) -> Self {
        Self {
            search,
            repository: repository.into(),
            scrubber: SecretScrubber::new(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Run the search for one category.
    pub async fn fetch(
        &self,
        category: ActivityCategory,
        window: &DateWindow,
    ) -> Result<Vec<ActivityRecord>, SearchError> {
        let query = SearchQuery::new(self.repository.as_str(), category, *window);
        self.search.search(&query).await
    }

    /// Run all four searches, one after the other.
    ///
    /// A failing search is logged and its section left empty; it never
    /// affects the other sections.
    pub async fn collect(&self, window: &DateWindow) -> CollectedActivity {
        let mut agenda = Agenda::new(window.end_str());
        let mut failed = Vec::new();

        for category in ActivityCategory::ALL {
            match self.fetch(category, window).await {
                Ok(records) => {
                    info!(%category, count = records.len(), "fetched activity");
                    agenda.set_records(category, records);
                }
                Err(err) => {
                    error!(
                        %category,
                        error = %self.scrubber.scrub_message(&err.to_string()),
                        "search failed; leaving section empty"
                    );
                    failed.push(category);
                }
            }
        }

        CollectedActivity { agenda, failed }
    }
}
