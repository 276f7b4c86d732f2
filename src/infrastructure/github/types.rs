//! Wire types for the `GET /search/issues` endpoint.
//!
//! Only the fields the agenda needs are declared; serde skips the rest.

use serde::Deserialize;

use crate::domain::models::ActivityRecord;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchIssuesResponse {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<SearchIssueItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchIssueItem {
    pub number: u64,
    pub title: String,
}

impl From<SearchIssueItem> for ActivityRecord {
    fn from(item: SearchIssueItem) -> Self {
        Self::new(item.number, item.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = serde_json::json!({
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {
                    "url": "https://api.github.com/repos/eos/eos/issues/41",
                    "id": 1001,
                    "number": 41,
                    "title": "Missing reference for B->pi form factors",
                    "state": "closed",
                    "score": 1.0
                },
                {
                    "id": 1002,
                    "number": 42,
                    "title": "Update python bindings",
                    "pull_request": {}
                }
            ]
        });

        let response: SearchIssuesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.total_count, 2);
        assert!(!response.incomplete_results);

        let records: Vec<ActivityRecord> = response.items.into_iter().map(Into::into).collect();
        assert_eq!(
            records,
            vec![
                ActivityRecord::new(41, "Missing reference for B->pi form factors"),
                ActivityRecord::new(42, "Update python bindings"),
            ]
        );
    }

    #[test]
    fn test_incomplete_results_defaults_to_false() {
        let body = serde_json::json!({ "total_count": 0, "items": [] });
        let response: SearchIssuesResponse = serde_json::from_value(body).unwrap();
        assert!(!response.incomplete_results);
        assert!(response.items.is_empty());
    }
}
