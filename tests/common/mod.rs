//! Common test utilities for integration tests
//!
//! Mock GitHub search responses and helpers shared by the test files.

#![allow(dead_code)]

use agenda::{ActivityCategory, DateWindow, SearchQuery};
use mockito::{Matcher, Mock, ServerGuard};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_REPOSITORY: &str = "eos/eos";

/// JSON body of a search response holding the given `(number, title)` items.
///
/// Items carry extra fields the way the real API does.
pub fn search_body(items: &[(u64, &str)]) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|(number, title)| {
            serde_json::json!({
                "url": format!("https://api.github.com/repos/eos/eos/issues/{number}"),
                "id": 100_000 + number,
                "node_id": "I_kwDOAAAAAA",
                "number": number,
                "title": title,
                "user": { "login": "contributor", "id": 1 },
                "labels": [],
                "state": "open",
                "comments": 3,
                "created_at": "2024-03-10T09:00:00Z",
                "updated_at": "2024-03-12T09:00:00Z",
                "body": "details",
                "score": 1.0
            })
        })
        .collect();

    serde_json::json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}

/// Query string the client is expected to send for `category`.
pub fn query_for(category: ActivityCategory, window: &DateWindow) -> String {
    SearchQuery::new(TEST_REPOSITORY, category, *window).to_query_string()
}

fn search_matcher(category: ActivityCategory, window: &DateWindow) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), query_for(category, window)),
        Matcher::UrlEncoded("per_page".into(), "100".into()),
    ])
}

/// Mock one category's search with a status and body.
pub async fn mock_category(
    server: &mut ServerGuard,
    category: ActivityCategory,
    window: &DateWindow,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock("GET", "/search/issues")
        .match_query(search_matcher(category, window))
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Blocking variant of [`mock_category`] for tests that drive the binary.
pub fn mock_category_blocking(
    server: &mut ServerGuard,
    category: ActivityCategory,
    window: &DateWindow,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock("GET", "/search/issues")
        .match_query(search_matcher(category, window))
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
