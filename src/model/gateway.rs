//! Read-only access to the `releases` and `notes` collections
//!
//! Every operation here absorbs failures: a broken or missing backend turns
//! into an empty result and a log entry, never an error the page has to handle.

use std::sync::Arc;

use super::note::Note;
use super::query::{Query, QueryClient, QueryError};
use super::release::Release;
use super::row::Row;

const RELEASES: &str = "releases";
const NOTES: &str = "notes";
const NOTES_PREVIEW_LIMIT: usize = 3;

#[derive(Clone)]
pub struct RemoteReleaseGateway {
    client: Option<Arc<dyn QueryClient>>,
}

impl RemoteReleaseGateway {
    /// `None` models a query client that failed to initialize
    pub fn new(client: Option<Arc<dyn QueryClient>>) -> Self {
        Self { client }
    }

    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
        match &self.client {
            Some(client) => client.select(query).await,
            None => Err(QueryError::Unavailable),
        }
    }

    /// All releases, newest first
    pub async fn fetch_releases(&self) -> Vec<Release> {
        let query = Query::from(RELEASES).order_desc("release_date");
        let result = self.select(&query).await;
        crate::log_query_result!("fetch_releases", result);

        result
            .map(|rows| rows.iter().map(Release::from_row).collect())
            .unwrap_or_default()
    }

    /// The newest release, if there is one
    pub async fn fetch_latest_release(&self) -> Option<Release> {
        let query = Query::from(RELEASES)
            .order_desc("release_date")
            .limit(1);
        let result = self.select(&query).await;
        crate::log_query_result!("fetch_latest_release", result);

        result.ok()?.first().map(Release::from_row)
    }

    /// The three most recent notes; failures are only traced since the panel is optional
    pub async fn fetch_notes(&self) -> Vec<Note> {
        let query = Query::from(NOTES)
            .order_desc("created_at")
            .limit(NOTES_PREVIEW_LIMIT);

        match self.select(&query).await {
            Ok(rows) => rows.iter().map(Note::from_row).collect(),
            Err(e) => {
                tracing::debug!(error = %e, "Notes unavailable");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::{json, Value};

    use super::*;

    /// Canned client recording every query it receives
    struct TestQueryClient {
        rows: Vec<Row>,
        fail: bool,
        seen: Mutex<Vec<Query>>,
    }

    impl TestQueryClient {
        fn ok(rows: Vec<Value>) -> Arc<Self> {
            Arc::new(Self {
                rows: rows
                    .into_iter()
                    .filter_map(|v| v.as_object().cloned())
                    .collect(),
                fail: false,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                rows: Vec::new(),
                fail: true,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn queries(&self) -> Vec<Query> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueryClient for TestQueryClient {
        async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
            self.seen.lock().unwrap().push(query.clone());
            if self.fail {
                return Err(QueryError::Status {
                    collection: query.collection.clone(),
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            let limit = query.limit.unwrap_or(usize::MAX);
            Ok(self.rows.iter().take(limit).cloned().collect())
        }
    }

    fn gateway(client: &Arc<TestQueryClient>) -> RemoteReleaseGateway {
        let client: Arc<dyn QueryClient> = client.clone();
        RemoteReleaseGateway::new(Some(client))
    }

    #[fixture]
    fn releases() -> Vec<Value> {
        vec![
            json!({"id": 2, "title": "B", "release_date": "2025-06-01"}),
            json!({"id": 1, "title": "A", "release_date": "2024-01-01", "spotify": "sp"}),
        ]
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_releases_orders_newest_first(releases: Vec<Value>) {
        let client = TestQueryClient::ok(releases);
        let fetched = gateway(&client).fetch_releases().await;

        let titles: Vec<&str> = fetched.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert_eq!(
            client.queries(),
            vec![Query::from("releases").order_desc("release_date")]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_fetch_latest_release_limits_to_one(releases: Vec<Value>) {
        let client = TestQueryClient::ok(releases);
        let latest = gateway(&client).fetch_latest_release().await;

        assert_eq!(latest.map(|r| r.title), Some("B".to_string()));
        assert_eq!(client.queries()[0].limit, Some(1));
    }

    #[tokio::test]
    async fn test_fetch_latest_release_empty_collection() {
        let client = TestQueryClient::ok(vec![]);
        assert_eq!(gateway(&client).fetch_latest_release().await, None);
    }

    #[tokio::test]
    async fn test_fetch_notes_query() {
        let client = TestQueryClient::ok(vec![
            json!({"id": 1, "title": "one", "preview_text": "1"}),
            json!({"id": 2, "title": "two", "preview_text": "2"}),
            json!({"id": 3, "title": "three", "preview_text": "3"}),
            json!({"id": 4, "title": "four", "preview_text": "4"}),
        ]);
        let notes = gateway(&client).fetch_notes().await;

        assert_eq!(notes.len(), 3);
        assert_eq!(
            client.queries(),
            vec![Query::from("notes").order_desc("created_at").limit(3)]
        );
    }

    #[tokio::test]
    async fn test_backend_errors_degrade_to_empty() {
        let gateway = gateway(&TestQueryClient::failing());

        assert!(gateway.fetch_releases().await.is_empty());
        assert_eq!(gateway.fetch_latest_release().await, None);
        assert!(gateway.fetch_notes().await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_client_degrades_to_empty() {
        let gateway = RemoteReleaseGateway::new(None);

        assert!(gateway.fetch_releases().await.is_empty());
        assert_eq!(gateway.fetch_latest_release().await, None);
        assert!(gateway.fetch_notes().await.is_empty());
    }
}
