//! Read-only query description and the client abstraction that runs it

use async_trait::async_trait;
use serde::Deserialize;

use super::row::Row;

/// `select * from <collection> [order by <column> desc] [limit n]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub collection: String,
    pub order: Option<String>,
    pub limit: Option<usize>,
}

impl Query {
    /// Selects every column of `collection`
    pub fn from(collection: &str) -> Self {
        Self {
            collection: collection.to_string(),
            order: None,
            limit: None,
        }
    }

    /// Newest first by `column`
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(column.to_string());
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// PostgREST query-string parameters
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", "*".to_string())];
        if let Some(column) = &self.order {
            params.push(("order", format!("{column}.desc")));
        }
        if let Some(n) = self.limit {
            params.push(("limit", n.to_string()));
        }
        params
    }
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("query client not initialized")]
    Unavailable,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("query on `{collection}` failed with status {status}: {message}")]
    Status {
        collection: String,
        status: u16,
        message: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything able to run a read-only `Query`
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError>;
}
