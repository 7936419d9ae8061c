//! Supabase (PostgREST) query client

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SiteConfig;

use super::query::{ApiErrorBody, Query, QueryClient, QueryError};
use super::row::Row;

/// Read-only client for the site's Supabase project
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// `None` when the project URL or key is not configured
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        match (&config.supabase_url, &config.supabase_anon_key) {
            (Some(url), Some(key)) => Some(Self::new(url, key)),
            _ => None,
        }
    }
}

#[async_trait]
impl QueryClient for SupabaseClient {
    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
        let url = format!("{}/rest/v1/{}", self.base_url, query.collection);
        tracing::debug!(collection = %query.collection, params = ?query.to_params(), "Query request started");

        let response = self
            .http
            .get(&url)
            .query(&query.to_params())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(ApiErrorBody { message, code: Some(code) }) => format!("{message} ({code})"),
                Ok(ApiErrorBody { message, code: None }) => message,
                Err(_) => body,
            };
            return Err(QueryError::Status {
                collection: query.collection.clone(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str::<Vec<Row>>(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::Query as QueryParams,
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    async fn spawn_server(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn header(headers: &HeaderMap, name: &str) -> String {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_select_sends_postgrest_request() {
        let router = Router::new().route(
            "/rest/v1/releases",
            get(|QueryParams(params): QueryParams<HashMap<String, String>>, headers: HeaderMap| async move {
                Json(json!([{
                    "id": 1,
                    "select": params.get("select"),
                    "order": params.get("order"),
                    "limit": params.get("limit"),
                    "apikey": header(&headers, "apikey"),
                    "authorization": header(&headers, "authorization"),
                }]))
            }),
        );
        let client = SupabaseClient::new(&spawn_server(router).await, "anon-key");

        let query = Query::from("releases")
            .order_desc("release_date")
            .limit(1);
        let rows = client.select(&query).await.unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row["select"], json!("*"));
        assert_eq!(row["order"], json!("release_date.desc"));
        assert_eq!(row["limit"], json!("1"));
        assert_eq!(row["apikey"], json!("anon-key"));
        assert_eq!(row["authorization"], json!("Bearer anon-key"));
    }

    #[tokio::test]
    async fn test_error_status_carries_api_message() {
        let router = Router::new().route(
            "/rest/v1/notes",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"message": "relation \"notes\" does not exist", "code": "42P01"})),
                )
            }),
        );
        let client = SupabaseClient::new(&spawn_server(router).await, "anon-key");

        match client.select(&Query::from("notes")).await {
            Err(QueryError::Status { collection, status, message }) => {
                assert_eq!(collection, "notes");
                assert_eq!(status, 404);
                assert_eq!(message, "relation \"notes\" does not exist (42P01)");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_decode_error() {
        let router = Router::new().route("/rest/v1/releases", get(|| async { Json(json!({"not": "rows"})) }));
        let client = SupabaseClient::new(&spawn_server(router).await, "anon-key");

        let result = client.select(&Query::from("releases")).await;
        assert!(matches!(result, Err(QueryError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = SupabaseClient::new(&format!("http://{addr}"), "anon-key");
        let result = client.select(&Query::from("releases")).await;
        assert!(matches!(result, Err(QueryError::Transport(_))), "got {result:?}");
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let mut config = SiteConfig::default();
        assert!(SupabaseClient::from_config(&config).is_none());

        config.supabase_url = Some("https://example.supabase.co".to_string());
        assert!(SupabaseClient::from_config(&config).is_none());

        config.supabase_anon_key = Some("key".to_string());
        let client = SupabaseClient::from_config(&config).unwrap();
        assert_eq!(client.base_url, "https://example.supabase.co");
    }
}
