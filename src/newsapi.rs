//! NewsAPI search client.
//!
//! One GET against the [NewsAPI](https://newsapi.org) `everything` endpoint
//! per run. The query is fixed to Finnish-language results sorted newest
//! first, capped at one page of ten articles. The API key travels in the
//! `X-Api-Key` header and never appears in the URL, so it cannot leak into
//! access logs on the far side.
//!
//! There is no retry here on purpose. A failed fetch fails the run; the
//! scheduler that invokes the binary tries again on its next tick.

use crate::models::{Article, NewsResponse};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

/// The NewsAPI search endpoint.
const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
/// Request header carrying the API key.
const API_KEY_HEADER: &str = "X-Api-Key";
/// Result language filter.
const LANGUAGE: &str = "fi";
/// Sort order, most recently published first.
const SORT_BY: &str = "publishedAt";
/// Maximum number of articles requested.
const PAGE_SIZE: u32 = 10;
/// Upper bound on the whole request, connect included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A failed news fetch. Always fatal for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: connect, timeout, TLS, or an undecodable body.
    #[error("news API request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("news API returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for fetching news search results from NewsAPI.
#[derive(Debug)]
pub struct NewsApiClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl NewsApiClient {
    /// Create a new client with the request timeout applied.
    pub fn new(api_key: &str) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: NEWS_API_URL.to_string(),
            client,
        })
    }

    /// Point the client at a different endpoint. Tests use this to target a
    /// local mock server.
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Run one search and return the article list.
    ///
    /// An empty query is passed through untouched; whatever the API does
    /// with it is what happens. A response without an `articles` array
    /// yields an empty list, not an error.
    #[instrument(level = "info", skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("language", LANGUAGE), ("sortBy", SORT_BY)])
            .query(&[("pageSize", PAGE_SIZE)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "News API returned an error");
            return Err(FetchError::Status { status, body });
        }

        let news: NewsResponse = response.json().await?;
        info!(
            count = news.articles.len(),
            total_results = ?news.total_results,
            "Fetched news articles"
        );
        debug!(api_status = ?news.status, "News API envelope");

        Ok(news.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_client(server: &MockServer) -> NewsApiClient {
        NewsApiClient::new("test-key")
            .unwrap()
            .with_base_url(format!("{}/v2/everything", server.uri()))
    }

    #[tokio::test]
    async fn test_search_sends_contract_params_and_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/everything"))
            .and(query_param("q", "akkuvarasto"))
            .and(query_param("language", "fi"))
            .and(query_param("sortBy", "publishedAt"))
            .and(query_param("pageSize", "10"))
            .and(header("X-Api-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": {"id": null, "name": "Yle Uutiset"},
                    "title": "Akkuvarasto etenee",
                    "url": "https://example.com/akku",
                    "publishedAt": "2025-05-06T07:30:00Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let articles = mock_client(&server).await.search("akkuvarasto").await.unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("Akkuvarasto etenee"));
        assert_eq!(articles[0].source_name(), Some("Yle Uutiset"));
    }

    #[tokio::test]
    async fn test_search_missing_articles_field_is_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok", "totalResults": 0})),
            )
            .mount(&server)
            .await;

        let articles = mock_client(&server).await.search("mitään").await.unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_search_server_error_is_fatal() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let err = mock_client(&server).await.search("akku").await.unwrap_err();
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(body, "upstream exploded");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_unauthorized_is_fatal() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"status": "error", "code": "apiKeyInvalid"})),
            )
            .mount(&server)
            .await;

        let err = mock_client(&server).await.search("akku").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status { status, .. } if status == StatusCode::UNAUTHORIZED
        ));
    }

    #[tokio::test]
    async fn test_search_empty_query_passed_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("q", ""))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "ok", "totalResults": 0, "articles": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let articles = mock_client(&server).await.search("").await.unwrap();
        assert!(articles.is_empty());
    }
}
