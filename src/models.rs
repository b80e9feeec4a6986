//! Data models for the NewsAPI search response.
//!
//! This module defines the wire types deserialized from the NewsAPI
//! `everything` endpoint:
//! - [`NewsResponse`]: The top-level response envelope
//! - [`Article`]: One search result record
//! - [`Source`]: The publication an article came from
//!
//! Every article field is optional. NewsAPI omits or nulls fields freely
//! depending on the upstream outlet, so absence is a normal case the
//! formatter handles with placeholders, never a deserialization error.

use serde::Deserialize;

/// The publication a news article was published by.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    /// NewsAPI's internal identifier for the outlet, when it has one.
    pub id: Option<String>,
    /// Human-readable outlet name, e.g. "Helsingin Sanomat".
    pub name: Option<String>,
}

/// One news search result as returned by NewsAPI.
///
/// Field names use camelCase on the wire (`publishedAt`), hence the
/// `rename_all` attribute. The publish timestamp is kept as the raw string
/// the API sent; it is echoed into the report, never parsed or validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The outlet that published the article.
    pub source: Option<Source>,
    /// The article headline.
    pub title: Option<String>,
    /// Link to the article.
    pub url: Option<String>,
    /// Publish timestamp as an ISO-8601-like string, e.g. "2025-05-06T07:30:00Z".
    pub published_at: Option<String>,
}

impl Article {
    /// The outlet name, flattened through the nested optional source.
    ///
    /// Returns `None` when the source object or its name is absent, so the
    /// caller can substitute a placeholder in one place.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

/// Top-level response envelope from the NewsAPI `everything` endpoint.
///
/// A response without an `articles` array deserializes to an empty list
/// rather than failing, per the `#[serde(default)]` on the field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// "ok" or "error"; informational only, the HTTP status is authoritative.
    pub status: Option<String>,
    /// Total matches upstream, of which at most one page is returned.
    pub total_results: Option<i64>,
    /// The search results, newest first.
    #[serde(default)]
    pub articles: Vec<Article>,
}
