//! Report rendering.
//!
//! Turns one batch of search results into the morning report text. This is
//! the only part of the program with real formatting rules, and it is a pure
//! function: articles, query, and the capture instant go in, text comes out.
//! The capture instant is a parameter rather than a `Local::now()` call so
//! two renders of the same data are byte-identical.
//!
//! # Layout
//!
//! ```text
//! Aamuraportti – 06.05.2025 07:30 (+03:00)
//! Hakusanat: akkuenergian varastointihanke halli
//! ============================================================
//!
//! 1. Akkuvarasto etenee Kouvolassa
//!    Lähde: Yle Uutiset
//!    Julkaistu: 2025-05-06T04:12:00Z
//!    Linkki: https://example.com/akku
//!
//! ```
//!
//! The published and link lines are omitted entirely when the article has no
//! timestamp or URL. A blank line closes every block, the last one included.

use crate::models::Article;
use chrono::{DateTime, TimeZone};
use std::fmt::Write;

/// Width of the header separator line.
const SEPARATOR_WIDTH: usize = 60;
/// Fill character for the header separator line.
const SEPARATOR_CHAR: char = '=';
/// Shown in place of a missing or empty title.
const NO_TITLE: &str = "(ei otsikkoa)";
/// Shown in place of a missing or empty source name.
const UNKNOWN_SOURCE: &str = "tuntematon lähde";
/// The entire body when the search matched nothing.
const NO_RESULTS: &str = "Ei uutisia näillä hakusanoilla.";

/// Render the morning report for one batch of articles.
///
/// Articles are numbered 1..N in the order the API returned them, which is
/// newest first. `now` is the capture time stamped into the header; its
/// offset doubles as the timezone label.
pub fn format_report<Tz: TimeZone>(articles: &[Article], query: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    writeln!(
        out,
        "Aamuraportti – {} ({})",
        now.format("%d.%m.%Y %H:%M"),
        now.offset()
    )
    .unwrap();
    writeln!(out, "Hakusanat: {query}").unwrap();
    writeln!(out, "{}", SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)).unwrap();
    writeln!(out).unwrap();

    if articles.is_empty() {
        writeln!(out, "{NO_RESULTS}").unwrap();
        return out;
    }

    for (i, article) in articles.iter().enumerate() {
        let title = article
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_TITLE);
        let source = article
            .source_name()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_SOURCE);

        writeln!(out, "{}. {}", i + 1, title).unwrap();
        writeln!(out, "   Lähde: {source}").unwrap();
        if let Some(published) = article.published_at.as_deref().filter(|p| !p.is_empty()) {
            writeln!(out, "   Julkaistu: {published}").unwrap();
        }
        if let Some(url) = article.url.as_deref().filter(|u| !u.is_empty()) {
            writeln!(out, "   Linkki: {url}").unwrap();
        }
        writeln!(out).unwrap();
    }

    out
}
