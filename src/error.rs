//! Top-level error type for one run.
//!
//! Every failure belongs to exactly one of three kinds, matching the three
//! pipeline stages. Callers can branch on the kind without inspecting
//! message text; all three abort the run.

use crate::config::ConfigError;
use crate::deliver::DeliveryError;
use crate::newsapi::FetchError;
use thiserror::Error;

/// The reason a run failed.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Required configuration was absent or unusable; detected before any
    /// network I/O.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The news fetch failed.
    #[error("news fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// Delivering the finished report failed.
    #[error("report delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}
