//! Runtime configuration assembled from the process environment.
//!
//! Configuration is read exactly once at startup into a plain [`Config`]
//! value that gets passed into the pipeline. Nothing downstream reads
//! environment variables on its own.
//!
//! # Environment keys
//!
//! | Key | Required | Default |
//! |-----|----------|---------|
//! | `NEWS_API_KEY` | yes | |
//! | `SEARCH_QUERY` | no | `akkuenergian varastointihanke halli` |
//! | `EMAIL_FROM` | email variant | |
//! | `EMAIL_TO` | email variant | |
//! | `EMAIL_SUBJECT` | no | `Aamuraportti` |
//! | `SMTP_HOST` | email variant | |
//! | `SMTP_PORT` | no | `587` |
//! | `SMTP_USERNAME` | email variant | |
//! | `SMTP_PASSWORD` | email variant | |
//!
//! Validation collects every missing key before reporting, so one failed run
//! names the complete set instead of one key per attempt. A key set to the
//! empty string counts as missing.

use crate::cli::DeliveryMode;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default search query when `SEARCH_QUERY` is unset.
pub const DEFAULT_QUERY: &str = "akkuenergian varastointihanke halli";
/// Default email subject when `EMAIL_SUBJECT` is unset.
pub const DEFAULT_SUBJECT: &str = "Aamuraportti";
/// Default SMTP submission port when `SMTP_PORT` is unset.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// A configuration problem detected before any network work.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required keys were absent or empty.
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<String>),
    /// A key was present but its value could not be used.
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Everything one run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    /// NewsAPI key, sent as the `X-Api-Key` request header.
    pub api_key: String,
    /// Free-text search query, passed to the API verbatim.
    pub query: String,
    /// The delivery channel for the finished report.
    pub delivery: DeliveryConfig,
}

/// Delivery settings for the variant chosen at startup.
#[derive(Debug, Clone)]
pub enum DeliveryConfig {
    /// Print to stdout and overwrite the fixed report file.
    File,
    /// Send the report as a plain-text email.
    Email(EmailConfig),
}

/// SMTP session and message settings for the email variant.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Sender address for the From header.
    pub from: String,
    /// Recipient address for the To header.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// SMTP server hostname.
    pub host: String,
    /// SMTP submission port.
    pub port: u16,
    /// SMTP AUTH username.
    pub username: String,
    /// SMTP AUTH password.
    pub password: String,
}

impl Config {
    /// Build the configuration for `mode` from the process environment.
    #[instrument(level = "debug")]
    pub fn from_env(mode: DeliveryMode) -> Result<Self, ConfigError> {
        Self::load(mode, |key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// `from_env` drives this with `std::env::var`; tests drive it with a
    /// map. Empty values are treated the same as absent ones.
    fn load(
        mode: DeliveryMode,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut missing: Vec<String> = Vec::new();
        let var = |key: &str| var(key).filter(|v| !v.is_empty());

        let api_key = require(&var, "NEWS_API_KEY", &mut missing);
        let query = var("SEARCH_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string());

        let delivery = match mode {
            DeliveryMode::File => DeliveryConfig::File,
            DeliveryMode::Email => {
                let from = require(&var, "EMAIL_FROM", &mut missing);
                let to = require(&var, "EMAIL_TO", &mut missing);
                let subject =
                    var("EMAIL_SUBJECT").unwrap_or_else(|| DEFAULT_SUBJECT.to_string());
                let host = require(&var, "SMTP_HOST", &mut missing);
                let username = require(&var, "SMTP_USERNAME", &mut missing);
                let password = require(&var, "SMTP_PASSWORD", &mut missing);
                let port = match var("SMTP_PORT") {
                    Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                        key: "SMTP_PORT".to_string(),
                        value: raw,
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };

                DeliveryConfig::Email(EmailConfig {
                    from,
                    to,
                    subject,
                    host,
                    port,
                    username,
                    password,
                })
            }
        };

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        debug!(query = %query, "Configuration loaded");
        Ok(Config {
            api_key,
            query,
            delivery,
        })
    }
}

/// Fetch a required key, recording its name when absent.
///
/// Returns an empty placeholder on a miss; the caller aborts before the
/// placeholder can be used once `missing` is non-empty.
fn require(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    missing: &mut Vec<String>,
) -> String {
    match var(key) {
        Some(value) => value,
        None => {
            missing.push(key.to_string());
            String::new()
        }
    }
}
