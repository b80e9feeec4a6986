//! # Aamuraportti
//!
//! A single-shot news notifier: search NewsAPI for articles matching a saved
//! query, render them into a Finnish morning report, and deliver the report
//! to a local file or an inbox. Intended to run from a scheduler (cron, a CI
//! job); each invocation is independent and keeps no state between runs.
//!
//! ## Usage
//!
//! ```sh
//! NEWS_API_KEY=... aamuraportti
//! NEWS_API_KEY=... SMTP_HOST=... aamuraportti --deliver email
//! ```
//!
//! ## Architecture
//!
//! One strictly sequential pipeline:
//! 1. **Configuration**: Build a [`config::Config`] from the environment,
//!    validating every required key before any network work
//! 2. **Fetching**: One GET against the NewsAPI search endpoint
//! 3. **Formatting**: Render the article list into the report text
//! 4. **Delivery**: Hand the report to the configured channel (file or email)
//!
//! Any failure aborts the run with a non-zero exit status; the scheduler is
//! expected to invoke the binary again on its next tick.

use chrono::Local;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod config;
mod deliver;
mod error;
mod models;
mod newsapi;
mod report;

use cli::Cli;
use config::{Config, DeliveryConfig};
use deliver::file::FileDelivery;
use deliver::{email::EmailDelivery, Deliver};
use error::ReportError;
use newsapi::NewsApiClient;

#[tokio::main]
async fn main() -> Result<(), ReportError> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("aamuraportti starting up");

    let args = Cli::parse();
    debug!(?args.deliver, "Parsed CLI arguments");

    // Configuration is validated in full before any network I/O so a broken
    // deployment fails fast with every missing key named at once.
    let config = match Config::from_env(args.deliver) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration is incomplete");
            return Err(e.into());
        }
    };
    info!(query = %config.query, mode = ?args.deliver, "Configuration loaded");

    let client = NewsApiClient::new(&config.api_key)?;
    let articles = match client.search(&config.query).await {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, "News fetch failed");
            return Err(e.into());
        }
    };
    info!(count = articles.len(), "Fetched articles");

    let report = report::format_report(&articles, &config.query, &Local::now());

    let delivered = match &config.delivery {
        DeliveryConfig::File => FileDelivery::default().deliver(&report).await,
        DeliveryConfig::Email(email) => {
            EmailDelivery::new(email.clone()).deliver(&report).await
        }
    };
    if let Err(e) = delivered {
        error!(error = %e, "Report delivery failed");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
