//! Report delivery channels.
//!
//! The fetch and format steps are identical for every deployment; only the
//! last step differs. That step sits behind the [`Deliver`] trait with two
//! implementations:
//!
//! - [`file::FileDelivery`]: print to stdout and overwrite a local file
//! - [`email::EmailDelivery`]: send one plain-text email over SMTP
//!
//! The variant is chosen once at startup. A failed delivery is fatal; there
//! is no fallback from one channel to the other.

pub mod email;
pub mod file;

use thiserror::Error;

/// A failed report delivery. Always fatal for the run.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Writing the report file failed.
    #[error("failed to write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A configured mail address did not parse.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    /// Assembling the mail message failed.
    #[error("failed to build mail message: {0}")]
    Message(#[from] lettre::error::Error),
    /// Any SMTP stage failed: connect, STARTTLS, AUTH, or send.
    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// A channel that can carry one finished report.
///
/// Implementors receive the report verbatim and must either place it where
/// the deployment expects it or fail loudly.
pub trait Deliver {
    async fn deliver(&self, report: &str) -> Result<(), DeliveryError>;
}
