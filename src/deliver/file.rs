//! File and stdout delivery.
//!
//! Prints the report between fixed banner lines, then writes it verbatim to
//! the report file, replacing whatever a previous run left there. The file
//! is the artifact a scheduler job uploads or archives; stdout is for the
//! job log.

use super::{Deliver, DeliveryError};
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument};

/// Fixed output filename, written into the working directory.
pub const REPORT_FILENAME: &str = "aamuraportti.txt";

/// Writes the report to stdout and a local file.
#[derive(Debug)]
pub struct FileDelivery {
    path: PathBuf,
}

impl FileDelivery {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileDelivery {
    fn default() -> Self {
        Self::new(REPORT_FILENAME)
    }
}

impl Deliver for FileDelivery {
    #[instrument(level = "info", skip_all, fields(path = %self.path.display()))]
    async fn deliver(&self, report: &str) -> Result<(), DeliveryError> {
        println!("\n===== AAMURAPORTTI =====\n");
        println!("{report}");
        println!("=========================\n");

        fs::write(&self.path, report)
            .await
            .map_err(|source| DeliveryError::Write {
                path: self.path.display().to_string(),
                source,
            })?;

        info!(bytes = report.len(), "Wrote report file");
        Ok(())
    }
}
