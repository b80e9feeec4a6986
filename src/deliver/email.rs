//! Email delivery over SMTP.
//!
//! Sends the report as the plain-text body of a single message. The
//! transport requires STARTTLS before authenticating, and runs without a
//! connection pool: every send opens one session and closes it again,
//! whether the send succeeded or not.

use super::{Deliver, DeliveryError};
use crate::config::EmailConfig;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{info, instrument};

/// Upper bound on the SMTP connection attempt.
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends the report as a plain-text email.
#[derive(Debug)]
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the UTF-8 plain-text message.
    fn build_message(&self, report: &str) -> Result<Message, DeliveryError> {
        let message = Message::builder()
            .from(self.config.from.parse()?)
            .to(self.config.to.parse()?)
            .subject(self.config.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(report.to_string())?;
        Ok(message)
    }
}

impl Deliver for EmailDelivery {
    #[instrument(level = "info", skip_all, fields(host = %self.config.host, port = self.config.port))]
    async fn deliver(&self, report: &str) -> Result<(), DeliveryError> {
        let message = self.build_message(report)?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)?
            .port(self.config.port)
            .credentials(Credentials::new(
                self.config.username.clone(),
                self.config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        mailer.send(message).await?;
        info!(to = %self.config.to, "Sent report email");
        Ok(())
    }
}
