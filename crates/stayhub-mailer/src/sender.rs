//! Mail sender implementations.

use async_trait::async_trait;
use tracing::info;

use stayhub_core::config::mail::MailConfig;
use stayhub_core::result::AppResult;
use stayhub_core::traits::MailSender;

/// Sender that records deliveries in the application log.
///
/// Used when no real transport is configured; every accepted message is
/// visible in the log stream with its recipient and subject.
#[derive(Debug, Clone)]
pub struct LogMailer {
    config: MailConfig,
}

impl LogMailer {
    /// Create a new logging mail sender.
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl MailSender for LogMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()> {
        if !self.config.enabled {
            info!(recipient, subject, "Mail disabled, dropping message");
            return Ok(());
        }

        info!(
            from = %self.config.from_address,
            recipient,
            subject,
            body_len = body.len(),
            "Mail accepted for delivery"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_accepts_message() {
        let mailer = LogMailer::new(MailConfig::default());
        let result = mailer.send("guest@example.com", "subject", "body").await;
        assert!(result.is_ok());
    }
}
