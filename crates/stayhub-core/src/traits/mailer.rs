//! Outbound mail collaborator trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Sends a single message to a recipient address.
///
/// The booking services treat delivery as fire-and-forget: a failed send is
/// logged by the caller and never rolls back a committed reservation state
/// change. Implementations live in `stayhub-mailer`.
#[async_trait]
pub trait MailSender: Send + Sync + 'static {
    /// Deliver `body` with the given `subject` to `recipient`.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> AppResult<()>;
}
