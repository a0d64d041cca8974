pub mod message;
pub mod smtp_notifier;

pub use smtp_notifier::SmtpNotifier;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::error::NotifyError;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::EnquiryNotifier;

/// Notifier used when mail delivery is disabled: accepts everything and
/// delivers nothing.
pub struct NoopNotifier;

#[async_trait]
impl EnquiryNotifier for NoopNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        debug!(id = %submission.id, "mail delivery disabled, skipping notification");
        Ok(())
    }
}
