use async_trait::async_trait;

use super::error::{DomainError, NotifyError};
use super::model::ContactSubmission;

/// Persistence port for contact submissions. Append-only: the system
/// never updates or deletes records.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), DomainError>;
}

/// Outbound notification port for accepted submissions.
///
/// Implementations must not retry on the request path; a failure is
/// reported once and the caller decides what to do with it.
#[async_trait]
pub trait EnquiryNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}
