use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::ContactFormConfig;

use super::error::DomainError;
use super::model::{
    ContactSubmission, DEFAULT_BUDGET, DEFAULT_PROJECT_TYPE, DEFAULT_SUBJECT, NewSubmission,
    SubmissionKind,
};
use super::ports::{EnquiryNotifier, SubmissionRepository};

/// Envelope message for a payload missing any required field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required.";

/// Result of an accepted submission. `mail_delivered` is false when the
/// record was stored but the operator notification failed.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub submission: ContactSubmission,
    pub mail_delivered: bool,
}

/// Contact submission service: validate, persist, notify best-effort.
pub struct ContactService {
    repo: Arc<dyn SubmissionRepository>,
    notifier: Arc<dyn EnquiryNotifier>,
    config: ContactFormConfig,
}

impl ContactService {
    pub fn new(
        repo: Arc<dyn SubmissionRepository>,
        notifier: Arc<dyn EnquiryNotifier>,
        config: ContactFormConfig,
    ) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    /// Accept a form submission.
    ///
    /// The notification step is best effort: its failure is logged and
    /// reflected only in [`SubmitOutcome::mail_delivered`]. The operation
    /// fails only when validation or persistence fails.
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: NewSubmission) -> Result<SubmitOutcome, DomainError> {
        let submission = self.validate_and_normalize(input)?;

        self.repo.insert(&submission).await?;
        info!(
            id = %submission.id,
            kind = submission.kind.as_str(),
            "contact submission stored"
        );

        let mail_delivered = match self.notifier.notify(&submission).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    id = %submission.id,
                    error = %e,
                    "notification delivery failed (continuing)"
                );
                false
            }
        };

        Ok(SubmitOutcome {
            submission,
            mail_delivered,
        })
    }

    fn validate_and_normalize(
        &self,
        input: NewSubmission,
    ) -> Result<ContactSubmission, DomainError> {
        let sender_name = required_trimmed(input.sender_name.as_deref());
        let sender_email = required_trimmed(input.sender_email.as_deref());
        let message = required_trimmed(input.message.as_deref());

        let (Some(sender_name), Some(sender_email), Some(message)) =
            (sender_name, sender_email, message)
        else {
            return Err(DomainError::validation("payload", REQUIRED_FIELDS_MESSAGE));
        };

        if !plausible_email(&sender_email) {
            return Err(DomainError::validation(
                "from_email",
                "A valid email address is required.",
            ));
        }

        check_len("from_name", &sender_name, self.config.max_name_len)?;
        check_len("from_email", &sender_email, self.config.max_email_len)?;
        check_len("message", &message, self.config.max_message_len)?;

        let kind = SubmissionKind::from_form_type(input.form_type.as_deref());
        let project_type = or_sentinel(input.project_type, DEFAULT_PROJECT_TYPE);
        let budget = or_sentinel(input.budget, DEFAULT_BUDGET);
        let subject = or_sentinel(input.subject, DEFAULT_SUBJECT);

        check_len("project_type", &project_type, self.config.max_subject_len)?;
        check_len("budget", &budget, self.config.max_subject_len)?;
        check_len("subject", &subject, self.config.max_subject_len)?;

        Ok(ContactSubmission {
            id: Uuid::now_v7(),
            sender_name,
            sender_email,
            project_type,
            budget,
            message,
            kind,
            subject,
            created_at: OffsetDateTime::now_utc(),
        })
    }
}

fn required_trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

fn or_sentinel(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                sentinel.to_owned()
            } else {
                trimmed.to_owned()
            }
        }
        None => sentinel.to_owned(),
    }
}

fn plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.len() > max {
        return Err(DomainError::validation(
            field,
            format!("{field} exceeds maximum length of {max}"),
        ));
    }
    Ok(())
}
