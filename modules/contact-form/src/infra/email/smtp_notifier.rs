use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::instrument;

use crate::config::MailConfig;
use crate::domain::error::NotifyError;
use crate::domain::model::{ContactSubmission, SubmissionKind};
use crate::domain::ports::EnquiryNotifier;

use super::message::render;

/// SMTP adapter implementing [`EnquiryNotifier`] over a pooled async
/// transport. Recipient routing: support submissions go to `support_to`,
/// everything else to `enquiries_to`.
#[derive(Debug)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    enquiries_to: Mailbox,
    support_to: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport and parse the configured addresses.
    ///
    /// # Errors
    /// Fails when an address does not parse or the relay cannot be set up.
    pub fn new(cfg: &MailConfig) -> Result<Self, NotifyError> {
        let from = parse_mailbox("mail.from", &cfg.from)?;
        let enquiries_to = parse_mailbox("mail.enquiries_to", &cfg.enquiries_to)?;
        let support_to = parse_mailbox("mail.support_to", &cfg.support_to)?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_host)
            .map_err(|e| NotifyError::new(format!("smtp relay {}: {e}", cfg.smtp_host)))?
            .port(cfg.smtp_port);
        if !cfg.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                cfg.username.clone(),
                cfg.password.clone(),
            ));
        }

        Ok(Self {
            transport: builder.build(),
            from,
            enquiries_to,
            support_to,
        })
    }

    fn recipient(&self, kind: SubmissionKind) -> Mailbox {
        match kind {
            SubmissionKind::Support => self.support_to.clone(),
            SubmissionKind::Enquiry => self.enquiries_to.clone(),
        }
    }
}

#[async_trait]
impl EnquiryNotifier for SmtpNotifier {
    #[instrument(
        skip_all,
        fields(id = %submission.id, kind = submission.kind.as_str())
    )]
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let rendered = render(submission);

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.recipient(submission.kind))
            .subject(rendered.subject);
        // Let the operator reply straight to the visitor.
        if let Ok(reply_to) = submission.sender_email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let email = builder
            .multipart(MultiPart::alternative_plain_html(
                rendered.text,
                rendered.html,
            ))
            .map_err(|e| NotifyError::new(format!("building message: {e}")))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotifyError::new(e.to_string()))?;
        Ok(())
    }
}

fn parse_mailbox(key: &str, value: &str) -> Result<Mailbox, NotifyError> {
    value
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::new(format!("{key} {value:?}: {e}")))
}
