use serde::{Deserialize, Serialize};

use crate::domain::model::NewSubmission;

/// Wire payload for `POST /api/contact`.
///
/// Every field is optional at the serde level so that presence rules are
/// enforced by domain validation (a 400 with the standard envelope) rather
/// than by deserialization. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitContactRequest {
    #[serde(default)]
    pub form_type: Option<String>,
    #[serde(default)]
    pub from_name: Option<String>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<SubmitContactRequest> for NewSubmission {
    fn from(req: SubmitContactRequest) -> Self {
        Self {
            form_type: req.form_type,
            sender_name: req.from_name,
            sender_email: req.from_email,
            project_type: req.project_type,
            subject: req.subject,
            budget: req.budget,
            message: req.message,
        }
    }
}

/// Success/failure envelope returned by the contact API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEnvelope {
    pub success: bool,
    pub message: String,
}

impl ContactEnvelope {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
