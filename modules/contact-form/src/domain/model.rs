use time::OffsetDateTime;
use uuid::Uuid;

/// Stored default when the visitor leaves the project type empty.
pub const DEFAULT_PROJECT_TYPE: &str = "Support Request";
/// Stored default when the visitor leaves the budget empty.
pub const DEFAULT_BUDGET: &str = "N/A";
/// Stored default when the visitor leaves the subject empty.
pub const DEFAULT_SUBJECT: &str = "No Subject";

/// Which form the visitor used. Selects the notification recipient and
/// subject line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Enquiry,
    Support,
}

impl SubmissionKind {
    /// Anything other than an explicit `support` marker is an enquiry.
    pub fn from_form_type(raw: Option<&str>) -> Self {
        match raw {
            Some("support") => Self::Support,
            _ => Self::Enquiry,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enquiry => "enquiry",
            Self::Support => "support",
        }
    }
}

/// A contact submission as stored. Created once, never updated or
/// deleted by the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_email: String,
    pub project_type: String,
    pub budget: String,
    pub message: String,
    pub kind: SubmissionKind,
    pub subject: String,
    pub created_at: OffsetDateTime,
}

/// Raw form payload as received from the site, before validation and
/// sentinel defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    pub form_type: Option<String>,
    pub sender_name: Option<String>,
    pub sender_email: Option<String>,
    pub project_type: Option<String>,
    pub subject: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
}
