use thiserror::Error;

/// Domain-level failures for contact submissions.
///
/// `Validation` surfaces to the caller as a 400 with its message verbatim;
/// `Database` maps to a 500 with a generic envelope and the detail logged.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    #[error("database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Failure to deliver the operator notification. Never fails a request;
/// the service logs it and softens the response message.
#[derive(Debug, Error)]
#[error("notification delivery failed: {message}")]
pub struct NotifyError {
    message: String,
}

impl NotifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_field_and_message() {
        let err = DomainError::validation("from_email", "looks wrong");
        assert_eq!(
            err.to_string(),
            "validation failed for from_email: looks wrong"
        );
    }

    #[test]
    fn notify_error_display() {
        let err = NotifyError::new("smtp timeout");
        assert_eq!(err.to_string(), "notification delivery failed: smtp timeout");
    }
}
