pub mod error;
pub mod model;
pub mod ports;
pub mod service;


pub use error::{DomainError, NotifyError};
pub use model::{ContactSubmission, NewSubmission, SubmissionKind};
pub use ports::{EnquiryNotifier, SubmissionRepository};
pub use service::{ContactService, SubmitOutcome};
