//! Contact form module.
//!
//! Owns everything about a contact submission: the domain model and
//! service, the `POST /api/contact` REST surface, SeaORM persistence,
//! and the SMTP operator notification.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::{ContactFormConfig, MailConfig};
pub use domain::service::ContactService;
