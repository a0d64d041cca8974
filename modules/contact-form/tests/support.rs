#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for contact-form integration tests.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection, EntityTrait};
use sea_orm_migration::MigratorTrait;

use contact_form::config::ContactFormConfig;
use contact_form::domain::error::NotifyError;
use contact_form::domain::model::ContactSubmission;
use contact_form::domain::ports::EnquiryNotifier;
use contact_form::domain::service::ContactService;
use contact_form::infra::storage::{Migrator, SeaOrmSubmissionRepository, entity, mapper};

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Notifier that records every delivery; can be built failing to
/// exercise the best-effort path.
pub struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<ContactSubmission>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            sent: Mutex::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        })
    }

    #[must_use]
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnquiryNotifier for RecordingNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::new("smtp unavailable"));
        }
        self.sent.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// Service wired to the given database and notifier with default limits.
pub fn build_service(
    db: &DatabaseConnection,
    notifier: Arc<RecordingNotifier>,
) -> Arc<ContactService> {
    Arc::new(ContactService::new(
        Arc::new(SeaOrmSubmissionRepository::new(db.clone())),
        notifier,
        ContactFormConfig::default(),
    ))
}

/// All stored submissions, mapped back to the domain model.
///
/// # Panics
/// Panics if the query fails.
pub async fn all_submissions(db: &DatabaseConnection) -> Vec<ContactSubmission> {
    entity::Entity::find()
        .all(db)
        .await
        .expect("Failed to query submissions")
        .into_iter()
        .map(mapper::from_model)
        .collect()
}
