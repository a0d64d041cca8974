use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::instrument;

use crate::domain::error::DomainError;
use crate::domain::model::ContactSubmission;
use crate::domain::ports::SubmissionRepository;

use super::entity::Entity as SubmissionEntity;
use super::mapper;

/// SeaORM-backed submission store.
pub struct SeaOrmSubmissionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubmissionRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubmissionRepository for SeaOrmSubmissionRepository {
    #[instrument(skip(self, submission), fields(id = %submission.id))]
    async fn insert(&self, submission: &ContactSubmission) -> Result<(), DomainError> {
        SubmissionEntity::insert(mapper::to_active_model(submission))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        Ok(())
    }
}
