use sea_orm::ActiveValue;

use crate::domain::model::{ContactSubmission, SubmissionKind};

use super::entity;

pub fn to_active_model(submission: &ContactSubmission) -> entity::ActiveModel {
    entity::ActiveModel {
        id: ActiveValue::Set(submission.id),
        sender_name: ActiveValue::Set(submission.sender_name.clone()),
        sender_email: ActiveValue::Set(submission.sender_email.clone()),
        project_type: ActiveValue::Set(submission.project_type.clone()),
        budget: ActiveValue::Set(submission.budget.clone()),
        message: ActiveValue::Set(submission.message.clone()),
        kind: ActiveValue::Set(submission.kind.as_str().to_owned()),
        subject: ActiveValue::Set(submission.subject.clone()),
        created_at: ActiveValue::Set(submission.created_at),
    }
}

pub fn from_model(model: entity::Model) -> ContactSubmission {
    ContactSubmission {
        id: model.id,
        sender_name: model.sender_name,
        sender_email: model.sender_email,
        project_type: model.project_type,
        budget: model.budget,
        message: model.message,
        kind: SubmissionKind::from_form_type(Some(&model.kind)),
        subject: model.subject,
        created_at: model.created_at,
    }
}
