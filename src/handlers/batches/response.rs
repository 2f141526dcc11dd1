//! Batch response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::models::CourseBatch;

/// Single batch response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub id: String,
    pub course_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enrollment_type: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub enrolled_users: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CourseBatch> for BatchResponse {
    fn from(batch: CourseBatch) -> Self {
        Self {
            id: batch.id,
            course_id: batch.course_id,
            name: batch.name,
            description: batch.description,
            enrollment_type: batch.enrollment_type,
            start_date: batch.start_date,
            end_date: batch.end_date,
            enrolled_users: batch.enrolled_users,
            created_at: batch.created_at,
            updated_at: batch.updated_at,
        }
    }
}

/// Search result response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBatchResponse {
    pub count: usize,
    pub batches: Vec<BatchResponse>,
}

/// Add-users result response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUsersResponse {
    pub batch_id: String,
    /// Users newly enrolled by this call; already-enrolled ids are skipped
    pub added: usize,
    pub enrolled_users: Vec<String>,
}
