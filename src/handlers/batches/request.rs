//! Batch request DTOs
//!
//! Wire payloads arrive wrapped in a top-level `request` envelope and use
//! camelCase keys. Calendar dates cross the wire as `yyyy-MM-dd` strings.
//! Fields the contract calls required are still `Option` here: their
//! absence must surface as a 400 from the validator, not as a
//! deserialization failure.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_BATCH_DESCRIPTION_LENGTH, MAX_BATCH_NAME_LENGTH};

/// Top-level `request` envelope wrapping every POST/PATCH payload
#[derive(Debug, Deserialize)]
pub struct RequestEnvelope<T> {
    pub request: T,
}

/// Create/update course batch request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseBatchRequest {
    /// Batch id, identifies the target on update
    pub id: Option<String>,

    pub course_id: Option<String>,

    #[validate(length(min = 1, max = MAX_BATCH_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_BATCH_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    /// Enrollment policy: open, invite-only
    pub enrollment_type: Option<String>,

    pub start_date: Option<NaiveDate>,

    /// When present, must be strictly after `start_date`
    pub end_date: Option<NaiveDate>,
}

/// Add users to batch request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddUsersRequest {
    /// Batch id from the body; the path parameter is authoritative
    pub batch_id: Option<String>,

    pub user_ids: Option<Vec<String>>,
}

/// Search batches request
///
/// Filter interpretation is delegated to the store; the payload is kept
/// as raw JSON here.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchBatchRequest {
    pub filters: Option<serde_json::Value>,
}
