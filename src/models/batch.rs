//! Course batch domain model

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A scheduled offering of a course with a defined enrollment window
/// and an enrollment policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseBatch {
    pub id: String,
    pub course_id: String,
    pub name: String,
    pub description: Option<String>,
    /// One of the known enrollment types (see `constants::enrollment_types`)
    pub enrollment_type: String,
    pub start_date: NaiveDate,
    /// When present, strictly after `start_date`
    pub end_date: Option<NaiveDate>,
    /// Users enrolled into this batch, in enrollment order
    pub enrolled_users: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CourseBatch {
    /// Build a batch from an accepted create request.
    pub fn from_new(new: NewBatch) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            course_id: new.course_id,
            name: new.name,
            description: new.description,
            enrollment_type: new.enrollment_type,
            start_date: new.start_date,
            end_date: new.end_date,
            enrolled_users: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Normalized, accepted form of a create request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBatch {
    pub course_id: String,
    pub name: String,
    pub description: Option<String>,
    pub enrollment_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Normalized, accepted form of an update request. `None` fields are
/// left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchUpdate {
    pub course_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enrollment_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
