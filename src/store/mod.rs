//! Batch persistence
//!
//! Persistence sits behind the [`BatchStore`] trait so the HTTP layer does
//! not care where batches live. The in-memory implementation backs the
//! service and its tests; a database-backed store would implement the same
//! trait.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::models::{BatchUpdate, CourseBatch, NewBatch};

/// Storage operations for course batches
#[async_trait]
pub trait BatchStore: Send + Sync {
    /// Persist a new batch and return it with its generated id.
    async fn create(&self, new: NewBatch) -> AppResult<CourseBatch>;

    /// Apply an update to an existing batch.
    async fn update(&self, id: &str, update: BatchUpdate) -> AppResult<CourseBatch>;

    /// Fetch a batch by id.
    async fn get(&self, id: &str) -> AppResult<Option<CourseBatch>>;

    /// Search batches by a delegated filter value.
    async fn search(&self, filters: &Value) -> AppResult<Vec<CourseBatch>>;

    /// Enroll users into a batch, skipping already-enrolled ids.
    /// Returns the number of users actually added.
    async fn add_users(&self, id: &str, user_ids: &[String]) -> AppResult<usize>;
}

/// In-memory batch store
#[derive(Default)]
pub struct InMemoryBatchStore {
    batches: RwLock<HashMap<String, CourseBatch>>,
}

impl InMemoryBatchStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BatchStore for InMemoryBatchStore {
    async fn create(&self, new: NewBatch) -> AppResult<CourseBatch> {
        let batch = CourseBatch::from_new(new);
        let mut batches = self.batches.write().await;
        batches.insert(batch.id.clone(), batch.clone());
        tracing::debug!(batch_id = %batch.id, "created batch");
        Ok(batch)
    }

    async fn update(&self, id: &str, update: BatchUpdate) -> AppResult<CourseBatch> {
        let mut batches = self.batches.write().await;
        let batch = batches
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Batch not found: {id}")))?;

        // Apply to a copy first so a rejected update leaves the stored
        // batch untouched.
        let mut updated = batch.clone();
        if let Some(course_id) = update.course_id {
            updated.course_id = course_id;
        }
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(description) = update.description {
            updated.description = Some(description);
        }
        if let Some(enrollment_type) = update.enrollment_type {
            updated.enrollment_type = enrollment_type;
        }
        if let Some(start_date) = update.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            updated.end_date = Some(end_date);
        }

        // The stored batch must keep its enrollment window ordered even
        // when only one side of it changed in this request.
        if let Some(end) = updated.end_date {
            if end <= updated.start_date {
                return Err(AppError::Validation(
                    "endDate must be after startDate".to_string(),
                ));
            }
        }

        updated.updated_at = chrono::Utc::now();
        *batch = updated.clone();
        Ok(updated)
    }

    async fn get(&self, id: &str) -> AppResult<Option<CourseBatch>> {
        let batches = self.batches.read().await;
        Ok(batches.get(id).cloned())
    }

    async fn search(&self, filters: &Value) -> AppResult<Vec<CourseBatch>> {
        let batches = self.batches.read().await;
        let mut found: Vec<CourseBatch> = batches
            .values()
            .filter(|batch| matches_filters(batch, filters))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(found)
    }

    async fn add_users(&self, id: &str, user_ids: &[String]) -> AppResult<usize> {
        let mut batches = self.batches.write().await;
        let batch = batches
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Batch not found: {id}")))?;

        let mut added = 0;
        for user_id in user_ids {
            if !batch.enrolled_users.contains(user_id) {
                batch.enrolled_users.push(user_id.clone());
                added += 1;
            }
        }

        batch.updated_at = chrono::Utc::now();
        tracing::debug!(batch_id = %id, added, "added users to batch");
        Ok(added)
    }
}

/// Match a batch against a delegated filter value.
///
/// A bare string matches on batch id or course id. An object matches on
/// its known keys; unknown keys are ignored rather than rejected, since
/// filter interpretation is owned by the search backend.
fn matches_filters(batch: &CourseBatch, filters: &Value) -> bool {
    match filters {
        Value::String(s) => batch.id == *s || batch.course_id == *s,
        Value::Object(map) => map.iter().all(|(key, value)| {
            match (key.as_str(), value.as_str()) {
                ("batchId", Some(s)) => batch.id == s,
                ("courseId", Some(s)) => batch.course_id == s,
                ("name", Some(s)) => batch.name == s,
                ("enrollmentType", Some(s)) => batch.enrollment_type == s,
                _ => true,
            }
        }),
        _ => true,
    }
}
