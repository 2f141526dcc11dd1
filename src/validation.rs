//! Request validation for course batch operations
//!
//! [`BatchRequestValidator`] is the single gate between decoded request
//! payloads and the store. It is pure: no I/O, no shared mutable state,
//! safe under unlimited concurrent use. Every rejection maps to a 400
//! response through [`AppError::Validation`].

use chrono::NaiveDate;

use crate::constants::enrollment_types;
use crate::error::{AppError, AppResult};
use crate::handlers::batches::request::{AddUsersRequest, CourseBatchRequest};
use crate::models::{BatchUpdate, NewBatch};

/// Validates create/update/add-users requests for a course batch.
///
/// The known enrollment types are injected at construction and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct BatchRequestValidator {
    enrollment_types: Vec<String>,
}

impl BatchRequestValidator {
    /// Create a validator accepting the given enrollment types.
    pub fn new<I, S>(enrollment_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enrollment_types: enrollment_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a validator accepting the built-in enrollment types.
    pub fn with_defaults() -> Self {
        Self::new(enrollment_types::ALL.iter().copied())
    }

    /// Validate a create request and return its normalized form.
    ///
    /// `course_id` and `name` are required on create; `start_date` is
    /// always required. When `end_date` is present it must be strictly
    /// after `start_date` (dates are compared at day granularity).
    pub fn validate_create(&self, request: &CourseBatchRequest) -> AppResult<NewBatch> {
        let course_id = require_field(&request.course_id, "courseId")?;
        let name = require_field(&request.name, "name")?;
        let enrollment_type = require_field(&request.enrollment_type, "enrollmentType")?;
        self.check_enrollment_type(&enrollment_type)?;

        let start_date = request
            .start_date
            .ok_or_else(|| missing_field("startDate"))?;
        check_date_order(start_date, request.end_date)?;

        Ok(NewBatch {
            course_id,
            name,
            description: normalize(&request.description),
            enrollment_type,
            start_date,
            end_date: request.end_date,
        })
    }

    /// Validate an update request and return its normalized form.
    ///
    /// All fields are optional on update; the enum and date checks still
    /// apply to whatever is present.
    pub fn validate_update(&self, request: &CourseBatchRequest) -> AppResult<BatchUpdate> {
        if let Some(enrollment_type) = normalize(&request.enrollment_type) {
            self.check_enrollment_type(&enrollment_type)?;
        }

        if let Some(start_date) = request.start_date {
            check_date_order(start_date, request.end_date)?;
        }

        Ok(BatchUpdate {
            course_id: normalize(&request.course_id),
            name: normalize(&request.name),
            description: normalize(&request.description),
            enrollment_type: normalize(&request.enrollment_type),
            start_date: request.start_date,
            end_date: request.end_date,
        })
    }

    /// Validate an add-users request and return the user id list.
    ///
    /// `user_ids` must be present and non-empty. An empty list is rejected
    /// the same as a missing one: adding nobody to a batch is taken as a
    /// malformed request rather than a no-op.
    pub fn validate_add_users(&self, request: &AddUsersRequest) -> AppResult<Vec<String>> {
        let user_ids = request
            .user_ids
            .as_ref()
            .ok_or_else(|| missing_field("userIds"))?;

        if user_ids.is_empty() {
            return Err(AppError::Validation(
                "userIds must not be empty".to_string(),
            ));
        }

        Ok(user_ids.clone())
    }

    fn check_enrollment_type(&self, value: &str) -> AppResult<()> {
        if self.enrollment_types.iter().any(|t| t == value) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Unknown enrollmentType: {value}"
            )))
        }
    }
}

/// Require a string field to be present and non-blank, returning it trimmed.
fn require_field(value: &Option<String>, field: &str) -> AppResult<String> {
    normalize(value).ok_or_else(|| missing_field(field))
}

/// Trim a string field, treating blank values as absent.
fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn missing_field(field: &str) -> AppError {
    AppError::Validation(format!("{field} is required"))
}

/// Enforce `end_date > start_date` when an end date is present. Equal
/// dates are invalid.
fn check_date_order(start_date: NaiveDate, end_date: Option<NaiveDate>) -> AppResult<()> {
    match end_date {
        Some(end) if end <= start_date => Err(AppError::Validation(
            "endDate must be after startDate".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    fn create_request(
        enrollment_type: &str,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> CourseBatchRequest {
        CourseBatchRequest {
            id: None,
            course_id: Some("courseId".to_string()),
            name: Some("courseName".to_string()),
            description: None,
            enrollment_type: Some(enrollment_type.to_string()),
            start_date: Some(start_date),
            end_date,
        }
    }

    #[test]
    fn test_create_accepts_invite_only_with_future_end_date() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(
            enrollment_types::INVITE_ONLY,
            today(),
            Some(today() + Days::new(2)),
        );

        let accepted = validator.validate_create(&request).unwrap();
        assert_eq!(accepted.enrollment_type, "invite-only");
        assert_eq!(accepted.course_id, "courseId");
    }

    #[test]
    fn test_create_accepts_missing_end_date() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(enrollment_types::INVITE_ONLY, today(), None);
        assert!(validator.validate_create(&request).is_ok());
    }

    #[test]
    fn test_create_rejects_invalid_enrollment_type() {
        let validator = BatchRequestValidator::with_defaults();
        // Dates are valid; the unknown enum alone must reject
        let request = create_request("invalid", today(), Some(today() + Days::new(2)));
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_create_rejects_equal_start_and_end_date() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(enrollment_types::INVITE_ONLY, today(), Some(today()));
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_create_rejects_end_date_before_start_date() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(
            enrollment_types::INVITE_ONLY,
            today(),
            Some(today() - Days::new(2)),
        );
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_create_rejects_missing_course_id_and_name() {
        let validator = BatchRequestValidator::with_defaults();

        let mut request = create_request(enrollment_types::OPEN, today(), None);
        request.course_id = None;
        assert!(validator.validate_create(&request).is_err());

        let mut request = create_request(enrollment_types::OPEN, today(), None);
        request.name = Some("   ".to_string());
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_create_rejects_missing_start_date() {
        let validator = BatchRequestValidator::with_defaults();
        let mut request = create_request(enrollment_types::OPEN, today(), None);
        request.start_date = None;
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_create_normalizes_whitespace() {
        let validator = BatchRequestValidator::with_defaults();
        let mut request = create_request(enrollment_types::OPEN, today(), None);
        request.name = Some("  Batch One  ".to_string());

        let accepted = validator.validate_create(&request).unwrap();
        assert_eq!(accepted.name, "Batch One");
    }

    #[test]
    fn test_update_does_not_require_course_id_or_name() {
        let validator = BatchRequestValidator::with_defaults();
        let mut request = create_request(enrollment_types::INVITE_ONLY, today(), None);
        request.course_id = None;
        request.name = None;
        assert!(validator.validate_update(&request).is_ok());
    }

    #[test]
    fn test_update_rejects_invalid_enrollment_type() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request("invalid", today(), Some(today() + Days::new(2)));
        assert!(validator.validate_update(&request).is_err());
    }

    #[test]
    fn test_update_rejects_end_date_before_start_date() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(
            enrollment_types::INVITE_ONLY,
            today(),
            Some(today() - Days::new(2)),
        );
        assert!(validator.validate_update(&request).is_err());
    }

    #[test]
    fn test_add_users_accepts_non_empty_list() {
        let validator = BatchRequestValidator::with_defaults();
        let request = AddUsersRequest {
            batch_id: Some("batchID".to_string()),
            user_ids: Some(vec!["userIds".to_string()]),
        };

        let accepted = validator.validate_add_users(&request).unwrap();
        assert_eq!(accepted, vec!["userIds".to_string()]);
    }

    #[test]
    fn test_add_users_rejects_null_user_ids() {
        let validator = BatchRequestValidator::with_defaults();
        let request = AddUsersRequest {
            batch_id: Some("batchID".to_string()),
            user_ids: None,
        };
        assert!(validator.validate_add_users(&request).is_err());
    }

    #[test]
    fn test_add_users_rejects_empty_user_ids() {
        let validator = BatchRequestValidator::with_defaults();
        let request = AddUsersRequest {
            batch_id: Some("batchID".to_string()),
            user_ids: Some(vec![]),
        };
        assert!(validator.validate_add_users(&request).is_err());
    }

    #[test]
    fn test_custom_enrollment_types_are_honored() {
        let validator = BatchRequestValidator::new(["cohort"]);
        let request = create_request("cohort", today(), None);
        assert!(validator.validate_create(&request).is_ok());

        // The defaults are not implicitly included
        let request = create_request(enrollment_types::OPEN, today(), None);
        assert!(validator.validate_create(&request).is_err());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let validator = BatchRequestValidator::with_defaults();
        let request = create_request(
            enrollment_types::INVITE_ONLY,
            today(),
            Some(today() + Days::new(2)),
        );

        let first = validator.validate_create(&request).unwrap();
        let second = validator.validate_create(&request).unwrap();
        assert_eq!(first, second);

        let request = create_request("invalid", today(), None);
        assert!(validator.validate_create(&request).is_err());
        assert!(validator.validate_create(&request).is_err());
    }
}
