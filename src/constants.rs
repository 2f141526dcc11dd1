//! Application-wide constants
//!
//! Constant values used throughout the application, grouped by purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// ENROLLMENT TYPES
// =============================================================================

/// Enrollment policy identifiers
///
/// The policy governing how users join a batch. This is read-only
/// process-wide configuration: the set is handed to the request validator
/// at startup and never mutated afterwards.
pub mod enrollment_types {
    /// Anyone may self-enroll while the batch is open
    pub const OPEN: &str = "open";
    /// Users join only when added by a batch mentor
    pub const INVITE_ONLY: &str = "invite-only";

    /// All known enrollment types
    pub const ALL: &[&str] = &[OPEN, INVITE_ONLY];
}

// =============================================================================
// API PATHS
// =============================================================================

/// Base path for batch routes (API version v1)
pub const BATCH_BASE_PATH: &str = "/v1/course/batch";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum batch name length
pub const MAX_BATCH_NAME_LENGTH: u64 = 256;

/// Maximum batch description length
pub const MAX_BATCH_DESCRIPTION_LENGTH: u64 = 4096;

/// Wire format for calendar dates (`yyyy-MM-dd`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
