//! Domain layer constants
//!
//! Conventional names of the version table the migration runner maintains.
//! Infrastructure-specific constants remain in `migrun_infrastructure::constants`.

// ============================================================================
// VERSION TABLE CONSTANTS
// ============================================================================

/// Schema used when none is configured (the connection's default schema)
pub const VERSION_TABLE_DEFAULT_SCHEMA: &str = "";

/// Name of the table recording applied migrations
pub const VERSION_TABLE_NAME: &str = "VersionInfo";

/// Column holding the migration version number
pub const VERSION_COLUMN_NAME: &str = "Version";

/// Unique index over the version column
pub const VERSION_UNIQUE_INDEX_NAME: &str = "UC_Version";

/// Column holding the timestamp a migration was applied at
pub const VERSION_APPLIED_ON_COLUMN_NAME: &str = "AppliedOn";

/// Column holding the migration description
pub const VERSION_DESCRIPTION_COLUMN_NAME: &str = "Description";

// ============================================================================
// NAMESPACE CONSTANTS
// ============================================================================

/// Separator between namespace segments
pub const NAMESPACE_SEPARATOR: char = '.';
