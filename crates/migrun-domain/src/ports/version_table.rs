//! Version Table Capability
//!
//! Describes the table in which the migration runner records applied
//! migrations. Every method has the conventional default, so a custom
//! implementation discovered in a candidate module only overrides what differs.

use std::sync::Arc;

use crate::constants::{
    VERSION_APPLIED_ON_COLUMN_NAME, VERSION_COLUMN_NAME, VERSION_DESCRIPTION_COLUMN_NAME,
    VERSION_TABLE_DEFAULT_SCHEMA, VERSION_TABLE_NAME, VERSION_UNIQUE_INDEX_NAME,
};
use crate::error::Result;

/// Layout of the version table
pub trait VersionTableMetaData: Send + Sync {
    /// Schema containing the version table
    fn schema_name(&self) -> &str {
        VERSION_TABLE_DEFAULT_SCHEMA
    }

    /// Name of the version table
    fn table_name(&self) -> &str {
        VERSION_TABLE_NAME
    }

    /// Column storing the migration version
    fn column_name(&self) -> &str {
        VERSION_COLUMN_NAME
    }

    /// Unique index over the version column
    fn unique_index_name(&self) -> &str {
        VERSION_UNIQUE_INDEX_NAME
    }

    /// Column storing when the migration was applied
    fn applied_on_column_name(&self) -> &str {
        VERSION_APPLIED_ON_COLUMN_NAME
    }

    /// Column storing the migration description
    fn description_column_name(&self) -> &str {
        VERSION_DESCRIPTION_COLUMN_NAME
    }

    /// Whether the runner created (and may drop) the schema
    fn owns_schema(&self) -> bool {
        true
    }

    /// Create the table with a primary key instead of a unique index
    fn create_with_primary_key(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for dyn VersionTableMetaData + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionTableMetaData")
            .field("schema_name", &self.schema_name())
            .field("table_name", &self.table_name())
            .field("column_name", &self.column_name())
            .finish_non_exhaustive()
    }
}

/// Port giving access to the version table layout in effect
///
/// `Ok(None)` means no custom layout is available and the caller proceeds
/// with the default; `Err` means one exists but could not be built.
pub trait VersionTableMetaDataAccessor: Send + Sync {
    /// The resolved version table layout, if any
    fn version_table_meta_data(&self) -> Result<Option<Arc<dyn VersionTableMetaData>>>;
}

/// Conventional version table layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultVersionTableMetaData {
    schema_name: String,
}

impl DefaultVersionTableMetaData {
    /// Layout in the connection's default schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout placed in `schema_name`
    pub fn with_schema(schema_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
        }
    }
}

impl VersionTableMetaData for DefaultVersionTableMetaData {
    fn schema_name(&self) -> &str {
        &self.schema_name
    }
}
