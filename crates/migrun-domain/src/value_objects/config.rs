//! Configuration value objects shared with plugins
//!
//! Values registered in the IoC catalog so that injected constructors of
//! discovered types can depend on them without reaching into infrastructure.

use serde::{Deserialize, Serialize};

use crate::constants::VERSION_TABLE_DEFAULT_SCHEMA;

/// Version table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionTableConfig {
    /// Schema used for the version table when the discovered layout does not
    /// name one
    pub default_schema: String,
}

impl Default for VersionTableConfig {
    fn default() -> Self {
        Self {
            default_schema: VERSION_TABLE_DEFAULT_SCHEMA.to_string(),
        }
    }
}

impl VersionTableConfig {
    /// Settings using `schema` as the default schema
    pub fn with_default_schema(schema: impl Into<String>) -> Self {
        Self {
            default_schema: schema.into(),
        }
    }
}
