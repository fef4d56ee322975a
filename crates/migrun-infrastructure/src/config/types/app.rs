//! Application configuration root

use migrun_domain::value_objects::{TypeFilter, VersionTableConfig};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;

/// Root of the migrun configuration
///
/// ```toml
/// [type_filter]
/// namespace = "App.Migrations"
/// nested_namespaces = true
///
/// [version_table]
/// default_schema = "ops"
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace filter applied when scanning candidate modules
    pub type_filter: TypeFilter,

    /// Version table settings
    pub version_table: VersionTableConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
