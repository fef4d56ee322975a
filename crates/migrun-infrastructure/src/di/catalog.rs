//! dill Catalog - IoC Container Configuration
//!
//! Builds the container handed to the capability resolver. Injected
//! constructors of discovered types pull these values out of it.
//!
//! ## Type Bindings
//!
//! | Type | Source |
//! |------|--------|
//! | `AppConfig` | loaded configuration |
//! | `TypeFilter` | `[type_filter]` |
//! | `VersionTableConfig` | `[version_table]` |
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = build_catalog(&config);
//! let settings = catalog.get_one::<VersionTableConfig>()?;
//! ```

use crate::config::AppConfig;
use dill::{Catalog, CatalogBuilder};
use tracing::debug;

/// Build the dill Catalog with the configuration values
pub fn build_catalog(config: &AppConfig) -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder
        .add_value(config.clone())
        .add_value(config.type_filter.clone())
        .add_value(config.version_table.clone());

    debug!("Built dill Catalog with configuration values");

    builder.build()
}
