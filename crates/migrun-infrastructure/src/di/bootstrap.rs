//! DI Container Bootstrap
//!
//! Composition root: builds the catalog from configuration, discovers the
//! linked candidate modules and wires both into the version table accessor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let context = init_app(config);
//!
//! // Custom layout from a plugin, or the conventional one
//! let version_table = context.version_table()?;
//! ```

use std::sync::Arc;

use crate::config::AppConfig;
use crate::di::catalog::build_catalog;
use crate::di::sources::LinkedModuleSource;
use dill::Catalog;
use migrun_application::ports::candidates::CandidateSource;
use migrun_application::use_cases::{ScannedVersionTableAccessor, version_table_or_default};
use migrun_domain::error::Result;
use migrun_domain::ports::{VersionTableMetaData, VersionTableMetaDataAccessor};
use tracing::info;

/// Application context holding the wired services
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    catalog: Arc<Catalog>,
    version_table_accessor: Arc<ScannedVersionTableAccessor>,
}

/// Wire the application from configuration
///
/// Nothing is scanned here; the candidate modules are only searched on the
/// first version table access.
pub fn init_app(config: AppConfig) -> AppContext {
    let source: Arc<dyn CandidateSource> = Arc::new(LinkedModuleSource::discover());
    init_app_with_source(config, Some(source))
}

/// Version table accessor over the linked modules, wired from configuration
///
/// Standalone form of the accessor held by [`AppContext`], for callers that
/// need the port without the rest of the context.
pub fn bootstrap_version_table_accessor(config: &AppConfig) -> ScannedVersionTableAccessor {
    let source: Arc<dyn CandidateSource> = Arc::new(LinkedModuleSource::discover());
    ScannedVersionTableAccessor::new(
        config.type_filter.clone(),
        Some(source),
        Some(Arc::new(build_catalog(config))),
    )
}

/// Wire the application over an explicit candidate source
pub fn init_app_with_source(
    config: AppConfig,
    source: Option<Arc<dyn CandidateSource>>,
) -> AppContext {
    let catalog = Arc::new(build_catalog(&config));
    let version_table_accessor = Arc::new(ScannedVersionTableAccessor::new(
        config.type_filter.clone(),
        source,
        Some(Arc::clone(&catalog)),
    ));

    info!(
        namespace = %config.type_filter.namespace,
        nested = config.type_filter.nested_namespaces,
        "Application context initialized"
    );

    AppContext {
        config: Arc::new(config),
        catalog,
        version_table_accessor,
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("version_table_accessor", &self.version_table_accessor)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// IoC catalog
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Version table accessor as a port
    pub fn version_table_accessor(&self) -> Arc<dyn VersionTableMetaDataAccessor> {
        self.version_table_accessor.clone()
    }

    /// Version table layout in effect
    ///
    /// The discovered layout when a plugin provides one, otherwise the
    /// conventional layout in the configured default schema.
    pub fn version_table(&self) -> Result<Arc<dyn VersionTableMetaData>> {
        version_table_or_default(
            self.version_table_accessor.as_ref(),
            &self.config.version_table.default_schema,
        )
    }
}
