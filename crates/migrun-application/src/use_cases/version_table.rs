//! Version Table Accessor
//!
//! Scans candidate modules for a custom [`VersionTableMetaData`] layout.

use std::sync::Arc;

use dill::Catalog;
use migrun_domain::error::Result;
use migrun_domain::ports::{
    DefaultVersionTableMetaData, VersionTableMetaData, VersionTableMetaDataAccessor,
};
use migrun_domain::value_objects::TypeFilter;

use crate::ports::candidates::CandidateSource;
use crate::use_cases::resolver::CapabilityResolver;

/// Accessor returning the version table layout found in candidate modules
#[derive(Debug)]
pub struct ScannedVersionTableAccessor {
    resolver: CapabilityResolver<dyn VersionTableMetaData>,
}

impl ScannedVersionTableAccessor {
    /// Create an accessor scanning `source` for types matching `filter`
    pub fn new(
        filter: TypeFilter,
        source: Option<Arc<dyn CandidateSource>>,
        container: Option<Arc<Catalog>>,
    ) -> Self {
        Self {
            resolver: CapabilityResolver::new(filter, source, container),
        }
    }

    /// Underlying resolver
    pub fn resolver(&self) -> &CapabilityResolver<dyn VersionTableMetaData> {
        &self.resolver
    }
}

impl VersionTableMetaDataAccessor for ScannedVersionTableAccessor {
    fn version_table_meta_data(&self) -> Result<Option<Arc<dyn VersionTableMetaData>>> {
        self.resolver.get()
    }
}

/// The layout provided by `accessor`, or the conventional one in `default_schema`
///
/// Activation failures are not replaced by the default.
pub fn version_table_or_default(
    accessor: &dyn VersionTableMetaDataAccessor,
    default_schema: &str,
) -> Result<Arc<dyn VersionTableMetaData>> {
    match accessor.version_table_meta_data()? {
        Some(meta) => Ok(meta),
        None => Ok(Arc::new(DefaultVersionTableMetaData::with_schema(
            default_schema,
        ))),
    }
}
