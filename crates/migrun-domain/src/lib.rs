//! Domain Layer - migrun
//!
//! Pure types shared by every other layer of the migration runner core:
//!
//! - `error`: the single error enum and `Result` alias
//! - `value_objects`: the namespace [`TypeFilter`], [`TypeKind`] and plugin-facing settings
//! - `ports`: the version-table capability contract and its accessor port
//!
//! ## Dependencies
//!
//! This crate depends only on `serde` and `thiserror`. Nothing here knows
//! about the plugin registry, the IoC container or configuration loading.
//!
//! [`TypeFilter`]: value_objects::TypeFilter
//! [`TypeKind`]: value_objects::TypeKind

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{DefaultVersionTableMetaData, VersionTableMetaData, VersionTableMetaDataAccessor};
pub use value_objects::{TypeFilter, TypeKind, VersionTableConfig, is_in_namespace};
