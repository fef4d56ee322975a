//! Domain Port Interfaces
//!
//! Contracts the migration runner consumes. Implementations live in the
//! application layer or are discovered at runtime from candidate modules.

/// Version table capability and its accessor port
pub mod version_table;

pub use version_table::{
    DefaultVersionTableMetaData, VersionTableMetaData, VersionTableMetaDataAccessor,
};
