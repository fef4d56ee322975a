//! # migrun
//!
//! Lazy discovery of migration runner capabilities from plugin modules.
//!
//! Plugins register exported types at link time; the capability resolver
//! scans them once, picks the first concrete class implementing the
//! requested capability within the configured namespace, builds it through
//! the IoC catalog (or its parameterless constructor) and memoizes it.
//!
//! ## Example
//!
//! ```ignore
//! use migrun::infrastructure::{ConfigLoader, init_app};
//!
//! let context = init_app(ConfigLoader::new().load()?);
//! let version_table = context.version_table()?;
//! println!("{}", version_table.table_name());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Capability contracts, type filter, errors
//! - `application` - Candidate ports, registry, resolver
//! - `infrastructure` - Configuration, logging, dill catalog, composition root

/// Domain layer - capability contracts and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use migrun_domain::*;
}

/// Application layer - candidate scanning and capability resolution
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use migrun_application::*;
}

/// Infrastructure layer - config, logging and DI wiring
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use migrun_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the resolver at the crate root
pub use application::{CapabilityResolver, EXPORTED_TYPES, ExportedType, ExportedTypeEntry};
