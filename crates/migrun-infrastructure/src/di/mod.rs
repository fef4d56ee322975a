//! Dependency Injection - dill catalog and candidate discovery
//!
//! Wiring only: the catalog holding configuration values that injected
//! constructors depend on, the candidate source over link-time registered
//! types, and the composition root tying both to the capability resolver.
//!
//! ```text
//! AppConfig ──► build_catalog() ──► dill Catalog ─────────┐
//!                                                         ▼
//! EXPORTED_TYPES ──► LinkedModuleSource ──► ScannedVersionTableAccessor
//! ```

pub mod bootstrap;
pub mod catalog;
pub mod sources;

pub use bootstrap::{AppContext, bootstrap_version_table_accessor, init_app, init_app_with_source};
pub use catalog::build_catalog;
pub use sources::LinkedModuleSource;
