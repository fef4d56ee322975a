//! Use Case Implementations
//!
//! Application services built on top of the candidate ports.

/// Two-strategy type instantiation
pub mod activation;
/// Lazy, memoized capability resolution
pub mod resolver;
/// Version table accessor backed by the resolver
pub mod version_table;

pub use activation::{inject, instantiate};
pub use resolver::CapabilityResolver;
pub use version_table::{ScannedVersionTableAccessor, version_table_or_default};
