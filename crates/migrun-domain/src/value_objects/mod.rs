//! Domain Value Objects
//!
//! Immutable values describing how candidate types are selected.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeFilter`] | Namespace a candidate type must live in |
//! | [`TypeKind`] | Class, abstract class, interface or value type |
//! | [`VersionTableConfig`] | Version table settings injectable into plugins |

/// Configuration value objects
pub mod config;
/// Namespace filter applied while scanning candidate modules
pub mod type_filter;
/// Kind of an exported type
pub mod type_kind;

pub use config::VersionTableConfig;
pub use type_filter::{TypeFilter, is_in_namespace};
pub use type_kind::TypeKind;
