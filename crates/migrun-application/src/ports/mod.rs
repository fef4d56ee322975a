//! Application Port Interfaces
//!
//! Boundary contracts for the candidate provider side of capability
//! resolution.
//!
//! ## Organization
//!
//! - **candidates.rs** - Exported types, candidate modules and the source trait
//! - **registry/** - Auto-registration of exported types via `linkme`

/// Candidate modules and exported type descriptors
pub mod candidates;
/// Exported type registry for link-time discovery
pub mod registry;

pub use candidates::{
    Activator, CandidateModule, CandidateSource, ExportedType, StaticModuleSource,
};
pub use registry::{EXPORTED_TYPES, ExportedTypeEntry, list_exported_types};
