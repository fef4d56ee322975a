//! Application Layer - migrun
//!
//! Scans candidate modules for an implementation of a capability, builds it
//! through the IoC container when one is available, and memoizes the outcome.
//!
//! ## Architecture
//!
//! ```text
//! CandidateSource ──► modules ──► exported types
//!                                      │ TypeFilter (namespace)
//!                                      │ concrete classes only
//!                                      │ first assignable to C
//!                                      ▼
//!                      instantiate::<C>(type, Option<&Catalog>)
//!                                      │
//!                                      ▼
//!                    CapabilityResolver<C>  (OnceCell<Option<Arc<C>>>)
//! ```
//!
//! ## Ports (Interfaces)
//!
//! - `ports::candidates`: exported type descriptors, modules and sources
//! - `ports::registry`: link-time registration of exported types
//!
//! ## Use Cases
//!
//! - `use_cases::resolver`: the lazy capability resolver
//! - `use_cases::activation`: two-strategy instantiation
//! - `use_cases::version_table`: the version table accessor

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
