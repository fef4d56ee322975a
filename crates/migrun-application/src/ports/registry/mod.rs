//! Exported Type Registry
//!
//! Link-time registration of exported types. Uses the `linkme` crate so that
//! plugin crates can contribute candidate types without the application or
//! infrastructure layers knowing about them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Exported Type Registration Flow                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Plugin defines:    #[linkme::distributed_slice(EXPORTED_TYPES)]
//! │                        static ENTRY: ExportedTypeEntry = ...    │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static EXPORTED_TYPES: [Entry] = [..]│
//! │                              ↓                                  │
//! │  3. Source groups:     LinkedModuleSource → CandidateModule     │
//! │                              ↓                                  │
//! │  4. Resolver scans:    first concrete class assignable to C     │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use migrun_application::ports::registry::{ExportedTypeEntry, EXPORTED_TYPES};
//!
//! #[linkme::distributed_slice(EXPORTED_TYPES)]
//! static CUSTOM_VERSION_TABLE: ExportedTypeEntry = ExportedTypeEntry {
//!     module: "app-migrations",
//!     ordinal: 0,
//!     describe: || {
//!         ExportedType::class("CustomVersionTable", "App.Migrations")
//!             .implements::<dyn VersionTableMetaData>(
//!                 Activator::new().with_default(|| Ok(Arc::new(CustomVersionTable))),
//!             )
//!     },
//! };
//! ```

pub mod exported_types;

pub use exported_types::{EXPORTED_TYPES, ExportedTypeEntry, list_exported_types};
