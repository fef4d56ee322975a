//! Exported Type Registry Entries
//!
//! Plugins register exported types via `#[linkme::distributed_slice]`; the
//! entries are discovered at runtime through [`EXPORTED_TYPES`].

use crate::ports::candidates::ExportedType;

/// Registry entry for an exported type
///
/// The descriptor is built lazily by `describe` because constructors are
/// closures and cannot live in a `static`.
pub struct ExportedTypeEntry {
    /// Name of the module (plugin) exporting the type
    pub module: &'static str,
    /// Declaration position of the type within its module
    pub ordinal: u32,
    /// Factory building the type descriptor
    pub describe: fn() -> ExportedType,
}

impl std::fmt::Debug for ExportedTypeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedTypeEntry")
            .field("module", &self.module)
            .field("ordinal", &self.ordinal)
            .finish_non_exhaustive()
    }
}

// Auto-collection via linkme distributed slices - plugins submit entries at link time
#[linkme::distributed_slice]
pub static EXPORTED_TYPES: [ExportedTypeEntry] = [..];

/// List all registered exported types
///
/// Returns `(module, full type name)` pairs in registration order. Useful for
/// diagnostics when a capability unexpectedly resolves to nothing.
pub fn list_exported_types() -> Vec<(&'static str, String)> {
    EXPORTED_TYPES
        .iter()
        .map(|entry| (entry.module, (entry.describe)().full_name()))
        .collect()
}
