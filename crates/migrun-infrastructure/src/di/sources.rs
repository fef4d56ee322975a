//! Linked Candidate Source
//!
//! Candidate source over the types registered in the `EXPORTED_TYPES`
//! distributed slice. Link order is unspecified, so modules are sorted by
//! name and types by their declared ordinal (then by name) to keep the
//! resolver's first-match selection deterministic.

use migrun_application::ports::candidates::{CandidateModule, CandidateSource, ExportedType};
use migrun_application::ports::registry::{EXPORTED_TYPES, ExportedTypeEntry};
use tracing::debug;

/// Candidate source built from link-time registrations
#[derive(Debug, Clone, Default)]
pub struct LinkedModuleSource {
    modules: Vec<CandidateModule>,
}

impl LinkedModuleSource {
    /// Snapshot every registered exported type
    pub fn discover() -> Self {
        Self::from_entries(&EXPORTED_TYPES)
    }

    /// Group `entries` into ordered candidate modules
    pub fn from_entries(entries: &[ExportedTypeEntry]) -> Self {
        let mut described: Vec<(&'static str, u32, ExportedType)> = entries
            .iter()
            .map(|entry| (entry.module, entry.ordinal, (entry.describe)()))
            .collect();
        described.sort_by(|a, b| {
            a.0.cmp(b.0)
                .then(a.1.cmp(&b.1))
                .then_with(|| a.2.name().cmp(b.2.name()))
        });

        let mut modules: Vec<CandidateModule> = Vec::new();
        for (module, _, exported) in described {
            match modules.last_mut() {
                Some(current) if current.name() == module => current.push_type(exported),
                _ => modules.push(CandidateModule::new(module).with_type(exported)),
            }
        }

        debug!(
            modules = modules.len(),
            types = entries.len(),
            "Discovered linked candidate modules"
        );
        Self { modules }
    }

    /// Names of the discovered modules, in scan order
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(CandidateModule::name).collect()
    }
}

impl CandidateSource for LinkedModuleSource {
    fn modules(&self) -> Vec<CandidateModule> {
        self.modules.clone()
    }
}
