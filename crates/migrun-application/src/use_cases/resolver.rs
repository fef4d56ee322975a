//! Capability Resolver
//!
//! Locates exactly one implementation of capability `C` among the candidate
//! modules, instantiates it and memoizes the outcome for the lifetime of the
//! resolver.
//!
//! ## Resolution
//!
//! ```text
//! get() ──► memoized? ──yes──► cached Option<Arc<C>>
//!              │ no
//!              ▼
//!        source present? ──no──► None
//!              │ yes
//!              ▼
//!   modules → exported types (module order, then declaration order)
//!              │ namespace filter
//!              │ concrete classes only
//!              │ first assignable to C
//!              ▼
//!        match? ──no──► None
//!              │ yes
//!              ▼
//!        instantiate ──err──► Err (not memoized, next get() rescans)
//!              │ ok
//!              ▼
//!         Some(instance)
//! ```
//!
//! Only successful outcomes (an instance, or "nothing found") are memoized.
//! Concurrent first callers block while one of them resolves; if that attempt
//! fails, waiting callers retry on their own.

use std::any::type_name;
use std::sync::Arc;

use dill::Catalog;
use migrun_domain::error::Result;
use migrun_domain::value_objects::TypeFilter;
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::ports::candidates::CandidateSource;
use crate::use_cases::activation::instantiate;

/// Lazy, memoizing resolver of capability `C`
pub struct CapabilityResolver<C: ?Sized + 'static> {
    filter: TypeFilter,
    source: Option<Arc<dyn CandidateSource>>,
    container: Option<Arc<Catalog>>,
    resolved: OnceCell<Option<Arc<C>>>,
}

impl<C: ?Sized + 'static> CapabilityResolver<C> {
    /// Create a resolver
    ///
    /// Nothing is scanned until the first call to [`get`](Self::get). Without
    /// a source the capability always resolves to `None`; without a container
    /// only parameterless construction is attempted.
    pub fn new(
        filter: TypeFilter,
        source: Option<Arc<dyn CandidateSource>>,
        container: Option<Arc<Catalog>>,
    ) -> Self {
        Self {
            filter,
            source,
            container,
            resolved: OnceCell::new(),
        }
    }

    /// The resolved capability, `None` when no implementation is available
    ///
    /// The first successful call memoizes its outcome and later calls return
    /// the same instance. An instantiation failure is returned as-is and the
    /// next call scans again.
    pub fn get(&self) -> Result<Option<Arc<C>>> {
        self.resolved.get_or_try_init(|| self.resolve()).cloned()
    }

    /// Whether an outcome has been memoized
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Namespace filter applied to candidate types
    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    fn resolve(&self) -> Result<Option<Arc<C>>> {
        let capability = type_name::<C>();

        let Some(source) = &self.source else {
            debug!(capability, "No candidate source, capability is absent");
            return Ok(None);
        };

        let modules = source.modules();
        let matched = modules
            .iter()
            .flat_map(|module| module.exported_types())
            .filter(|exported| self.filter.matches(exported.namespace()))
            .filter(|exported| exported.is_concrete_class())
            .find(|exported| exported.is_assignable_to::<C>());

        let Some(exported) = matched else {
            debug!(
                capability,
                namespace = %self.filter.namespace,
                nested = self.filter.nested_namespaces,
                modules = modules.len(),
                "No implementation found"
            );
            return Ok(None);
        };

        info!(
            capability,
            type_name = %exported.full_name(),
            container = self.container.is_some(),
            "Resolved capability implementation"
        );

        instantiate::<C>(exported, self.container.as_deref())
            .map(Some)
            .inspect_err(|e| {
                warn!(capability, type_name = %exported.full_name(), error = %e, "Activation failed");
            })
    }
}

impl<C: ?Sized + 'static> std::fmt::Debug for CapabilityResolver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityResolver")
            .field("capability", &type_name::<C>())
            .field("filter", &self.filter)
            .field("source", &self.source.is_some())
            .field("container", &self.container.is_some())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
