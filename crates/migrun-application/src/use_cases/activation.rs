//! Type Activation
//!
//! Builds a discovered type as a capability. With a container the type's
//! injected constructor runs and pulls its dependencies from the catalog;
//! without one only the parameterless constructor can be used.

use std::any::type_name;
use std::sync::Arc;

use dill::Catalog;
use migrun_domain::error::{Error, Result};
use tracing::debug;

use crate::ports::candidates::{Activator, ExportedType};

/// Instantiate `exported` as capability `C`
///
/// A container-aware construction falls back to the parameterless
/// constructor when the type has no injected one. Constructor failures are
/// returned unchanged.
pub fn instantiate<C: ?Sized + 'static>(
    exported: &ExportedType,
    container: Option<&Catalog>,
) -> Result<Arc<C>> {
    let activator = exported
        .activator::<C>()
        .ok_or_else(|| Error::not_assignable(exported.full_name(), type_name::<C>()))?;

    match container {
        Some(catalog) => match activator.injected_constructor() {
            Some(constructor) => {
                debug!(type_name = %exported.full_name(), "Activating through the container");
                constructor(catalog)
            }
            None => activate_default(exported, activator),
        },
        None => activate_default(exported, activator),
    }
}

fn activate_default<C: ?Sized>(exported: &ExportedType, activator: &Activator<C>) -> Result<Arc<C>> {
    match activator.default_constructor() {
        Some(constructor) => {
            debug!(type_name = %exported.full_name(), "Activating through the default constructor");
            constructor()
        }
        None if activator.has_injected() => Err(Error::missing_constructor(
            exported.full_name(),
            "only a container-aware constructor is available and no container was supplied",
        )),
        None => Err(Error::missing_constructor(
            exported.full_name(),
            "no parameterless constructor",
        )),
    }
}

/// Fetch a constructor dependency from the catalog
///
/// `requested_by` names the type being activated and ends up in the error
/// when the catalog has no registration for `T`.
pub fn inject<T: ?Sized + Send + Sync + 'static>(
    catalog: &Catalog,
    requested_by: &str,
) -> Result<Arc<T>> {
    catalog
        .get_one::<T>()
        .map_err(|e| Error::unresolved_dependency(requested_by, type_name::<T>(), e.to_string()))
}
