//! Candidate Modules and Exported Types
//!
//! A candidate source exposes an ordered list of modules, each exposing an
//! ordered list of exported type descriptors. A descriptor records the type's
//! namespace and kind, and the capabilities it is assignable to. Each
//! capability entry carries an [`Activator`] with the constructors that can
//! produce the type as that capability.
//!
//! Capabilities are identified by `TypeId`, so any `'static` trait object
//! (`dyn VersionTableMetaData`, ...) can serve as a capability.
//!
//! ```ignore
//! let ty = ExportedType::class("CustomVersionTable", "App.Migrations")
//!     .implements::<dyn VersionTableMetaData>(
//!         Activator::new().with_default(|| Ok(Arc::new(CustomVersionTable))),
//!     );
//! let module = CandidateModule::new("app").with_type(ty);
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::Arc;

use dill::Catalog;
use migrun_domain::{Result, TypeKind, is_in_namespace};

type DefaultConstructor<C> = Arc<dyn Fn() -> Result<Arc<C>> + Send + Sync>;
type InjectedConstructor<C> = Arc<dyn Fn(&Catalog) -> Result<Arc<C>> + Send + Sync>;

// ============================================================================
// Activator
// ============================================================================

/// Constructors producing a type as capability `C`
///
/// The injected constructor pulls its dependencies from the IoC catalog; the
/// default constructor takes nothing. Either may be missing: abstract classes
/// and interfaces declare capabilities without any constructor.
pub struct Activator<C: ?Sized> {
    default: Option<DefaultConstructor<C>>,
    injected: Option<InjectedConstructor<C>>,
}

impl<C: ?Sized> Activator<C> {
    /// Activator without constructors
    pub fn new() -> Self {
        Self {
            default: None,
            injected: None,
        }
    }

    /// Set the parameterless constructor
    pub fn with_default<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> Result<Arc<C>> + Send + Sync + 'static,
    {
        self.default = Some(Arc::new(constructor));
        self
    }

    /// Set the container-aware constructor
    pub fn with_injected<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&Catalog) -> Result<Arc<C>> + Send + Sync + 'static,
    {
        self.injected = Some(Arc::new(constructor));
        self
    }

    /// Whether a parameterless constructor is available
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether a container-aware constructor is available
    pub fn has_injected(&self) -> bool {
        self.injected.is_some()
    }

    pub(crate) fn default_constructor(&self) -> Option<&DefaultConstructor<C>> {
        self.default.as_ref()
    }

    pub(crate) fn injected_constructor(&self) -> Option<&InjectedConstructor<C>> {
        self.injected.as_ref()
    }
}

impl<C: ?Sized> Default for Activator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for Activator<C> {
    fn clone(&self) -> Self {
        Self {
            default: self.default.clone(),
            injected: self.injected.clone(),
        }
    }
}

impl<C: ?Sized> std::fmt::Debug for Activator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Activator")
            .field("default", &self.has_default())
            .field("injected", &self.has_injected())
            .finish()
    }
}

// ============================================================================
// Exported Type
// ============================================================================

#[derive(Clone)]
struct CapabilityBinding {
    capability: &'static str,
    activator: Arc<dyn Any + Send + Sync>,
}

/// Descriptor of a publicly exported type
#[derive(Clone)]
pub struct ExportedType {
    name: String,
    namespace: String,
    kind: TypeKind,
    capabilities: HashMap<TypeId, CapabilityBinding>,
}

impl ExportedType {
    /// Describe a type of the given kind
    ///
    /// An empty `namespace` denotes the global namespace.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind,
            capabilities: HashMap::new(),
        }
    }

    /// Describe a concrete class
    pub fn class(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, TypeKind::Class)
    }

    /// Describe an abstract class
    pub fn abstract_class(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, TypeKind::AbstractClass)
    }

    /// Describe an interface
    pub fn interface(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, TypeKind::Interface)
    }

    /// Describe a value type
    pub fn value_type(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self::new(name, namespace, TypeKind::ValueType)
    }

    /// Make the type assignable to `C`, built through `activator`
    pub fn implements<C: ?Sized + 'static>(mut self, activator: Activator<C>) -> Self {
        self.capabilities.insert(
            TypeId::of::<C>(),
            CapabilityBinding {
                capability: type_name::<C>(),
                activator: Arc::new(activator),
            },
        );
        self
    }

    /// Make the type assignable to `C` without any constructor
    pub fn declares<C: ?Sized + 'static>(self) -> Self {
        self.implements(Activator::<C>::new())
    }

    /// Simple type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaring namespace, empty for the global namespace
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Kind of the type
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Namespace-qualified name
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Whether the type is a concrete class
    pub fn is_concrete_class(&self) -> bool {
        self.kind.is_concrete_class()
    }

    /// Whether the type is declared in `namespace` (or below it when `nested`)
    pub fn is_in_namespace(&self, namespace: &str, nested: bool) -> bool {
        is_in_namespace(&self.namespace, namespace, nested)
    }

    /// Whether the type can be used as capability `C`
    pub fn is_assignable_to<C: ?Sized + 'static>(&self) -> bool {
        self.capabilities.contains_key(&TypeId::of::<C>())
    }

    /// Constructors producing the type as capability `C`
    pub fn activator<C: ?Sized + 'static>(&self) -> Option<&Activator<C>> {
        self.capabilities
            .get(&TypeId::of::<C>())
            .and_then(|binding| binding.activator.downcast_ref::<Activator<C>>())
    }

    /// Names of the capabilities the type is assignable to
    pub fn capability_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.capabilities.values().map(|b| b.capability).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ExportedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedType")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("kind", &self.kind)
            .field("capabilities", &self.capability_names())
            .finish()
    }
}

// ============================================================================
// Candidate Module
// ============================================================================

/// Unit of code (plugin) exposing types to be scanned
#[derive(Debug, Clone)]
pub struct CandidateModule {
    name: String,
    types: Vec<ExportedType>,
}

impl CandidateModule {
    /// Create an empty module
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Append an exported type, keeping declaration order
    pub fn with_type(mut self, exported: ExportedType) -> Self {
        self.types.push(exported);
        self
    }

    /// Append an exported type in place
    pub fn push_type(&mut self, exported: ExportedType) {
        self.types.push(exported);
    }

    /// Module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exported types in declaration order
    pub fn exported_types(&self) -> &[ExportedType] {
        &self.types
    }
}

// ============================================================================
// Candidate Source
// ============================================================================

/// Supplier of candidate modules
///
/// Modules are returned in discovery order; resolution relies on this order
/// to break ties between several matching types.
pub trait CandidateSource: Send + Sync {
    /// Candidate modules in discovery order
    fn modules(&self) -> Vec<CandidateModule>;
}

/// Candidate source over a fixed list of modules
#[derive(Debug, Clone, Default)]
pub struct StaticModuleSource {
    modules: Vec<CandidateModule>,
}

impl StaticModuleSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module
    pub fn with_module(mut self, module: CandidateModule) -> Self {
        self.modules.push(module);
        self
    }
}

impl From<Vec<CandidateModule>> for StaticModuleSource {
    fn from(modules: Vec<CandidateModule>) -> Self {
        Self { modules }
    }
}

impl CandidateSource for StaticModuleSource {
    fn modules(&self) -> Vec<CandidateModule> {
        self.modules.clone()
    }
}
