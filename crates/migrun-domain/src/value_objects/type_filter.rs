//! Namespace type filter

use serde::{Deserialize, Serialize};

use crate::constants::NAMESPACE_SEPARATOR;

/// Namespace a candidate type must be declared in to be considered
///
/// An empty `namespace` matches every type. Otherwise it is a dotted path;
/// with `nested_namespaces` enabled, types declared in child namespaces match
/// too (`App.Migrations` matches `App`, `AppExtra` never does).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeFilter {
    /// Dotted namespace path, empty for "match all"
    pub namespace: String,

    /// Also match types declared in nested namespaces
    pub nested_namespaces: bool,
}

impl TypeFilter {
    /// Create a filter for an exact namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            nested_namespaces: false,
        }
    }

    /// Filter matching every namespace
    pub fn any() -> Self {
        Self::default()
    }

    /// Enable or disable nested namespace matching
    pub fn with_nested_namespaces(mut self, nested: bool) -> Self {
        self.nested_namespaces = nested;
        self
    }

    /// Whether a type declared in `type_namespace` passes this filter
    pub fn matches(&self, type_namespace: &str) -> bool {
        is_in_namespace(type_namespace, &self.namespace, self.nested_namespaces)
    }
}

/// Namespace membership test
///
/// `type_namespace` is the namespace a type is declared in (empty for the
/// global namespace), `namespace` the one it is tested against.
pub fn is_in_namespace(type_namespace: &str, namespace: &str, nested: bool) -> bool {
    if namespace.is_empty() {
        return true;
    }
    if type_namespace == namespace {
        return true;
    }
    if !nested {
        return false;
    }

    // Proper dotted prefix: "Foo.Bar" is nested in "Foo", "FooBar" is not.
    type_namespace
        .strip_prefix(namespace)
        .is_some_and(|rest| rest.starts_with(NAMESPACE_SEPARATOR))
}
