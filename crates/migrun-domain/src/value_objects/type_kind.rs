//! Exported type kinds

use serde::{Deserialize, Serialize};

/// Kind of an exported type
///
/// Only [`TypeKind::Class`] can be activated by the capability resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Concrete, constructible class
    Class,
    /// Class that cannot be instantiated directly
    AbstractClass,
    /// Pure contract
    Interface,
    /// Value-type declaration that is not a class
    ValueType,
}

impl TypeKind {
    /// Whether the kind denotes a concrete class
    pub fn is_concrete_class(self) -> bool {
        matches!(self, Self::Class)
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Class => "class",
            Self::AbstractClass => "abstract class",
            Self::Interface => "interface",
            Self::ValueType => "value type",
        };
        f.write_str(name)
    }
}
