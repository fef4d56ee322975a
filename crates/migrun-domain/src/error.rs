//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for migrun
///
/// "No candidate source" and "no matching type" are not errors: capability
/// resolution reports them as an absent (`None`) outcome. Only a type that was
/// found but could not be built surfaces as one of the activation variants.
#[derive(Error, Debug)]
pub enum Error {
    /// The matched type has no constructor usable in the current mode
    #[error("No usable constructor for type '{type_name}': {message}")]
    MissingConstructor {
        /// Fully qualified name of the type
        type_name: String,
        /// Which constructor was looked for
        message: String,
    },

    /// The container could not supply a constructor dependency
    #[error("Unable to resolve dependency '{dependency}' while activating '{type_name}': {message}")]
    UnresolvedDependency {
        /// Fully qualified name of the type being activated
        type_name: String,
        /// Name of the dependency that was requested
        dependency: String,
        /// Container diagnostic
        message: String,
    },

    /// A constructor ran and failed
    #[error("Activation of type '{type_name}' failed: {message}")]
    Activation {
        /// Fully qualified name of the type
        type_name: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A type was asked for a capability it does not implement
    #[error("Type '{type_name}' is not assignable to '{capability}'")]
    NotAssignable {
        /// Fully qualified name of the type
        type_name: String,
        /// Name of the requested capability
        capability: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Activation error creation methods
impl Error {
    /// Create a missing constructor error
    pub fn missing_constructor<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::MissingConstructor {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Create an unresolved dependency error
    pub fn unresolved_dependency<T, D, S>(type_name: T, dependency: D, message: S) -> Self
    where
        T: Into<String>,
        D: Into<String>,
        S: Into<String>,
    {
        Self::UnresolvedDependency {
            type_name: type_name.into(),
            dependency: dependency.into(),
            message: message.into(),
        }
    }

    /// Create an activation error
    pub fn activation<T: Into<String>, S: Into<String>>(type_name: T, message: S) -> Self {
        Self::Activation {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an activation error with source
    pub fn activation_with_source<T, S, E>(type_name: T, message: S, source: E) -> Self
    where
        T: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Activation {
            type_name: type_name.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not assignable error
    pub fn not_assignable<T: Into<String>, C: Into<String>>(type_name: T, capability: C) -> Self {
        Self::NotAssignable {
            type_name: type_name.into(),
            capability: capability.into(),
        }
    }

    /// Whether this error was raised while building a discovered type
    pub fn is_activation_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingConstructor { .. }
                | Self::UnresolvedDependency { .. }
                | Self::Activation { .. }
                | Self::NotAssignable { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io_with_source(source.to_string(), source)
    }
}
