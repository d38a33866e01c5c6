//! Error types for object-model resolution

use thiserror::Error;

/// Main error type for object-model operations
#[derive(Error, Debug)]
pub enum ClassModelError {
    /// A type name was registered twice
    #[error("type '{name}' is already registered")]
    DuplicateType {
        /// Name of the offending type
        name: String,
    },

    /// A type named a parent that is not registered yet
    #[error("type '{child}' names unknown parent '{parent}'")]
    UnknownParent {
        /// Type being registered
        child: String,
        /// Parent that could not be found
        parent: String,
    },

    /// Lookup of an unregistered type
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// No resolution order consistent with every parent exists
    #[error("cannot compute resolution order for '{name}': conflicting ancestor order among {conflicting:?}")]
    InconsistentHierarchy {
        /// Type whose linearization failed
        name: String,
        /// Candidate types that blocked each other during the merge
        conflicting: Vec<String>,
    },

    /// A member name resolved on no type in the resolution order
    #[error("member '{member}' not found on instance of '{type_name}'")]
    MemberNotFound {
        /// Concrete type of the instance
        type_name: String,
        /// Member that was requested
        member: String,
    },

    /// Instantiation of an abstract type
    #[error("type '{name}' is abstract and cannot be instantiated")]
    AbstractType {
        /// Name of the abstract type
        name: String,
    },

    /// Initializer recursion exceeded the configured hierarchy depth
    #[error("inheritance depth limit of {limit} exceeded while initializing '{name}'")]
    DepthLimitExceeded {
        /// Type whose construction was aborted
        name: String,
        /// Configured limit
        limit: usize,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Service integration errors
    #[error("Service error: {0}")]
    ServiceError(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for object-model operations
pub type Result<T> = std::result::Result<T, ClassModelError>;

impl ClassModelError {
    /// Create a new duplicate-type error
    #[must_use]
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        Self::DuplicateType { name: name.into() }
    }

    /// Create a new unknown-parent error
    #[must_use]
    pub fn unknown_parent(child: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            child: child.into(),
            parent: parent.into(),
        }
    }

    /// Create a new unknown-type error
    #[must_use]
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType(name.into())
    }

    /// Create a new inconsistent-hierarchy error
    #[must_use]
    pub fn inconsistent_hierarchy(name: impl Into<String>, conflicting: Vec<String>) -> Self {
        Self::InconsistentHierarchy {
            name: name.into(),
            conflicting,
        }
    }

    /// Create a new member-not-found error
    #[must_use]
    pub fn member_not_found(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MemberNotFound {
            type_name: type_name.into(),
            member: member.into(),
        }
    }

    /// Create a new abstract-type error
    #[must_use]
    pub fn abstract_type(name: impl Into<String>) -> Self {
        Self::AbstractType { name: name.into() }
    }

    /// Create a new depth-limit error
    #[must_use]
    pub fn depth_limit(name: impl Into<String>, limit: usize) -> Self {
        Self::DepthLimitExceeded {
            name: name.into(),
            limit,
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError(message.into())
    }

    /// Create a new service error
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::ServiceError(message.into())
    }

    /// Create a generic error
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }

    /// Create a generic error with source
    #[must_use]
    pub fn other_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Implement conversions for common error types
impl From<serde_json::Error> for ClassModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ClassModelError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<anyhow::Error> for ClassModelError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            message: err.to_string(),
            source: Some(Box::new(std::io::Error::other(err))),
        }
    }
}
