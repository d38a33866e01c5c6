//! Configuration types for object-model services

use serde::{Deserialize, Serialize};

/// Main configuration for object-model services
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassModelConfig {
    /// Resolution-order computation configuration
    pub resolution: ResolutionConfig,

    /// Introspection configuration
    pub introspection: IntrospectionConfig,
}

/// Resolution-order computation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Cache computed resolution orders on the view
    pub enable_cache: bool,

    /// Maximum recursion depth while applying initializer contributions
    pub max_hierarchy_depth: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            enable_cache: true,
            max_hierarchy_depth: 64,
        }
    }
}

/// Introspection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntrospectionConfig {
    /// Prefix marking structural/identity names, hidden from the
    /// user-facing capability list
    pub reserved_prefix: String,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            reserved_prefix: "__".to_string(),
        }
    }
}
