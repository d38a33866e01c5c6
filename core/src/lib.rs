//! # `ClassModel` Core
//!
//! Core types and errors for object-model resolution in Rust.
//!
//! This crate provides the fundamental building blocks for working with
//! multiple-inheritance type graphs: type and member definitions, live
//! instances, resolved-member results, configuration, and error handling.
//!
//! ## Design Principles
//!
//! - **Explicit data over ambient reflection**: resolution orders are
//!   finite, inspectable data structures
//! - **Type Safety**: compile-time guarantees where possible
//! - **Composition Over Inheritance**: following Rust idioms

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)] // Documentation is covered by module-level docs

/// Core error types for object-model operations
pub mod error;

/// Type definitions for object-model graphs and instances
pub mod types;

/// Configuration types for object-model services
pub mod config;

// Re-export commonly used types
pub use config::{ClassModelConfig, IntrospectionConfig, ResolutionConfig};
pub use error::{ClassModelError, Result};
pub use serde_json::Value;
pub use types::{Instance, MemberDescriptor, MemberKind, ResolvedMember, TypeDefinition};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::ClassModelConfig;
    pub use crate::error::{ClassModelError, Result};
    pub use crate::types::*;
}
