//! # `ClassModel` Service
//!
//! Object-model resolution engine: type graphs, merge-based linearization,
//! member resolution, and instance introspection.
//!
//! The engine turns a registered multiple-inheritance type graph into a
//! finite, inspectable data structure: a deterministic resolution order per
//! type, plus a narrow capability-query API over live instances. Consumers
//! depend only on this interface, never on a type's full internal shape.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)] // Documentation is covered by module-level docs

/// Denormalized view API over a registered type graph
pub mod model_view;

// Re-export commonly used types
pub use model_view::{ModelView, TypeGraph, TypeView, TypeViewBuilder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::model_view::{Introspector, MemberResolution, ModelView, TypeGraph, TypeView};
    pub use classmodel_core::prelude::*;
}
