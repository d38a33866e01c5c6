//! Main `ModelView` API for object-model resolution and introspection

use std::sync::{Arc, RwLock};

use classmodel_core::{
    Value,
    config::ClassModelConfig,
    error::{ClassModelError, Result},
    types::{Instance, MemberKind, ResolvedMember},
};
use indexmap::IndexMap;

use super::graph::TypeGraph;
use super::introspect::Introspector;
use super::linearize::{Linearizer, ResolutionCache};
use super::resolve::MemberResolution;
use super::type_view::TypeView;

/// Error type for `ModelView` operations
#[derive(Debug, thiserror::Error)]
pub enum ModelViewError {
    /// Error accessing cached data
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl From<ModelViewError> for ClassModelError {
    fn from(err: ModelViewError) -> Self {
        ClassModelError::service(err.to_string())
    }
}

/// High-level API for resolving and introspecting an object model
///
/// Constructing a view freezes the graph: registration and resolution are
/// separate, exclusive phases. Everything the view exposes is immutable
/// apart from the resolution cache, so finished orders may be read
/// concurrently by any number of readers.
#[derive(Debug, Clone)]
pub struct ModelView {
    graph: Arc<TypeGraph>,

    config: ClassModelConfig,

    /// Cache of computed resolution orders
    cache: Arc<RwLock<ResolutionCache>>,
}

impl ModelView {
    /// Create a view over a finished type graph
    #[must_use]
    pub fn new(graph: TypeGraph) -> Self {
        Self::with_config(graph, ClassModelConfig::default())
    }

    /// Create a view with an explicit configuration
    #[must_use]
    pub fn with_config(graph: TypeGraph, config: ClassModelConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config,
            cache: Arc::new(RwLock::new(ResolutionCache::new())),
        }
    }

    /// Get the underlying type graph
    #[must_use]
    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Get the active configuration
    #[must_use]
    pub fn config(&self) -> &ClassModelConfig {
        &self.config
    }

    // === Resolution Orders ===

    /// Get the resolution order for a type
    ///
    /// The order starts with the type itself, contains each ancestor
    /// exactly once before any of that ancestor's own ancestors, and is
    /// consistent with every parent's order and the declared precedence
    /// among direct parents. Repeated calls yield identical sequences.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type is not registered and
    /// `InconsistentHierarchy` if no consistent order exists; a failed
    /// computation is never cached, and types unaffected by the conflict
    /// remain resolvable
    pub fn resolution_order(&self, name: &str) -> Result<Vec<String>> {
        if self.config.resolution.enable_cache {
            let cache = self.cache.read().map_err(|_| {
                ModelViewError::CacheError("Failed to acquire cache read lock".into())
            })?;
            if let Some(order) = cache.get_order(name) {
                return Ok(order);
            }
        }

        let order = Linearizer::new(&self.graph).linearize(name)?;

        if self.config.resolution.enable_cache {
            let mut cache = self.cache.write().map_err(|_| {
                ModelViewError::CacheError("Failed to acquire cache write lock".into())
            })?;
            cache.cache_order(name.to_string(), order.clone());
        }

        Ok(order)
    }

    /// Get all ancestors of a type, nearest first
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` as
    /// `resolution_order` does
    pub fn ancestors(&self, name: &str) -> Result<Vec<String>> {
        let mut order = self.resolution_order(name)?;
        order.remove(0);
        Ok(order)
    }

    /// Check whether one type is an ancestor of another
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` as
    /// `resolution_order` does
    pub fn is_ancestor(&self, potential_ancestor: &str, name: &str) -> Result<bool> {
        Ok(self
            .ancestors(name)?
            .iter()
            .any(|ancestor| ancestor == potential_ancestor))
    }

    /// Get all descendant types of a type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered
    pub fn descendants(&self, name: &str) -> Result<Vec<String>> {
        self.graph.lookup(name)?;

        let mut descendants = Vec::new();
        for (type_name, definition) in self.graph.iter() {
            if definition.parents.iter().any(|parent| parent == name) {
                descendants.push(type_name.clone());
                descendants.extend(self.descendants(type_name)?);
            }
        }

        descendants.sort();
        descendants.dedup();
        Ok(descendants)
    }

    // === Instance Construction ===

    /// Build an instance by applying each ancestor's initializer
    /// contribution
    ///
    /// Contributions are applied in constructor-call order: declared
    /// parents left to right, recursively, then the type's own data-member
    /// defaults. Diamond bases are revisited, as chained constructor calls
    /// would revisit them, so for overlapping attribute names the
    /// last-applied contribution wins.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type is not registered, `AbstractType`
    /// if it is abstract, and `DepthLimitExceeded` if the parent chain is
    /// deeper than the configured hierarchy depth
    pub fn instantiate(&self, name: &str) -> Result<Instance> {
        let definition = self.graph.lookup(name)?;
        if definition.is_abstract() {
            return Err(ClassModelError::abstract_type(name));
        }

        let mut instance = Instance::new(name);
        self.apply_initializers(name, &mut instance, 0)?;
        Ok(instance)
    }

    fn apply_initializers(&self, name: &str, instance: &mut Instance, depth: usize) -> Result<()> {
        let limit = self.config.resolution.max_hierarchy_depth;
        if depth >= limit {
            return Err(ClassModelError::depth_limit(instance.type_name(), limit));
        }

        let definition = self.graph.lookup(name)?;
        for parent in &definition.parents {
            self.apply_initializers(parent, instance, depth + 1)?;
        }
        for member in definition.members.values() {
            if member.kind == MemberKind::Data
                && let Some(default) = &member.default
            {
                instance.set_attribute(member.name.clone(), default.clone());
            }
        }
        Ok(())
    }

    // === Member Resolution ===

    /// Resolve a member name on an instance
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no type in the resolution order
    /// declares the name and the instance does not hold it
    pub fn resolve(&self, instance: &Instance, member_name: &str) -> Result<ResolvedMember> {
        let resolution = MemberResolution::new(self);
        resolution.resolve(instance, member_name)
    }

    // === Introspection ===

    /// Capability query: can this instance respond to a member name
    ///
    /// Never fails; every resolution error collapses to `false`.
    #[must_use]
    pub fn supports(&self, instance: &Instance, member_name: &str) -> bool {
        Introspector::new(self).supports(instance, member_name)
    }

    /// List every resolvable member name on an instance, in a stable order
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` if the instance's
    /// type cannot be resolved
    pub fn list_all(&self, instance: &Instance) -> Result<Vec<String>> {
        Introspector::new(self).list_all(instance)
    }

    /// List instance-storage data attributes, name to value, in set order
    #[must_use]
    pub fn list_data_attributes(&self, instance: &Instance) -> IndexMap<String, Value> {
        Introspector::new(self).list_data_attributes(instance)
    }

    /// List resolvable callable members, excluding reserved structural
    /// names
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` if the instance's
    /// type cannot be resolved
    pub fn list_callable_members(&self, instance: &Instance) -> Result<Vec<String>> {
        Introspector::new(self).list_callable_members(instance)
    }

    // === View Operations ===

    /// Get a `TypeView` for detailed type inspection
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered and
    /// `InconsistentHierarchy` if its resolution order cannot be computed
    pub fn type_view(&self, name: &str) -> Result<TypeView> {
        TypeView::new(name, self)
    }
}
