//! `TypeView` - High-level API for type introspection
//!
//! Provides a dedicated view for individual types with all inherited
//! members resolved.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use classmodel_core::{
    error::Result,
    types::{MemberDescriptor, TypeDefinition},
};
use indexmap::IndexMap;

use super::view::ModelView;

/// View of a single type with all inherited members resolved
///
/// The member table is nearest-wins: for each name, the descriptor comes
/// from the first type in the resolution order that declares it, so a
/// subtype's declaration shadows every ancestor's.
#[derive(Debug, Clone)]
pub struct TypeView {
    name: String,

    definition: TypeDefinition,

    /// Resolution order, starting with this type
    resolution_order: Vec<String>,

    /// Map of member names to their winning descriptors
    resolved_members: IndexMap<String, MemberDescriptor>,

    /// All descendant types
    descendants: HashSet<String>,
}

impl TypeView {
    /// Create a new `TypeView` for the specified type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered and
    /// `InconsistentHierarchy` if its resolution order cannot be computed
    pub fn new(name: &str, view: &ModelView) -> Result<Self> {
        let definition = view.graph().lookup(name)?.clone();
        let resolution_order = view.resolution_order(name)?;

        let mut resolved_members = IndexMap::new();
        for type_name in &resolution_order {
            let ancestor = view.graph().lookup(type_name)?;
            for (member_name, member) in &ancestor.members {
                resolved_members
                    .entry(member_name.clone())
                    .or_insert_with(|| member.clone());
            }
        }

        let descendants = view.descendants(name)?.into_iter().collect();

        Ok(Self {
            name: name.to_string(),
            definition,
            resolution_order,
            resolved_members,
            descendants,
        })
    }

    /// Get the type name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the type definition
    #[must_use]
    pub fn definition(&self) -> &TypeDefinition {
        &self.definition
    }

    /// Get the type description
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.definition.description.as_deref()
    }

    /// Check if this type is abstract
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.definition.is_abstract()
    }

    /// Get the direct parents, in declared precedence order
    #[must_use]
    pub fn parents(&self) -> &[String] {
        &self.definition.parents
    }

    /// Get the resolution order, starting with this type
    #[must_use]
    pub fn resolution_order(&self) -> &[String] {
        &self.resolution_order
    }

    /// Get all ancestor type names, nearest first
    #[must_use]
    pub fn ancestors(&self) -> &[String] {
        &self.resolution_order[1..]
    }

    /// Check if this type is a descendant of another type
    #[must_use]
    pub fn is_descendant_of(&self, type_name: &str) -> bool {
        self.ancestors().iter().any(|ancestor| ancestor == type_name)
    }

    /// Get all descendant type names
    pub fn descendants(&self) -> impl Iterator<Item = &String> {
        self.descendants.iter()
    }

    /// Get all member names visible on this type (including inherited)
    #[must_use]
    pub fn member_names(&self) -> Vec<&str> {
        self.resolved_members.keys().map(String::as_str).collect()
    }

    /// Get the winning descriptor for a member
    #[must_use]
    pub fn member(&self, member_name: &str) -> Option<&MemberDescriptor> {
        self.resolved_members.get(member_name)
    }

    /// Get all resolved members as a map
    #[must_use]
    pub fn members(&self) -> &IndexMap<String, MemberDescriptor> {
        &self.resolved_members
    }

    /// Get only the members declared directly on this type
    #[must_use]
    pub fn own_members(&self) -> Vec<&str> {
        self.definition.members.keys().map(String::as_str).collect()
    }

    /// Get only the members inherited from ancestor types
    #[must_use]
    pub fn inherited_members(&self) -> Vec<&str> {
        self.resolved_members
            .iter()
            .filter(|(name, _)| !self.definition.members.contains_key(*name))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Get the names of data members visible on this type
    #[must_use]
    pub fn data_members(&self) -> Vec<&str> {
        self.resolved_members
            .iter()
            .filter(|(_, member)| !member.is_callable())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Get the names of callable members visible on this type
    #[must_use]
    pub fn callable_members(&self) -> Vec<&str> {
        self.resolved_members
            .iter()
            .filter(|(_, member)| member.is_callable())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Check if this type has a member with the given name
    #[must_use]
    pub fn has_member(&self, member_name: &str) -> bool {
        self.resolved_members.contains_key(member_name)
    }
}

/// Builder for creating `TypeView` instances with caching
#[derive(Debug)]
pub struct TypeViewBuilder {
    view: Arc<ModelView>,
    cache: HashMap<String, Arc<TypeView>>,
}

impl TypeViewBuilder {
    /// Create a new `TypeViewBuilder`
    #[must_use]
    pub fn new(view: Arc<ModelView>) -> Self {
        Self {
            view,
            cache: HashMap::new(),
        }
    }

    /// Get or create a `TypeView` for the specified type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` if view creation
    /// fails
    pub fn get_or_create(&mut self, name: &str) -> Result<Arc<TypeView>> {
        if let Some(view) = self.cache.get(name) {
            return Ok(Arc::clone(view));
        }

        let view = Arc::new(TypeView::new(name, &self.view)?);
        self.cache.insert(name.to_string(), Arc::clone(&view));
        Ok(view)
    }

    /// Clear the cache
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
