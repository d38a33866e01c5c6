//! Type graph registry for object-model definitions

use classmodel_core::{
    error::{ClassModelError, Result},
    types::TypeDefinition,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Document form of a type graph for YAML/JSON loading
#[derive(Debug, Default, Serialize, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    types: IndexMap<String, TypeDefinition>,
}

/// Registry of type definitions, in registration order
///
/// Parents must be registered before their children (no forward
/// references), so the graph is acyclic by construction. Definitions are
/// immutable once registered; all mutation happens through `register`
/// during the single-threaded setup phase, before a `ModelView` freezes
/// the graph for resolution.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeGraph {
    /// Create an empty type graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Register a type definition
    ///
    /// Stamps `declared_by` on every member and backfills member names
    /// from their map keys.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateType` if the name is already registered and
    /// `UnknownParent` if any declared parent is not registered yet
    pub fn register(&mut self, mut definition: TypeDefinition) -> Result<()> {
        let name = definition.name.clone();

        if self.types.contains_key(&name) {
            return Err(ClassModelError::duplicate_type(name));
        }
        for parent in &definition.parents {
            if !self.types.contains_key(parent) {
                return Err(ClassModelError::unknown_parent(&name, parent));
            }
        }

        for (member_name, member) in &mut definition.members {
            if member.name.is_empty() {
                member.name.clone_from(member_name);
            }
            member.declared_by.clone_from(&name);
        }

        tracing::debug!(
            "Registered type '{}' ({} parents, {} members)",
            name,
            definition.parents.len(),
            definition.members.len()
        );
        self.types.insert(name, definition);
        Ok(())
    }

    /// Get a registered type definition
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered
    pub fn lookup(&self, name: &str) -> Result<&TypeDefinition> {
        self.types
            .get(name)
            .ok_or_else(|| ClassModelError::unknown_type(name))
    }

    /// Get a registered type definition, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Check whether a type is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Get all type names, in registration order
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    /// Iterate all definitions, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TypeDefinition)> {
        self.types.iter()
    }

    /// Number of registered types
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check whether the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Get the direct parents of a type, in declared precedence order
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered
    pub fn parents(&self, name: &str) -> Result<&[String]> {
        Ok(&self.lookup(name)?.parents)
    }

    /// Get the direct children of a type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the name is not registered
    pub fn children(&self, name: &str) -> Result<Vec<String>> {
        self.lookup(name)?;

        let mut children: Vec<String> = self
            .types
            .iter()
            .filter(|(_, definition)| definition.parents.iter().any(|parent| parent == name))
            .map(|(child, _)| child.clone())
            .collect();

        children.sort();
        children.dedup();
        Ok(children)
    }

    /// Get all root types (types with no parents)
    #[must_use]
    pub fn roots(&self) -> Vec<String> {
        let mut roots: Vec<String> = self
            .types
            .iter()
            .filter(|(_, definition)| definition.parents.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        roots.sort();
        roots
    }

    /// Get all leaf types (types with no children)
    #[must_use]
    pub fn leaves(&self) -> Vec<String> {
        let mut leaves: Vec<String> = self
            .types
            .keys()
            .filter(|name| {
                !self
                    .types
                    .values()
                    .any(|definition| definition.parents.iter().any(|parent| parent == *name))
            })
            .cloned()
            .collect();
        leaves.sort();
        leaves
    }

    /// Load a graph from a YAML document
    ///
    /// Definitions are registered in document order, so the document must
    /// list parents before children.
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` on malformed documents and
    /// registration errors on duplicate names or forward references
    pub fn from_yaml(text: &str) -> Result<Self> {
        let document: GraphDocument = serde_yaml::from_str(text)?;
        Self::from_document(document)
    }

    /// Load a graph from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` on malformed documents and
    /// registration errors on duplicate names or forward references
    pub fn from_json(text: &str) -> Result<Self> {
        let document: GraphDocument = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    /// Serialize the graph to a YAML document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_yaml(&self) -> Result<String> {
        let document = GraphDocument {
            types: self.types.clone(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    fn from_document(document: GraphDocument) -> Result<Self> {
        let mut graph = Self::new();
        for (name, mut definition) in document.types {
            definition.name = name;
            graph.register(definition)?;
        }
        Ok(graph)
    }
}
