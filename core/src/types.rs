//! Core type definitions for object-model graphs and instances

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Kind of a declared member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// Holds a value; produced by instance construction
    Data,
    /// Holds an invocable signature; has no per-instance value
    Callable,
}

/// Descriptor for a single member declared by a type
///
/// Data members carry an optional default value, which is the declaring
/// type's initializer contribution. Callable members carry a parameter list
/// as their signature. `declared_by` is stamped by the registry when the
/// owning type is registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Name of the member
    #[serde(default)]
    pub name: String,

    /// Data or callable
    pub kind: MemberKind,

    /// Type that declared this member (filled in at registration)
    #[serde(default)]
    pub declared_by: String,

    /// Initializer contribution for data members
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Parameter names for callable members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MemberDescriptor {
    /// Create a new data member with the given name
    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Data,
            declared_by: String::new(),
            default: None,
            parameters: Vec::new(),
            description: None,
        }
    }

    /// Create a new data member with an initializer contribution
    pub fn data_with_default(name: impl Into<String>, default: Value) -> Self {
        let mut member = Self::data(name);
        member.default = Some(default);
        member
    }

    /// Create a new callable member with the given name and parameters
    pub fn callable(name: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Callable,
            declared_by: String::new(),
            default: None,
            parameters,
            description: None,
        }
    }

    /// Check whether this member is callable
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Callable
    }
}

/// Definition of a single type in the graph
///
/// The order of `parents` is significant: it is the declared precedence
/// among direct parents. `members` preserves declaration order; inserting a
/// descriptor under an existing name replaces the earlier declaration.
/// Definitions are immutable once registered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Name of the type
    #[serde(default)]
    pub name: String,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Is this type abstract?
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<bool>,

    /// Direct parent types, in declared precedence order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    /// Locally declared members, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, MemberDescriptor>,
}

impl TypeDefinition {
    /// Create a new type definition with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare a member on this definition, replacing any earlier local
    /// declaration of the same name
    pub fn declare(&mut self, member: MemberDescriptor) {
        self.members.insert(member.name.clone(), member);
    }

    /// Check whether this type is abstract
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.abstract_.unwrap_or(false)
    }
}

/// A live instance: a concrete type identity plus its own field storage
///
/// Attribute set order is preserved and observable through introspection.
/// Concurrent mutation of one instance must be serialized by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    type_name: String,

    /// Locally-set attributes, in set order
    #[serde(default)]
    attributes: IndexMap<String, Value>,
}

impl Instance {
    /// Create an empty instance of the given concrete type
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Get the concrete type name
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Assign an attribute, overwriting any existing value
    ///
    /// A reassigned name keeps its original position in the set order.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) {
        self.attributes.insert(name.into(), value);
    }

    /// Get a locally-set attribute value
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Check whether an attribute is set on this instance
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterate locally-set attributes in set order
    pub fn attributes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.attributes.iter()
    }

    /// Number of locally-set attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check whether no attributes are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Transient result of resolving one member name on an instance
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMember {
    /// Name that was resolved
    pub name: String,

    /// Kind of the winning member
    pub kind: MemberKind,

    /// Type identity that supplied the winning definition
    pub supplied_by: String,

    /// Value, for data attributes
    pub value: Option<Value>,

    /// Parameter names, for callable members
    pub parameters: Vec<String>,
}

impl ResolvedMember {
    /// Check whether the resolved member is callable
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.kind == MemberKind::Callable
    }
}
