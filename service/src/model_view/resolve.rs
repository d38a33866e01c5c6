//! Member resolution over an instance's resolution order

use classmodel_core::{
    error::{ClassModelError, Result},
    types::{Instance, MemberKind, ResolvedMember},
};

use super::view::ModelView;

/// Utilities for resolving member names against a live instance
pub struct MemberResolution<'a> {
    view: &'a ModelView,
}

impl<'a> MemberResolution<'a> {
    /// Create a new member resolution helper
    #[must_use]
    pub fn new(view: &'a ModelView) -> Self {
        Self { view }
    }

    /// Resolve a member name on an instance
    ///
    /// Walks the resolution order of the instance's type front to back.
    /// A data declaration resolves to the instance-storage value when one
    /// is set, and is otherwise treated as unset (the walk continues). A
    /// callable declaration resolves to its signature immediately. A name
    /// held in instance storage without any declaration resolves last,
    /// tagged with the concrete type.
    ///
    /// Callable resolution is therefore resolution-order dependent, while
    /// data-attribute values depend only on what was written to instance
    /// storage — whichever initializer ran last wins.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no type in the order declares the name
    /// and the instance does not hold it
    pub fn resolve(&self, instance: &Instance, member_name: &str) -> Result<ResolvedMember> {
        let order = self.view.resolution_order(instance.type_name())?;

        for type_name in &order {
            let definition = self.view.graph().lookup(type_name)?;
            let Some(member) = definition.members.get(member_name) else {
                continue;
            };
            match member.kind {
                MemberKind::Data => {
                    if let Some(value) = instance.get_attribute(member_name) {
                        return Ok(ResolvedMember {
                            name: member_name.to_string(),
                            kind: MemberKind::Data,
                            supplied_by: type_name.clone(),
                            value: Some(value.clone()),
                            parameters: Vec::new(),
                        });
                    }
                    // Declared but unset: data members come from instance
                    // storage, not the type.
                }
                MemberKind::Callable => {
                    return Ok(ResolvedMember {
                        name: member_name.to_string(),
                        kind: MemberKind::Callable,
                        supplied_by: type_name.clone(),
                        value: None,
                        parameters: member.parameters.clone(),
                    });
                }
            }
        }

        if let Some(value) = instance.get_attribute(member_name) {
            return Ok(ResolvedMember {
                name: member_name.to_string(),
                kind: MemberKind::Data,
                supplied_by: instance.type_name().to_string(),
                value: Some(value.clone()),
                parameters: Vec::new(),
            });
        }

        Err(ClassModelError::member_not_found(
            instance.type_name(),
            member_name,
        ))
    }

    /// Get the type identity that supplies a member
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the name does not resolve
    pub fn supplying_type(&self, instance: &Instance, member_name: &str) -> Result<String> {
        Ok(self.resolve(instance, member_name)?.supplied_by)
    }

    /// Check whether a member name resolves to a callable
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the name does not resolve
    pub fn is_callable(&self, instance: &Instance, member_name: &str) -> Result<bool> {
        Ok(self.resolve(instance, member_name)?.is_callable())
    }
}
