//! Instance introspection: enumeration, partitioning, capability queries

use classmodel_core::{Value, error::Result, types::Instance};
use indexmap::{IndexMap, IndexSet};

use super::resolve::MemberResolution;
use super::view::ModelView;

/// Enumerates and partitions the members resolvable on an instance
pub struct Introspector<'a> {
    view: &'a ModelView,
}

impl<'a> Introspector<'a> {
    /// Create a new introspector
    #[must_use]
    pub fn new(view: &'a ModelView) -> Self {
        Self { view }
    }

    /// List every resolvable member name on an instance
    ///
    /// The order is stable and deterministic: for each type in resolution
    /// order, that type's callable members in declaration order; then
    /// instance-storage attributes in set order; de-duplicated keeping the
    /// first occurrence. A data member that was declared but never set is
    /// not resolvable and does not appear.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` if the instance's
    /// type cannot be resolved
    pub fn list_all(&self, instance: &Instance) -> Result<Vec<String>> {
        let order = self.view.resolution_order(instance.type_name())?;
        let mut names = IndexSet::new();

        for type_name in &order {
            let definition = self.view.graph().lookup(type_name)?;
            for (name, member) in &definition.members {
                if member.is_callable() {
                    names.insert(name.clone());
                }
            }
        }
        for (name, _) in instance.attributes() {
            names.insert(name.clone());
        }

        Ok(names.into_iter().collect())
    }

    /// List instance-storage data attributes, name to value, in set order
    #[must_use]
    pub fn list_data_attributes(&self, instance: &Instance) -> IndexMap<String, Value> {
        instance
            .attributes()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// List the names whose resolved member is callable
    ///
    /// Names carrying the reserved structural prefix are excluded from
    /// this user-facing list; they remain resolvable and appear in
    /// `list_all`. A callable declaration shadowed by a nearer data
    /// attribute is not listed — the list reflects what each name actually
    /// resolves to.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` or `InconsistentHierarchy` if the instance's
    /// type cannot be resolved
    pub fn list_callable_members(&self, instance: &Instance) -> Result<Vec<String>> {
        let reserved = &self.view.config().introspection.reserved_prefix;
        let resolution = MemberResolution::new(self.view);

        let mut names = Vec::new();
        for name in self.list_all(instance)? {
            if !reserved.is_empty() && name.starts_with(reserved.as_str()) {
                continue;
            }
            if resolution.resolve(instance, &name)?.is_callable() {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Capability query: can this instance respond to a member name
    ///
    /// Never fails; every resolution error collapses to `false`.
    #[must_use]
    pub fn supports(&self, instance: &Instance, member_name: &str) -> bool {
        MemberResolution::new(self.view)
            .resolve(instance, member_name)
            .is_ok()
    }
}
