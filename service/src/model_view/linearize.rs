//! Merge-based linearization of resolution orders

use std::collections::{HashMap, VecDeque};

use classmodel_core::error::{ClassModelError, Result};

use super::graph::TypeGraph;

/// Cache for computed resolution orders
#[derive(Debug, Default)]
pub struct ResolutionCache {
    orders: HashMap<String, Vec<String>>,
}

impl ResolutionCache {
    /// Create a new resolution cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
        }
    }

    /// Get a cached resolution order
    #[must_use]
    pub fn get_order(&self, name: &str) -> Option<Vec<String>> {
        self.orders.get(name).cloned()
    }

    /// Cache a resolution order
    pub fn cache_order(&mut self, name: String, order: Vec<String>) {
        self.orders.insert(name, order);
    }

    /// Clear all cached orders
    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

/// Computes resolution orders over a type graph
///
/// For a type `T` with direct parents `P1..Pn` in declared order, the
/// resolution order of `T` is `T` followed by the merge of the parents'
/// own resolution orders and the plain list `[P1..Pn]`. The merge
/// repeatedly selects the head of the first input list that appears in no
/// other list's tail, so the result is consistent with every parent's
/// order and with the declared precedence among direct parents, and every
/// ancestor appears exactly once, before any of its own ancestors.
pub struct Linearizer<'a> {
    graph: &'a TypeGraph,
}

impl<'a> Linearizer<'a> {
    /// Create a new linearizer over a graph
    #[must_use]
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self { graph }
    }

    /// Compute the resolution order for a type
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if the type is not registered and
    /// `InconsistentHierarchy`, naming the conflicting candidate types,
    /// if no order consistent with every parent exists
    pub fn linearize(&self, name: &str) -> Result<Vec<String>> {
        let mut memo = HashMap::new();
        self.linearize_memo(name, &mut memo)
    }

    fn linearize_memo(
        &self,
        name: &str,
        memo: &mut HashMap<String, Vec<String>>,
    ) -> Result<Vec<String>> {
        if let Some(order) = memo.get(name) {
            return Ok(order.clone());
        }

        let definition = self.graph.lookup(name)?;
        let parents = &definition.parents;

        let order = if parents.is_empty() {
            vec![name.to_string()]
        } else {
            let mut inputs: Vec<VecDeque<String>> = Vec::with_capacity(parents.len() + 1);
            for parent in parents {
                inputs.push(self.linearize_memo(parent, memo)?.into());
            }
            inputs.push(parents.iter().cloned().collect());

            let mut order = vec![name.to_string()];
            order.extend(merge(name, inputs)?);
            order
        };

        tracing::trace!("Resolution order for '{}': {:?}", name, order);
        memo.insert(name.to_string(), order.clone());
        Ok(order)
    }
}

/// Merge parent orders and the declared-parent list into one total order
fn merge(name: &str, mut inputs: Vec<VecDeque<String>>) -> Result<Vec<String>> {
    let mut merged = Vec::new();

    while inputs.iter().any(|list| !list.is_empty()) {
        // Head of the first list that appears in no list's tail
        let candidate = inputs
            .iter()
            .filter_map(VecDeque::front)
            .find(|head| {
                !inputs
                    .iter()
                    .any(|list| list.iter().skip(1).any(|tail| tail == *head))
            })
            .cloned();

        let Some(selected) = candidate else {
            let mut conflicting: Vec<String> = inputs
                .iter()
                .filter_map(|list| list.front().cloned())
                .collect();
            conflicting.sort();
            conflicting.dedup();
            tracing::debug!(
                "Linearization of '{}' failed; blocked candidates: {:?}",
                name,
                conflicting
            );
            return Err(ClassModelError::inconsistent_hierarchy(name, conflicting));
        };

        for list in &mut inputs {
            if list.front() == Some(&selected) {
                list.pop_front();
            }
        }
        merged.push(selected);
    }

    Ok(merged)
}
