//! Tests for resolution-order linearization over diamond hierarchies

use classmodel_core::ClassModelConfig;
use classmodel_core::error::ClassModelError;
use classmodel_core::types::TypeDefinition;
use classmodel_service::model_view::{ModelView, TypeGraph};
use pretty_assertions::assert_eq;

fn register(graph: &mut TypeGraph, name: &str, parents: &[&str]) {
    let mut definition = TypeDefinition::new(name);
    definition.parents = parents.iter().map(ToString::to_string).collect();
    graph.register(definition).expect("Failed to register type");
}

/// Base; A and B both extend Base; C extends A, B in that order
fn diamond_graph() -> TypeGraph {
    let mut graph = TypeGraph::new();
    register(&mut graph, "Base", &[]);
    register(&mut graph, "A", &["Base"]);
    register(&mut graph, "B", &["Base"]);
    register(&mut graph, "C", &["A", "B"]);
    graph
}

/// A orders X before Y, B orders Y before X, C wants both
fn conflicting_graph() -> TypeGraph {
    let mut graph = TypeGraph::new();
    register(&mut graph, "X", &[]);
    register(&mut graph, "Y", &[]);
    register(&mut graph, "A", &["X", "Y"]);
    register(&mut graph, "B", &["Y", "X"]);
    register(&mut graph, "C", &["A", "B"]);
    graph
}

#[test]
fn test_diamond_preserves_declared_precedence() {
    let view = ModelView::new(diamond_graph());

    let order = view
        .resolution_order("C")
        .expect("Failed to compute resolution order");
    assert_eq!(order, vec!["C", "A", "B", "Base"]);
}

#[test]
fn test_shared_ancestor_appears_exactly_once() {
    let view = ModelView::new(diamond_graph());

    let order = view
        .resolution_order("C")
        .expect("Failed to compute resolution order");
    let occurrences = order.iter().filter(|name| *name == "Base").count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_type_is_first_in_its_own_order() {
    let view = ModelView::new(diamond_graph());

    for name in ["Base", "A", "B", "C"] {
        let order = view
            .resolution_order(name)
            .expect("Failed to compute resolution order");
        assert_eq!(order[0], name);
    }
}

#[test]
fn test_monotonicity_over_parent_orders() {
    let view = ModelView::new(diamond_graph());

    let child_order = view
        .resolution_order("C")
        .expect("Failed to compute resolution order");
    for parent in ["A", "B"] {
        let parent_order = view
            .resolution_order(parent)
            .expect("Failed to compute resolution order");
        let positions: Vec<usize> = parent_order
            .iter()
            .map(|name| {
                child_order
                    .iter()
                    .position(|candidate| candidate == name)
                    .expect("Ancestor missing from child order")
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "order of '{parent}' not preserved in order of 'C'"
        );
    }
}

#[test]
fn test_conflicting_precedence_is_rejected() {
    let view = ModelView::new(conflicting_graph());

    let err = view.resolution_order("C").unwrap_err();
    match err {
        ClassModelError::InconsistentHierarchy { name, conflicting } => {
            assert_eq!(name, "C");
            assert_eq!(conflicting, vec!["X", "Y"]);
        }
        other => panic!("Expected InconsistentHierarchy, got {other}"),
    }
}

#[test]
fn test_conflict_does_not_poison_unaffected_types() {
    let view = ModelView::new(conflicting_graph());

    // The conflicting type fails, repeatedly and identically.
    assert!(view.resolution_order("C").is_err());
    assert!(view.resolution_order("C").is_err());

    // Every other type in the graph remains resolvable.
    assert_eq!(
        view.resolution_order("A")
            .expect("Failed to compute resolution order"),
        vec!["A", "X", "Y"]
    );
    assert_eq!(
        view.resolution_order("B")
            .expect("Failed to compute resolution order"),
        vec!["B", "Y", "X"]
    );
}

#[test]
fn test_repeated_computation_is_deterministic() {
    let view = ModelView::new(diamond_graph());

    let first = view
        .resolution_order("C")
        .expect("Failed to compute resolution order");
    let second = view
        .resolution_order("C")
        .expect("Failed to compute resolution order");
    assert_eq!(first, second);

    // The same graph without caching yields the identical sequence.
    let mut config = ClassModelConfig::default();
    config.resolution.enable_cache = false;
    let uncached = ModelView::with_config(diamond_graph(), config);
    assert_eq!(
        uncached
            .resolution_order("C")
            .expect("Failed to compute resolution order"),
        first
    );
    assert_eq!(
        uncached
            .resolution_order("C")
            .expect("Failed to compute resolution order"),
        first
    );
}

#[test]
fn test_deeper_lattice_linearizes() {
    // Two stacked diamonds sharing one root.
    let mut graph = TypeGraph::new();
    register(&mut graph, "Root", &[]);
    register(&mut graph, "Left", &["Root"]);
    register(&mut graph, "Right", &["Root"]);
    register(&mut graph, "Join", &["Left", "Right"]);
    register(&mut graph, "WideLeft", &["Join"]);
    register(&mut graph, "WideRight", &["Join"]);
    register(&mut graph, "Top", &["WideLeft", "WideRight"]);

    let view = ModelView::new(graph);
    let order = view
        .resolution_order("Top")
        .expect("Failed to compute resolution order");
    assert_eq!(
        order,
        vec![
            "Top",
            "WideLeft",
            "WideRight",
            "Join",
            "Left",
            "Right",
            "Root"
        ]
    );
}
