//! Performance benchmarks for resolution-order computation

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use classmodel_core::types::TypeDefinition;
use classmodel_service::model_view::{Linearizer, ModelView, TypeGraph};

fn register(graph: &mut TypeGraph, name: &str, parents: &[String]) {
    let mut definition = TypeDefinition::new(name);
    definition.parents = parents.to_vec();
    if let Err(err) = graph.register(definition) {
        panic!("Failed to register benchmark type: {err}");
    }
}

/// Single-inheritance chain of the given depth
fn chain_graph(depth: usize) -> TypeGraph {
    let mut graph = TypeGraph::new();
    register(&mut graph, "C0", &[]);
    for level in 1..=depth {
        register(&mut graph, &format!("C{level}"), &[format!("C{}", level - 1)]);
    }
    graph
}

/// Stack of diamonds: each level splits from the previous join and rejoins
fn lattice_graph(levels: usize) -> TypeGraph {
    let mut graph = TypeGraph::new();
    register(&mut graph, "J0", &[]);
    for level in 1..=levels {
        let previous = format!("J{}", level - 1);
        register(&mut graph, &format!("L{level}"), std::slice::from_ref(&previous));
        register(&mut graph, &format!("R{level}"), std::slice::from_ref(&previous));
        register(
            &mut graph,
            &format!("J{level}"),
            &[format!("L{level}"), format!("R{level}")],
        );
    }
    graph
}

fn bench_linearize(c: &mut Criterion) {
    let mut group = c.benchmark_group("linearize");

    for depth in [8, 32, 128] {
        let graph = chain_graph(depth);
        group.bench_with_input(BenchmarkId::new("chain", depth), &graph, |b, graph| {
            let top = format!("C{depth}");
            b.iter(|| {
                Linearizer::new(graph)
                    .linearize(black_box(&top))
                    .expect("Failed to linearize chain")
            });
        });
    }

    for levels in [4, 16] {
        let graph = lattice_graph(levels);
        group.bench_with_input(BenchmarkId::new("lattice", levels), &graph, |b, graph| {
            let top = format!("J{levels}");
            b.iter(|| {
                Linearizer::new(graph)
                    .linearize(black_box(&top))
                    .expect("Failed to linearize lattice")
            });
        });
    }

    group.finish();
}

fn bench_cached_resolution(c: &mut Criterion) {
    let view = ModelView::new(lattice_graph(16));
    let top = "J16";
    // Prime the cache once so the benchmark measures the read path.
    view.resolution_order(top)
        .expect("Failed to prime resolution cache");

    c.bench_function("resolution_order_cached", |b| {
        b.iter(|| {
            view.resolution_order(black_box(top))
                .expect("Failed to read cached order")
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    // The callable lives on the root, so resolution walks the full order.
    let mut graph = TypeGraph::new();
    let mut root = TypeDefinition::new("C0");
    root.declare(classmodel_core::types::MemberDescriptor::callable(
        "perform",
        vec!["venue".to_string()],
    ));
    if let Err(err) = graph.register(root) {
        panic!("Failed to register benchmark type: {err}");
    }
    for level in 1..=32 {
        register(&mut graph, &format!("C{level}"), &[format!("C{}", level - 1)]);
    }

    let view = ModelView::new(graph);
    let instance = view
        .instantiate("C32")
        .expect("Failed to instantiate benchmark type");

    c.bench_function("resolve_callable", |b| {
        b.iter(|| {
            view.resolve(black_box(&instance), black_box("perform"))
                .expect("Failed to resolve member")
        });
    });
}

criterion_group!(
    benches,
    bench_linearize,
    bench_cached_resolution,
    bench_resolve
);
criterion_main!(benches);
