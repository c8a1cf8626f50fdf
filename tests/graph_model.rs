//! Graph model scenarios: identity rules, multigraph edges and cloning

use mixgraph::{EdgeKind, Error, Graph, GraphvizExporter, JsonExporter, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type VertexRow = (VertexId, f64, i64);
type EdgeRow = (VertexId, VertexId, EdgeKind, Option<f64>);

fn vertex_rows(graph: &Graph) -> Vec<VertexRow> {
    graph
        .vertices()
        .map(|v| (v.id().clone(), v.balance(), v.group()))
        .collect()
}

fn edge_rows(graph: &Graph) -> Vec<EdgeRow> {
    graph
        .edges()
        .map(|e| {
            let (from, to) = e.vertices();
            (from.id().clone(), to.id().clone(), e.kind(), e.weight())
        })
        .collect()
}

fn assert_graph_equals(expected: &Graph, actual: &Graph) {
    assert_eq!(vertex_rows(expected), vertex_rows(actual));
    assert_eq!(edge_rows(expected), edge_rows(actual));
    assert_eq!(expected.number_of_edges(), actual.number_of_edges());
    assert_eq!(expected.balance(), actual.balance());
}

fn random_graph(rng: &mut StdRng) -> Graph {
    let mut graph = Graph::new();
    let count = rng.gen_range(1..12);
    let handles = graph.create_vertices(count);

    for &h in &handles {
        let balance = rng.gen_range(-5..=5) as f64;
        let group = rng.gen_range(0..3);
        graph
            .vertex_mut_at(h)
            .unwrap()
            .set_balance(balance)
            .set_group(group);
    }

    for _ in 0..rng.gen_range(0..25) {
        let from = handles[rng.gen_range(0..handles.len())];
        let to = handles[rng.gen_range(0..handles.len())];
        let mut v = graph.vertex_mut_at(from).unwrap();
        match (rng.gen_bool(0.5), rng.gen_bool(0.3)) {
            (true, false) => v.create_edge_to(to).unwrap(),
            (true, true) => v.create_weighted_edge_to(to, rng.gen_range(0..10) as f64).unwrap(),
            (false, false) => v.create_edge(to).unwrap(),
            (false, true) => v.create_weighted_edge(to, rng.gen_range(0..10) as f64).unwrap(),
        };
    }
    graph
}

#[test]
fn test_vertex_clone_into_other_graph() {
    let mut graph = Graph::new();
    graph.create_vertex(123).unwrap().set_balance(10.0).set_group(4);

    let mut new_graph = Graph::new();
    let original = graph.vertex(123).unwrap();
    let cloned = new_graph.create_vertex_clone(original.vertex()).unwrap();

    assert_eq!(cloned.id(), original.id());
    assert_eq!(cloned.balance(), 10.0);
    assert_eq!(cloned.group(), 4);
}

#[test]
fn test_vertex_clone_into_same_graph_fails() {
    let mut graph = Graph::new();
    let two = graph.create_vertex(2).unwrap().handle();
    graph.create_vertex(123).unwrap().create_edge(two).unwrap();
    let snapshot = graph.vertex(123).unwrap().vertex().clone();

    for _ in 0..2 {
        let err = graph.create_vertex_clone(&snapshot).unwrap_err();
        assert!(matches!(err, Error::VertexAlreadyExists(ref id) if *id == VertexId::from(123)));
    }

    assert_eq!(graph.number_of_vertices(), 2);
    assert_eq!(graph.number_of_edges(), 1);
}

#[test]
fn test_graph_clone_empty() {
    let graph = Graph::new();
    let clone = graph.create_graph_clone();

    assert_graph_equals(&graph, &clone);
    assert_ne!(graph.id(), clone.id());
}

#[test]
fn test_graph_clone_twice() {
    let mut graph = Graph::new();
    graph.create_vertex(123).unwrap().set_balance(10.0).set_group(4);

    let clone = graph.create_graph_clone();
    assert_graph_equals(&graph, &clone);

    let clone_twice = clone.create_graph_clone();
    assert_graph_equals(&graph, &clone_twice);
}

#[test]
fn test_graph_clone_is_independent() {
    let mut graph = Graph::new();
    let two = graph.create_vertex(2).unwrap().handle();
    graph
        .create_vertex(1)
        .unwrap()
        .set_balance(1.0)
        .create_weighted_edge_to(two, 3.0)
        .unwrap();

    let mut clone = graph.clone();
    assert_graph_equals(&graph, &clone);

    let three = clone.create_vertex(3).unwrap().handle();
    clone.vertex_mut(1).unwrap().set_balance(99.0).create_edge(three).unwrap();

    assert_eq!(graph.number_of_vertices(), 2);
    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.vertex(1).unwrap().balance(), 1.0);
    assert_eq!(graph.vertex(1).unwrap().degree(), 1);

    graph.vertex_mut(2).unwrap().set_group(8);
    assert_eq!(clone.vertex(2).unwrap().group(), 0);

    // handles do not cross into the clone
    let err = clone.vertex_mut(2).unwrap().create_edge(two).unwrap_err();
    assert!(matches!(err, Error::CrossGraphEdge { .. }));
}

#[test]
fn test_graph_clone_edgeless() {
    let mut graph = Graph::new();
    let two = graph.create_vertex(2).unwrap().handle();
    graph.create_vertex(1).unwrap().create_edge_to(two).unwrap();
    graph.create_vertex(3).unwrap().create_edge(two).unwrap();

    let edgeless = graph.create_graph_clone_edgeless();

    let mut expected = Graph::new();
    expected.create_vertex(2).unwrap();
    expected.create_vertex(1).unwrap();
    expected.create_vertex(3).unwrap();

    assert_graph_equals(&expected, &edgeless);
    assert_eq!(edgeless.number_of_edges(), 0);
    assert!(edgeless.vertices().all(|v| v.is_isolated()));
}

#[test]
fn test_random_graph_clones() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let graph = random_graph(&mut rng);

        let clone = graph.create_graph_clone();
        assert_graph_equals(&graph, &clone);
        assert_eq!(graph.weight_min(), clone.weight_min());
        assert_eq!(graph.weight_max(), clone.weight_max());

        for (a, b) in graph.vertices().zip(clone.vertices()) {
            assert_eq!(a.degree(), b.degree());
            assert_eq!(a.degree_in(), b.degree_in());
            assert_eq!(a.degree_out(), b.degree_out());
        }

        let edgeless = graph.create_graph_clone_edgeless();
        assert_eq!(vertex_rows(&graph), vertex_rows(&edgeless));
        assert_eq!(edgeless.number_of_edges(), 0);
    }
}

#[test]
fn test_balance_and_weight_of_empty_graph() {
    let graph = Graph::new();
    assert_eq!(graph.balance(), 0.0);
    assert_eq!(graph.weight_min(), None);
    assert_eq!(graph.number_of_edges(), 0);
}

#[test]
fn test_create_vertex_auto_id() {
    let mut graph = Graph::new();
    assert_eq!(graph.create_vertex_auto().id(), &VertexId::from(0));
    graph.create_vertex(1).unwrap();
    assert_eq!(graph.create_vertex_auto().id(), &VertexId::from(2));
}

#[test]
fn test_create_vertex_with_id() {
    let mut graph = Graph::new();
    let v = graph.create_vertex(11).unwrap();
    assert_eq!(v.id(), &VertexId::from(11));
    assert_eq!(v.id().as_int(), Some(11));
}

#[test]
fn test_fail_duplicate_vertex() {
    let mut graph = Graph::new();
    graph.create_vertex(33).unwrap();

    assert!(matches!(
        graph.create_vertex(33),
        Err(Error::VertexAlreadyExists(_))
    ));
    assert_eq!(graph.number_of_vertices(), 1);
    assert!(graph.has_vertex(33));
}

#[test]
fn test_exporter() {
    let mut graph = Graph::new();
    let two = graph.create_vertex(2).unwrap().handle();
    graph.create_vertex(1).unwrap().create_edge(two).unwrap();

    assert_ne!(graph.to_string(), "");
    assert_eq!(graph.exporter().name(), "graphviz");

    graph.set_exporter(Box::new(JsonExporter::default()));
    assert!(graph.to_string().starts_with('{'));

    graph.set_exporter(Box::new(GraphvizExporter::default()));
    assert!(graph.export().unwrap().contains("\"1\" -- \"2\""));
}

#[test]
fn test_has_vertex() {
    let mut graph = Graph::new();
    graph.create_vertex(1).unwrap();
    graph.create_vertex("string").unwrap();

    assert!(!graph.has_vertex(2));
    assert!(graph.has_vertex(1));

    assert!(!graph.has_vertex("non-existant"));
    assert!(graph.has_vertex("string"));

    assert!(graph.has_vertex("1"));
    assert_eq!(graph.vertex("1").unwrap().id(), &VertexId::Int(1));
}

#[test]
fn test_create_multigraph() {
    let mut graph = Graph::new();
    let v2 = graph.create_vertex(2).unwrap().handle();
    let mut v1 = graph.create_vertex(1).unwrap();

    let e1 = v1.create_edge(v2).unwrap();
    let e2 = v1.create_edge(v2).unwrap();
    assert_ne!(e1, e2);

    assert_eq!(graph.number_of_edges(), 2);
    let v1 = graph.vertex(1).unwrap();
    assert_eq!(v1.edges().len(), 2);
    assert_eq!(graph.vertex(2).unwrap().edges().len(), 2);

    let keys: Vec<VertexId> = v1.vertices_edge().keys().map(|id| (*id).clone()).collect();
    assert_eq!(keys, vec![VertexId::from(2)]);
    assert!(graph.has_edge_parallel());
}

#[test]
fn test_create_mixed_graph() {
    // v1 -- v2 -> v3
    let mut graph = Graph::new();
    graph.create_vertex(1).unwrap();
    let v2 = graph.create_vertex(2).unwrap().handle();
    let v3 = graph.create_vertex(3).unwrap().handle();

    graph.vertex_mut(1).unwrap().create_edge(v2).unwrap();
    graph.vertex_mut_at(v2).unwrap().create_edge_to(v3).unwrap();

    assert_eq!(graph.number_of_edges(), 2);
    assert!(graph.is_mixed());

    let v2 = graph.vertex(2).unwrap();
    assert_eq!(v2.edges().len(), 2);
    assert_eq!(v2.edges_out().len(), 2);
    assert_eq!(v2.edges_in().len(), 1);

    let to: Vec<VertexId> = v2.vertices_edge_to().keys().map(|id| (*id).clone()).collect();
    assert_eq!(to, vec![VertexId::from(1), VertexId::from(3)]);

    let from: Vec<VertexId> = v2.vertices_edge_from().keys().map(|id| (*id).clone()).collect();
    assert_eq!(from, vec![VertexId::from(1)]);
}
