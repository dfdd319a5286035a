//! 共享图的跨线程访问测试

use std::collections::HashSet;
use std::sync::Once;
use std::thread;
use weighted_digraph::{AnyGraph, GraphOptions, Representation, SharedGraph, WeightedGraph};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn shared(repr: Representation) -> SharedGraph<u32, AnyGraph<u32>> {
    let options = GraphOptions::new(repr).with_invariant_checks(true);
    SharedGraph::new(AnyGraph::new(&options))
}

#[test]
fn test_concurrent_writers() {
    init_tracing();

    for repr in Representation::all() {
        let graph = shared(repr);
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let graph = graph.clone();
                thread::spawn(move || {
                    for i in 0..50u32 {
                        let src = t * 100 + i;
                        graph.set_edge_weight(src, 1000, i64::from(i) + 1).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(graph.vertices().len(), 201);
        assert_eq!(graph.sources(&1000).len(), 200);
        assert_eq!(graph.weight(&301, &1000), 2);

        assert!(graph.remove_vertex(&1000));
        assert_eq!(graph.with_read(|g| g.edge_count()), 0);
    }
}

#[test]
fn test_snapshot_survives_concurrent_mutation() {
    init_tracing();

    let graph = shared(Representation::AdjacencyMap);
    graph.set_edge_weight(1, 2, 3).unwrap();
    let snapshot = graph.vertices();

    let writer = graph.clone();
    thread::spawn(move || {
        writer.remove_vertex(&1);
        writer.add_vertex(9);
    })
    .join()
    .unwrap();

    assert_eq!(snapshot, HashSet::from([1, 2]));
    assert_eq!(graph.vertices(), HashSet::from([2, 9]));
    assert!(graph.debug_dump().contains("Vertices: [2, 9]"));
}

#[test]
fn test_negative_weight_through_shared_handle() {
    init_tracing();

    let graph = shared(Representation::EdgeList);
    let err = graph.set_edge_weight(1, 2, -4).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(graph.edges().is_empty());
    assert!(graph.vertices().is_empty());
}
