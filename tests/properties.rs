use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slot_coloring::generators;
use slot_coloring::models::Graph;
use slot_coloring::scheduler::{color, ColoringStats, GreedyColorer, VertexOrder};
use slot_coloring::validation::validate;

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..40)
}

fn build(edges: &[(u8, u8)]) -> Graph {
    Graph::from_edges(edges.iter().map(|(a, b)| (format!("C{a}"), format!("C{b}"))))
}

proptest! {
    #[test]
    fn greedy_coloring_is_always_valid(edges in edge_list()) {
        let graph = build(&edges);
        let coloring = color(&graph);
        prop_assert!(validate(&graph, &coloring));
        prop_assert_eq!(coloring.len(), graph.vertex_count());
    }

    #[test]
    fn insertion_order_coloring_is_valid(edges in edge_list()) {
        let graph = build(&edges);
        let coloring = GreedyColorer::new().with_order(VertexOrder::Insertion).color(&graph);
        prop_assert!(validate(&graph, &coloring));
    }

    #[test]
    fn slots_within_degree_bound(edges in edge_list()) {
        let graph = build(&edges);
        let stats = ColoringStats::calculate(&graph, &color(&graph));
        prop_assert!(stats.within_degree_bound());
        prop_assert_eq!(stats.slots_used, stats.distinct_colors);
    }

    #[test]
    fn coloring_is_deterministic(edges in edge_list()) {
        prop_assert_eq!(color(&build(&edges)), color(&build(&edges)));
    }

    #[test]
    fn repeated_adds_are_idempotent(edges in edge_list()) {
        let once = build(&edges);
        let mut twice = build(&edges);
        for (a, b) in &edges {
            twice.add_edge(format!("C{a}"), format!("C{b}"));
            twice.add_vertex(format!("C{a}"));
        }
        prop_assert_eq!(&once, &twice);
        for v in once.vertices() {
            prop_assert_eq!(once.degree(v), twice.degree(v));
        }
    }

    #[test]
    fn adjacency_is_symmetric(edges in edge_list()) {
        let graph = build(&edges);
        for (a, b) in &edges {
            let (a, b) = (format!("C{a}"), format!("C{b}"));
            if a != b {
                prop_assert!(graph.neighbors(&a).contains(&b));
                prop_assert!(graph.neighbors(&b).contains(&a));
            }
        }
    }

    #[test]
    fn descending_degree_order_is_sorted(edges in edge_list()) {
        let graph = build(&edges);
        let order = graph.vertices_by_descending_degree();
        prop_assert_eq!(order.len(), graph.vertex_count());
        for pair in order.windows(2) {
            prop_assert!(graph.degree(pair[0]) >= graph.degree(pair[1]));
        }
    }

    #[test]
    fn random_graphs_color_validly(seed in any::<u64>(), n in 0usize..30, p in 0.0f64..1.0) {
        let graph = generators::random(n, p, &mut StdRng::seed_from_u64(seed));
        prop_assert!(validate(&graph, &color(&graph)));
    }
}

#[test]
fn complete_graph_needs_one_slot_per_vertex() {
    let graph = generators::complete(7);
    let coloring = color(&graph);
    assert_eq!(coloring.color_count(), 7);
    assert_eq!(coloring.slots().len(), 7);
}

#[test]
fn edge_free_graph_uses_one_slot() {
    let graph = generators::empty(9);
    let coloring = color(&graph);
    assert!(coloring.iter().all(|(_, slot)| slot == 0));
    assert_eq!(coloring.color_count(), 1);
}
