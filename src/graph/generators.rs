use crate::graph::DirectedGraph;
use rand::prelude::*;

/// Generates a random directed graph with `n` nodes and roughly
/// `n * edges_per_node` edges with weights drawn from `1.0..100.0`.
/// Node identifiers are `"n0"` through `"n{n-1}"`.
pub fn generate_random(n: usize, edges_per_node: usize, rng: &mut impl Rng) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_capacity(n);

    let handles: Vec<_> = (0..n)
        .map(|i| graph.get_or_create_node(&format!("n{}", i)))
        .collect();

    for &orig in &handles {
        for _ in 0..edges_per_node {
            let dest = handles[rng.gen_range(0..n)];
            if dest != orig {
                graph.add_edge(orig, dest, rng.gen_range(1.0..100.0));
            }
        }
    }

    graph
}

/// Generates a `width` x `height` grid graph with unit-weight edges in the
/// four cardinal directions. Node identifiers are `"x,y"` coordinates.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let id = |x: usize, y: usize| format!("{},{}", x, y);

    for y in 0..height {
        for x in 0..width {
            let current = graph.get_or_create_node(&id(x, y));
            let connect = |nx: usize, ny: usize, g: &mut DirectedGraph<f64>| {
                let neighbor = g.get_or_create_node(&id(nx, ny));
                g.add_edge(current, neighbor, 1.0);
            };
            if x > 0 {
                connect(x - 1, y, &mut graph);
            }
            if x < width - 1 {
                connect(x + 1, y, &mut graph);
            }
            if y > 0 {
                connect(x, y - 1, &mut graph);
            }
            if y < height - 1 {
                connect(x, y + 1, &mut graph);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_graph_has_expected_node_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_random(50, 3, &mut rng);
        assert_eq!(graph.node_count(), 50);
        assert!(graph.edge_count() <= 150);
        assert!(graph.validate_non_negative());
    }

    #[test]
    fn grid_graph_is_symmetric() {
        let graph = generate_grid(4, 3);
        assert_eq!(graph.node_count(), 12);
        // interior edges come in matched pairs
        let a = graph.find_node("1,1").unwrap();
        let b = graph.find_node("2,1").unwrap();
        assert!(graph.has_edge(a, b));
        assert!(graph.has_edge(b, a));
    }
}
