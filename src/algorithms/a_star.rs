//! Heuristic-guided search over a [`Graph`].

use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    algorithms::{
        frontier::FrontierEntry,
        path::{on_parent_chain, reconstruct_path},
    },
    error::{Error, Result},
    graph::Graph,
    route::Route,
};

/// Searches `graph` using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// guided by the straight-line distance to `goal` (see [`Graph::heuristic`]).
///
/// Produces the same cost as [`dijkstra`](crate::dijkstra::dijkstra) whenever
/// the node locations never overestimate the remaining travel cost, while
/// usually expanding far fewer nodes.
///
/// # Errors
/// [`Error::UnknownNode`] if `start` or `goal` is not in the graph, and
/// [`Error::NegativeCycle`] as described on [`a_star_with`].
pub fn a_star<N>(graph: &Graph<N>, start: &N, goal: &N) -> Result<Route<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    a_star_with(graph, start, goal, |node| graph.heuristic(node, goal))
}

/// A* search with a caller-supplied heuristic.
///
/// `heuristic` estimates the remaining cost from a node to `goal`. The
/// result is optimal if the estimate never exceeds the true remaining cost.
///
/// The frontier holds no closed set. A node whose `g` improves is pushed
/// again and expanded again, so an admissible but inconsistent heuristic
/// still yields the optimal cost. Outdated entries are expanded as well
/// unless [`RouterConfig::a_star_stale_guard`](crate::config::RouterConfig::a_star_stale_guard)
/// is set; with a consistent heuristic such an expansion relaxes nothing.
///
/// # Returns
/// The route and its cost, or [`Route::unreachable`] if the frontier runs
/// dry first.
///
/// # Errors
/// [`Error::UnknownNode`] if `start` or `goal` is not in the graph.
/// [`Error::NegativeCycle`] if the graph allows negative weights and the
/// search runs into a cycle of negative total weight before reaching `goal`.
pub fn a_star_with<N>(
    graph: &Graph<N>,
    start: &N,
    goal: &N,
    mut heuristic: impl FnMut(&N) -> f64,
) -> Result<Route<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    for node in [start, goal] {
        if !graph.contains_node(node) {
            return Err(Error::unknown_node(node));
        }
    }
    let stale_guard = graph.config().a_star_stale_guard;
    let check_cycles = graph.config().allow_negative_weights;
    debug!("A* from {:?} to {:?}", start, goal);

    let mut g_score: HashMap<N, f64> = HashMap::new();
    let mut f_score: HashMap<N, f64> = HashMap::new();
    let mut parents: HashMap<N, Option<N>> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut expanded = 0;

    let start_estimate = heuristic(start);
    g_score.insert(start.clone(), 0.0);
    f_score.insert(start.clone(), start_estimate);
    parents.insert(start.clone(), None);
    frontier.push(FrontierEntry::new(start_estimate, start.clone()));

    while let Some(FrontierEntry { key, node }) = frontier.pop() {
        let stale = key.into_inner() > f_score.get(&node).copied().unwrap_or(f64::INFINITY);
        if stale_guard && stale {
            trace!("Skipping stale entry {:?} at {}", node, key);
            continue;
        }

        let current = g_score.get(&node).copied().unwrap_or(f64::INFINITY);
        if node == *goal {
            let path = reconstruct_path(&parents, &node);
            debug!("A* reached {:?}: cost {}, {} expanded", goal, current, expanded);
            return Ok(Route::new(path, current, expanded));
        }
        expanded += 1;

        for (neighbor, weight) in graph.neighbors(&node) {
            let tentative = current + weight;
            if tentative < g_score.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                if check_cycles && on_parent_chain(&parents, &node, neighbor) {
                    warn!("Negative cycle through {:?}", neighbor);
                    return Err(Error::negative_cycle(neighbor));
                }
                let estimate = tentative + heuristic(neighbor);
                parents.insert(neighbor.clone(), Some(node.clone()));
                g_score.insert(neighbor.clone(), tentative);
                f_score.insert(neighbor.clone(), estimate);
                frontier.push(FrontierEntry::new(estimate, neighbor.clone()));
            }
        }
    }

    debug!("No route from {:?} to {:?} ({} expanded)", start, goal, expanded);
    Ok(Route::unreachable(expanded))
}

#[cfg(test)]
mod a_star_tests {
    use super::{a_star, a_star_with};
    use crate::{
        config::RouterConfig,
        dijkstra::dijkstra,
        error::Error,
        graph::Graph,
        location::Location,
        utils::{generator::generate_nodes_near, graph::build_edges},
    };

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A 10x10 grid with unit roads in both directions, located on the
    /// matching integer coordinates.
    fn grid(config: RouterConfig) -> Graph<(i32, i32)> {
        let nodes: Vec<(i32, i32)> = (0..10).flat_map(|x| (0..10).map(move |y| (x, y))).collect();
        let mut edges = Vec::new();
        for &(x, y) in &nodes {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = (x + dx, y + dy);
                if (0..10).contains(&next.0) && (0..10).contains(&next.1) {
                    edges.push(((x, y), next, 1.0));
                }
            }
        }
        let locations = nodes
            .iter()
            .map(|&(x, y)| ((x, y), Location::new(f64::from(x), f64::from(y))));
        Graph::with_config(nodes.clone(), edges, locations, config).unwrap()
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = grid(RouterConfig::default());
        let route = a_star(&graph, &(3, 3), &(3, 3)).unwrap();
        assert_eq!(route.path, vec![(3, 3)]);
        assert_eq!(route.cost, 0.0);
    }

    #[test]
    fn test_grid_expands_fewer_nodes_than_dijkstra() {
        init_logger();
        let graph = grid(RouterConfig::default());
        let start = (0, 0);
        let goal = (9, 0);

        let guided = a_star(&graph, &start, &goal).unwrap();
        let uniform = dijkstra(&graph, &start, &goal).unwrap();

        assert_eq!(guided.cost, 9.0);
        assert_eq!(guided.cost, uniform.cost);
        assert_eq!(guided.path.len(), 10);
        assert!(
            guided.expanded < uniform.expanded,
            "A* expanded {}, Dijkstra expanded {}",
            guided.expanded,
            uniform.expanded
        );
    }

    #[test]
    fn test_unreachable_and_unknown() {
        let graph: Graph<&str> = Graph::new(
            ["A", "B", "C"],
            [("A", "B", 1.0)],
            [("A", Location::new(0.0, 0.0)), ("C", Location::new(0.0, 1.0))],
        )
        .unwrap();
        let route = a_star(&graph, &"A", &"C").unwrap();
        assert!(route.path.is_empty());
        assert_eq!(route.cost, f64::INFINITY);

        assert!(matches!(
            a_star(&graph, &"A", &"Z"),
            Err(Error::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_missing_locations_fall_back_to_dijkstra() {
        let graph: Graph<char> = Graph::new(
            ['a', 'b', 'c', 'd'],
            [('a', 'd', 10.0), ('a', 'b', 1.0), ('b', 'c', 1.0), ('c', 'd', 1.0)],
            [],
        )
        .unwrap();
        let guided = a_star(&graph, &'a', &'d').unwrap();
        let uniform = dijkstra(&graph, &'a', &'d').unwrap();
        assert_eq!(guided, uniform);
    }

    /// `h(c) = 5` matches the true remaining cost but drops by more than
    /// the weight of `c -> b`, so `b` is first expanded through the direct
    /// edge from `s` and has to be improved and expanded again.
    fn inconsistent() -> (Graph<char>, impl Fn(&char) -> f64) {
        let graph: Graph<char> = Graph::new(
            ['s', 'a', 'b', 'c', 'g'],
            [
                ('s', 'a', 1.0),
                ('s', 'b', 4.0),
                ('a', 'c', 1.0),
                ('c', 'b', 1.0),
                ('b', 'g', 4.0),
            ],
            [],
        )
        .unwrap();
        let heuristic = |node: &char| match node {
            's' => 7.0,
            'a' => 6.0,
            'b' => 0.0,
            'c' => 5.0,
            _ => 0.0,
        };
        (graph, heuristic)
    }

    #[test]
    fn test_admissible_inconsistent_heuristic_stays_optimal() {
        let (graph, heuristic) = inconsistent();
        let route = a_star_with(&graph, &'s', &'g', heuristic).unwrap();
        assert_eq!(route.cost, 7.0);
        assert_eq!(route.path, vec!['s', 'a', 'c', 'b', 'g']);
    }

    fn with_stale_guard(graph: &Graph<char>) -> Graph<char> {
        let config = RouterConfig {
            a_star_stale_guard: true,
            ..RouterConfig::default()
        };
        Graph::with_config(
            graph.nodes().copied().collect::<Vec<_>>(),
            graph
                .edges()
                .into_iter()
                .map(|edge| (edge.from, edge.to, edge.cost.into_inner())),
            [],
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_stale_guard_gives_same_route() {
        let (graph, heuristic) = inconsistent();
        let unguarded = a_star_with(&graph, &'s', &'g', &heuristic).unwrap();
        let guarded = a_star_with(&with_stale_guard(&graph), &'s', &'g', &heuristic).unwrap();

        assert_eq!(guarded.path, unguarded.path);
        assert_eq!(guarded.cost, unguarded.cost);
        // every improvement here happens before the outdated entry pops
        assert_eq!(guarded.expanded, unguarded.expanded);
    }

    /// `x` is first reached through the expensive edge from `s`, improved
    /// through `y`, and expanded. Its first entry then pops before `g`.
    #[test]
    fn test_stale_guard_skips_outdated_entry() {
        let graph: Graph<char> = Graph::new(
            ['s', 'x', 'y', 'g'],
            [('s', 'x', 5.0), ('s', 'y', 1.0), ('y', 'x', 1.0), ('x', 'g', 10.0)],
            [],
        )
        .unwrap();
        let unguarded = a_star_with(&graph, &'s', &'g', |_| 0.0).unwrap();
        let guarded = a_star_with(&with_stale_guard(&graph), &'s', &'g', |_| 0.0).unwrap();

        assert_eq!(unguarded.path, vec!['s', 'y', 'x', 'g']);
        assert_eq!(guarded.path, unguarded.path);
        assert_eq!(guarded.cost, 12.0);
        assert_eq!(unguarded.cost, 12.0);
        // s, y, x and the outdated x once more
        assert_eq!(unguarded.expanded, 4);
        assert_eq!(guarded.expanded, 3);
    }

    #[test]
    fn test_negative_cycle_is_reported() {
        let config = RouterConfig {
            allow_negative_weights: true,
            ..RouterConfig::default()
        };
        let graph: Graph<char> = Graph::with_config(
            ['a', 'b', 'c'],
            [('a', 'b', 1.0), ('b', 'a', -2.0)],
            [
                ('a', Location::new(0.0, 0.0)),
                ('b', Location::new(0.5, 0.0)),
                ('c', Location::new(0.0, 1.0)),
            ],
            config,
        )
        .unwrap();
        assert!(matches!(
            a_star(&graph, &'a', &'c'),
            Err(Error::NegativeCycle { .. })
        ));

        let guarded = Graph::with_config(
            ['a', 'b', 'c'],
            [('a', 'b', 1.0), ('b', 'a', -2.0)],
            [],
            RouterConfig {
                a_star_stale_guard: true,
                ..config
            },
        )
        .unwrap();
        assert!(matches!(
            a_star_with(&guarded, &'a', &'c', |_| 0.0),
            Err(Error::NegativeCycle { .. })
        ));
    }

    /// Coordinates this far apart overflow the straight-line distance. The
    /// estimate falls back to zero instead of steering the search.
    #[test]
    fn test_overflowing_locations_fall_back_to_dijkstra() {
        let graph: Graph<char> = Graph::new(
            ['s', 'a', 'b', 'g'],
            [('s', 'g', 10.0), ('s', 'a', 1.0), ('a', 'b', 1.0), ('b', 'g', 1.0)],
            [
                ('s', Location::new(-f64::MAX, 0.0)),
                ('a', Location::new(-f64::MAX, 0.0)),
                ('b', Location::new(-f64::MAX, 0.0)),
                ('g', Location::new(f64::MAX, 0.0)),
            ],
        )
        .unwrap();
        let guided = a_star(&graph, &'s', &'g').unwrap();
        let uniform = dijkstra(&graph, &'s', &'g').unwrap();
        assert_eq!(guided.path, vec!['s', 'a', 'b', 'g']);
        assert_eq!(guided.cost, 3.0);
        assert_eq!(guided.cost, uniform.cost);
    }

    #[test]
    fn test_overestimating_heuristic_can_miss_optimum() {
        let graph: Graph<char> = Graph::new(
            ['s', 'a', 'g'],
            [('s', 'a', 1.0), ('a', 'g', 1.0), ('s', 'g', 5.0)],
            [],
        )
        .unwrap();
        let route = a_star_with(&graph, &'s', &'g', |node| if *node == 'a' { 100.0 } else { 0.0 })
            .unwrap();
        assert_eq!(route.cost, 5.0);
        assert_eq!(dijkstra(&graph, &'s', &'g').unwrap().cost, 2.0);
    }

    /// Edge weights are at least the straight-line distance, so the
    /// location heuristic is consistent and both solvers must agree.
    #[test]
    fn test_matches_dijkstra_on_random_networks() {
        init_logger();
        for seed in 0..10 {
            let nodes = generate_nodes_near(&Location::new(50.0, -20.0), 100.0, 60, seed);
            let edges = build_edges(&nodes, 40.0, |from, to| from.distance_to(to) * 1.3)
                .into_iter()
                .map(|(from, to, cost)| (from, to, cost.into_inner()));
            let graph = Graph::new(
                nodes.iter().map(|(id, _)| *id),
                edges,
                nodes.iter().copied(),
            )
            .unwrap();

            for goal in 0..60 {
                let guided = a_star(&graph, &0, &goal).unwrap();
                let uniform = dijkstra(&graph, &0, &goal).unwrap();
                assert_eq!(guided.path.is_empty(), uniform.path.is_empty());
                if uniform.cost.is_finite() {
                    assert!(
                        (guided.cost - uniform.cost).abs() < 1e-9,
                        "seed {} goal {}: {} vs {}",
                        seed,
                        goal,
                        guided.cost,
                        uniform.cost
                    );
                } else {
                    assert_eq!(guided.cost, f64::INFINITY);
                }
            }
        }
    }
}
