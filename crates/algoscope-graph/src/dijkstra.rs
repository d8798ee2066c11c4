use algoscope_core::{Distance, EdgeId, GraphSnapshot, NodeId, Step, StepKind};

use crate::graph::Graph;
use crate::no_start;

/// Distance table and predecessor links from one search.
struct Search {
    dist: Vec<Distance>,
    /// Predecessor index and the edge used to reach each node.
    prev: Vec<Option<(usize, EdgeId)>>,
    /// Finalized nodes in the order they were processed.
    order: Vec<usize>,
}

impl Search {
    fn snapshot(&self, graph: &Graph, current: Option<usize>, active_edges: Vec<EdgeId>) -> GraphSnapshot {
        let nodes = graph.nodes();
        GraphSnapshot {
            visited: self.order.iter().map(|&i| nodes[i].id.clone()).collect(),
            current: current.map(|i| nodes[i].id.clone()),
            active_edges,
            frontier: Vec::new(),
            distances: Some(nodes.iter().map(|n| n.id.clone()).zip(self.dist.iter().copied()).collect()),
        }
    }

    fn tree_edges(&self) -> Vec<EdgeId> {
        self.prev.iter().flatten().map(|(_, edge)| edge.clone()).collect()
    }
}

/// Dijkstra's algorithm with a linear scan for the closest unfinalized node.
/// Ties go to the node inserted first. The final step highlights the
/// shortest-path tree.
pub fn dijkstra(graph: &Graph, start: &str) -> Vec<Step> {
    let Some(origin) = graph.position_of(start) else {
        return no_start("Dijkstra", 19);
    };

    let mut steps = Vec::new();
    let search = run(graph, origin, &mut steps);
    steps.push(
        Step::new(
            StepKind::Complete,
            "Dijkstra's algorithm complete",
            search.snapshot(graph, None, search.tree_edges()),
        )
        .at_line(19),
    );
    steps
}

/// Total weight and node path of the cheapest route from `start` to
/// `target`, or `None` when either is missing or `target` is unreachable.
pub fn shortest_path(graph: &Graph, start: &str, target: &str) -> Option<(u64, Vec<NodeId>)> {
    let origin = graph.position_of(start)?;
    let goal = graph.position_of(target)?;

    let search = run(graph, origin, &mut Vec::new());
    let total = search.dist[goal].value()?;

    let nodes = graph.nodes();
    let mut path = vec![nodes[goal].id.clone()];
    let mut at = goal;
    while let Some((from, _)) = &search.prev[at] {
        at = *from;
        path.push(nodes[at].id.clone());
    }
    path.reverse();
    Some((total, path))
}

fn run(graph: &Graph, origin: usize, steps: &mut Vec<Step>) -> Search {
    let nodes = graph.nodes();
    let n = nodes.len();
    let mut search = Search {
        dist: vec![Distance::Infinite; n],
        prev: vec![None; n],
        order: Vec::new(),
    };
    let mut done = vec![false; n];
    search.dist[origin] = Distance::Finite(0);

    steps.push(
        Step::new(
            StepKind::Start,
            format!("Initializing distances from {}", nodes[origin].label),
            search.snapshot(graph, Some(origin), Vec::new()),
        )
        .at_line(5),
    );

    loop {
        // min_by_key keeps the first of equal minima
        let closest = (0..n)
            .filter(|&i| !done[i] && search.dist[i].is_finite())
            .min_by_key(|&i| search.dist[i]);
        let Some(u) = closest else {
            break;
        };
        let Distance::Finite(du) = search.dist[u] else {
            break;
        };

        done[u] = true;
        search.order.push(u);
        steps.push(
            Step::new(
                StepKind::Process,
                format!("Processing node {} (distance: {du})", nodes[u].label),
                search.snapshot(graph, Some(u), Vec::new()),
            )
            .at_line(10),
        );

        for (next, edge) in graph.neighbors(nodes[u].id.as_str()) {
            let Some(v) = graph.position_of(next.as_str()) else {
                continue;
            };
            if done[v] {
                continue;
            }
            let alt = Distance::Finite(du + u64::from(edge.weight));
            if alt < search.dist[v] {
                search.dist[v] = alt;
                search.prev[v] = Some((u, edge.id.clone()));
                steps.push(
                    Step::new(
                        StepKind::Relax,
                        format!("Updated distance to {}: {alt}", nodes[v].label),
                        search.snapshot(graph, Some(u), vec![edge.id.clone()]),
                    )
                    .at_line(14),
                );
            }
        }
    }

    search
}
