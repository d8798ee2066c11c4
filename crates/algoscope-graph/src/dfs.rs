use std::collections::HashSet;

use algoscope_core::{EdgeId, GraphSnapshot, NodeId, Step, StepKind};

use crate::graph::Graph;
use crate::no_start;

/// Depth-first search by recursion. Emits a step on entering each node and
/// one per unvisited neighbour it descends into.
pub fn dfs(graph: &Graph, start: &str) -> Vec<Step> {
    let Some(origin) = graph.node(start) else {
        return no_start("DFS", 8);
    };

    let mut walk = Walk {
        graph,
        seen: HashSet::new(),
        visited: Vec::new(),
        path: Vec::new(),
    };
    let mut steps = Vec::new();
    walk.enter(&origin.id, &mut steps);

    steps.push(
        Step::new(
            StepKind::Complete,
            "DFS traversal complete",
            GraphSnapshot {
                visited: walk.visited,
                ..Default::default()
            },
        )
        .at_line(8),
    );
    steps
}

struct Walk<'g> {
    graph: &'g Graph,
    seen: HashSet<NodeId>,
    visited: Vec<NodeId>,
    /// Recursion stack, shown as the frontier.
    path: Vec<NodeId>,
}

impl Walk<'_> {
    fn enter(&mut self, node: &NodeId, steps: &mut Vec<Step>) {
        self.seen.insert(node.clone());
        self.visited.push(node.clone());
        self.path.push(node.clone());
        steps.push(
            Step::new(
                StepKind::Visit,
                format!("Visiting node {}", self.graph.label(node.as_str())),
                self.snapshot(node, None),
            )
            .at_line(1),
        );

        let graph = self.graph;
        for (next, edge) in graph.neighbors(node.as_str()) {
            // an earlier branch may have reached it already
            if self.seen.contains(next) {
                continue;
            }
            steps.push(
                Step::new(
                    StepKind::Explore,
                    format!("Exploring neighbor {}", graph.label(next.as_str())),
                    self.snapshot(node, Some(edge.id.clone())),
                )
                .at_line(4),
            );
            self.enter(next, steps);
        }

        self.path.pop();
    }

    fn snapshot(&self, current: &NodeId, edge: Option<EdgeId>) -> GraphSnapshot {
        GraphSnapshot {
            visited: self.visited.clone(),
            current: Some(current.clone()),
            active_edges: edge.into_iter().collect(),
            frontier: self.path.clone(),
            distances: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_edge_list;

    fn order(steps: &[Step]) -> Vec<String> {
        steps
            .last()
            .and_then(|s| s.as_graph())
            .map(|g| g.visited.iter().map(|n| n.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn goes_deep_before_wide() {
        let g = parse_edge_list("a b\na c\nb d\nc e", false).unwrap();
        assert_eq!(order(&dfs(&g, "a")), vec!["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn cycle_does_not_revisit() {
        let g = parse_edge_list("a b\nb c\nc a", false).unwrap();
        let steps = dfs(&g, "a");
        let visits = steps.iter().filter(|s| s.kind == StepKind::Visit).count();
        assert_eq!(visits, 3);
        // a -> b -> c, then c's edge back to a is skipped, and a's edge to c too
        let explores = steps.iter().filter(|s| s.kind == StepKind::Explore).count();
        assert_eq!(explores, 2);
    }

    #[test]
    fn frontier_tracks_the_recursion_path() {
        let g = parse_edge_list("a b\nb c", false).unwrap();
        let steps = dfs(&g, "a");
        let deepest = steps
            .iter()
            .filter(|s| s.kind == StepKind::Visit)
            .last()
            .and_then(|s| s.as_graph())
            .unwrap();
        let path: Vec<_> = deepest.frontier.iter().map(|n| n.as_str()).collect();
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn isolated_start_visits_only_itself() {
        let g = parse_edge_list("a b\nz", false).unwrap();
        let steps = dfs(&g, "z");
        assert_eq!(steps.len(), 2);
        assert_eq!(order(&steps), vec!["z"]);
    }
}
