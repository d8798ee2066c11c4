use std::collections::{HashSet, VecDeque};

use algoscope_core::{GraphSnapshot, NodeId, Step, StepKind};

use crate::graph::Graph;
use crate::no_start;

/// Breadth-first search. A node is finalized when dequeued, so it may sit in
/// the queue more than once but is visited exactly once.
pub fn bfs(graph: &Graph, start: &str) -> Vec<Step> {
    let Some(origin) = graph.node(start) else {
        return no_start("BFS", 12);
    };

    let mut steps = Vec::new();
    let mut queue = VecDeque::from([origin.id.clone()]);
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut visited: Vec<NodeId> = Vec::new();

    steps.push(
        Step::new(
            StepKind::Start,
            format!("Starting BFS from node {}", origin.label),
            GraphSnapshot {
                current: Some(origin.id.clone()),
                frontier: queue.iter().cloned().collect(),
                ..Default::default()
            },
        )
        .at_line(1),
    );

    while let Some(current) = queue.pop_front() {
        if !seen.insert(current.clone()) {
            continue;
        }
        visited.push(current.clone());
        steps.push(
            Step::new(
                StepKind::Visit,
                format!("Visiting node {}", graph.label(current.as_str())),
                GraphSnapshot {
                    visited: visited.clone(),
                    current: Some(current.clone()),
                    frontier: queue.iter().cloned().collect(),
                    ..Default::default()
                },
            )
            .at_line(7),
        );

        for (next, edge) in graph.neighbors(current.as_str()) {
            if seen.contains(next) {
                continue;
            }
            queue.push_back(next.clone());
            steps.push(
                Step::new(
                    StepKind::Enqueue,
                    format!("Adding node {} to queue", graph.label(next.as_str())),
                    GraphSnapshot {
                        visited: visited.clone(),
                        current: Some(current.clone()),
                        active_edges: vec![edge.id.clone()],
                        frontier: queue.iter().cloned().collect(),
                        ..Default::default()
                    },
                )
                .at_line(9),
            );
        }
    }

    steps.push(
        Step::new(
            StepKind::Complete,
            "BFS traversal complete",
            GraphSnapshot {
                visited,
                ..Default::default()
            },
        )
        .at_line(12),
    );
    steps
}
