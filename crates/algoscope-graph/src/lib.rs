//! Algoscope Graph
//!
//! Graph model and traversal step generators:
//! - **Graph**: insertion-ordered nodes and edges with id lookup and editing
//! - **Parser**: plain-text edge lists (`from to [weight]`)
//! - **Traversals**: BFS, DFS and Dijkstra, each returning recorded steps
//!
//! Every edge carries its own `directed` flag; undirected edges are walked
//! both ways. Traversals never mutate the graph.

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod graph;
pub mod layout;
mod parse;

use algoscope_core::{GraphSnapshot, Step, StepKind};

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, shortest_path};
pub use error::{ParseError, Result};
pub use graph::{Edge, Graph, Node};
pub use parse::{parse_edge_list, DEFAULT_WEIGHT};

/// Sequence for a traversal whose start node is not in the graph.
pub(crate) fn no_start(name: &str, line: usize) -> Vec<Step> {
    vec![Step::new(
        StepKind::Complete,
        format!("{name}: no start node selected"),
        GraphSnapshot::default(),
    )
    .at_line(line)]
}
