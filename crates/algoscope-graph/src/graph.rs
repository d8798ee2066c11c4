//! Graph storage with insertion-ordered nodes and edges.

use std::collections::HashMap;

use algoscope_core::{EdgeId, NodeId};
use serde::Serialize;

use crate::layout;

/// A graph vertex with its canvas position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub position: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
    pub directed: bool,
}

impl Edge {
    /// The endpoint reached by leaving `node` along this edge, if the edge
    /// can be traversed in that direction.
    pub fn leave(&self, node: &str) -> Option<&NodeId> {
        if self.from.as_str() == node {
            Some(&self.to)
        } else if !self.directed && self.to.as_str() == node {
            Some(&self.from)
        } else {
            None
        }
    }

    fn touches(&self, node: &str) -> bool {
        self.from.as_str() == node || self.to.as_str() == node
    }
}

/// Nodes and edges in insertion order, with id lookup.
///
/// Insertion order is observable: neighbour iteration and Dijkstra's
/// tie-break both follow it, so the same edit history always yields the same
/// traversal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at the origin. Returns false if the id already exists.
    pub fn add_node(&mut self, id: &str) -> bool {
        self.add_node_at(id, (0.0, 0.0))
    }

    /// Add a node at an explicit canvas position.
    pub fn add_node_at(&mut self, id: &str, position: (f64, f64)) -> bool {
        if self.index.contains_key(id) {
            return false;
        }
        self.index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(Node {
            id: NodeId::from(id),
            label: id.to_string(),
            position,
        });
        true
    }

    /// Add an edge, creating missing endpoints. Parallel edges get a `#k`
    /// suffix so every edge id stays unique.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u32, directed: bool) -> EdgeId {
        self.add_node(from);
        self.add_node(to);

        let base = format!("{from}-{to}");
        let mut id = EdgeId(base.clone());
        let mut k = 2;
        while self.edge(&id.0).is_some() {
            id = EdgeId(format!("{base}#{k}"));
            k += 1;
        }

        self.edges.push(Edge {
            id: id.clone(),
            from: NodeId::from(from),
            to: NodeId::from(to),
            weight,
            directed,
        });
        id
    }

    /// Remove a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(pos) = self.index.remove(id) else {
            return false;
        };
        self.nodes.remove(pos);
        self.edges.retain(|e| !e.touches(id));
        self.reindex();
        true
    }

    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id.0 != id);
        self.edges.len() != before
    }

    /// Move a node on the canvas.
    pub fn set_position(&mut self, id: &str, position: (f64, f64)) -> bool {
        match self.index.get(id) {
            Some(&i) => {
                self.nodes[i].position = position;
                true
            }
            None => false,
        }
    }

    /// Place every node evenly on a circle, in insertion order.
    pub fn arrange_circle(&mut self) {
        let positions = layout::circle(self.nodes.len());
        for (node, position) in self.nodes.iter_mut().zip(positions) {
            node.position = position;
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Insertion index of a node.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id.0 == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display label for a node, falling back to the raw id.
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.node(id).map_or(id, |n| n.label.as_str())
    }

    /// Nodes reachable in one hop from `id`, paired with the edge used, in
    /// edge insertion order.
    pub fn neighbors(&self, id: &str) -> Vec<(&NodeId, &Edge)> {
        self.edges
            .iter()
            .filter_map(|e| e.leave(id).map(|next| (next, e)))
            .collect()
    }

    fn reindex(&mut self) {
        self.index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.0.clone(), i))
            .collect();
    }
}
