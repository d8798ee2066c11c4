//! Per-family state snapshots carried by each step.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The subject data at one point of an algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Snapshot {
    Array(ArraySnapshot),
    Graph(GraphSnapshot),
    Towers(TowerSnapshot),
    Board(BoardSnapshot),
    Structure(StructureSnapshot),
}

/// The full array plus the positions currently in each visual role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArraySnapshot {
    pub values: Vec<u32>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
    /// Inclusive partition or merge bounds.
    pub range: Option<(usize, usize)>,
    /// Bucket contents for distribution sorts.
    pub buckets: Option<Vec<Vec<u32>>>,
}

impl ArraySnapshot {
    /// Snapshot the whole array, copying it.
    pub fn of(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            ..Self::default()
        }
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.comparing = indices.into_iter().collect();
        self
    }

    pub fn swapping(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.swapping = indices.into_iter().collect();
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.sorted = indices.into_iter().collect();
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    pub fn range(mut self, low: usize, high: usize) -> Self {
        self.range = Some((low, high));
        self
    }

    pub fn buckets(mut self, buckets: &[Vec<u32>]) -> Self {
        self.buckets = Some(buckets.to_vec());
        self
    }

    /// Check that the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl From<ArraySnapshot> for Snapshot {
    fn from(s: ArraySnapshot) -> Self {
        Snapshot::Array(s)
    }
}

/// A graph node identifier, taken verbatim from the edge-list text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A graph edge identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub String);

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        EdgeId(s.to_string())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tentative shortest-path distance. Unreached nodes are `Infinite`.
///
/// Variant order makes every finite distance compare below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn value(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

/// Traversal state of a graph algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Finalized nodes, in the order they were finalized.
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub active_edges: Vec<EdgeId>,
    /// BFS queue or DFS stack contents.
    pub frontier: Vec<NodeId>,
    /// Dijkstra distance table in node insertion order.
    pub distances: Option<Vec<(NodeId, Distance)>>,
}

impl GraphSnapshot {
    /// Look up a node's distance in the table, if this snapshot carries one.
    pub fn distance(&self, id: &NodeId) -> Option<Distance> {
        self.distances
            .as_ref()?
            .iter()
            .find(|(node, _)| node == id)
            .map(|(_, d)| *d)
    }

    pub fn is_visited(&self, id: &NodeId) -> bool {
        self.visited.contains(id)
    }
}

impl From<GraphSnapshot> for Snapshot {
    fn from(s: GraphSnapshot) -> Self {
        Snapshot::Graph(s)
    }
}

/// One of the three Tower of Hanoi pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        };
        f.write_str(name)
    }
}

/// A single disk move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HanoiMove {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for HanoiMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

/// Peg contents, bottom disk first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerSnapshot {
    pub pegs: [Vec<u32>; 3],
    pub last_move: Option<HanoiMove>,
}

impl From<TowerSnapshot> for Snapshot {
    fn from(s: TowerSnapshot) -> Self {
        Snapshot::Towers(s)
    }
}

/// A square grid: queens (1 = queen) or Sudoku digits (0 = empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    pub cells: Vec<Vec<u8>>,
    /// Cell under consideration, as `(row, col)`.
    pub focus: Option<(usize, usize)>,
    /// Cells attacking or clashing with the focus cell.
    pub conflicts: Vec<(usize, usize)>,
    /// Cells supplied by the user rather than the solver.
    pub fixed: Vec<(usize, usize)>,
}

impl BoardSnapshot {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![0; size]; size],
            ..Self::default()
        }
    }
}

impl From<BoardSnapshot> for Snapshot {
    fn from(s: BoardSnapshot) -> Self {
        Snapshot::Board(s)
    }
}

/// How a structure's items should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureLayout {
    Stack,
    Queue,
    List,
    Tree,
}

/// A node or cell of an elementary data structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureItem {
    pub id: u32,
    pub value: i64,
    pub next: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    /// Canvas position for tree layouts.
    pub position: Option<(f64, f64)>,
}

impl StructureItem {
    pub fn cell(id: u32, value: i64) -> Self {
        Self {
            id,
            value,
            next: None,
            left: None,
            right: None,
            position: None,
        }
    }
}

/// State of an elementary data structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSnapshot {
    pub layout: StructureLayout,
    /// Items in storage order: bottom-to-top, front-to-back, head-to-tail or insertion order.
    pub items: Vec<StructureItem>,
    /// Stack top, queue front, list head or tree root.
    pub head: Option<u32>,
    pub highlighted: Vec<u32>,
    /// Values emitted so far (popped values, traversal output).
    pub output: Vec<i64>,
}

impl From<StructureSnapshot> for Snapshot {
    fn from(s: StructureSnapshot) -> Self {
        Snapshot::Structure(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_distances_order_below_infinity() {
        assert!(Distance::Finite(u64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(3) < Distance::Finite(4));
        assert_eq!(Distance::Infinite.to_string(), "∞");
        assert_eq!(Distance::Finite(8).value(), Some(8));
    }

    #[test]
    fn array_snapshot_copies_input() {
        let mut working = vec![3, 1, 2];
        let snap = ArraySnapshot::of(&working).comparing([0, 1]);
        working.swap(0, 1);
        assert_eq!(snap.values, vec![3, 1, 2]);
        assert_eq!(snap.comparing, vec![0, 1]);
        assert!(!snap.is_sorted());
    }

    #[test]
    fn graph_snapshot_distance_lookup() {
        let snap = GraphSnapshot {
            distances: Some(vec![
                (NodeId::from("1"), Distance::Finite(0)),
                (NodeId::from("2"), Distance::Infinite),
            ]),
            ..GraphSnapshot::default()
        };
        assert_eq!(snap.distance(&NodeId::from("1")), Some(Distance::Finite(0)));
        assert_eq!(snap.distance(&NodeId::from("2")), Some(Distance::Infinite));
        assert_eq!(snap.distance(&NodeId::from("3")), None);
    }

    #[test]
    fn snapshot_is_tagged_on_the_wire() {
        let snap: Snapshot = TowerSnapshot::default().into();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"type\":\"towers\""));
    }

    #[test]
    fn hanoi_move_narration() {
        let mv = HanoiMove { disk: 1, from: Peg::A, to: Peg::C };
        assert_eq!(mv.to_string(), "Move disk 1 from A to C");
    }
}
