//! Step records for the visualization timeline.

use serde::{Deserialize, Serialize};

use crate::snapshot::{
    ArraySnapshot, BoardSnapshot, GraphSnapshot, Snapshot, StructureSnapshot, TowerSnapshot,
};

/// The primitive operation a step records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Initial state before the first operation
    Start,
    /// Two elements are compared
    Compare,
    /// Two elements exchanged positions
    Swap,
    /// An element moved one slot to make room (insertion sort)
    Shift,
    /// An element was written into its final slot
    Place,
    /// A pivot was chosen for partitioning
    Pivot,
    /// Two adjacent runs are merged
    Merge,
    /// Values were scattered into buckets
    Distribute,
    /// Buckets were gathered back into the array
    Collect,
    /// A node was dequeued or entered and finalized
    Visit,
    /// A node was added to the BFS queue
    Enqueue,
    /// A DFS edge to an undiscovered neighbor was followed
    Explore,
    /// Dijkstra selected the closest unvisited node
    Process,
    /// Dijkstra improved a neighbor's tentative distance
    Relax,
    /// A disk moved between pegs
    Move,
    /// A placement was rejected because it is attacked
    Conflict,
    /// A placement was undone during backtracking
    Backtrack,
    /// A value was pushed onto a stack
    Push,
    /// A value was popped from a stack or dequeued
    Pop,
    /// A value was inserted into a structure
    Insert,
    /// A value was removed from a structure
    Remove,
    /// A tree node was emitted during traversal
    Traverse,
    /// The algorithm finished successfully
    Complete,
    /// The search finished without a solution
    Failed,
}

/// An immutable snapshot of algorithm state at one point in its execution.
///
/// Generators mutate their own working copy and clone it into a fresh
/// `Step` every time, so stepping back is just reading an earlier entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub description: String,
    /// Index into the algorithm's code listing.
    pub code_line: Option<usize>,
    pub snapshot: Snapshot,
}

impl Step {
    /// Create a step without a code line reference.
    pub fn new(kind: StepKind, description: impl Into<String>, snapshot: impl Into<Snapshot>) -> Self {
        Self {
            kind,
            description: description.into(),
            code_line: None,
            snapshot: snapshot.into(),
        }
    }

    /// Attach the listing line being executed.
    pub fn at_line(mut self, line: usize) -> Self {
        self.code_line = Some(line);
        self
    }

    /// Whether this step terminates its sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, StepKind::Complete | StepKind::Failed)
    }

    pub fn as_array(&self) -> Option<&ArraySnapshot> {
        match &self.snapshot {
            Snapshot::Array(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&GraphSnapshot> {
        match &self.snapshot {
            Snapshot::Graph(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_towers(&self) -> Option<&TowerSnapshot> {
        match &self.snapshot {
            Snapshot::Towers(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_board(&self) -> Option<&BoardSnapshot> {
        match &self.snapshot {
            Snapshot::Board(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_structure(&self) -> Option<&StructureSnapshot> {
        match &self.snapshot {
            Snapshot::Structure(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_serialization() {
        let step = Step::new(
            StepKind::Compare,
            "Comparing elements at positions 0 and 1",
            ArraySnapshot::of(&[5, 3]).comparing([0, 1]),
        )
        .at_line(3);

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"compare\""));
        assert!(json.contains("\"array\""));

        let parsed: Step = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, step);
    }

    #[test]
    fn terminal_kinds() {
        let done = Step::new(StepKind::Complete, "done", ArraySnapshot::of(&[]));
        let failed = Step::new(StepKind::Failed, "no solution", ArraySnapshot::of(&[]));
        let swap = Step::new(StepKind::Swap, "swap", ArraySnapshot::of(&[]));
        assert!(done.is_terminal());
        assert!(failed.is_terminal());
        assert!(!swap.is_terminal());
    }

    #[test]
    fn accessors_match_snapshot_family() {
        let step = Step::new(StepKind::Start, "start", ArraySnapshot::of(&[1]));
        assert!(step.as_array().is_some());
        assert!(step.as_graph().is_none());
        assert!(step.as_towers().is_none());
    }
}
