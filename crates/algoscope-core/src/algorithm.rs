//! The algorithm catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Every visualization the engine can generate steps for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
    Bfs,
    Dfs,
    Dijkstra,
    #[serde(rename = "nqueens")]
    NQueens,
    Sudoku,
    Hanoi,
    Stack,
    Queue,
    LinkedList,
    BinaryTree,
}

/// Algorithm families share a stepping policy and a snapshot shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// One step per comparison and per swap/move
    ComparisonSort,
    /// One step per merge range
    DivideAndConquerSort,
    /// One step per pass or per bucket
    DistributionSort,
    GraphTraversal,
    Backtracking,
    DataStructure,
}

/// Display metadata for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub kind: AlgorithmKind,
    pub id: &'static str,
    pub name: &'static str,
    pub family: Family,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 18] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Merge,
        AlgorithmKind::Quick,
        AlgorithmKind::Heap,
        AlgorithmKind::Radix,
        AlgorithmKind::Bucket,
        AlgorithmKind::Bfs,
        AlgorithmKind::Dfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::NQueens,
        AlgorithmKind::Sudoku,
        AlgorithmKind::Hanoi,
        AlgorithmKind::Stack,
        AlgorithmKind::Queue,
        AlgorithmKind::LinkedList,
        AlgorithmKind::BinaryTree,
    ];

    /// Stable wire id, matching the serde name.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    pub fn family(self) -> Family {
        self.info().family
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn is_sort(self) -> bool {
        matches!(
            self.family(),
            Family::ComparisonSort | Family::DivideAndConquerSort | Family::DistributionSort
        )
    }

    /// Traversals cannot run until a start node is chosen.
    pub fn requires_start_node(self) -> bool {
        self.family() == Family::GraphTraversal
    }

    pub fn info(self) -> AlgorithmInfo {
        use AlgorithmKind::*;
        use Family::*;

        let (id, name, family, time_complexity, space_complexity) = match self {
            Bubble => ("bubble", "Bubble Sort", ComparisonSort, "O(n²)", "O(1)"),
            Insertion => ("insertion", "Insertion Sort", ComparisonSort, "O(n²)", "O(1)"),
            Selection => ("selection", "Selection Sort", ComparisonSort, "O(n²)", "O(1)"),
            Merge => ("merge", "Merge Sort", DivideAndConquerSort, "O(n log n)", "O(n)"),
            Quick => ("quick", "Quick Sort", ComparisonSort, "O(n log n)", "O(log n)"),
            Heap => ("heap", "Heap Sort", ComparisonSort, "O(n log n)", "O(1)"),
            Radix => ("radix", "Radix Sort", DistributionSort, "O(d·(n + b))", "O(n + b)"),
            Bucket => ("bucket", "Bucket Sort", DistributionSort, "O(n + k)", "O(n + k)"),
            Bfs => ("bfs", "Breadth-First Search", GraphTraversal, "O(V + E)", "O(V)"),
            Dfs => ("dfs", "Depth-First Search", GraphTraversal, "O(V + E)", "O(V)"),
            Dijkstra => ("dijkstra", "Dijkstra's Algorithm", GraphTraversal, "O(V² + E)", "O(V)"),
            NQueens => ("nqueens", "N-Queens Problem", Backtracking, "O(N!)", "O(N)"),
            Sudoku => ("sudoku", "Sudoku Solver", Backtracking, "O(n^(n·n))", "O(n·n)"),
            Hanoi => ("hanoi", "Tower of Hanoi", Backtracking, "O(2^n)", "O(n)"),
            Stack => ("stack", "Stack", DataStructure, "O(1)", "O(n)"),
            Queue => ("queue", "Queue", DataStructure, "O(1)", "O(n)"),
            LinkedList => ("linked_list", "Linked List", DataStructure, "O(n)", "O(n)"),
            BinaryTree => ("binary_tree", "Binary Search Tree", DataStructure, "O(h)", "O(n)"),
        };

        AlgorithmInfo {
            kind: self,
            id,
            name,
            family,
            time_complexity,
            space_complexity,
        }
    }

    /// Catalog entries in display order.
    pub fn catalog() -> Vec<AlgorithmInfo> {
        Self::ALL.iter().map(|k| k.info()).collect()
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.id() == wanted)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>(), Ok(kind));
        }
    }

    #[test]
    fn ids_match_serde_names() {
        for kind in AlgorithmKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(
            "bogo".parse::<AlgorithmKind>(),
            Err(Error::UnknownAlgorithm("bogo".into()))
        );
    }

    #[test]
    fn families() {
        assert!(AlgorithmKind::Heap.is_sort());
        assert!(AlgorithmKind::Radix.is_sort());
        assert!(!AlgorithmKind::Bfs.is_sort());
        assert!(AlgorithmKind::Dijkstra.requires_start_node());
        assert!(!AlgorithmKind::Hanoi.requires_start_node());
        assert_eq!(AlgorithmKind::Merge.family(), Family::DivideAndConquerSort);
    }

    #[test]
    fn catalog_lists_everything_once() {
        let catalog = AlgorithmKind::catalog();
        assert_eq!(catalog.len(), AlgorithmKind::ALL.len());
        assert_eq!(catalog[0].name, "Bubble Sort");
    }
}
