//! Algoscope Structures
//!
//! Elementary data structures whose operations return short step sequences,
//! so a push or a tree insert plays back the same way a sort does.

mod list;
mod queue;
mod stack;
mod tree;

use algoscope_core::limits::MAX_STRUCTURE_ITEMS;
use algoscope_core::{AlgorithmKind, Error, Result, Step, StepKind, StructureLayout, StructureSnapshot};
use serde::{Deserialize, Serialize};

pub use list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use tree::{BinarySearchTree, Traversal, BASE_OFFSET, LEVEL_HEIGHT, ROOT_POSITION};

/// An operation requested from the UI. `Insert` and `Remove` map onto the
/// structure's own verbs (push/pop, enqueue/dequeue, append/delete-head,
/// BST insert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StructureOp {
    Insert { value: i64 },
    Remove,
    Traverse { order: Traversal },
    Clear,
}

/// One live data structure.
#[derive(Debug, Clone)]
pub enum Structure {
    Stack(Stack),
    Queue(Queue),
    List(LinkedList),
    Tree(BinarySearchTree),
}

impl Structure {
    pub fn new(layout: StructureLayout) -> Self {
        match layout {
            StructureLayout::Stack => Structure::Stack(Stack::new()),
            StructureLayout::Queue => Structure::Queue(Queue::new()),
            StructureLayout::List => Structure::List(LinkedList::new()),
            StructureLayout::Tree => Structure::Tree(BinarySearchTree::new()),
        }
    }

    /// The structure behind a data-structure catalog entry.
    pub fn for_algorithm(kind: AlgorithmKind) -> Option<Self> {
        let layout = match kind {
            AlgorithmKind::Stack => StructureLayout::Stack,
            AlgorithmKind::Queue => StructureLayout::Queue,
            AlgorithmKind::LinkedList => StructureLayout::List,
            AlgorithmKind::BinaryTree => StructureLayout::Tree,
            _ => return None,
        };
        Some(Self::new(layout))
    }

    pub fn layout(&self) -> StructureLayout {
        match self {
            Structure::Stack(_) => StructureLayout::Stack,
            Structure::Queue(_) => StructureLayout::Queue,
            Structure::List(_) => StructureLayout::List,
            Structure::Tree(_) => StructureLayout::Tree,
        }
    }

    pub fn snapshot(&self) -> StructureSnapshot {
        match self {
            Structure::Stack(s) => s.snapshot(Vec::new(), Vec::new()),
            Structure::Queue(q) => q.snapshot(Vec::new(), Vec::new()),
            Structure::List(l) => l.snapshot(Vec::new(), Vec::new()),
            Structure::Tree(t) => t.snapshot(Vec::new(), Vec::new()),
        }
    }

    /// A single step showing the structure as it stands.
    pub fn idle_steps(&self) -> Vec<Step> {
        let description = match self.layout() {
            StructureLayout::Stack => "Stack ready: push a value or pop the top",
            StructureLayout::Queue => "Queue ready: enqueue at the back, dequeue from the front",
            StructureLayout::List => "Linked list ready: append a value or delete the head",
            StructureLayout::Tree => "Binary search tree ready: insert values, then traverse",
        };
        vec![Step::new(StepKind::Start, description, self.snapshot()).at_line(0)]
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            Structure::Stack(s) => s.len(),
            Structure::Queue(q) => q.len(),
            Structure::List(l) => l.len(),
            Structure::Tree(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply an operation and return the steps that narrate it.
    ///
    /// Inserts past [`MAX_STRUCTURE_ITEMS`] are refused and leave the
    /// structure untouched.
    pub fn apply(&mut self, op: &StructureOp) -> Result<Vec<Step>> {
        if matches!(op, StructureOp::Insert { .. }) && self.len() >= MAX_STRUCTURE_ITEMS {
            return Err(Error::OutOfRange {
                name: "structure size",
                value: self.len() as i64 + 1,
                min: 0,
                max: MAX_STRUCTURE_ITEMS as i64,
            });
        }
        let steps = match (self, op) {
            (Structure::Stack(s), StructureOp::Insert { value }) => s.push(*value),
            (Structure::Stack(s), StructureOp::Remove) => s.pop(),
            (Structure::Queue(q), StructureOp::Insert { value }) => q.enqueue(*value),
            (Structure::Queue(q), StructureOp::Remove) => q.dequeue(),
            (Structure::List(l), StructureOp::Insert { value }) => l.append(*value),
            (Structure::List(l), StructureOp::Remove) => l.delete_head(),
            (Structure::Tree(t), StructureOp::Insert { value }) => t.insert(*value),
            (Structure::Tree(t), StructureOp::Traverse { order }) => t.traverse(*order),
            (structure, StructureOp::Clear) => {
                structure.clear();
                vec![Step::new(StepKind::Complete, "Cleared", structure.snapshot()).at_line(0)]
            }
            (structure, op) => {
                return Err(Error::InvalidInput(format!(
                    "{op:?} is not supported by a {:?}",
                    structure.layout()
                )))
            }
        };
        Ok(steps)
    }

    fn clear(&mut self) {
        match self {
            Structure::Stack(s) => s.clear(),
            Structure::Queue(q) => q.clear(),
            Structure::List(l) => l.clear(),
            Structure::Tree(t) => t.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::{listing, Language};

    #[test]
    fn catalog_entries_map_to_structures() {
        assert_eq!(
            Structure::for_algorithm(AlgorithmKind::LinkedList).map(|s| s.layout()),
            Some(StructureLayout::List)
        );
        assert!(Structure::for_algorithm(AlgorithmKind::Bubble).is_none());
    }

    #[test]
    fn insert_and_remove_dispatch() {
        let mut structure = Structure::new(StructureLayout::Queue);
        structure.apply(&StructureOp::Insert { value: 3 }).unwrap();
        structure.apply(&StructureOp::Insert { value: 4 }).unwrap();
        let steps = structure.apply(&StructureOp::Remove).unwrap();
        assert_eq!(steps.last().unwrap().as_structure().unwrap().output, vec![3]);
    }

    #[test]
    fn unsupported_ops_are_rejected() {
        let mut structure = Structure::new(StructureLayout::Stack);
        let err = structure
            .apply(&StructureOp::Traverse {
                order: Traversal::Inorder,
            })
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        let mut tree = Structure::new(StructureLayout::Tree);
        assert!(tree.apply(&StructureOp::Remove).is_err());
    }

    #[test]
    fn inserts_stop_at_the_item_cap() {
        for layout in [
            StructureLayout::Stack,
            StructureLayout::Queue,
            StructureLayout::List,
            StructureLayout::Tree,
        ] {
            let mut structure = Structure::new(layout);
            // descending values give the tree its deepest shape
            for value in (0..MAX_STRUCTURE_ITEMS as i64).rev() {
                structure.apply(&StructureOp::Insert { value }).unwrap();
            }
            assert_eq!(structure.len(), MAX_STRUCTURE_ITEMS);

            let err = structure.apply(&StructureOp::Insert { value: -1 }).unwrap_err();
            assert!(matches!(err, Error::OutOfRange { max: 32, .. }), "{layout:?}");
            assert_eq!(structure.len(), MAX_STRUCTURE_ITEMS);

            // removal and clearing still work at the cap
            structure.apply(&StructureOp::Clear).unwrap();
            assert!(structure.is_empty());
        }
    }

    #[test]
    fn clear_empties_any_structure() {
        let mut structure = Structure::new(StructureLayout::Tree);
        structure.apply(&StructureOp::Insert { value: 1 }).unwrap();
        let steps = structure.apply(&StructureOp::Clear).unwrap();
        assert!(steps[0].as_structure().unwrap().items.is_empty());
    }

    #[test]
    fn ops_deserialize_from_tagged_json() {
        let op: StructureOp = serde_json::from_str(r#"{"op":"insert","value":12}"#).unwrap();
        assert_eq!(op, StructureOp::Insert { value: 12 });
        let op: StructureOp = serde_json::from_str(r#"{"op":"traverse","order":"postorder"}"#).unwrap();
        assert_eq!(
            op,
            StructureOp::Traverse {
                order: Traversal::Postorder
            }
        );
    }

    #[test]
    fn code_lines_fit_their_listings() {
        let cases = [
            (AlgorithmKind::Stack, StructureLayout::Stack),
            (AlgorithmKind::Queue, StructureLayout::Queue),
            (AlgorithmKind::LinkedList, StructureLayout::List),
            (AlgorithmKind::BinaryTree, StructureLayout::Tree),
        ];
        for (kind, layout) in cases {
            let len = listing(kind, Language::JavaScript).lines.len();
            let mut structure = Structure::new(layout);
            let mut steps = structure.idle_steps();
            for value in [5, 2, 8] {
                steps.extend(structure.apply(&StructureOp::Insert { value }).unwrap());
            }
            if layout == StructureLayout::Tree {
                steps.extend(structure.apply(&StructureOp::Traverse { order: Traversal::Postorder }).unwrap());
            } else {
                steps.extend(structure.apply(&StructureOp::Remove).unwrap());
            }
            assert!(steps.iter().all(|s| s.code_line.is_some_and(|l| l < len)), "{kind}");
        }
    }
}
