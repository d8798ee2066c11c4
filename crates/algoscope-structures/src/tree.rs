//! Binary search tree with canvas positions and stepped traversals.

use std::fmt;

use algoscope_core::{Step, StepKind, StructureItem, StructureLayout, StructureSnapshot};
use serde::{Deserialize, Serialize};

/// Root position on the canvas.
pub const ROOT_POSITION: (f64, f64) = (400.0, 50.0);
/// Horizontal offset between the root and its children; halves every level.
pub const BASE_OFFSET: f64 = 200.0;
pub const LEVEL_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    Inorder,
    Preorder,
    Postorder,
}

impl Traversal {
    fn code_line(self) -> usize {
        match self {
            Traversal::Preorder => 11,
            Traversal::Inorder => 13,
            Traversal::Postorder => 15,
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Inorder => "in-order",
            Traversal::Preorder => "pre-order",
            Traversal::Postorder => "post-order",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct TreeNode {
    value: i64,
    left: Option<usize>,
    right: Option<usize>,
    position: (f64, f64),
}

/// Nodes live in an arena; a node's id is its arena index. Equal values go
/// to the right subtree.
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, value: i64) -> Vec<Step> {
        let mut steps = vec![Step::new(
            StepKind::Start,
            format!("insert({value})"),
            self.snapshot(Vec::new(), Vec::new()),
        )
        .at_line(0)];
        let id = self.nodes.len();

        let Some(mut at) = self.root else {
            self.nodes.push(TreeNode {
                value,
                left: None,
                right: None,
                position: ROOT_POSITION,
            });
            self.root = Some(id);
            steps.push(
                Step::new(
                    StepKind::Insert,
                    format!("Tree was empty, {value} becomes the root"),
                    self.snapshot(vec![id as u32], Vec::new()),
                )
                .at_line(1),
            );
            return steps;
        };

        let mut depth = 1;
        loop {
            let node = &self.nodes[at];
            let go_left = value < node.value;
            steps.push(
                Step::new(
                    StepKind::Compare,
                    if go_left {
                        format!("{value} < {}, going left", node.value)
                    } else {
                        format!("{value} >= {}, going right", node.value)
                    },
                    self.snapshot(vec![at as u32], Vec::new()),
                )
                .at_line(2),
            );

            let child = if go_left { node.left } else { node.right };
            if let Some(next) = child {
                at = next;
                depth += 1;
                continue;
            }

            let offset = BASE_OFFSET / 2f64.powi(depth - 1);
            let (x, y) = self.nodes[at].position;
            let position = if go_left { (x - offset, y + LEVEL_HEIGHT) } else { (x + offset, y + LEVEL_HEIGHT) };
            self.nodes.push(TreeNode {
                value,
                left: None,
                right: None,
                position,
            });
            if go_left {
                self.nodes[at].left = Some(id);
            } else {
                self.nodes[at].right = Some(id);
            }
            let side = if go_left { "left" } else { "right" };
            steps.push(
                Step::new(
                    StepKind::Insert,
                    format!("Attached {value} as the {side} child of {}", self.nodes[at].value),
                    self.snapshot(vec![at as u32, id as u32], Vec::new()),
                )
                .at_line(if go_left { 3 } else { 5 }),
            );
            return steps;
        }
    }

    /// Walk the whole tree, one step per value emitted. Highlights
    /// accumulate in visiting order.
    pub fn traverse(&self, order: Traversal) -> Vec<Step> {
        let mut steps = vec![Step::new(
            StepKind::Start,
            format!("Starting {order} traversal"),
            self.snapshot(Vec::new(), Vec::new()),
        )
        .at_line(9)];
        let mut visited = Vec::new();
        let mut output = Vec::new();
        self.walk(self.root, order, &mut visited, &mut output, &mut steps);

        steps.push(
            Step::new(
                StepKind::Complete,
                format!("Traversal complete ({order}): {output:?}"),
                self.snapshot(visited, output),
            )
            .at_line(16),
        );
        steps
    }

    fn walk(
        &self,
        at: Option<usize>,
        order: Traversal,
        visited: &mut Vec<u32>,
        output: &mut Vec<i64>,
        steps: &mut Vec<Step>,
    ) {
        let Some(i) = at else {
            return;
        };
        let node = &self.nodes[i];
        visited.push(i as u32);

        if order == Traversal::Preorder {
            self.emit(node.value, order, visited, output, steps);
        }
        self.walk(node.left, order, visited, output, steps);
        if order == Traversal::Inorder {
            self.emit(node.value, order, visited, output, steps);
        }
        self.walk(node.right, order, visited, output, steps);
        if order == Traversal::Postorder {
            self.emit(node.value, order, visited, output, steps);
        }
    }

    fn emit(&self, value: i64, order: Traversal, visited: &[u32], output: &mut Vec<i64>, steps: &mut Vec<Step>) {
        output.push(value);
        steps.push(
            Step::new(
                StepKind::Traverse,
                format!("Output {value}"),
                self.snapshot(visited.to_vec(), output.clone()),
            )
            .at_line(order.code_line()),
        );
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub fn snapshot(&self, highlighted: Vec<u32>, output: Vec<i64>) -> StructureSnapshot {
        StructureSnapshot {
            layout: StructureLayout::Tree,
            items: self
                .nodes
                .iter()
                .enumerate()
                .map(|(i, node)| StructureItem {
                    left: node.left.map(|c| c as u32),
                    right: node.right.map(|c| c as u32),
                    position: Some(node.position),
                    ..StructureItem::cell(i as u32, node.value)
                })
                .collect(),
            head: self.root.map(|r| r as u32),
            highlighted,
            output,
        }
    }
}
