//! Presentation adapter: turns a step into paint instructions.
//!
//! Every element gets exactly one [`VisualRole`]. When an element is marked
//! several ways at once the first match wins, in this order:
//! settled (sorted or visited), swapping, comparing, active (pivot or
//! current), default. All families go through [`role`] so overlapping marks
//! resolve the same way everywhere.

use algoscope_core::{
    ArraySnapshot, BoardSnapshot, Distance, EdgeId, GraphSnapshot, HanoiMove, NodeId, Snapshot, Step, StepKind,
    StructureLayout, StructureSnapshot, TowerSnapshot,
};
use algoscope_graph::Graph;
use serde::{Deserialize, Serialize};

/// Visual category of one painted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualRole {
    Settled,
    Swapping,
    Comparing,
    Active,
    Default,
}

/// Resolve overlapping marks to a single role.
pub fn role(settled: bool, swapping: bool, comparing: bool, active: bool) -> VisualRole {
    if settled {
        VisualRole::Settled
    } else if swapping {
        VisualRole::Swapping
    } else if comparing {
        VisualRole::Comparing
    } else if active {
        VisualRole::Active
    } else {
        VisualRole::Default
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub value: u32,
    pub role: VisualRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedNode {
    pub id: NodeId,
    pub label: String,
    pub position: (f64, f64),
    pub role: VisualRole,
    /// Dijkstra only.
    pub distance: Option<Distance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedEdge {
    pub id: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
    pub directed: bool,
    pub role: VisualRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub size: u32,
    pub role: VisualRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: u8,
    pub role: VisualRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedItem {
    pub id: u32,
    pub value: i64,
    pub next: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub position: Option<(f64, f64)>,
    pub role: VisualRole,
}

/// Everything the UI needs to draw one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    Bars {
        bars: Vec<Bar>,
        range: Option<(usize, usize)>,
        buckets: Option<Vec<Vec<u32>>>,
    },
    Graph {
        nodes: Vec<PaintedNode>,
        edges: Vec<PaintedEdge>,
        frontier: Vec<NodeId>,
    },
    Towers {
        pegs: [Vec<Disk>; 3],
        last_move: Option<HanoiMove>,
    },
    Board {
        size: usize,
        cells: Vec<Vec<Cell>>,
    },
    Structure {
        layout: StructureLayout,
        items: Vec<PaintedItem>,
        head: Option<u32>,
        output: Vec<i64>,
    },
}

/// Paint a step. Graph steps only carry traversal state, so the graph being
/// traversed supplies labels, positions and weights.
pub fn paint(step: &Step, graph: Option<&Graph>) -> Paint {
    let complete = step.kind == StepKind::Complete;
    match &step.snapshot {
        Snapshot::Array(s) => paint_bars(s),
        Snapshot::Graph(s) => paint_graph(s, graph, complete),
        Snapshot::Towers(s) => paint_towers(s, complete),
        Snapshot::Board(s) => paint_board(s, complete),
        Snapshot::Structure(s) => paint_structure(s, step.kind),
    }
}

fn paint_bars(s: &ArraySnapshot) -> Paint {
    let bars = s
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| Bar {
            value,
            role: role(
                s.sorted.contains(&i),
                s.swapping.contains(&i),
                s.comparing.contains(&i),
                s.pivot == Some(i),
            ),
        })
        .collect();
    Paint::Bars {
        bars,
        range: s.range,
        buckets: s.buckets.clone(),
    }
}

fn paint_graph(s: &GraphSnapshot, graph: Option<&Graph>, complete: bool) -> Paint {
    let Some(graph) = graph else {
        return Paint::Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            frontier: s.frontier.clone(),
        };
    };

    let active_edges: Vec<_> = s.active_edges.iter().filter_map(|id| graph.edge(&id.0)).collect();

    let nodes = graph
        .nodes()
        .iter()
        .map(|node| {
            let touched = active_edges.iter().any(|e| e.from == node.id || e.to == node.id);
            let current = s.current.as_ref() == Some(&node.id);
            PaintedNode {
                id: node.id.clone(),
                label: node.label.clone(),
                position: node.position,
                role: role(s.is_visited(&node.id), false, touched, current),
                distance: s.distance(&node.id),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .iter()
        .map(|edge| {
            let active = s.active_edges.contains(&edge.id);
            PaintedEdge {
                id: edge.id.clone(),
                from: edge.from.clone(),
                to: edge.to.clone(),
                weight: edge.weight,
                directed: edge.directed,
                role: role(active && complete, false, active, false),
            }
        })
        .collect();

    Paint::Graph {
        nodes,
        edges,
        frontier: s.frontier.clone(),
    }
}

fn paint_towers(s: &TowerSnapshot, complete: bool) -> Paint {
    let moved = s.last_move.map(|m| m.disk);
    let pegs = s.pegs.clone().map(|peg| {
        peg.into_iter()
            .map(|size| Disk {
                size,
                role: role(complete, moved == Some(size), false, false),
            })
            .collect()
    });
    Paint::Towers {
        pegs,
        last_move: s.last_move,
    }
}

fn paint_board(s: &BoardSnapshot, complete: bool) -> Paint {
    let cells = s
        .cells
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &value)| Cell {
                    value,
                    role: role(
                        s.fixed.contains(&(r, c)) || (complete && value != 0),
                        false,
                        s.conflicts.contains(&(r, c)),
                        s.focus == Some((r, c)),
                    ),
                })
                .collect()
        })
        .collect();
    Paint::Board { size: s.size, cells }
}

fn paint_structure(s: &StructureSnapshot, kind: StepKind) -> Paint {
    let items = s
        .items
        .iter()
        .map(|item| {
            let lit = s.highlighted.contains(&item.id);
            let (settled, swapping, comparing) = match kind {
                StepKind::Complete => (lit, false, false),
                StepKind::Push | StepKind::Pop | StepKind::Insert | StepKind::Remove | StepKind::Enqueue => {
                    (false, lit, false)
                }
                StepKind::Compare | StepKind::Traverse => (false, false, lit),
                _ => (false, false, false),
            };
            PaintedItem {
                id: item.id,
                value: item.value,
                next: item.next,
                left: item.left,
                right: item.right,
                position: item.position,
                role: role(settled, swapping, comparing, lit),
            }
        })
        .collect();
    Paint::Structure {
        layout: s.layout,
        items,
        head: s.head,
        output: s.output.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::{Peg, StructureItem};
    use algoscope_graph::parse_edge_list;

    fn roles(paint: &Paint) -> Vec<VisualRole> {
        match paint {
            Paint::Bars { bars, .. } => bars.iter().map(|b| b.role).collect(),
            _ => panic!("not bars"),
        }
    }

    #[test]
    fn precedence_order() {
        assert_eq!(role(true, true, true, true), VisualRole::Settled);
        assert_eq!(role(false, true, true, true), VisualRole::Swapping);
        assert_eq!(role(false, false, true, true), VisualRole::Comparing);
        assert_eq!(role(false, false, false, true), VisualRole::Active);
        assert_eq!(role(false, false, false, false), VisualRole::Default);
    }

    #[test]
    fn bars_resolve_overlapping_marks() {
        let snapshot = ArraySnapshot::of(&[5, 4, 3, 2])
            .sorted([3])
            .swapping([0, 3])
            .comparing([0, 1])
            .pivot(1);
        let step = Step::new(StepKind::Swap, "swap", snapshot);
        assert_eq!(
            roles(&paint(&step, None)),
            vec![
                VisualRole::Swapping,
                VisualRole::Comparing,
                VisualRole::Default,
                VisualRole::Settled,
            ]
        );
    }

    #[test]
    fn bars_keep_range_and_buckets() {
        let snapshot = ArraySnapshot::of(&[1, 2]).range(0, 1).buckets(&[vec![1], vec![2]]);
        match paint(&Step::new(StepKind::Collect, "collect", snapshot), None) {
            Paint::Bars { range, buckets, .. } => {
                assert_eq!(range, Some((0, 1)));
                assert_eq!(buckets, Some(vec![vec![1], vec![2]]));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn graph_nodes_take_positions_and_roles() {
        let graph = parse_edge_list("A B 2\nB C 3\nD", false).unwrap();
        let snapshot = GraphSnapshot {
            visited: vec![NodeId::from("A")],
            current: Some(NodeId::from("A")),
            active_edges: vec![EdgeId::from("A-B")],
            frontier: vec![NodeId::from("B")],
            distances: None,
        };
        let step = Step::new(StepKind::Enqueue, "enqueue", snapshot);
        let Paint::Graph { nodes, edges, frontier } = paint(&step, Some(&graph)) else {
            panic!("not a graph");
        };
        let by_id = |id: &str| nodes.iter().find(|n| n.id.as_str() == id).unwrap();
        // visited beats current
        assert_eq!(by_id("A").role, VisualRole::Settled);
        assert_eq!(by_id("B").role, VisualRole::Comparing);
        assert_eq!(by_id("C").role, VisualRole::Default);
        assert_eq!(by_id("D").role, VisualRole::Default);
        assert_eq!(by_id("B").position, graph.node("B").unwrap().position);
        assert_eq!(edges[0].role, VisualRole::Comparing);
        assert_eq!(edges[1].role, VisualRole::Default);
        assert_eq!(frontier, vec![NodeId::from("B")]);
    }

    #[test]
    fn comparing_beats_current_on_a_graph_node() {
        let graph = parse_edge_list("A B 2", false).unwrap();
        let snapshot = GraphSnapshot {
            current: Some(NodeId::from("A")),
            active_edges: vec![EdgeId::from("A-B")],
            ..GraphSnapshot::default()
        };
        let step = Step::new(StepKind::Relax, "relax", snapshot);
        let Paint::Graph { nodes, .. } = paint(&step, Some(&graph)) else {
            panic!("not a graph");
        };
        assert_eq!(nodes[0].role, VisualRole::Comparing);
        assert_eq!(nodes[1].role, VisualRole::Comparing);
    }

    #[test]
    fn completed_tree_edges_are_settled() {
        let graph = parse_edge_list("A B 2", false).unwrap();
        let snapshot = GraphSnapshot {
            active_edges: vec![EdgeId::from("A-B")],
            ..GraphSnapshot::default()
        };
        let step = Step::new(StepKind::Complete, "done", snapshot);
        let Paint::Graph { edges, .. } = paint(&step, Some(&graph)) else {
            panic!("not a graph");
        };
        assert_eq!(edges[0].role, VisualRole::Settled);
    }

    #[test]
    fn moved_disk_is_swapping() {
        let snapshot = TowerSnapshot {
            pegs: [vec![3, 2], vec![], vec![1]],
            last_move: Some(HanoiMove { disk: 1, from: Peg::A, to: Peg::C }),
        };
        let Paint::Towers { pegs, .. } = paint(&Step::new(StepKind::Move, "move", snapshot), None) else {
            panic!("not towers");
        };
        assert_eq!(pegs[2][0].role, VisualRole::Swapping);
        assert_eq!(pegs[0][0].role, VisualRole::Default);
    }

    #[test]
    fn board_conflicts_outrank_focus() {
        let mut snapshot = BoardSnapshot::empty(4);
        snapshot.cells[0][0] = 1;
        snapshot.focus = Some((1, 1));
        snapshot.conflicts = vec![(0, 0), (1, 1)];
        let Paint::Board { cells, .. } = paint(&Step::new(StepKind::Conflict, "conflict", snapshot), None) else {
            panic!("not a board");
        };
        assert_eq!(cells[0][0].role, VisualRole::Comparing);
        assert_eq!(cells[1][1].role, VisualRole::Comparing);
        assert_eq!(cells[2][2].role, VisualRole::Default);
    }

    #[test]
    fn structure_insert_highlights_new_item() {
        let snapshot = StructureSnapshot {
            layout: StructureLayout::Stack,
            items: vec![StructureItem::cell(0, 4), StructureItem::cell(1, 9)],
            head: Some(1),
            highlighted: vec![1],
            output: Vec::new(),
        };
        let Paint::Structure { items, head, .. } = paint(&Step::new(StepKind::Push, "push", snapshot), None) else {
            panic!("not a structure");
        };
        assert_eq!(head, Some(1));
        assert_eq!(items[0].role, VisualRole::Default);
        assert_eq!(items[1].role, VisualRole::Swapping);
    }

    #[test]
    fn paint_is_tagged_on_the_wire() {
        let step = Step::new(StepKind::Start, "start", ArraySnapshot::of(&[1]));
        let json = serde_json::to_string(&paint(&step, None)).unwrap();
        assert!(json.contains("\"type\":\"bars\""));
        assert!(json.contains("\"role\":\"default\""));
    }
}
