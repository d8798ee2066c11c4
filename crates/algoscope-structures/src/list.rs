//! Singly linked list with heap-allocated nodes.

use std::iter;

use algoscope_core::{Step, StepKind, StructureItem, StructureLayout, StructureSnapshot};

#[derive(Debug, Clone)]
struct ListNode {
    id: u32,
    value: i64,
    next: Option<Box<ListNode>>,
}

#[derive(Debug, Clone, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    next_id: u32,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    fn iter(&self) -> impl Iterator<Item = &ListNode> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref())
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn values(&self) -> Vec<i64> {
        self.iter().map(|node| node.value).collect()
    }

    /// Append at the tail, walking from the head one node per step.
    pub fn append(&mut self, value: i64) -> Vec<Step> {
        let mut steps = vec![Step::new(
            StepKind::Start,
            format!("append({value})"),
            self.snapshot(Vec::new(), Vec::new()),
        )
        .at_line(1)];

        let walk: Vec<(u32, i64)> = self.iter().map(|node| (node.id, node.value)).collect();
        let id = self.next_id;
        self.next_id += 1;

        if walk.is_empty() {
            self.head = Some(Box::new(ListNode { id, value, next: None }));
            steps.push(
                Step::new(
                    StepKind::Insert,
                    format!("List was empty, {value} becomes the head"),
                    self.snapshot(vec![id], Vec::new()),
                )
                .at_line(3),
            );
            return steps;
        }

        for &(node_id, node_value) in &walk {
            steps.push(
                Step::new(
                    StepKind::Traverse,
                    format!("Walking past {node_value} towards the tail"),
                    self.snapshot(vec![node_id], Vec::new()),
                )
                .at_line(5),
            );
        }

        link_tail(&mut self.head, Box::new(ListNode { id, value, next: None }));
        let tail = walk.last().map(|&(tail_id, _)| tail_id).into_iter();
        steps.push(
            Step::new(
                StepKind::Insert,
                format!("Linked {value} after the old tail"),
                self.snapshot(tail.chain([id]).collect(), Vec::new()),
            )
            .at_line(6),
        );
        steps
    }

    pub fn delete_head(&mut self) -> Vec<Step> {
        let Some((id, value)) = self.head.as_ref().map(|node| (node.id, node.value)) else {
            return vec![Step::new(
                StepKind::Complete,
                "List is empty, nothing to delete",
                self.snapshot(Vec::new(), Vec::new()),
            )
            .at_line(8)];
        };
        let before = self.snapshot(vec![id], Vec::new());
        if let Some(old) = self.head.take() {
            self.head = old.next;
        }
        vec![
            Step::new(StepKind::Start, "deleteHead()", before).at_line(8),
            Step::new(
                StepKind::Remove,
                format!("Removed head {value}, its successor is the new head"),
                self.snapshot(Vec::new(), vec![value]),
            )
            .at_line(9),
        ]
    }

    pub fn clear(&mut self) {
        self.head = None;
    }

    pub fn snapshot(&self, highlighted: Vec<u32>, output: Vec<i64>) -> StructureSnapshot {
        StructureSnapshot {
            layout: StructureLayout::List,
            items: self
                .iter()
                .map(|node| StructureItem {
                    next: node.next.as_ref().map(|next| next.id),
                    ..StructureItem::cell(node.id, node.value)
                })
                .collect(),
            head: self.head.as_ref().map(|node| node.id),
            highlighted,
            output,
        }
    }
}

fn link_tail(slot: &mut Option<Box<ListNode>>, node: Box<ListNode>) {
    match slot {
        Some(current) => link_tail(&mut current.next, node),
        None => *slot = Some(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order_and_links() {
        let mut list = LinkedList::new();
        for v in [10, 20, 30] {
            list.append(v);
        }
        assert_eq!(list.values(), vec![10, 20, 30]);
        let snap = list.snapshot(Vec::new(), Vec::new());
        assert_eq!(snap.head, Some(0));
        assert_eq!(snap.items[0].next, Some(1));
        assert_eq!(snap.items[1].next, Some(2));
        assert_eq!(snap.items[2].next, None);
    }

    #[test]
    fn append_walks_every_node() {
        let mut list = LinkedList::new();
        list.append(1);
        list.append(2);
        let steps = list.append(3);
        let walks = steps.iter().filter(|s| s.kind == StepKind::Traverse).count();
        assert_eq!(walks, 2);
        assert_eq!(steps.last().unwrap().as_structure().unwrap().highlighted, vec![1, 2]);
    }

    #[test]
    fn first_append_sets_the_head() {
        let mut list = LinkedList::new();
        let steps = list.append(5);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].code_line, Some(3));
    }

    #[test]
    fn delete_head_advances() {
        let mut list = LinkedList::new();
        list.append(1);
        list.append(2);
        let steps = list.delete_head();
        assert_eq!(steps[0].as_structure().unwrap().highlighted, vec![0]);
        assert_eq!(steps[1].as_structure().unwrap().output, vec![1]);
        assert_eq!(list.values(), vec![2]);
        list.delete_head();
        assert!(list.is_empty());
        assert_eq!(list.delete_head().len(), 1);
    }
}
