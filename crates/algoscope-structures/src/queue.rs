use std::collections::VecDeque;

use algoscope_core::{Step, StepKind, StructureItem, StructureLayout, StructureSnapshot};

/// FIFO queue, front item first.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: VecDeque<StructureItem>,
    next_id: u32,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enqueue(&mut self, value: i64) -> Vec<Step> {
        let before = self.snapshot(Vec::new(), Vec::new());
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(StructureItem::cell(id, value));
        vec![
            Step::new(StepKind::Start, format!("enqueue({value})"), before).at_line(1),
            Step::new(
                StepKind::Enqueue,
                format!("Added {value} to the back of the queue"),
                self.snapshot(vec![id], Vec::new()),
            )
            .at_line(2),
        ]
    }

    pub fn dequeue(&mut self) -> Vec<Step> {
        let Some(front) = self.items.front().map(|item| item.id) else {
            return vec![Step::new(
                StepKind::Complete,
                "Queue is empty, nothing to dequeue",
                self.snapshot(Vec::new(), Vec::new()),
            )
            .at_line(4)];
        };
        let before = self.snapshot(vec![front], Vec::new());
        let value = self.items.pop_front().map_or(0, |item| item.value);
        vec![
            Step::new(StepKind::Start, "dequeue(): the front item leaves first", before).at_line(4),
            Step::new(
                StepKind::Remove,
                format!("Removed {value} from the front of the queue"),
                self.snapshot(Vec::new(), vec![value]),
            )
            .at_line(5),
        ]
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn snapshot(&self, highlighted: Vec<u32>, output: Vec<i64>) -> StructureSnapshot {
        StructureSnapshot {
            layout: StructureLayout::Queue,
            items: self.items.iter().cloned().collect(),
            head: self.items.front().map(|item| item.id),
            highlighted,
            output,
        }
    }
}
