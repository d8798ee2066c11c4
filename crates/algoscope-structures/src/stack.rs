use algoscope_core::{Step, StepKind, StructureItem, StructureLayout, StructureSnapshot};

/// LIFO stack, bottom item first.
#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<StructureItem>,
    next_id: u32,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<i64> {
        self.items.last().map(|item| item.value)
    }

    pub fn push(&mut self, value: i64) -> Vec<Step> {
        let before = self.snapshot(Vec::new(), Vec::new());
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(StructureItem::cell(id, value));
        vec![
            Step::new(StepKind::Start, format!("push({value})"), before).at_line(1),
            Step::new(
                StepKind::Push,
                format!("Pushed {value} onto the top of the stack"),
                self.snapshot(vec![id], Vec::new()),
            )
            .at_line(2),
        ]
    }

    pub fn pop(&mut self) -> Vec<Step> {
        let Some(top) = self.items.last().map(|item| item.id) else {
            return vec![Step::new(
                StepKind::Complete,
                "Stack is empty, nothing to pop",
                self.snapshot(Vec::new(), Vec::new()),
            )
            .at_line(4)];
        };
        let before = self.snapshot(vec![top], Vec::new());
        let value = self.items.pop().map_or(0, |item| item.value);
        vec![
            Step::new(StepKind::Start, "pop(): the top item leaves first", before).at_line(4),
            Step::new(
                StepKind::Pop,
                format!("Popped {value} from the top of the stack"),
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
            layout: StructureLayout::Stack,
            items: self.items.clone(),
            head: self.items.last().map(|item| item.id),
            highlighted,
            output,
        }
    }
}
