use algoscope_core::{ArraySnapshot, Step, StepKind};

/// Accumulates steps while a sort runs over its working copy.
pub(crate) struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn record(
        &mut self,
        kind: StepKind,
        line: usize,
        description: impl Into<String>,
        snapshot: ArraySnapshot,
    ) {
        self.steps.push(Step::new(kind, description, snapshot).at_line(line));
    }

    /// Append the closing step with every index marked sorted.
    pub(crate) fn finish(mut self, values: &[u32], name: &str, line: usize) -> Vec<Step> {
        let snapshot = ArraySnapshot::of(values).sorted(0..values.len());
        self.record(StepKind::Complete, line, format!("{name} complete!"), snapshot);
        self.steps
    }
}

/// Indices whose final position is already fixed.
pub(crate) fn settled(fixed: &[bool]) -> Vec<usize> {
    fixed
        .iter()
        .enumerate()
        .filter_map(|(i, done)| done.then_some(i))
        .collect()
}
