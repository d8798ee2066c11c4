use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Selection sort. The running minimum is carried as the pivot highlight.
pub fn selection_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            rec.record(
                StepKind::Compare,
                4,
                format!("Comparing {} with current minimum {}", arr[j], arr[min]),
                ArraySnapshot::of(&arr).comparing([min, j]).pivot(min).sorted(0..i),
            );
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
            rec.record(
                StepKind::Swap,
                8,
                format!("Swapping minimum {} into position {i}", arr[i]),
                ArraySnapshot::of(&arr).swapping([i, min]).sorted(0..=i),
            );
        }
    }

    rec.finish(&arr, "Selection sort", 10)
}
