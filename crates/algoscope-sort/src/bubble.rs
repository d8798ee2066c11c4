use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Bubble sort: adjacent compare and swap, the largest remaining value
/// bubbling to the end of each pass.
pub fn bubble_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    for i in 0..n.saturating_sub(1) {
        let sorted = n - i..n;
        for j in 0..n - i - 1 {
            rec.record(
                StepKind::Compare,
                3,
                format!("Comparing {} and {} at positions {j} and {}", arr[j], arr[j + 1], j + 1),
                ArraySnapshot::of(&arr).comparing([j, j + 1]).sorted(sorted.clone()),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                rec.record(
                    StepKind::Swap,
                    4,
                    format!("Swapping positions {j} and {}", j + 1),
                    ArraySnapshot::of(&arr).swapping([j, j + 1]).sorted(sorted.clone()),
                );
            }
        }
    }

    rec.finish(&arr, "Bubble sort", 8)
}
