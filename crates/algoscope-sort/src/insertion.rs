use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Insertion sort. Each shift moves the key one slot left by exchanging it
/// with its larger neighbour, so every snapshot stays a permutation of the
/// input.
pub fn insertion_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    for i in 1..n {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            rec.record(
                StepKind::Compare,
                4,
                format!("Comparing {} with key {key}", arr[j - 1]),
                ArraySnapshot::of(&arr).comparing([j - 1, j]).pivot(j),
            );
            if arr[j - 1] <= key {
                break;
            }
            arr.swap(j - 1, j);
            rec.record(
                StepKind::Shift,
                5,
                format!("Moving {} one position right", arr[j]),
                ArraySnapshot::of(&arr).swapping([j - 1, j]).pivot(j - 1),
            );
            j -= 1;
        }
        rec.record(
            StepKind::Place,
            8,
            format!("Placed {key} at position {j}"),
            ArraySnapshot::of(&arr).pivot(j).sorted(0..=i),
        );
    }

    rec.finish(&arr, "Insertion sort", 10)
}
