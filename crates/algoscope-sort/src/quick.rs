use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::{settled, Recorder};

/// Quick sort with Lomuto partitioning around the last element of each range.
pub fn quick_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let mut fixed = vec![false; arr.len()];
    let mut rec = Recorder::new();

    if !arr.is_empty() {
        let high = arr.len() - 1;
        sort_range(&mut arr, 0, high, &mut fixed, &mut rec);
    }

    rec.finish(&arr, "Quick sort", 6)
}

fn sort_range(arr: &mut [u32], low: usize, high: usize, fixed: &mut [bool], rec: &mut Recorder) {
    if low < high {
        let pi = partition(arr, low, high, fixed, rec);
        if pi > low {
            sort_range(arr, low, pi - 1, fixed, rec);
        }
        sort_range(arr, pi + 1, high, fixed, rec);
    } else if low == high {
        fixed[low] = true;
    }
}

fn partition(arr: &mut [u32], low: usize, high: usize, fixed: &mut [bool], rec: &mut Recorder) -> usize {
    let pivot = arr[high];
    rec.record(
        StepKind::Pivot,
        9,
        format!("Pivot selected: {pivot}"),
        ArraySnapshot::of(arr).pivot(high).range(low, high).sorted(settled(fixed)),
    );

    let mut i = low;
    for j in low..high {
        rec.record(
            StepKind::Compare,
            12,
            format!("Comparing {} with pivot {pivot}", arr[j]),
            ArraySnapshot::of(arr)
                .comparing([j, high])
                .pivot(high)
                .range(low, high)
                .sorted(settled(fixed)),
        );
        if arr[j] < pivot {
            if i != j {
                arr.swap(i, j);
                rec.record(
                    StepKind::Swap,
                    14,
                    format!("Swapping {} into the lower partition", arr[i]),
                    ArraySnapshot::of(arr)
                        .swapping([i, j])
                        .pivot(high)
                        .range(low, high)
                        .sorted(settled(fixed)),
                );
            }
            i += 1;
        }
    }

    arr.swap(i, high);
    fixed[i] = true;
    rec.record(
        StepKind::Place,
        17,
        format!("Placing pivot {pivot} at position {i}"),
        ArraySnapshot::of(arr)
            .swapping([i, high])
            .pivot(i)
            .range(low, high)
            .sorted(settled(fixed)),
    );
    i
}
