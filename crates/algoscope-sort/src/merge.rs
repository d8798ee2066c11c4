use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Bottom-up merge sort. Each step announces a range, and the merge of that
/// range is visible from the following step on.
pub fn merge_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    let mut width = 1;
    while width < n {
        let mut start = 0;
        while start < n {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            // a lone left run has nothing to merge with
            if mid < end {
                rec.record(
                    StepKind::Merge,
                    6,
                    format!("Merging [{start}..{}] with [{mid}..{}]", mid - 1, end - 1),
                    ArraySnapshot::of(&arr).comparing(start..end).range(start, end - 1),
                );
                merge_runs(&mut arr[start..end], mid - start);
            }
            start += 2 * width;
        }
        width *= 2;
    }

    rec.finish(&arr, "Merge sort", 9)
}

/// Merge the sorted runs `run[..mid]` and `run[mid..]`, stable on ties.
fn merge_runs(run: &mut [u32], mid: usize) {
    let left = run[..mid].to_vec();
    let right = run[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in run.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
