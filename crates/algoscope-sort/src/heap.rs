use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Heap sort over an implicit max-heap.
pub fn heap_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    for root in (0..n / 2).rev() {
        sift_down(&mut arr, n, root, &mut rec);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        rec.record(
            StepKind::Swap,
            6,
            format!("Moving max {} to position {end}", arr[end]),
            ArraySnapshot::of(&arr).swapping([0, end]).sorted(end..n),
        );
        sift_down(&mut arr, end, 0, &mut rec);
    }

    rec.finish(&arr, "Heap sort", 9)
}

/// Restore the heap property below `root` within `arr[..size]`. Everything
/// from `size` onward is already in place.
fn sift_down(arr: &mut [u32], size: usize, mut root: usize, rec: &mut Recorder) {
    let n = arr.len();
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < size {
            rec.record(
                StepKind::Compare,
                14,
                format!("Comparing {} with left child {}", arr[largest], arr[left]),
                ArraySnapshot::of(arr).comparing([largest, left]).pivot(root).sorted(size..n),
            );
            if arr[left] > arr[largest] {
                largest = left;
            }
        }
        if right < size {
            rec.record(
                StepKind::Compare,
                15,
                format!("Comparing {} with right child {}", arr[largest], arr[right]),
                ArraySnapshot::of(arr).comparing([largest, right]).pivot(root).sorted(size..n),
            );
            if arr[right] > arr[largest] {
                largest = right;
            }
        }
        if largest == root {
            return;
        }

        arr.swap(root, largest);
        rec.record(
            StepKind::Swap,
            17,
            format!("Heapify: swapping {} and {}", arr[root], arr[largest]),
            ArraySnapshot::of(arr).swapping([root, largest]).sorted(size..n),
        );
        root = largest;
    }
}
