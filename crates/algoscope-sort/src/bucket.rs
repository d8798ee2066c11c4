use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// Bucket sort with one bucket per element. Values are spread by
/// `value * n / (max + 1)`, each bucket is sorted, then written back in
/// order.
pub fn bucket_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut rec = Recorder::new();

    if n > 1 {
        let max = u64::from(arr.iter().copied().max().unwrap_or(0));
        let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); n];
        for &v in &arr {
            let index = u64::from(v) * n as u64 / (max + 1);
            buckets[index as usize].push(v);
        }
        rec.record(
            StepKind::Distribute,
            4,
            format!("Distributed {n} values into {n} buckets"),
            ArraySnapshot::of(&arr).buckets(&buckets),
        );

        let mut k = 0;
        for b in 0..buckets.len() {
            if buckets[b].is_empty() {
                continue;
            }
            buckets[b].sort_unstable();
            let start = k;
            for &v in &buckets[b] {
                arr[k] = v;
                k += 1;
            }
            rec.record(
                StepKind::Collect,
                9,
                format!("Bucket {b}: wrote {} value(s) to positions {start}..{}", buckets[b].len(), k - 1),
                ArraySnapshot::of(&arr)
                    .buckets(&buckets)
                    .swapping(start..k)
                    .sorted(0..start),
            );
        }
    }

    rec.finish(&arr, "Bucket sort", 11)
}
