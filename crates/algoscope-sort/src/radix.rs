use algoscope_core::{ArraySnapshot, Step, StepKind};

use crate::recorder::Recorder;

/// LSD radix sort in base 10, one step per digit pass.
pub fn radix_sort(input: &[u32]) -> Vec<Step> {
    let mut arr = input.to_vec();
    let mut rec = Recorder::new();
    let max = u64::from(arr.iter().copied().max().unwrap_or(0));

    let mut place: u64 = 1;
    let mut pass = 1;
    while max / place > 0 {
        let mut buckets = vec![Vec::new(); 10];
        for &v in &arr {
            buckets[((u64::from(v) / place) % 10) as usize].push(v);
        }
        arr = buckets.concat();
        rec.record(
            StepKind::Collect,
            7,
            format!("Pass {pass}: ordered by the {place}s digit"),
            ArraySnapshot::of(&arr).buckets(&buckets),
        );
        place *= 10;
        pass += 1;
    }

    rec.finish(&arr, "Radix sort", 9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pass_per_digit_of_the_maximum() {
        let steps = radix_sort(&[5, 100, 42, 7]);
        let passes = steps.iter().filter(|s| s.kind == StepKind::Collect).count();
        assert_eq!(passes, 3);
    }

    #[test]
    fn first_pass_groups_by_units() {
        let steps = radix_sort(&[21, 13, 32, 11]);
        let first = steps[0].as_array().unwrap();
        assert_eq!(first.values, vec![21, 11, 32, 13]);
        let buckets = first.buckets.as_ref().unwrap();
        assert_eq!(buckets[1], vec![21, 11]);
    }

    #[test]
    fn all_zero_input_needs_no_pass() {
        let steps = radix_sort(&[0, 0, 0]);
        assert_eq!(steps.len(), 1);
    }
}
