//! Algoscope Sorting Generators
//!
//! Each generator runs its algorithm to completion over a private copy of
//! the input and returns the recorded steps.
//!
//! # Stepping Policy
//!
//! - **Comparison sorts** (bubble, insertion, selection, quick, heap): one
//!   step per comparison and one per swap or move
//! - **Merge sort**: one step per merge range, merged in place without
//!   per-element steps
//! - **Distribution sorts** (radix, bucket): one step per digit pass or per
//!   bucket, since there are no pairwise comparisons
//!
//! Every sequence ends with exactly one `Complete` step whose `sorted` set
//! covers the whole array. Empty and single-element inputs produce only that
//! step.

mod bubble;
mod bucket;
mod heap;
mod input;
mod insertion;
mod merge;
mod quick;
mod radix;
mod recorder;
mod selection;

use algoscope_core::{AlgorithmKind, Error, Step};

pub use bubble::bubble_sort;
pub use bucket::bucket_sort;
pub use heap::heap_sort;
pub use input::random_array;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;

/// The sorting algorithms this crate can step through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Radix,
    Bucket,
}

impl SortKind {
    pub const ALL: [SortKind; 8] = [
        SortKind::Bubble,
        SortKind::Insertion,
        SortKind::Selection,
        SortKind::Merge,
        SortKind::Quick,
        SortKind::Heap,
        SortKind::Radix,
        SortKind::Bucket,
    ];
}

impl From<SortKind> for AlgorithmKind {
    fn from(kind: SortKind) -> Self {
        match kind {
            SortKind::Bubble => AlgorithmKind::Bubble,
            SortKind::Insertion => AlgorithmKind::Insertion,
            SortKind::Selection => AlgorithmKind::Selection,
            SortKind::Merge => AlgorithmKind::Merge,
            SortKind::Quick => AlgorithmKind::Quick,
            SortKind::Heap => AlgorithmKind::Heap,
            SortKind::Radix => AlgorithmKind::Radix,
            SortKind::Bucket => AlgorithmKind::Bucket,
        }
    }
}

impl TryFrom<AlgorithmKind> for SortKind {
    type Error = Error;

    fn try_from(kind: AlgorithmKind) -> Result<Self, Self::Error> {
        SortKind::ALL
            .into_iter()
            .find(|s| AlgorithmKind::from(*s) == kind)
            .ok_or_else(|| Error::InvalidInput(format!("{} is not a sorting algorithm", kind.name())))
    }
}

/// Generate the full step sequence for one sort over `input`.
pub fn generate(kind: SortKind, input: &[u32]) -> Vec<Step> {
    match kind {
        SortKind::Bubble => bubble_sort(input),
        SortKind::Insertion => insertion_sort(input),
        SortKind::Selection => selection_sort(input),
        SortKind::Merge => merge_sort(input),
        SortKind::Quick => quick_sort(input),
        SortKind::Heap => heap_sort(input),
        SortKind::Radix => radix_sort(input),
        SortKind::Bucket => bucket_sort(input),
    }
}
