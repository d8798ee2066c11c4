//! Algoscope Core
//!
//! Shared vocabulary for the step-generation and playback engine.
//!
//! # Architecture
//!
//! - **Step**: an immutable snapshot of an algorithm's visible state
//! - **StepSequence**: the precomputed, ordered list of steps plus a cursor
//! - **Catalog**: every algorithm the visualizer knows, with its complexity
//! - **Listings**: numbered source lines that steps point into for narration
//!
//! Generators live in the family crates (`algoscope-sort`, `algoscope-graph`,
//! `algoscope-puzzles`, `algoscope-structures`); they all emit [`Step`] values
//! and never mutate a step once it has been pushed.

mod algorithm;
mod error;
pub mod limits;
mod listing;
mod sequence;
mod snapshot;
mod step;

pub use algorithm::{AlgorithmInfo, AlgorithmKind, Family};
pub use error::{Error, Result};
pub use listing::{listing, CodeListing, Language};
pub use sequence::StepSequence;
pub use snapshot::{
    ArraySnapshot, BoardSnapshot, Distance, EdgeId, GraphSnapshot, HanoiMove, NodeId, Peg,
    Snapshot, StructureItem, StructureLayout, StructureSnapshot, TowerSnapshot,
};
pub use step::{Step, StepKind};
