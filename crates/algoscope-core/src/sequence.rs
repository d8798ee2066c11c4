//! The precomputed step list with a playback cursor.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::step::Step;

/// Ordered, precomputed steps for one algorithm run.
///
/// Invariant: `0 <= cursor < len()` whenever the sequence is non-empty.
/// Step contents are never exposed mutably; a new input always means a new
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSequence")]
pub struct StepSequence {
    steps: Vec<Step>,
    cursor: usize,
}

/// Wire form, checked before it becomes a [`StepSequence`].
#[derive(Deserialize)]
struct RawSequence {
    steps: Vec<Step>,
    #[serde(default)]
    cursor: usize,
}

impl TryFrom<RawSequence> for StepSequence {
    type Error = Error;

    fn try_from(raw: RawSequence) -> Result<Self, Error> {
        let last = raw.steps.len().saturating_sub(1);
        if raw.cursor > last {
            return Err(Error::OutOfRange {
                name: "cursor",
                value: raw.cursor as i64,
                min: 0,
                max: last as i64,
            });
        }
        Ok(Self {
            steps: raw.steps,
            cursor: raw.cursor,
        })
    }
}

impl StepSequence {
    /// Create a sequence positioned at its first step.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step under the cursor.
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.cursor)
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the cursor sits on the final step.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.cursor == self.steps.len() - 1
    }

    /// Move forward one step. Returns false if already at the end.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move back one step. Returns false if already at the start.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a step, clamped to the last index.
    pub fn seek(&mut self, index: usize) {
        self.cursor = index.min(self.steps.len().saturating_sub(1));
    }

    /// Return to the first step.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        match self.steps.len() {
            0 => 0.0,
            1 => 1.0,
            n => self.cursor as f64 / (n - 1) as f64,
        }
    }
}

impl FromIterator<Step> for StepSequence {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
