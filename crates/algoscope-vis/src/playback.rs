//! Playback state machine over a precomputed step sequence.
//!
//! `Playback` is purely synchronous. The ticker that drives auto-advance
//! lives in [`crate::controller`]; it only ever calls [`Playback::tick`]
//! with the generation it was started under, so a ticker left over from an
//! earlier sequence or an earlier play can never move the cursor.

use algoscope_core::limits::clamp_speed_ms;
use algoscope_core::{Step, StepSequence};
use serde::{Deserialize, Serialize};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Fresh sequence, nothing played yet
    Idle,
    /// Auto-advancing on the ticker
    Playing,
    /// Stopped mid-sequence by the user
    Paused,
    /// Cursor reached the final step
    Complete,
}

/// Playback controller for one step sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    sequence: StepSequence,
    state: PlaybackState,
    speed_ms: u64,
    generation: u64,
}

impl Playback {
    /// Create a new playback controller.
    pub fn new(steps: Vec<Step>, speed_ms: u64) -> Self {
        Self {
            sequence: StepSequence::new(steps),
            state: PlaybackState::Idle,
            speed_ms: clamp_speed_ms(speed_ms),
            generation: 0,
        }
    }

    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// The step under the cursor.
    pub fn current(&self) -> Option<&Step> {
        self.sequence.current()
    }

    pub fn cursor(&self) -> usize {
        self.sequence.cursor()
    }

    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    /// Get the current playback state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Milliseconds between automatic advances.
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Bumped by every operation that must cancel a running ticker.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Start playback. Returns false when there is nothing left to play.
    pub fn play(&mut self) -> bool {
        if self.state == PlaybackState::Playing {
            return true;
        }
        if self.state == PlaybackState::Complete || self.sequence.is_complete() || self.sequence.is_empty() {
            return false;
        }
        self.generation += 1;
        self.state = PlaybackState::Playing;
        true
    }

    /// Pause playback, keeping the cursor.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.generation += 1;
            self.state = PlaybackState::Paused;
        }
    }

    /// One automatic advance. Ignored unless `generation` is the live one.
    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.state != PlaybackState::Playing {
            return false;
        }
        let moved = self.sequence.advance();
        if self.sequence.is_complete() {
            self.state = PlaybackState::Complete;
        }
        moved
    }

    /// Step forward one frame. Disabled while playing.
    pub fn step_forward(&mut self) -> bool {
        if self.state == PlaybackState::Playing || !self.sequence.advance() {
            return false;
        }
        self.state = if self.sequence.is_complete() {
            PlaybackState::Complete
        } else {
            PlaybackState::Paused
        };
        true
    }

    /// Step backward one frame. Disabled while playing.
    pub fn step_backward(&mut self) -> bool {
        if self.state == PlaybackState::Playing || !self.sequence.retreat() {
            return false;
        }
        self.state = PlaybackState::Paused;
        true
    }

    /// Set the interval used from the next tick on.
    pub fn set_speed(&mut self, speed_ms: u64) {
        self.speed_ms = clamp_speed_ms(speed_ms);
    }

    /// Swap in a freshly generated sequence and return to `Idle`.
    pub fn replace(&mut self, steps: Vec<Step>) {
        self.sequence = StepSequence::new(steps);
        self.state = PlaybackState::Idle;
        self.generation += 1;
    }

    /// Calculate progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        self.sequence.progress()
    }
}

/// Serializable playback summary for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub cursor: usize,
    pub total: usize,
    pub speed_ms: u64,
    pub progress: f64,
    pub can_play: bool,
    pub can_step: bool,
    pub can_step_back: bool,
}

impl From<&Playback> for PlaybackStatus {
    fn from(p: &Playback) -> Self {
        let playing = p.is_playing();
        let at_end = p.sequence.is_complete() || p.sequence.is_empty();
        Self {
            state: p.state,
            cursor: p.cursor(),
            total: p.total(),
            speed_ms: p.speed_ms,
            progress: p.progress(),
            can_play: !playing && !at_end && p.state != PlaybackState::Complete,
            can_step: !playing && !at_end,
            can_step_back: !playing && p.cursor() > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_core::{ArraySnapshot, StepKind};

    fn steps(count: usize) -> Vec<Step> {
        (0..count)
            .map(|i| {
                let kind = if i + 1 == count { StepKind::Complete } else { StepKind::Compare };
                Step::new(kind, format!("step {i}"), ArraySnapshot::of(&[i as u32]))
            })
            .collect()
    }

    #[test]
    fn starts_idle_at_zero() {
        let p = Playback::new(steps(4), 500);
        assert_eq!(p.state(), PlaybackState::Idle);
        assert_eq!(p.cursor(), 0);
        assert_eq!(p.total(), 4);
    }

    #[test]
    fn play_pause_play() {
        let mut p = Playback::new(steps(4), 500);
        assert!(p.play());
        assert_eq!(p.state(), PlaybackState::Playing);
        p.pause();
        assert_eq!(p.state(), PlaybackState::Paused);
        assert!(p.play());
        assert_eq!(p.state(), PlaybackState::Playing);
    }

    #[test]
    fn ticks_run_to_complete() {
        let mut p = Playback::new(steps(3), 500);
        p.play();
        let generation = p.generation();
        assert!(p.tick(generation));
        assert_eq!(p.state(), PlaybackState::Playing);
        assert!(p.tick(generation));
        assert_eq!(p.state(), PlaybackState::Complete);
        assert!(!p.tick(generation));
        assert_eq!(p.cursor(), 2);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let mut p = Playback::new(steps(5), 500);
        p.play();
        let stale = p.generation();
        p.pause();
        p.play();
        assert!(!p.tick(stale));
        assert_eq!(p.cursor(), 0);
        p.replace(steps(5));
        assert!(!p.tick(stale));
        assert_eq!(p.state(), PlaybackState::Idle);
    }

    #[test]
    fn play_from_complete_is_a_no_op() {
        let mut p = Playback::new(steps(2), 500);
        assert!(p.step_forward());
        assert_eq!(p.state(), PlaybackState::Complete);
        let generation = p.generation();
        assert!(!p.play());
        assert_eq!(p.state(), PlaybackState::Complete);
        assert_eq!(p.generation(), generation);
    }

    #[test]
    fn single_step_sequence_cannot_play() {
        let mut p = Playback::new(steps(1), 500);
        assert!(!p.play());
        assert_eq!(p.state(), PlaybackState::Idle);
        assert!(!PlaybackStatus::from(&p).can_play);
    }

    #[test]
    fn manual_steps() {
        let mut p = Playback::new(steps(3), 500);
        assert!(!p.step_backward());
        assert!(p.step_forward());
        assert_eq!(p.state(), PlaybackState::Paused);
        assert!(p.step_forward());
        assert_eq!(p.state(), PlaybackState::Complete);
        assert!(!p.step_forward());
        assert!(p.step_backward());
        assert_eq!(p.state(), PlaybackState::Paused);
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn manual_steps_disabled_while_playing() {
        let mut p = Playback::new(steps(3), 500);
        p.play();
        assert!(!p.step_forward());
        assert!(!p.step_backward());
        assert_eq!(p.cursor(), 0);
    }

    #[test]
    fn speed_is_clamped_and_keeps_generation() {
        let mut p = Playback::new(steps(3), 50);
        assert_eq!(p.speed_ms(), 100);
        p.play();
        let generation = p.generation();
        p.set_speed(5000);
        assert_eq!(p.speed_ms(), 1000);
        assert_eq!(p.generation(), generation);
    }

    #[test]
    fn status_reflects_controls() {
        let mut p = Playback::new(steps(3), 500);
        p.step_forward();
        let status = PlaybackStatus::from(&p);
        assert_eq!(status.cursor, 1);
        assert_eq!(status.total, 3);
        assert!((status.progress - 0.5).abs() < f64::EPSILON);
        assert!(status.can_play && status.can_step && status.can_step_back);
    }
}
