//! Timer-driven playback over a shared session.
//!
//! At most one ticker task exists per controller. Each ticker is started
//! with the playback generation current at the time, and every advance goes
//! through [`Session::tick`] under the session lock, so a ticker from a
//! superseded play or sequence exits without touching the cursor. Commands
//! that cancel playback also abort the stored handle under the same lock.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::error::Result;
use crate::playback::PlaybackStatus;
use crate::session::{Command, Frame, Session, SolvedSudoku};

/// Frames buffered per subscriber before it starts lagging.
const FRAME_CHANNEL_CAPACITY: usize = 64;

struct Ticker {
    generation: u64,
    handle: JoinHandle<()>,
}

struct Inner {
    session: Session,
    ticker: Option<Ticker>,
}

/// Shared handle to a session and its ticker.
#[derive(Clone)]
pub struct Controller {
    inner: Arc<Mutex<Inner>>,
    frames: broadcast::Sender<Frame>,
}

impl Controller {
    pub fn new(session: Session) -> Self {
        let (frames, _) = broadcast::channel(FRAME_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(Inner { session, ticker: None })),
            frames,
        }
    }

    /// Receive a frame on every cursor or sequence change.
    pub fn subscribe(&self) -> broadcast::Receiver<Frame> {
        self.frames.subscribe()
    }

    pub async fn frame(&self) -> Frame {
        self.inner.lock().await.session.frame()
    }

    pub async fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(self.inner.lock().await.session.playback())
    }

    /// Apply a command, reconcile the ticker and publish the new frame.
    ///
    /// A Sudoku search runs on the blocking pool with the lock released, so
    /// a slow board never stalls tickers or other callers.
    pub async fn dispatch(&self, command: Command) -> Result<Frame> {
        let pending = self.inner.lock().await.session.pending_solve(&command)?;
        let solved = match pending {
            Some(board) => {
                debug!(size = board.size(), "Solving Sudoku off the runtime");
                Some(tokio::task::spawn_blocking(move || SolvedSudoku::solve(board)).await?)
            }
            None => None,
        };

        let mut inner = self.inner.lock().await;
        inner.session.apply_solved(command, solved)?;
        self.reconcile(&mut inner);
        let frame = inner.session.frame();
        // no subscribers is fine
        let _ = self.frames.send(frame.clone());
        Ok(frame)
    }

    /// Keep exactly one ticker alive while playing, for the live generation.
    fn reconcile(&self, inner: &mut Inner) {
        let playback = inner.session.playback();
        let playing = playback.is_playing();
        let generation = playback.generation();

        if let Some(ticker) = &inner.ticker {
            if playing && ticker.generation == generation && !ticker.handle.is_finished() {
                return;
            }
        }
        if let Some(stale) = inner.ticker.take() {
            stale.handle.abort();
            debug!(generation = stale.generation, "Cancelled ticker");
        }
        if playing {
            let handle = tokio::spawn(run_ticker(
                Arc::clone(&self.inner),
                self.frames.clone(),
                generation,
                Instant::now(),
            ));
            inner.ticker = Some(Ticker { generation, handle });
            debug!(generation, "Scheduled ticker");
        }
    }
}

/// Advance once per interval until playback completes or the generation
/// moves on. The speed is read before each sleep, so a speed change applies
/// from the next tick.
async fn run_ticker(inner: Arc<Mutex<Inner>>, frames: broadcast::Sender<Frame>, generation: u64, started: Instant) {
    let mut deadline = started;
    loop {
        let speed_ms = {
            let guard = inner.lock().await;
            let playback = guard.session.playback();
            if playback.generation() != generation || !playback.is_playing() {
                return;
            }
            playback.speed_ms()
        };

        deadline += Duration::from_millis(speed_ms);
        sleep_until(deadline).await;

        let mut guard = inner.lock().await;
        if !guard.session.tick(generation) {
            return;
        }
        let _ = frames.send(guard.session.frame());
        if !guard.session.playback().is_playing() {
            info!(algorithm = guard.session.algorithm().id(), "Playback complete");
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VisConfig;
    use crate::playback::PlaybackState;
    use algoscope_core::{AlgorithmKind, StepKind};
    use tokio::time::sleep;

    const SPEED: u64 = 200;

    fn controller(algorithm: AlgorithmKind) -> Controller {
        let config = VisConfig {
            algorithm,
            speed_ms: SPEED,
            ..VisConfig::default()
        };
        Controller::new(Session::new(&config).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn three_ticks_after_three_intervals() {
        let c = controller(AlgorithmKind::Bubble);
        let total = c.status().await.total;
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(3 * SPEED + 1)).await;
        let status = c.status().await;
        assert_eq!(status.cursor, 3.min(total - 1));
        assert_eq!(status.state, PlaybackState::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_before_first_tick_keeps_cursor() {
        let c = controller(AlgorithmKind::Bubble);
        c.dispatch(Command::Play).await.unwrap();
        c.dispatch(Command::Pause).await.unwrap();
        sleep(Duration::from_millis(5 * SPEED)).await;
        let status = c.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.state, PlaybackState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticker_never_touches_a_new_sequence() {
        let c = controller(AlgorithmKind::Bubble);
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(SPEED + SPEED / 2)).await;
        assert_eq!(c.status().await.cursor, 1);

        c.dispatch(Command::SelectAlgorithm {
            algorithm: AlgorithmKind::Selection,
        })
        .await
        .unwrap();
        sleep(Duration::from_millis(5 * SPEED)).await;
        let status = c.status().await;
        assert_eq!(status.cursor, 0);
        assert_eq!(status.state, PlaybackState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn replaying_does_not_double_the_rate() {
        let c = controller(AlgorithmKind::Bubble);
        c.dispatch(Command::Play).await.unwrap();
        c.dispatch(Command::Pause).await.unwrap();
        c.dispatch(Command::Play).await.unwrap();
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(2 * SPEED + 1)).await;
        assert_eq!(c.status().await.cursor, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_applies_from_next_tick() {
        let c = controller(AlgorithmKind::Bubble);
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(SPEED / 2)).await;
        c.dispatch(Command::SetSpeed { speed_ms: 1000 }).await.unwrap();

        // the tick already scheduled still lands at SPEED
        sleep(Duration::from_millis(SPEED / 2 + 1)).await;
        assert_eq!(c.status().await.cursor, 1);

        // the next one waits the new interval
        sleep(Duration::from_millis(SPEED)).await;
        assert_eq!(c.status().await.cursor, 1);
        sleep(Duration::from_millis(1000)).await;
        assert_eq!(c.status().await.cursor, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn plays_through_to_complete() {
        let c = controller(AlgorithmKind::Hanoi);
        let total = c.status().await.total;
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(SPEED * (total as u64 + 2))).await;
        let status = c.status().await;
        assert_eq!(status.state, PlaybackState::Complete);
        assert_eq!(status.cursor, total - 1);

        // play from complete does nothing
        c.dispatch(Command::Play).await.unwrap();
        assert_eq!(c.status().await.state, PlaybackState::Complete);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_every_tick() {
        let c = controller(AlgorithmKind::Bubble);
        let mut frames = c.subscribe();
        c.dispatch(Command::Play).await.unwrap();
        let first = frames.recv().await.unwrap();
        assert_eq!(first.status.state, PlaybackState::Playing);
        assert_eq!(first.status.cursor, 0);
        let ticked = frames.recv().await.unwrap();
        assert_eq!(ticked.status.cursor, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_idle_and_cancels() {
        let c = controller(AlgorithmKind::Insertion);
        let before = c.frame().await;
        c.dispatch(Command::Play).await.unwrap();
        sleep(Duration::from_millis(2 * SPEED + 1)).await;
        let reset = c.dispatch(Command::Reset).await.unwrap();
        assert_eq!(reset, before);
        sleep(Duration::from_millis(3 * SPEED)).await;
        assert_eq!(c.frame().await, before);
    }

    #[tokio::test]
    async fn dead_sudoku_fails_without_blocking() {
        let c = controller(AlgorithmKind::Sudoku);
        // column 9 holds 1..=8 and row 9 starts with a 9
        let mut rows = vec![". . . . . . . . .".to_string(); 9];
        for (row, text) in rows.iter_mut().enumerate().take(8) {
            *text = format!(". . . . . . . . {}", row + 1);
        }
        rows[8] = "9 . . . . . . . .".to_string();

        let frame = c.dispatch(Command::SetSudoku { text: rows.join("\n") }).await.unwrap();
        assert_eq!(frame.kind, Some(StepKind::Failed));
        assert_eq!(
            frame.notice.as_deref(),
            Some("No solution exists for this board. Please check your input.")
        );
        assert!(c.inner.lock().await.session.sudoku().is_empty());
    }

    #[test]
    fn rejected_command_reports_error() {
        let c = controller(AlgorithmKind::Bubble);
        let result = tokio_test::block_on(c.dispatch(Command::SetStartNode {
            node: "nope".to_string(),
        }));
        assert!(result.is_err());
        assert_eq!(tokio_test::block_on(c.status()).cursor, 0);
    }
}
