//! Algoscope Puzzles
//!
//! Backtracking puzzles recorded as step sequences:
//! - **Tower of Hanoi**: a precomputed move log, replayed to rebuild any step
//! - **N-Queens**: row-by-row search with placement, conflict and backtrack
//!   steps
//! - **Sudoku**: 4x4, 6x6 and 9x9 boards solved to a single answer or a
//!   reported failure

mod error;
mod hanoi;
mod queens;
mod sudoku;

pub use error::{Result, SudokuError};
pub use hanoi::{hanoi_moves, hanoi_steps, towers_at};
pub use queens::queens_steps;
pub use sudoku::{sudoku_steps, SudokuBoard, SudokuOutcome};
