//! Sudoku boards of size 4, 6 and 9 with a backtracking solver.

use algoscope_core::{BoardSnapshot, Step, StepKind};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SudokuError};

/// Board sizes with a box layout, as `(size, box_rows, box_cols)`.
const LAYOUTS: [(usize, usize, usize); 3] = [(4, 2, 2), (6, 2, 3), (9, 3, 3)];

/// Result of asking the solver for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SudokuOutcome {
    Solved,
    /// Every cell was already filled without conflicts.
    AlreadySolved,
    /// Nothing was entered; the board stays empty.
    NothingToSolve,
    /// The givens clash or the search ran out of candidates. The board has
    /// been cleared.
    Unsolvable,
}

/// A square Sudoku grid. `0` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuBoard {
    size: usize,
    box_rows: usize,
    box_cols: usize,
    cells: Vec<Vec<u8>>,
    givens: Vec<(usize, usize)>,
}

impl SudokuBoard {
    /// An empty board.
    pub fn new(size: usize) -> Result<Self> {
        let (_, box_rows, box_cols) = LAYOUTS
            .iter()
            .copied()
            .find(|&(s, _, _)| s == size)
            .ok_or(SudokuError::UnsupportedSize(size))?;
        Ok(Self {
            size,
            box_rows,
            box_cols,
            cells: vec![vec![0; size]; size],
            givens: Vec::new(),
        })
    }

    /// Read a board from text. Rows are separated by newlines or `/`; cells
    /// by whitespace, or written together as one token (`12.4`). Blanks are
    /// `.`, `_` or `0`. The row count decides the board size.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<String>> = text
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(split_row)
            .collect();

        let mut board = Self::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != board.size {
                return Err(SudokuError::MalformedRow {
                    row: r + 1,
                    expected: board.size,
                    found: row.len(),
                });
            }
            for (c, token) in row.iter().enumerate() {
                let value = parse_cell(token, board.size).ok_or_else(|| SudokuError::InvalidCell {
                    row: r + 1,
                    col: c + 1,
                    token: token.clone(),
                })?;
                board.cells[r][c] = value;
                if value != 0 {
                    board.givens.push((r, c));
                }
            }
        }
        Ok(board)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Set a single cell, as typed into the grid. `0` clears it.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        if row >= self.size || col >= self.size || usize::from(value) > self.size {
            return Err(SudokuError::InvalidCell {
                row: row + 1,
                col: col + 1,
                token: value.to_string(),
            });
        }
        self.cells[row][col] = value;
        self.givens.retain(|&cell| cell != (row, col));
        if value != 0 {
            self.givens.push((row, col));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Whether `num` can go at `(row, col)` without repeating in the row,
    /// column or box. The cell itself is ignored.
    pub fn is_safe(&self, row: usize, col: usize, num: u8) -> bool {
        for x in 0..self.size {
            if (x != col && self.cells[row][x] == num) || (x != row && self.cells[x][col] == num) {
                return false;
            }
        }
        let top = row - row % self.box_rows;
        let left = col - col % self.box_cols;
        for r in top..top + self.box_rows {
            for c in left..left + self.box_cols {
                if (r, c) != (row, col) && self.cells[r][c] == num {
                    return false;
                }
            }
        }
        true
    }

    /// Filled cells that repeat a value in their row, column or box.
    pub fn conflicts(&self) -> Vec<(usize, usize)> {
        let mut clashes = Vec::new();
        for r in 0..self.size {
            for c in 0..self.size {
                let v = self.cells[r][c];
                if v != 0 && !self.is_safe(r, c, v) {
                    clashes.push((r, c));
                }
            }
        }
        clashes
    }

    /// Solve in place. An unsolvable board is cleared rather than left
    /// partially searched.
    pub fn solve(&mut self) -> SudokuOutcome {
        if self.is_empty() {
            return SudokuOutcome::NothingToSolve;
        }
        if !self.conflicts().is_empty() {
            self.clear();
            return SudokuOutcome::Unsolvable;
        }
        if self.is_full() {
            return SudokuOutcome::AlreadySolved;
        }
        if self.empty_cells().any(|(r, c)| self.candidates(r, c) == 0) {
            self.clear();
            return SudokuOutcome::Unsolvable;
        }
        if self.backtrack() {
            SudokuOutcome::Solved
        } else {
            self.clear();
            SudokuOutcome::Unsolvable
        }
    }

    /// Fill the most constrained empty cell first. A cell with no
    /// candidates fails the branch straight away.
    fn backtrack(&mut self) -> bool {
        let Some((row, col)) = self.empty_cells().min_by_key(|&(r, c)| self.candidates(r, c)) else {
            return true;
        };
        for num in 1..=self.size as u8 {
            if self.is_safe(row, col, num) {
                self.cells[row][col] = num;
                if self.backtrack() {
                    return true;
                }
                self.cells[row][col] = 0;
            }
        }
        false
    }

    fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size)
            .flat_map(move |r| (0..self.size).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cells[r][c] == 0)
    }

    /// Number of values that fit at an empty cell.
    fn candidates(&self, row: usize, col: usize) -> usize {
        (1..=self.size as u8).filter(|&n| self.is_safe(row, col, n)).count()
    }

    fn clear(&mut self) {
        self.cells = vec![vec![0; self.size]; self.size];
        self.givens.clear();
    }

    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            size: self.size,
            cells: self.cells.clone(),
            focus: None,
            conflicts: self.conflicts(),
            fixed: self.givens.clone(),
        }
    }
}

fn split_row(row: &str) -> Vec<String> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    match tokens.as_slice() {
        // a packed row such as "1..4"
        [packed] if packed.chars().count() > 1 => packed.chars().map(String::from).collect(),
        _ => tokens.into_iter().map(String::from).collect(),
    }
}

fn parse_cell(token: &str, size: usize) -> Option<u8> {
    match token {
        "." | "_" | "0" => Some(0),
        _ => token
            .parse::<u8>()
            .ok()
            .filter(|&v| v >= 1 && usize::from(v) <= size),
    }
}

/// Solve a copy of `board` and present the outcome as a one-step sequence.
pub fn sudoku_steps(board: &SudokuBoard) -> (Vec<Step>, SudokuOutcome) {
    let mut work = board.clone();
    let outcome = work.solve();
    let snapshot = work.to_snapshot();
    let step = match outcome {
        SudokuOutcome::Solved => Step::new(StepKind::Complete, "Sudoku solved!", snapshot).at_line(15),
        SudokuOutcome::AlreadySolved => {
            Step::new(StepKind::Complete, "The board is already solved", snapshot).at_line(15)
        }
        SudokuOutcome::NothingToSolve => {
            Step::new(StepKind::Complete, "Enter some numbers, then solve", snapshot).at_line(0)
        }
        SudokuOutcome::Unsolvable => Step::new(
            StepKind::Failed,
            "No solution: the board is unsolvable, please check your input",
            snapshot,
        )
        .at_line(11),
    };
    (vec![step], outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "1 . . 4\n. 4 1 .\n. 1 4 .\n4 . . 1";

    fn assert_valid(board: &SudokuBoard) {
        assert!(board.is_full());
        assert!(board.conflicts().is_empty());
    }

    #[test]
    fn solves_a_four_by_four() {
        let mut board = SudokuBoard::parse(PUZZLE).unwrap();
        assert_eq!(board.solve(), SudokuOutcome::Solved);
        assert_valid(&board);
        // givens are untouched
        assert_eq!(board.get(0, 0), Some(1));
        assert_eq!(board.get(3, 3), Some(1));
    }

    #[test]
    fn packed_rows_and_slashes() {
        let board = SudokuBoard::parse("1..4/.41./.14./4..1").unwrap();
        assert_eq!(board, SudokuBoard::parse(PUZZLE).unwrap());
    }

    #[test]
    fn six_by_six_uses_two_by_three_boxes() {
        let mut board = SudokuBoard::new(6).unwrap();
        board.set(0, 0, 1).unwrap();
        // same 2x3 box as (0, 0)
        assert!(!board.is_safe(1, 2, 1));
        // next box over
        assert!(board.is_safe(1, 3, 1));
        assert_eq!(board.solve(), SudokuOutcome::Solved);
        assert_valid(&board);
    }

    #[test]
    fn nine_by_nine() {
        let text = "5 3 . . 7 . . . .\n\
                    6 . . 1 9 5 . . .\n\
                    . 9 8 . . . . 6 .\n\
                    8 . . . 6 . . . 3\n\
                    4 . . 8 . 3 . . 1\n\
                    7 . . . 2 . . . 6\n\
                    . 6 . . . . 2 8 .\n\
                    . . . 4 1 9 . . 5\n\
                    . . . . 8 . . 7 9";
        let mut board = SudokuBoard::parse(text).unwrap();
        assert_eq!(board.solve(), SudokuOutcome::Solved);
        assert_valid(&board);
        assert_eq!(board.get(0, 2), Some(4));
    }

    #[test]
    fn empty_board_stays_empty() {
        let mut board = SudokuBoard::new(4).unwrap();
        assert_eq!(board.solve(), SudokuOutcome::NothingToSolve);
        assert!(board.is_empty());
    }

    #[test]
    fn unsolvable_board_is_cleared() {
        // (0, 3) can only be 4, but 4 already sits below it
        let mut board = SudokuBoard::parse("1 2 3 .\n. . . 4\n. . . .\n. . . .").unwrap();
        assert_eq!(board.solve(), SudokuOutcome::Unsolvable);
        assert!(board.is_empty());
    }

    #[test]
    fn dead_cell_fails_fast() {
        // column 8 holds 1..=8, and row 8 already has a 9, so (8, 8) has no
        // candidate although no givens clash
        let mut board = SudokuBoard::new(9).unwrap();
        for row in 0..8 {
            board.set(row, 8, row as u8 + 1).unwrap();
        }
        board.set(8, 0, 9).unwrap();
        assert!(board.conflicts().is_empty());
        assert_eq!(board.solve(), SudokuOutcome::Unsolvable);
        assert!(board.is_empty());
    }

    #[test]
    fn sparse_nine_by_nine_solves_quickly() {
        let mut board = SudokuBoard::new(9).unwrap();
        board.set(0, 0, 1).unwrap();
        board.set(4, 4, 5).unwrap();
        board.set(8, 8, 9).unwrap();
        assert_eq!(board.solve(), SudokuOutcome::Solved);
        assert_valid(&board);
    }

    #[test]
    fn clashing_givens_are_unsolvable() {
        let mut board = SudokuBoard::parse("1 1 . .\n. . . .\n. . . .\n. . . .").unwrap();
        assert_eq!(board.conflicts(), vec![(0, 0), (0, 1)]);
        assert_eq!(board.solve(), SudokuOutcome::Unsolvable);
        assert!(board.is_empty());
    }

    #[test]
    fn full_valid_board_is_already_solved() {
        let mut board = SudokuBoard::parse(PUZZLE).unwrap();
        board.solve();
        let solved = board.clone();
        assert_eq!(board.solve(), SudokuOutcome::AlreadySolved);
        assert_eq!(board, solved);
    }

    #[test]
    fn input_errors() {
        assert_eq!(SudokuBoard::new(5), Err(SudokuError::UnsupportedSize(5)));
        assert_eq!(
            SudokuBoard::parse("1 2 3\n. . .\n. . .\n. . ."),
            Err(SudokuError::MalformedRow {
                row: 1,
                expected: 4,
                found: 3
            })
        );
        assert!(matches!(
            SudokuBoard::parse("1 . . 9\n. . . .\n. . . .\n. . . ."),
            Err(SudokuError::InvalidCell { row: 1, col: 4, .. })
        ));
        let mut board = SudokuBoard::new(4).unwrap();
        assert!(board.set(4, 0, 1).is_err());
        assert!(board.set(0, 0, 5).is_err());
    }

    #[test]
    fn steps_report_the_outcome() {
        let board = SudokuBoard::parse(PUZZLE).unwrap();
        let (steps, outcome) = sudoku_steps(&board);
        assert_eq!(outcome, SudokuOutcome::Solved);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].kind, StepKind::Complete);
        assert_eq!(steps[0].as_board().unwrap().fixed.len(), 8);
        // the caller's board is not touched
        assert!(!board.is_full());

        let bad = SudokuBoard::parse("1 2 3 .\n. . . 4\n. . . .\n. . . .").unwrap();
        let (steps, outcome) = sudoku_steps(&bad);
        assert_eq!(outcome, SudokuOutcome::Unsolvable);
        assert_eq!(steps[0].kind, StepKind::Failed);
        assert!(steps[0].as_board().unwrap().cells.iter().flatten().all(|&v| v == 0));
    }
}
