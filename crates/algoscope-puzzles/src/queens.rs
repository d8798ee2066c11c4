//! N-Queens by stepped backtracking.

use algoscope_core::{BoardSnapshot, Step, StepKind};

/// Search for the first placement of `n` non-attacking queens, row by row,
/// recording each placement, each attacked square and each retreat.
pub fn queens_steps(n: usize) -> Vec<Step> {
    let mut cols = Vec::with_capacity(n);
    let mut steps = Vec::new();

    if place_row(n, 0, &mut cols, &mut steps) {
        steps.push(
            Step::new(
                StepKind::Complete,
                format!("Placed {n} queens with no two attacking"),
                board(n, &cols, None, Vec::new()),
            )
            .at_line(1),
        );
    } else {
        steps.push(
            Step::new(
                StepKind::Failed,
                format!("No arrangement of {n} queens exists"),
                board(n, &cols, None, Vec::new()),
            )
            .at_line(9),
        );
    }
    steps
}

/// `cols[r]` is the column of the queen in row `r`.
fn place_row(n: usize, row: usize, cols: &mut Vec<usize>, steps: &mut Vec<Step>) -> bool {
    if row == n {
        return true;
    }
    for col in 0..n {
        let attackers = attackers(cols, row, col);
        if !attackers.is_empty() {
            steps.push(
                Step::new(
                    StepKind::Conflict,
                    format!("Row {row}, column {col} is under attack"),
                    board(n, cols, Some((row, col)), attackers),
                )
                .at_line(3),
            );
            continue;
        }

        cols.push(col);
        steps.push(
            Step::new(
                StepKind::Place,
                format!("Placing queen at row {row}, column {col}"),
                board(n, cols, Some((row, col)), Vec::new()),
            )
            .at_line(4),
        );
        if place_row(n, row + 1, cols, steps) {
            return true;
        }
        cols.pop();
        steps.push(
            Step::new(
                StepKind::Backtrack,
                format!("Backtracking: removing queen from row {row}, column {col}"),
                board(n, cols, Some((row, col)), Vec::new()),
            )
            .at_line(6),
        );
    }
    false
}

/// Queens already placed that attack `(row, col)`.
fn attackers(cols: &[usize], row: usize, col: usize) -> Vec<(usize, usize)> {
    cols.iter()
        .enumerate()
        .filter(|&(r, &c)| c == col || c.abs_diff(col) == row - r)
        .map(|(r, &c)| (r, c))
        .collect()
}

fn board(n: usize, cols: &[usize], focus: Option<(usize, usize)>, conflicts: Vec<(usize, usize)>) -> BoardSnapshot {
    let mut snapshot = BoardSnapshot::empty(n);
    for (r, &c) in cols.iter().enumerate() {
        snapshot.cells[r][c] = 1;
    }
    snapshot.focus = focus;
    snapshot.conflicts = conflicts;
    snapshot
}
