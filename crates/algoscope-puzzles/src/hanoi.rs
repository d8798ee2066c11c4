//! Tower of Hanoi as a move log.
//!
//! The full move list is computed once; the tower contents at any step are
//! rebuilt by replaying the prefix of the log from the starting position, so
//! stepping backward is just another replay.

use algoscope_core::{HanoiMove, Peg, Step, StepKind, TowerSnapshot};

/// Every move for `disks` disks from peg A to peg C via B, in order.
pub fn hanoi_moves(disks: u32) -> Vec<HanoiMove> {
    let mut moves = Vec::new();
    collect(disks, Peg::A, Peg::C, Peg::B, &mut moves);
    moves
}

fn collect(n: u32, from: Peg, to: Peg, via: Peg, moves: &mut Vec<HanoiMove>) {
    if n == 0 {
        return;
    }
    collect(n - 1, from, via, to, moves);
    moves.push(HanoiMove { disk: n, from, to });
    collect(n - 1, via, to, from, moves);
}

/// Peg contents after the first `step` moves, bottom disk first.
pub fn towers_at(disks: u32, moves: &[HanoiMove], step: usize) -> [Vec<u32>; 3] {
    let mut pegs: [Vec<u32>; 3] = [(1..=disks).rev().collect(), Vec::new(), Vec::new()];
    for m in moves.iter().take(step) {
        if let Some(disk) = pegs[m.from.index()].pop() {
            pegs[m.to.index()].push(disk);
        }
    }
    pegs
}

/// One step per move index `0..=2^n - 1`. Step 0 is the starting position
/// and the last step, which completes the puzzle, carries the final move.
pub fn hanoi_steps(disks: u32) -> Vec<Step> {
    let moves = hanoi_moves(disks);
    let total = moves.len();

    (0..=total)
        .map(|step| {
            let snapshot = TowerSnapshot {
                pegs: towers_at(disks, &moves, step),
                last_move: step.checked_sub(1).map(|i| moves[i]),
            };
            let last = snapshot.last_move;
            match last {
                None => Step::new(
                    StepKind::Start,
                    format!("{disks} disks on peg A, {total} moves to go"),
                    snapshot,
                )
                .at_line(0),
                Some(m) if step == total => {
                    Step::new(StepKind::Complete, format!("{m}. Puzzle solved!"), snapshot).at_line(3)
                }
                Some(m) => Step::new(StepKind::Move, format!("Step {step}/{total}: {m}"), snapshot).at_line(3),
            }
        })
        .collect()
}
