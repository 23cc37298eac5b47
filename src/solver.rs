use crate::engine::{Grid, Path, StepDirection};
use tracing::{debug, trace};

/// Solves the greedy gnomes problem by enumerating move sequences.
///
/// For every length `len` from 0 to `grid.max_steps()` and every bit pattern
/// `bits` below `2^len`, a candidate path is built by `build_candidate` and
/// the richest candidate is kept. Runs in exponential time.
///
/// # Panics
/// Panics if the grid is empty, if `rows + columns - 2 >= 64`, or if the
/// top-left cell is a rock.
pub fn greedy_gnomes_exhaustive(grid: &Grid) -> Path<'_> {
    assert!(grid.rows() > 0, "grid must have at least one row");
    assert!(grid.columns() > 0, "grid must have at least one column");

    let max_steps = grid.max_steps();
    assert!(
        max_steps < 64,
        "exhaustive search needs rows + columns - 2 < 64, got {}",
        max_steps
    );

    let mut best = Path::new(grid);
    let mut candidates: u64 = 0;

    for len in 0..=max_steps {
        for bits in 0..(1u64 << len) {
            let candidate = build_candidate(grid, bits, len);
            candidates = candidates.wrapping_add(1);

            if candidate.total_gold() > best.total_gold() {
                trace!(
                    gold = candidate.total_gold(),
                    row = candidate.final_row(),
                    column = candidate.final_column(),
                    "exhaustive: new best candidate"
                );
                best = candidate;
            }
        }
    }

    debug!(
        rows = grid.rows(),
        columns = grid.columns(),
        candidates,
        best_gold = best.total_gold(),
        "exhaustive search finished"
    );
    best
}

/// Builds the candidate path for one bit pattern.
///
/// Bits are consulted from bit 0 up to bit `len`. A set bit asks for a step
/// right; if that is blocked, or the bit is clear, a step down is tried
/// instead. When neither applies, that bit contributes no move, so the
/// candidate may be shorter than `len + 1` steps.
fn build_candidate(grid: &Grid, bits: u64, len: usize) -> Path<'_> {
    let mut candidate = Path::new(grid);
    for k in 0..=len {
        let wants_right = (bits >> k) & 1 == 1;
        if wants_right && candidate.is_step_valid(StepDirection::Right) {
            candidate.add_step(StepDirection::Right);
        } else if candidate.is_step_valid(StepDirection::Down) {
            candidate.add_step(StepDirection::Down);
        }
    }
    candidate
}

/// Solves the greedy gnomes problem with dynamic programming in `O(rows * columns)` steps.
///
/// A table holds, for every cell, the richest path ending there, or `None` when
/// the cell is a rock or cannot be reached. Each entry extends either the entry
/// above (by a step down) or the entry to the left (by a step right), preferring
/// the one from above on a tie. The richest entry in the table is returned; on a
/// tie the first in row-major order wins, so the path may stop before the
/// bottom-right cell.
///
/// # Panics
/// Panics if the grid is empty or the top-left cell is a rock.
pub fn greedy_gnomes_dyn_prog(grid: &Grid) -> Path<'_> {
    assert!(grid.rows() > 0, "grid must have at least one row");
    assert!(grid.columns() > 0, "grid must have at least one column");

    let rows = grid.rows();
    let columns = grid.columns();
    let mut table: Vec<Option<Path<'_>>> = Vec::with_capacity(rows * columns);

    for r in 0..rows {
        for c in 0..columns {
            let entry = if grid.is_rock(r, c) {
                None
            } else if r == 0 && c == 0 {
                Some(Path::new(grid))
            } else {
                let from_above = if r > 0 {
                    extend(table[(r - 1) * columns + c].as_ref(), StepDirection::Down)
                } else {
                    None
                };
                let from_left = if c > 0 {
                    extend(table[r * columns + c - 1].as_ref(), StepDirection::Right)
                } else {
                    None
                };

                match (from_above, from_left) {
                    (Some(above), Some(left)) => {
                        if above.total_gold() >= left.total_gold() {
                            Some(above)
                        } else {
                            Some(left)
                        }
                    }
                    (above, left) => above.or(left),
                }
            };
            table.push(entry);
        }
    }

    let mut best = Path::new(grid);
    let mut reachable = 0usize;
    for path in table.into_iter().flatten() {
        reachable += 1;
        if path.total_gold() > best.total_gold() {
            best = path;
        }
    }

    debug!(
        rows,
        columns,
        reachable,
        best_gold = best.total_gold(),
        "dynamic programming finished"
    );
    best
}

// Copies `path` and takes one more step. The caller guarantees the step is valid.
fn extend<'a>(path: Option<&Path<'a>>, direction: StepDirection) -> Option<Path<'a>> {
    path.map(|p| {
        let mut extended = p.clone();
        extended.add_step(direction);
        extended
    })
}
