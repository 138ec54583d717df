//! Chronological backtracking over the empty cells of a grid.

use ninefold_core::{Digit, DigitGrid, Position};

use crate::SolveError;

/// Solves a puzzle by exhaustive depth-first backtracking.
///
/// The empty positions are collected once in ascending index order. A
/// cursor walks over them with a private working copy of the grid: at each
/// position the digits 1-9 are tried in ascending order, skipping digits
/// at or below the one most recently tried there, and the first digit with
/// no row/column/region conflict is placed. When no digit fits, the cursor
/// retreats and the previous placement is cleared so its next digit can be
/// tried. The first completion reached by this ordering is returned; the
/// search does not look for alternate solutions.
///
/// The input grid is left untouched; the caller keeps ownership of its
/// snapshot.
///
/// # Errors
///
/// Returns [`SolveError::InconsistentGivens`] if two pre-filled cells
/// already conflict, and [`SolveError::NoSolution`] if the search retreats
/// past the first empty position without completing the grid.
///
/// # Examples
///
/// ```
/// use ninefold_core::DigitGrid;
/// use ninefold_solver::{SolveError, solve};
///
/// let unsolvable: DigitGrid = format!("55{}", ".".repeat(79)).parse()?;
/// assert_eq!(solve(&unsolvable), Err(SolveError::InconsistentGivens));
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
pub fn solve(grid: &DigitGrid) -> Result<DigitGrid, SolveError> {
    if !grid.is_consistent() {
        return Err(SolveError::InconsistentGivens);
    }

    let empties: Vec<Position> = grid.empty_positions().collect();
    let mut work = grid.clone();
    // Digit most recently tried at each step; trials resume above it after
    // a retreat instead of restarting from 1.
    let mut last_tried: Vec<Option<Digit>> = vec![None; empties.len()];
    let mut step = 0;

    while step < empties.len() {
        let pos = empties[step];
        match next_fit(&work, pos, last_tried[step]) {
            Some(digit) => {
                work.set(pos, digit);
                last_tried[step] = Some(digit);
                step += 1;
            }
            None => {
                last_tried[step] = None;
                if step == 0 {
                    return Err(SolveError::NoSolution);
                }
                step -= 1;
                work.clear(empties[step]);
            }
        }
    }

    debug_assert!(work.is_complete());
    Ok(work)
}

/// Finds the smallest conflict-free digit at `pos` strictly above `after`.
fn next_fit(grid: &DigitGrid, pos: Position, after: Option<Digit>) -> Option<Digit> {
    let start = after.map_or(0, |digit| usize::from(digit.value()));
    Digit::ALL[start..]
        .iter()
        .copied()
        .find(|&digit| grid.conflicts(pos, digit).is_empty())
}
