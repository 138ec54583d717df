/// Errors produced by the backtracking search.
///
/// Both variants mean "this puzzle cannot be completed"; they are kept
/// distinct so diagnostics can tell a contradictory input from an
/// exhausted search. Callers that only care about solvability can treat
/// them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Two pre-filled cells already violate a row, column, or region
    /// constraint, so no search was attempted.
    #[display("puzzle givens are contradictory")]
    InconsistentGivens,
    /// The search tried every assignment without completing the grid.
    #[display("puzzle has no solution")]
    NoSolution,
}
