//! Backtracking solver for ninefold sudoku grids.
//!
//! The solver performs an exhaustive depth-first search over the empty
//! cells of a [`DigitGrid`](ninefold_core::DigitGrid), trying digits in
//! ascending order at each cell and retreating when a cell has no viable
//! digit left. Position order and digit order are fixed, so the result for
//! a given input is fully deterministic.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::DigitGrid;
//! use ninefold_solver::solve;
//!
//! let puzzle: DigitGrid =
//!     "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37."
//!         .parse()?;
//! let solution = solve(&puzzle)?;
//! assert_eq!(
//!     solution.to_string(),
//!     "135762984946381257728459613694517832812936745357824196473298561581673429269145378",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
