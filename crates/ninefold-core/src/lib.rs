//! Core data structures for the ninefold sudoku service.
//!
//! This crate provides the puzzle representation and constraint checking that
//! the solver and the API layer are built on. It has three concerns:
//!
//! 1. **Grid codec** - [`grid`]: the 81-character textual encoding
//!    (digits `1`-`9`, `.` for empty) and the [`DigitGrid`] it decodes into.
//! 2. **Coordinate mapping** - [`position`]: board positions, their
//!    row/column/region math, and the external `A1`-style coordinate text.
//! 3. **Constraint checking** - [`placement`]: whether placing a digit at a
//!    position collides with the digit elsewhere in its row, column, or
//!    3×3 region, reported as a [`ConflictSet`].
//!
//! Every fallible text seam returns a dedicated error type so callers can
//! map each failure kind to its own user-facing message without inspecting
//! message strings.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{ConflictSet, Digit, DigitGrid, Position};
//!
//! let text = format!("5{}", ".".repeat(80));
//! let grid: DigitGrid = text.parse()?;
//!
//! // '5' is already at A1, so placing another '5' in row A conflicts.
//! let pos = Position::from_coordinate("A2")?;
//! assert_eq!(grid.conflicts(pos, Digit::D5), ConflictSet::ROW | ConflictSet::REGION);
//!
//! // The cell that already holds the digit is excused.
//! let own = Position::from_coordinate("A1")?;
//! assert!(grid.conflicts(own, Digit::D5).is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digit;
pub mod grid;
pub mod placement;
pub mod position;

pub use self::{
    digit::{Digit, ParseDigitError},
    grid::{DigitGrid, ParseGridError},
    placement::ConflictSet,
    position::{ParseCoordinateError, Position},
};
