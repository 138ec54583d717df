//! The 81-cell digit grid and its textual encoding.
//!
//! A puzzle travels as a single 81-character string in row-major order, one
//! character per cell: `'1'`-`'9'` for a filled cell, `'.'` for an empty
//! one. [`DigitGrid`] is the decoded form; [`FromStr`] and [`Display`] are
//! the codec and are lossless inverses of each other.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Digit, Position};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 81;

/// A 9×9 grid of optional digits in row-major order.
///
/// Grids are plain values: cloning one gives an independent snapshot, and
/// nothing in this crate shares grid state between calls.
///
/// # Examples
///
/// ```
/// use ninefold_core::{Digit, DigitGrid, Position};
///
/// let text = format!("123{}", ".".repeat(78));
/// let grid: DigitGrid = text.parse()?;
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D1));
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// assert_eq!(grid.to_string(), text);
/// # Ok::<(), ninefold_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; CELL_COUNT],
}

/// Error returned when puzzle text is not a valid grid encoding.
///
/// When text is wrong on both counts, [`InvalidCharacters`] wins: the
/// character scan runs over the whole input before the length check.
///
/// [`InvalidCharacters`]: ParseGridError::InvalidCharacters
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text contains a character other than `1`-`9` and `.`.
    #[display("puzzle text may only contain digits 1-9 and '.'")]
    InvalidCharacters,
    /// The text is not exactly 81 characters long.
    #[display("puzzle text must be exactly 81 characters long")]
    WrongLength,
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, replacing whatever was there.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Clears the cell at `pos` back to empty.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the empty positions in ascending index
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{DigitGrid, Position};
    ///
    /// let text = format!("1.3{}", ".".repeat(78));
    /// let grid: DigitGrid = text.parse()?;
    ///
    /// let first_two: Vec<_> = grid.empty_positions().take(2).collect();
    /// assert_eq!(first_two, [Position::new(1, 0), Position::new(3, 0)]);
    /// # Ok::<(), ninefold_core::ParseGridError>(())
    /// ```
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Position::from_index(index))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text
            .chars()
            .any(|ch| ch != '.' && Digit::try_from(ch).is_err())
        {
            return Err(ParseGridError::InvalidCharacters);
        }
        if text.chars().count() != CELL_COUNT {
            return Err(ParseGridError::WrongLength);
        }
        let mut cells = [None; CELL_COUNT];
        for (index, ch) in text.chars().enumerate() {
            cells[index] = Digit::try_from(ch).ok();
        }
        Ok(Self { cells })
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = cell.map_or('.', Digit::to_char);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
