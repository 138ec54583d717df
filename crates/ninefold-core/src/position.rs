//! Board positions and coordinate text mapping.
//!
//! Positions are (x, y) pairs with x the column and y the row, both 0-8.
//! The external coordinate form is `<RowLetter><ColumnDigit>` with the row
//! letter `A`-`I` mapping to rows 0-8 and the column digit `1`-`9` mapping
//! to columns 0-8, so `"A1"` is the top-left cell and `"I9"` the bottom
//! right.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// # Examples
///
/// ```
/// use ninefold_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.index(), 2 * 9 + 4);
/// assert_eq!(pos.to_coordinate(), "C5");
///
/// let parsed = Position::from_coordinate("C5")?;
/// assert_eq!(parsed, pos);
/// # Ok::<(), ninefold_core::ParseCoordinateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

/// Error returned when coordinate text does not name a cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordinateError {
    /// The row letter is not in the range `A`-`I`.
    #[display("row letter must be A-I")]
    RowOutOfRange,
    /// The column digit is not in the range `1`-`9`.
    #[display("column digit must be 1-9")]
    ColumnOutOfRange,
    /// The text is not exactly one row letter followed by one column digit.
    #[display("coordinate must be a row letter followed by a column digit")]
    WrongShape,
}

impl Position {
    /// Creates a new position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81);
        Self::new((index % 9) as u8, (index / 9) as u8)
    }

    /// Parses coordinate text like `"A1"` into a position.
    ///
    /// The row letter is case-sensitive; only `A`-`I` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCoordinateError`] if the text is not exactly a valid
    /// row letter followed by a valid column digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{ParseCoordinateError, Position};
    ///
    /// assert_eq!(Position::from_coordinate("A1")?, Position::new(0, 0));
    /// assert_eq!(Position::from_coordinate("I9")?, Position::new(8, 8));
    /// assert_eq!(
    ///     Position::from_coordinate("J1"),
    ///     Err(ParseCoordinateError::RowOutOfRange),
    /// );
    /// # Ok::<(), ninefold_core::ParseCoordinateError>(())
    /// ```
    pub fn from_coordinate(text: &str) -> Result<Self, ParseCoordinateError> {
        let mut chars = text.chars();
        let row = chars.next().ok_or(ParseCoordinateError::WrongShape)?;
        let column = chars.next().ok_or(ParseCoordinateError::WrongShape)?;
        if chars.next().is_some() {
            return Err(ParseCoordinateError::WrongShape);
        }
        let y = match row {
            'A'..='I' => row as u8 - b'A',
            _ => return Err(ParseCoordinateError::RowOutOfRange),
        };
        let x = match column {
            '1'..='9' => column as u8 - b'1',
            _ => return Err(ParseCoordinateError::ColumnOutOfRange),
        };
        Ok(Self::new(x, y))
    }

    /// Returns the coordinate text for this position.
    #[must_use]
    pub fn to_coordinate(self) -> String {
        let row = (b'A' + self.y) as char;
        let column = (b'1' + self.x) as char;
        format!("{row}{column}")
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index of the 3×3 region containing this position
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn region_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3×3 region containing this
    /// position. Both coordinates are 0, 3, or 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Position;
    ///
    /// assert_eq!(Position::new(4, 7).region_origin(), Position::new(3, 6));
    /// ```
    #[must_use]
    pub const fn region_origin(self) -> Self {
        Self::new(self.x / 3 * 3, self.y / 3 * 3)
    }

    /// Returns an iterator over all 81 positions in ascending index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
