//! Placement constraint checking.
//!
//! A candidate placement is a (position, digit) pair. Each of the three
//! groupings the position belongs to (row, column, 3×3 region) is checked
//! for another occurrence of the digit. The check excuses exactly one cell:
//! the queried position itself. It answers "would this placement duplicate
//! the digit", not "does the cell currently hold it", so checking a digit
//! against the cell that already contains it reports no conflict.

use crate::{Digit, DigitGrid, Position};

bitflags::bitflags! {
    /// The groupings in which a candidate digit already appears elsewhere.
    ///
    /// An empty set means the placement is fully valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::ConflictSet;
    ///
    /// let conflicts = ConflictSet::ROW | ConflictSet::REGION;
    /// assert!(conflicts.contains(ConflictSet::ROW));
    /// assert!(!conflicts.contains(ConflictSet::COLUMN));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ConflictSet: u8 {
        /// The digit already appears elsewhere in the row.
        const ROW = 1;
        /// The digit already appears elsewhere in the column.
        const COLUMN = 1 << 1;
        /// The digit already appears elsewhere in the 3×3 region.
        const REGION = 1 << 2;
    }
}

impl DigitGrid {
    /// Returns `true` if placing `digit` at `pos` would not duplicate the
    /// digit within its row.
    ///
    /// Only the queried position itself is excused; a cell elsewhere in the
    /// row holding `digit` fails the check even if `pos` currently holds
    /// the same digit.
    #[must_use]
    pub fn row_allows(&self, pos: Position, digit: Digit) -> bool {
        (0..9).all(|x| {
            let other = Position::new(x, pos.y());
            other == pos || self.get(other) != Some(digit)
        })
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate the
    /// digit within its column.
    #[must_use]
    pub fn column_allows(&self, pos: Position, digit: Digit) -> bool {
        (0..9).all(|y| {
            let other = Position::new(pos.x(), y);
            other == pos || self.get(other) != Some(digit)
        })
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate the
    /// digit within its 3×3 region.
    #[must_use]
    pub fn region_allows(&self, pos: Position, digit: Digit) -> bool {
        let origin = pos.region_origin();
        (0..3).all(|dy| {
            (0..3).all(|dx| {
                let other = Position::new(origin.x() + dx, origin.y() + dy);
                other == pos || self.get(other) != Some(digit)
            })
        })
    }

    /// Evaluates all three groupings for placing `digit` at `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{ConflictSet, Digit, DigitGrid, Position};
    ///
    /// // Row A is "5.....3..", everything else empty.
    /// let text = format!("5.....3..{}", ".".repeat(72));
    /// let grid: DigitGrid = text.parse()?;
    ///
    /// // '5' is already at A1, so A2 cannot take it.
    /// let conflicts = grid.conflicts(Position::new(1, 0), Digit::D5);
    /// assert_eq!(conflicts, ConflictSet::ROW | ConflictSet::REGION);
    ///
    /// // '1' appears nowhere, so A2 can take it.
    /// assert!(grid.conflicts(Position::new(1, 0), Digit::D1).is_empty());
    /// # Ok::<(), ninefold_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub fn conflicts(&self, pos: Position, digit: Digit) -> ConflictSet {
        let mut set = ConflictSet::empty();
        if !self.row_allows(pos, digit) {
            set |= ConflictSet::ROW;
        }
        if !self.column_allows(pos, digit) {
            set |= ConflictSet::COLUMN;
        }
        if !self.region_allows(pos, digit) {
            set |= ConflictSet::REGION;
        }
        set
    }

    /// Returns `true` if no pre-filled cell conflicts with another
    /// pre-filled cell in its row, column, or region.
    ///
    /// Empty cells are ignored; a consistent grid may still have no
    /// solution.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Position::all().all(|pos| match self.get(pos) {
            Some(digit) => self.conflicts(pos, digit).is_empty(),
            None => true,
        })
    }
}
