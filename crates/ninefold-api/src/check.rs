//! The `POST /api/check` mapping.

use ninefold_core::{ConflictSet, Digit, DigitGrid, ParseGridError, Position};
use serde::{Deserialize, Serialize};

use crate::{
    INVALID_CHARACTERS, INVALID_COORDINATE, INVALID_VALUE, MISSING_FIELDS, WRONG_LENGTH,
};

/// Decoded body of a `POST /api/check` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckRequest {
    /// 81-character puzzle text, if the field was present.
    #[serde(default)]
    pub puzzle: Option<String>,
    /// Coordinate text like `"A1"`, if the field was present.
    #[serde(default)]
    pub coordinate: Option<String>,
    /// Candidate digit text like `"5"`, if the field was present.
    #[serde(default)]
    pub value: Option<String>,
}

/// Body of a `POST /api/check` response.
///
/// Serializes to `{"valid":true}`, `{"valid":false,"conflict":[...]}`, or
/// `{"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CheckResponse {
    /// The placement does not duplicate the digit in any grouping.
    Valid {
        /// Always `true`.
        valid: bool,
    },
    /// The placement conflicts with at least one grouping.
    Invalid {
        /// Always `false`.
        valid: bool,
        /// Conflicting groupings in row, column, region order.
        conflict: Vec<&'static str>,
    },
    /// The request was rejected; `error` is the exact user-facing message.
    Error {
        /// User-facing message.
        error: &'static str,
    },
}

impl CheckResponse {
    const fn error(error: &'static str) -> Self {
        Self::Error { error }
    }

    fn from_conflicts(conflicts: ConflictSet) -> Self {
        if conflicts.is_empty() {
            return Self::Valid { valid: true };
        }
        let mut conflict = Vec::new();
        if conflicts.contains(ConflictSet::ROW) {
            conflict.push("row");
        }
        if conflicts.contains(ConflictSet::COLUMN) {
            conflict.push("column");
        }
        if conflicts.contains(ConflictSet::REGION) {
            conflict.push("region");
        }
        Self::Invalid {
            valid: false,
            conflict,
        }
    }
}

/// Maps a check request to its response body.
///
/// Validation order: field presence, puzzle characters, puzzle length,
/// coordinate, value, then the constraint evaluation itself. The cell
/// named by `coordinate` is excused from its own check, so confirming the
/// digit a cell already holds reports `valid: true`.
///
/// # Examples
///
/// ```
/// use ninefold_api::{CheckRequest, CheckResponse, check_placement};
///
/// let request = CheckRequest {
///     puzzle: Some(format!("5{}", ".".repeat(80))),
///     coordinate: Some("A1".into()),
///     value: Some("5".into()),
/// };
/// assert_eq!(check_placement(&request), CheckResponse::Valid { valid: true });
/// ```
#[must_use]
pub fn check_placement(request: &CheckRequest) -> CheckResponse {
    let (puzzle, coordinate, value) = match (
        request.puzzle.as_deref(),
        request.coordinate.as_deref(),
        request.value.as_deref(),
    ) {
        (Some(puzzle), Some(coordinate), Some(value))
            if !puzzle.is_empty() && !coordinate.is_empty() && !value.is_empty() =>
        {
            (puzzle, coordinate, value)
        }
        _ => {
            log::debug!("check rejected: field(s) missing");
            return CheckResponse::error(MISSING_FIELDS);
        }
    };

    let grid: DigitGrid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            log::debug!("check rejected: {err}");
            return CheckResponse::error(match err {
                ParseGridError::InvalidCharacters => INVALID_CHARACTERS,
                ParseGridError::WrongLength => WRONG_LENGTH,
            });
        }
    };

    let Ok(pos) = Position::from_coordinate(coordinate) else {
        log::debug!("check rejected: bad coordinate {coordinate:?}");
        return CheckResponse::error(INVALID_COORDINATE);
    };

    let Some(digit) = parse_value(value) else {
        log::debug!("check rejected: bad value {value:?}");
        return CheckResponse::error(INVALID_VALUE);
    };

    CheckResponse::from_conflicts(grid.conflicts(pos, digit))
}

/// Parses the `value` field: exactly one digit character `1`-`9`.
fn parse_value(value: &str) -> Option<Digit> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Digit::try_from(ch).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";

    fn request(puzzle: &str, coordinate: &str, value: &str) -> CheckRequest {
        CheckRequest {
            puzzle: Some(puzzle.to_owned()),
            coordinate: Some(coordinate.to_owned()),
            value: Some(value.to_owned()),
        }
    }

    fn conflict(groupings: &[&'static str]) -> CheckResponse {
        CheckResponse::Invalid {
            valid: false,
            conflict: groupings.to_vec(),
        }
    }

    #[test]
    fn test_valid_placement() {
        // A2 is empty and '3' fits there.
        assert_eq!(
            check_placement(&request(PUZZLE, "A2", "3")),
            CheckResponse::Valid { valid: true }
        );
    }

    #[test]
    fn test_confirming_own_digit_is_valid() {
        // A1 already holds '1'; the cell excuses itself.
        assert_eq!(
            check_placement(&request(PUZZLE, "A1", "1")),
            CheckResponse::Valid { valid: true }
        );
    }

    #[test]
    fn test_single_conflict() {
        // Row A already has a '5' at A3.
        let row_only = format!("..5......{}", ".".repeat(72));
        assert_eq!(
            check_placement(&request(&row_only, "A8", "5")),
            conflict(&["row"])
        );
    }

    #[test]
    fn test_multiple_conflicts_in_wire_order() {
        let mut grid = format!("5{}", ".".repeat(80)).parse::<DigitGrid>().unwrap();
        grid.set(Position::new(1, 8), Digit::D5);
        assert_eq!(
            check_placement(&request(&grid.to_string(), "A2", "5")),
            conflict(&["row", "column", "region"])
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut all = request(PUZZLE, "A1", "1");
        all.value = None;
        assert_eq!(check_placement(&all), CheckResponse::error(MISSING_FIELDS));
        assert_eq!(
            check_placement(&CheckRequest::default()),
            CheckResponse::error(MISSING_FIELDS)
        );
        assert_eq!(
            check_placement(&request(PUZZLE, "", "1")),
            CheckResponse::error(MISSING_FIELDS)
        );
    }

    #[test]
    fn test_puzzle_errors_before_coordinate_and_value() {
        assert_eq!(
            check_placement(&request(&"0".repeat(81), "Z0", "x")),
            CheckResponse::error(INVALID_CHARACTERS)
        );
        assert_eq!(
            check_placement(&request(&"1".repeat(9), "Z0", "x")),
            CheckResponse::error(WRONG_LENGTH)
        );
    }

    #[test]
    fn test_invalid_coordinate() {
        for coordinate in ["Z1", "A0", "A10", "a1"] {
            assert_eq!(
                check_placement(&request(PUZZLE, coordinate, "1")),
                CheckResponse::error(INVALID_COORDINATE),
                "{coordinate}"
            );
        }
    }

    #[test]
    fn test_invalid_value() {
        for value in ["0", "10", "x", "55"] {
            assert_eq!(
                check_placement(&request(PUZZLE, "B1", value)),
                CheckResponse::error(INVALID_VALUE),
                "{value}"
            );
        }
    }
}
