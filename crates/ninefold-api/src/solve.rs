//! The `POST /api/solve` mapping.

use ninefold_core::{DigitGrid, ParseGridError};
use serde::{Deserialize, Serialize};

use crate::{INVALID_CHARACTERS, MISSING_FIELD, UNSOLVABLE, WRONG_LENGTH};

/// Decoded body of a `POST /api/solve` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SolveRequest {
    /// 81-character puzzle text, if the field was present.
    #[serde(default)]
    pub puzzle: Option<String>,
}

/// Body of a `POST /api/solve` response.
///
/// Serializes to either `{"solution": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// The completed 81-character grid.
    Solution {
        /// Solved grid text.
        solution: String,
    },
    /// The request was rejected; `error` is the exact user-facing message.
    Error {
        /// User-facing message.
        error: &'static str,
    },
}

impl SolveResponse {
    const fn error(error: &'static str) -> Self {
        Self::Error { error }
    }
}

/// Maps a solve request to its response body.
///
/// An absent or empty `puzzle` field is reported as missing; malformed
/// puzzle text is reported by kind (invalid characters take precedence
/// over wrong length); contradictory or uncompletable puzzles share the
/// single unsolvable message.
///
/// # Examples
///
/// ```
/// use ninefold_api::{SolveRequest, SolveResponse, solve_puzzle};
///
/// let request = SolveRequest { puzzle: None };
/// assert_eq!(
///     solve_puzzle(&request),
///     SolveResponse::Error { error: "Required field missing" },
/// );
/// ```
#[must_use]
pub fn solve_puzzle(request: &SolveRequest) -> SolveResponse {
    let puzzle = match request.puzzle.as_deref() {
        None | Some("") => {
            log::debug!("solve rejected: puzzle field missing");
            return SolveResponse::error(MISSING_FIELD);
        }
        Some(puzzle) => puzzle,
    };

    let grid: DigitGrid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            log::debug!("solve rejected: {err}");
            return SolveResponse::error(match err {
                ParseGridError::InvalidCharacters => INVALID_CHARACTERS,
                ParseGridError::WrongLength => WRONG_LENGTH,
            });
        }
    };

    match ninefold_solver::solve(&grid) {
        Ok(solution) => SolveResponse::Solution {
            solution: solution.to_string(),
        },
        Err(err) => {
            log::debug!("solve failed: {err}");
            SolveResponse::error(UNSOLVABLE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(puzzle: &str) -> SolveRequest {
        SolveRequest {
            puzzle: Some(puzzle.to_owned()),
        }
    }

    #[test]
    fn test_solves_valid_puzzle() {
        let response = solve_puzzle(&request(
            "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.",
        ));
        assert_eq!(
            response,
            SolveResponse::Solution {
                solution:
                    "135762984946381257728459613694517832812936745357824196473298561581673429269145378"
                        .to_owned(),
            }
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            solve_puzzle(&SolveRequest::default()),
            SolveResponse::error(MISSING_FIELD)
        );
        // Empty string counts as missing.
        assert_eq!(solve_puzzle(&request("")), SolveResponse::error(MISSING_FIELD));
    }

    #[test]
    fn test_invalid_characters() {
        let response = solve_puzzle(&request(&"0".repeat(81)));
        assert_eq!(response, SolveResponse::error(INVALID_CHARACTERS));
    }

    #[test]
    fn test_wrong_length() {
        let response = solve_puzzle(&request(&"1".repeat(80)));
        assert_eq!(response, SolveResponse::error(WRONG_LENGTH));
    }

    #[test]
    fn test_character_check_takes_precedence() {
        assert_eq!(
            solve_puzzle(&request("x")),
            SolveResponse::error(INVALID_CHARACTERS)
        );
    }

    #[test]
    fn test_unsolvable() {
        let duplicated =
            "115..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
        assert_eq!(
            solve_puzzle(&request(duplicated)),
            SolveResponse::error(UNSOLVABLE)
        );
    }
}
