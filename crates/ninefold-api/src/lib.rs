//! Request/response mapping for the two-endpoint check/solve API.
//!
//! This crate is the pure half of the HTTP adapter: it turns decoded
//! request bodies into response values whose JSON serialization is exactly
//! the wire contract of `POST /api/solve` and `POST /api/check`. It never
//! touches sockets or status codes; every outcome, including every
//! rejected input, maps to an HTTP 200 body chosen here.
//!
//! Field presence is part of the contract, so request fields are
//! `Option<String>`; an absent field produces the corresponding
//! `Required field...` error body, and an empty string counts as absent.
//!
//! # Examples
//!
//! ```
//! use ninefold_api::{CheckRequest, check_placement};
//!
//! let request = CheckRequest {
//!     puzzle: Some(format!("5{}", ".".repeat(80))),
//!     coordinate: Some("A2".into()),
//!     value: Some("5".into()),
//! };
//! let response = check_placement(&request);
//! let json = serde_json::to_value(&response).unwrap();
//! assert_eq!(json["valid"], false);
//! assert_eq!(json["conflict"][0], "row");
//! ```

pub use self::{check::*, solve::*};

mod check;
mod solve;

/// Error body text for `/api/solve` when the `puzzle` field is absent.
pub const MISSING_FIELD: &str = "Required field missing";
/// Error body text for `/api/check` when any field is absent.
pub const MISSING_FIELDS: &str = "Required field(s) missing";
/// Error body text for puzzle text with characters outside `1-9` and `.`.
pub const INVALID_CHARACTERS: &str = "Invalid characters in puzzle";
/// Error body text for puzzle text that is not 81 characters long.
pub const WRONG_LENGTH: &str = "Expected puzzle to be 81 characters long";
/// Error body text for puzzles with no completion.
pub const UNSOLVABLE: &str = "Puzzle cannot be solved";
/// Error body text for coordinate text outside `A1`-`I9`.
pub const INVALID_COORDINATE: &str = "Invalid coordinate";
/// Error body text for value text that is not a single digit `1`-`9`.
pub const INVALID_VALUE: &str = "Invalid value";
