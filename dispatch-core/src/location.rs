//! Grid coordinates.
//!
//! A [`Location`] is a `(row, col)` pair. Equality and hashing are purely
//! positional, which is what the search routines key their visited sets on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A cell position on the city grid.
///
/// # Examples
/// ```
/// use dispatch_core::Location;
///
/// let location: Location = "1,3".parse().expect("valid location");
/// assert_eq!(location, Location::new(1, 3));
/// assert_eq!(location.to_string(), "1,3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index within the row.
    pub col: usize,
}

impl Location {
    /// Construct a location from row and column indices.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Orthogonal neighbours in up, down, left, right order.
    ///
    /// Positions that would underflow are omitted. Upper bounds are not
    /// checked here; the grid decides which positions exist.
    pub fn orthogonal_neighbours(self) -> impl Iterator<Item = Self> {
        let up = self.row.checked_sub(1).map(|row| Self::new(row, self.col));
        let down = self.row.checked_add(1).map(|row| Self::new(row, self.col));
        let left = self.col.checked_sub(1).map(|col| Self::new(self.row, col));
        let right = self.col.checked_add(1).map(|col| Self::new(self.row, col));
        [up, down, left, right].into_iter().flatten()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Errors returned when parsing a [`Location`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLocationError {
    /// The input was not of the form `row,col`.
    #[error("expected a location of the form 'row,col', found '{input}'")]
    Malformed {
        /// Raw input.
        input: String,
    },
    /// One of the components was not a non-negative integer.
    #[error("invalid {axis} index '{value}' in location '{input}'")]
    InvalidIndex {
        /// Which component failed, `row` or `col`.
        axis: &'static str,
        /// Offending component.
        value: String,
        /// Raw input.
        input: String,
    },
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((raw_row, raw_col)) = s.split_once(',') else {
            return Err(ParseLocationError::Malformed {
                input: s.to_owned(),
            });
        };
        let row = parse_index("row", raw_row, s)?;
        let col = parse_index("col", raw_col, s)?;
        Ok(Self::new(row, col))
    }
}

fn parse_index(axis: &'static str, value: &str, input: &str) -> Result<usize, ParseLocationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseLocationError::InvalidIndex {
            axis,
            value: value.trim().to_owned(),
            input: input.to_owned(),
        })
}
