use thiserror::Error;

use crate::Location;

/// Errors from building or indexing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A layout symbol has no entity type.
    #[error("unknown map symbol '{symbol}' at {location}")]
    UnknownSymbol {
        /// Offending symbol.
        symbol: char,
        /// Where it appeared in the layout.
        location: Location,
    },
    /// The location lies outside the row count or that row's own length.
    #[error("location {location} is outside the map")]
    OutOfBounds {
        /// Requested location.
        location: Location,
    },
}
