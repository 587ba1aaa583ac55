use thiserror::Error;

use crate::Location;

/// Errors from [`PathFinder::distance`](crate::PathFinder::distance).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No wall-free path joins the two locations.
    ///
    /// Only the mandatory restaurant-to-client leg reports this; a missing
    /// courier is an empty [`EntityLocator`](crate::EntityLocator) result.
    #[error("destination {to} cannot be reached from {from}")]
    UnreachableDestination {
        /// Search origin.
        from: Location,
        /// Requested destination.
        to: Location,
    },
}
