//! Errors raised while placing an order.

use dispatch_core::{DispatchError, EntityType, Location};
use thiserror::Error;

/// Reasons an order is refused before any courier search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOrder {
    /// The entity's location does not address a cell of the map.
    #[error("{location} is outside the map")]
    OutOfMap {
        /// Requested location.
        location: Location,
    },
    /// The map holds a different entity at the given location.
    #[error("expected {claimed} at {location} but the map holds {stored}")]
    EntityMismatch {
        /// Requested location.
        location: Location,
        /// Entity type named by the order.
        claimed: EntityType,
        /// Entity type stored on the map.
        stored: EntityType,
    },
    /// The entity fills the wrong role, such as a restaurant given as the
    /// client.
    #[error("expected a {expected} but received a {found}")]
    WrongEntityType {
        /// Entity type the role requires.
        expected: EntityType,
        /// Entity type supplied.
        found: EntityType,
    },
    /// The food item is empty or only whitespace.
    #[error("food item must not be blank")]
    BlankFoodItem,
}

/// Errors returned by [`OrderService`](crate::OrderService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order failed validation.
    #[error("invalid order: {0}")]
    Invalid(#[from] InvalidOrder),
    /// No courier can be reached or satisfies the order's ceilings.
    #[error("no courier is available for this delivery")]
    NoAvailableCourier,
    /// The courier search aborted.
    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}
