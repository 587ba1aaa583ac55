//! Facade crate for the courier dispatch engine.
//!
//! This crate re-exports the core grid, search and matching types, and exposes
//! order placement behind the `orders` feature flag.

#![forbid(unsafe_code)]

pub use dispatch_core::{
    Candidate, Cell, Constraint, DeliveryQuote, DispatchError, DispatchRequest, Dispatcher,
    EntityLocator, EntityType, Grid, GridDispatcher, GridError, Location, Objective,
    ParseLocationError, PathFinder, SearchError, VehicleClass, select_courier,
};

#[cfg(feature = "test-support")]
pub use dispatch_core::test_support;

#[cfg(feature = "orders")]
pub use dispatch_orders::{Delivery, InvalidOrder, Order, OrderError, OrderService};
