//! Core domain types and algorithms for courier dispatch.
//!
//! A [`Grid`] is built once from a symbol layout and then shared read-only.
//! Each query measures the restaurant-to-client route with [`PathFinder`],
//! finds the nearest car and bike couriers with [`EntityLocator`], prices
//! them with [`DeliveryQuote::price`] and chooses a winner with
//! [`select_courier`]. [`GridDispatcher`] wires these steps together behind
//! the [`Dispatcher`] trait.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dispatcher;
pub mod grid;
pub mod location;
pub mod optimizer;
pub mod pricing;
pub mod search;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod vehicle;

pub use dispatcher::{DispatchError, DispatchRequest, Dispatcher, GridDispatcher};
pub use grid::{Cell, EntityType, Grid, GridError};
pub use location::{Location, ParseLocationError};
pub use optimizer::{Constraint, Objective, select_courier};
pub use pricing::DeliveryQuote;
pub use search::{Candidate, EntityLocator, PathFinder, SearchError};
pub use vehicle::VehicleClass;
