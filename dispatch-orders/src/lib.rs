//! Order placement on top of the courier dispatcher.
//!
//! [`OrderService`] checks that an [`Order`] names a real client and
//! restaurant on the map and carries a food item, asks its
//! [`Dispatcher`](dispatch_core::Dispatcher) for the best courier, and turns
//! the winning quote into a [`Delivery`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod delivery;
mod error;
mod order;
mod service;

pub use delivery::Delivery;
pub use error::{InvalidOrder, OrderError};
pub use order::Order;
pub use service::OrderService;
