//! The confirmed outcome of an order.

use dispatch_core::{DeliveryQuote, Location, VehicleClass};

use crate::Order;

/// A placed delivery: who carries what, from where to where, at what cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    /// Where the food is delivered.
    pub client: Location,
    /// Where the food is collected.
    pub restaurant: Location,
    /// Starting position of the assigned courier.
    pub courier: Location,
    /// What is being delivered.
    pub food_item: String,
    /// Price of the whole trip.
    pub price: u64,
    /// Minutes for the whole trip.
    pub estimated_time: u64,
    /// Vehicle class of the assigned courier.
    pub vehicle: VehicleClass,
}

impl Delivery {
    /// Combine an order with the quote of the courier chosen for it.
    #[must_use]
    pub fn from_quote(order: &Order, quote: DeliveryQuote) -> Self {
        Self {
            client: order.client.location,
            restaurant: order.restaurant.location,
            courier: quote.courier_location,
            food_item: order.food_item.clone(),
            price: quote.price,
            estimated_time: quote.estimated_time,
            vehicle: quote.vehicle,
        }
    }
}
