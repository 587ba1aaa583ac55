//! Delivery quotes.
//!
//! Prices and times are whole units: the total distance is multiplied by the
//! vehicle's integer per-kilometre rates with no rounding step.

use crate::{Candidate, Location, VehicleClass};

/// A priced, timed delivery option for one courier.
///
/// # Examples
/// ```
/// use dispatch_core::{Candidate, DeliveryQuote, Location, VehicleClass};
///
/// let courier = Candidate { location: Location::new(1, 1), distance: 2 };
/// let quote = DeliveryQuote::price(courier, 4, VehicleClass::Bike);
/// assert_eq!(quote.price, 18);
/// assert_eq!(quote.estimated_time, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryQuote {
    /// Where the courier currently is.
    pub courier_location: Location,
    /// Total price of the delivery.
    pub price: u64,
    /// Estimated delivery time in minutes.
    pub estimated_time: u64,
    /// Courier vehicle class.
    pub vehicle: VehicleClass,
}

impl DeliveryQuote {
    /// Price a courier's run: courier to restaurant, then restaurant to client.
    ///
    /// Arithmetic saturates instead of overflowing.
    #[must_use]
    pub const fn price(courier: Candidate, route_distance: u64, vehicle: VehicleClass) -> Self {
        let total_distance = courier.distance.saturating_add(route_distance);
        Self {
            courier_location: courier.location,
            price: total_distance.saturating_mul(vehicle.price_per_km()),
            estimated_time: total_distance.saturating_mul(vehicle.minutes_per_km()),
            vehicle,
        }
    }
}
