//! Courier vehicle classes and their fixed per-kilometre rates.
//!
//! # Examples
//! ```
//! use dispatch_core::VehicleClass;
//!
//! assert_eq!(VehicleClass::Car.price_per_km(), 5);
//! assert_eq!(VehicleClass::Bike.minutes_per_km(), 5);
//! assert_eq!(VehicleClass::Bike.to_string(), "bike");
//! ```

use std::fmt;

use crate::EntityType;

/// The two courier classes.
///
/// Cars cost more per kilometre but cover it faster; bikes are the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VehicleClass {
    /// Courier driving a car.
    Car,
    /// Courier riding a bike.
    Bike,
}

impl VehicleClass {
    /// Price charged per kilometre travelled.
    #[must_use]
    pub const fn price_per_km(self) -> u64 {
        match self {
            Self::Car => 5,
            Self::Bike => 3,
        }
    }

    /// Minutes spent per kilometre travelled.
    #[must_use]
    pub const fn minutes_per_km(self) -> u64 {
        match self {
            Self::Car => 3,
            Self::Bike => 5,
        }
    }

    /// Grid entity type marking couriers of this class.
    #[must_use]
    pub const fn entity_type(self) -> EntityType {
        match self {
            Self::Car => EntityType::CourierCar,
            Self::Bike => EntityType::CourierBike,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
