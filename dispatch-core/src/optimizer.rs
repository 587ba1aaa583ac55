//! Courier selection under ceilings and an objective.
//!
//! Selection runs in two steps. Each quote is first checked against the
//! request's [`Constraint`] on its own; a quote over either ceiling is
//! dropped. The survivors are then compared under the [`Objective`]:
//!
//! - [`Objective::Fastest`]: the car wins only when strictly faster, so a
//!   time tie goes to the bike.
//! - [`Objective::Cheapest`]: the bike wins only when strictly cheaper, so a
//!   price tie goes to the car.

use std::fmt;
use std::str::FromStr;

use crate::DeliveryQuote;

/// Comparison key used when both courier classes qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Objective {
    /// Minimise price.
    #[default]
    Cheapest,
    /// Minimise estimated time.
    Fastest,
}

impl Objective {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cheapest => "cheapest",
            Self::Fastest => "fastest",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Objective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cheapest" => Ok(Self::Cheapest),
            "fastest" => Ok(Self::Fastest),
            _ => Err(format!("unknown objective '{s}'")),
        }
    }
}

/// Optional price and time ceilings.
///
/// `None` means unconstrained; `Some(0)` is a real, very tight bound.
///
/// # Examples
/// ```
/// use dispatch_core::Constraint;
///
/// let constraint = Constraint::unconstrained().with_max_price(20);
/// assert_eq!(constraint.max_price, Some(20));
/// assert_eq!(constraint.max_time, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Highest acceptable price.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_price: Option<u64>,
    /// Highest acceptable estimated time in minutes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_time: Option<u64>,
}

impl Constraint {
    /// No ceilings at all.
    #[must_use]
    pub const fn unconstrained() -> Self {
        Self {
            max_price: None,
            max_time: None,
        }
    }

    /// Set the price ceiling.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Set the time ceiling.
    #[must_use]
    pub const fn with_max_time(mut self, max_time: u64) -> Self {
        self.max_time = Some(max_time);
        self
    }

    /// Whether `quote` stays within both ceilings.
    #[must_use]
    pub fn admits(&self, quote: &DeliveryQuote) -> bool {
        let price_ok = self.max_price.is_none_or(|max| quote.price <= max);
        let time_ok = self.max_time.is_none_or(|max| quote.estimated_time <= max);
        price_ok && time_ok
    }

    fn filter(&self, quote: Option<DeliveryQuote>) -> Option<DeliveryQuote> {
        quote.filter(|candidate| {
            let admitted = self.admits(candidate);
            if !admitted {
                log::debug!(
                    "disqualified {} courier at {}: price {} time {} exceed {self:?}",
                    candidate.vehicle,
                    candidate.courier_location,
                    candidate.price,
                    candidate.estimated_time,
                );
            }
            admitted
        })
    }
}

/// Pick the winning quote, or `None` when no class qualifies.
///
/// # Examples
/// ```
/// use dispatch_core::{
///     Constraint, DeliveryQuote, Location, Objective, VehicleClass, select_courier,
/// };
///
/// let car = DeliveryQuote {
///     courier_location: Location::new(3, 3),
///     price: 30,
///     estimated_time: 18,
///     vehicle: VehicleClass::Car,
/// };
/// let bike = DeliveryQuote {
///     courier_location: Location::new(1, 1),
///     price: 18,
///     estimated_time: 30,
///     vehicle: VehicleClass::Bike,
/// };
/// let unconstrained = Constraint::unconstrained();
///
/// let cheapest = select_courier(Some(car), Some(bike), &unconstrained, Objective::Cheapest);
/// assert_eq!(cheapest, Some(bike));
///
/// let tight = Constraint::unconstrained().with_max_price(15);
/// assert_eq!(select_courier(Some(car), Some(bike), &tight, Objective::Cheapest), None);
/// ```
#[must_use]
pub fn select_courier(
    car: Option<DeliveryQuote>,
    bike: Option<DeliveryQuote>,
    constraint: &Constraint,
    objective: Objective,
) -> Option<DeliveryQuote> {
    let car_quote = constraint.filter(car);
    let bike_quote = constraint.filter(bike);

    match (car_quote, bike_quote) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(by_car), Some(by_bike)) => Some(match objective {
            Objective::Fastest if by_car.estimated_time < by_bike.estimated_time => by_car,
            Objective::Fastest => by_bike,
            Objective::Cheapest if by_bike.price < by_car.price => by_bike,
            Objective::Cheapest => by_car,
        }),
    }
}
