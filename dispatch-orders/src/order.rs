//! Order descriptions accepted by the service.

use dispatch_core::{Cell, Constraint, Objective};

/// A food order from `restaurant` to `client`.
///
/// The four constructors cover the supported order shapes; each fixes the
/// objective and at most one ceiling.
///
/// # Examples
/// ```
/// use dispatch_core::{Cell, EntityType, Location, Objective};
/// use dispatch_orders::Order;
///
/// let client = Cell::new(Location::new(3, 1), EntityType::Client);
/// let restaurant = Cell::new(Location::new(1, 3), EntityType::Restaurant);
/// let order = Order::fastest_under_price(client, restaurant, "pizza", 20);
/// assert_eq!(order.objective, Objective::Fastest);
/// assert_eq!(order.constraint.max_price, Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Delivery destination as it appears on the map.
    pub client: Cell,
    /// Pick-up point as it appears on the map.
    pub restaurant: Cell,
    /// What is being delivered.
    pub food_item: String,
    /// Comparison key between couriers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub objective: Objective,
    /// Price and time ceilings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraint: Constraint,
}

impl Order {
    /// Order with an explicit objective and constraint.
    #[must_use]
    pub fn new(
        client: Cell,
        restaurant: Cell,
        food_item: impl Into<String>,
        objective: Objective,
        constraint: Constraint,
    ) -> Self {
        Self {
            client,
            restaurant,
            food_item: food_item.into(),
            objective,
            constraint,
        }
    }

    /// Cheapest delivery, no ceilings.
    #[must_use]
    pub fn cheapest(client: Cell, restaurant: Cell, food_item: impl Into<String>) -> Self {
        Self::new(
            client,
            restaurant,
            food_item,
            Objective::Cheapest,
            Constraint::unconstrained(),
        )
    }

    /// Fastest delivery, no ceilings.
    #[must_use]
    pub fn fastest(client: Cell, restaurant: Cell, food_item: impl Into<String>) -> Self {
        Self::new(
            client,
            restaurant,
            food_item,
            Objective::Fastest,
            Constraint::unconstrained(),
        )
    }

    /// Fastest delivery costing at most `max_price`.
    #[must_use]
    pub fn fastest_under_price(
        client: Cell,
        restaurant: Cell,
        food_item: impl Into<String>,
        max_price: u64,
    ) -> Self {
        Self::new(
            client,
            restaurant,
            food_item,
            Objective::Fastest,
            Constraint::unconstrained().with_max_price(max_price),
        )
    }

    /// Cheapest delivery taking at most `max_time` minutes.
    #[must_use]
    pub fn cheapest_within_time_limit(
        client: Cell,
        restaurant: Cell,
        food_item: impl Into<String>,
        max_time: u64,
    ) -> Self {
        Self::new(
            client,
            restaurant,
            food_item,
            Objective::Cheapest,
            Constraint::unconstrained().with_max_time(max_time),
        )
    }
}
