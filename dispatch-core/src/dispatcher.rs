//! The courier-matching entry point.
//!
//! A query measures the mandatory restaurant-to-client leg, looks for the
//! nearest car and bike couriers around the restaurant, prices whichever it
//! finds and hands them to [`select_courier`].

use thiserror::Error;

use crate::{
    Constraint, DeliveryQuote, EntityLocator, Grid, GridError, Location, Objective, PathFinder,
    SearchError, VehicleClass, select_courier,
};

/// Parameters for one courier query.
///
/// # Examples
/// ```rust
/// use dispatch_core::{Constraint, DispatchRequest, Location, Objective};
///
/// let request = DispatchRequest {
///     restaurant: Location::new(1, 3),
///     client: Location::new(3, 1),
///     constraint: Constraint::unconstrained().with_max_time(20),
///     objective: Objective::Cheapest,
/// };
/// assert_eq!(request.constraint.max_time, Some(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchRequest {
    /// Where the order is collected.
    pub restaurant: Location,
    /// Where the order is delivered.
    pub client: Location,
    /// Price and time ceilings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraint: Constraint,
    /// Comparison key between couriers.
    #[cfg_attr(feature = "serde", serde(default))]
    pub objective: Objective,
}

/// Errors returned by [`Dispatcher::find_best_courier`].
///
/// Finding no suitable courier is not an error; it is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A request location does not address a grid cell.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// The client cannot be reached from the restaurant.
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Select the best courier for a delivery.
///
/// Dispatchers must be `Send + Sync` so a single map can serve queries from
/// several threads.
pub trait Dispatcher: Send + Sync {
    /// The map queries run against.
    fn grid(&self) -> &Grid;

    /// Find the winning quote for `request`, or `None` when no courier
    /// qualifies.
    ///
    /// # Errors
    /// Returns [`DispatchError::Search`] when the client is unreachable from
    /// the restaurant, and [`DispatchError::Grid`] when either request
    /// location lies off the map.
    fn find_best_courier(
        &self,
        request: &DispatchRequest,
    ) -> Result<Option<DeliveryQuote>, DispatchError>;
}

/// [`Dispatcher`] running breadth-first searches over an owned [`Grid`].
///
/// # Examples
/// ```
/// use dispatch_core::{
///     Constraint, DispatchRequest, Dispatcher, GridDispatcher, Location, Objective,
///     VehicleClass,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dispatcher = GridDispatcher::new("B.R.A\n##.##\n..C..".parse()?);
/// let request = DispatchRequest {
///     restaurant: Location::new(0, 2),
///     client: Location::new(2, 2),
///     constraint: Constraint::unconstrained(),
///     objective: Objective::Fastest,
/// };
/// let quote = dispatcher.find_best_courier(&request)?.expect("a courier qualifies");
/// assert_eq!(quote.vehicle, VehicleClass::Car);
/// assert_eq!(quote.estimated_time, 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDispatcher {
    grid: Grid,
}

impl GridDispatcher {
    /// Serve queries against `grid`.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    fn quote_for(
        &self,
        vehicle: VehicleClass,
        restaurant: Location,
        route_distance: u64,
    ) -> Option<DeliveryQuote> {
        EntityLocator::new(&self.grid)
            .nearest_of_type(restaurant, vehicle.entity_type())
            .map(|courier| DeliveryQuote::price(courier, route_distance, vehicle))
    }
}

impl Dispatcher for GridDispatcher {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn find_best_courier(
        &self,
        request: &DispatchRequest,
    ) -> Result<Option<DeliveryQuote>, DispatchError> {
        self.grid.cell_at(request.restaurant)?;
        self.grid.cell_at(request.client)?;

        let route_distance =
            PathFinder::new(&self.grid).distance(request.restaurant, request.client)?;
        let car = self.quote_for(VehicleClass::Car, request.restaurant, route_distance);
        let bike = self.quote_for(VehicleClass::Bike, request.restaurant, route_distance);

        let winner = select_courier(car, bike, &request.constraint, request.objective);
        log::debug!(
            "{} dispatch {} -> {} over {route_distance} km: {winner:?}",
            request.objective,
            request.restaurant,
            request.client,
        );
        Ok(winner)
    }
}
