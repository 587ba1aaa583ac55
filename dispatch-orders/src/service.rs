//! Validation and placement of orders.

use dispatch_core::{Cell, DispatchRequest, Dispatcher, EntityType, Grid, GridDispatcher};
use log::{debug, warn};

use crate::{Delivery, InvalidOrder, Order, OrderError};

/// Places orders against the map owned by a [`Dispatcher`].
///
/// # Examples
/// ```
/// use dispatch_core::{Cell, EntityType, Location, VehicleClass};
/// use dispatch_orders::OrderService;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let service = OrderService::from_grid("B.R.A\n##.##\n..C..".parse()?);
/// let client = Cell::new(Location::new(2, 2), EntityType::Client);
/// let restaurant = Cell::new(Location::new(0, 2), EntityType::Restaurant);
/// let delivery = service.fastest_delivery(client, restaurant, "soup")?;
/// assert_eq!(delivery.vehicle, VehicleClass::Car);
/// assert_eq!(delivery.courier, Location::new(0, 4));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OrderService<D = GridDispatcher> {
    dispatcher: D,
}

impl OrderService<GridDispatcher> {
    /// Serve orders with breadth-first searches over `grid`.
    #[must_use]
    pub const fn from_grid(grid: Grid) -> Self {
        Self::new(GridDispatcher::new(grid))
    }
}

impl<D: Dispatcher> OrderService<D> {
    /// Serve orders through `dispatcher`.
    #[must_use]
    pub const fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// Validate `order` and assign it the best qualifying courier.
    ///
    /// # Errors
    /// - [`OrderError::Invalid`] when either entity is off the map, differs
    ///   from the map, or fills the wrong role, or when the food item is
    ///   blank. Validation happens before any search.
    /// - [`OrderError::Dispatch`] when the client is unreachable from the
    ///   restaurant.
    /// - [`OrderError::NoAvailableCourier`] when no courier can reach the
    ///   restaurant within the order's ceilings.
    pub fn place(&self, order: &Order) -> Result<Delivery, OrderError> {
        let grid = self.dispatcher.grid();
        validate_entity(grid, order.client, EntityType::Client)?;
        validate_entity(grid, order.restaurant, EntityType::Restaurant)?;
        if order.food_item.trim().is_empty() {
            return Err(InvalidOrder::BlankFoodItem.into());
        }

        let request = DispatchRequest {
            restaurant: order.restaurant.location,
            client: order.client.location,
            constraint: order.constraint,
            objective: order.objective,
        };
        let Some(quote) = self.dispatcher.find_best_courier(&request)? else {
            warn!(
                "no courier available for {} from {} to {}",
                order.food_item, order.restaurant.location, order.client.location
            );
            return Err(OrderError::NoAvailableCourier);
        };

        debug!(
            "assigned {} courier at {} to {}",
            quote.vehicle, quote.courier_location, order.food_item
        );
        Ok(Delivery::from_quote(order, quote))
    }

    /// Cheapest delivery with no ceilings.
    ///
    /// # Errors
    /// See [`OrderService::place`].
    pub fn cheapest_delivery(
        &self,
        client: Cell,
        restaurant: Cell,
        food_item: &str,
    ) -> Result<Delivery, OrderError> {
        self.place(&Order::cheapest(client, restaurant, food_item))
    }

    /// Fastest delivery with no ceilings.
    ///
    /// # Errors
    /// See [`OrderService::place`].
    pub fn fastest_delivery(
        &self,
        client: Cell,
        restaurant: Cell,
        food_item: &str,
    ) -> Result<Delivery, OrderError> {
        self.place(&Order::fastest(client, restaurant, food_item))
    }

    /// Fastest delivery priced at most `max_price`.
    ///
    /// # Errors
    /// See [`OrderService::place`].
    pub fn fastest_delivery_under_price(
        &self,
        client: Cell,
        restaurant: Cell,
        food_item: &str,
        max_price: u64,
    ) -> Result<Delivery, OrderError> {
        self.place(&Order::fastest_under_price(
            client, restaurant, food_item, max_price,
        ))
    }

    /// Cheapest delivery taking at most `max_time` minutes.
    ///
    /// # Errors
    /// See [`OrderService::place`].
    pub fn cheapest_delivery_within_time_limit(
        &self,
        client: Cell,
        restaurant: Cell,
        food_item: &str,
        max_time: u64,
    ) -> Result<Delivery, OrderError> {
        self.place(&Order::cheapest_within_time_limit(
            client, restaurant, food_item, max_time,
        ))
    }
}

fn validate_entity(grid: &Grid, entity: Cell, role: EntityType) -> Result<(), InvalidOrder> {
    let stored = grid.get(entity.location).ok_or(InvalidOrder::OutOfMap {
        location: entity.location,
    })?;
    if stored.kind != entity.kind {
        return Err(InvalidOrder::EntityMismatch {
            location: entity.location,
            claimed: entity.kind,
            stored: stored.kind,
        });
    }
    if entity.kind != role {
        return Err(InvalidOrder::WrongEntityType {
            expected: role,
            found: entity.kind,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use dispatch_core::test_support::{REFERENCE_MAP, StubDispatcher};
    use dispatch_core::{DispatchError, Location, SearchError, VehicleClass};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn service() -> OrderService {
        let grid = REFERENCE_MAP.parse().expect("reference map parses");
        OrderService::from_grid(grid)
    }

    fn client() -> Cell {
        Cell::new(Location::new(3, 1), EntityType::Client)
    }

    fn restaurant() -> Cell {
        Cell::new(Location::new(1, 3), EntityType::Restaurant)
    }

    fn bike_delivery() -> Delivery {
        Delivery {
            client: Location::new(3, 1),
            restaurant: Location::new(1, 3),
            courier: Location::new(1, 1),
            food_item: "pizza".to_owned(),
            price: 18,
            estimated_time: 30,
            vehicle: VehicleClass::Bike,
        }
    }

    fn car_delivery() -> Delivery {
        Delivery {
            courier: Location::new(3, 3),
            price: 30,
            estimated_time: 18,
            vehicle: VehicleClass::Car,
            ..bike_delivery()
        }
    }

    #[rstest]
    fn cheapest_delivery_uses_bike(service: OrderService) {
        let delivery = service
            .cheapest_delivery(client(), restaurant(), "pizza")
            .expect("delivery placed");
        assert_eq!(delivery, bike_delivery());
    }

    #[rstest]
    fn fastest_delivery_uses_car(service: OrderService) {
        let delivery = service
            .fastest_delivery(client(), restaurant(), "pizza")
            .expect("delivery placed");
        assert_eq!(delivery, car_delivery());
    }

    #[rstest]
    fn price_ceiling_leaves_bike(service: OrderService) {
        let delivery = service
            .fastest_delivery_under_price(client(), restaurant(), "pizza", 20)
            .expect("delivery placed");
        assert_eq!(delivery, bike_delivery());
    }

    #[rstest]
    fn time_ceiling_leaves_car(service: OrderService) {
        let delivery = service
            .cheapest_delivery_within_time_limit(client(), restaurant(), "pizza", 20)
            .expect("delivery placed");
        assert_eq!(delivery, car_delivery());
    }

    #[rstest]
    #[case(15)]
    #[case(0)]
    fn tight_price_ceiling_finds_no_courier(service: OrderService, #[case] max_price: u64) {
        let result =
            service.fastest_delivery_under_price(client(), restaurant(), "pizza", max_price);
        assert_eq!(result, Err(OrderError::NoAvailableCourier));
    }

    #[rstest]
    #[case::client_off_map(
        Cell::new(Location::new(5, 5), EntityType::Client),
        restaurant(),
        Location::new(5, 5)
    )]
    #[case::restaurant_off_map(
        client(),
        Cell::new(Location::new(5, 5), EntityType::Restaurant),
        Location::new(5, 5)
    )]
    #[case::past_row_end(
        client(),
        Cell::new(Location::new(0, 5), EntityType::Restaurant),
        Location::new(0, 5)
    )]
    fn off_map_entities_are_rejected(
        service: OrderService,
        #[case] client: Cell,
        #[case] restaurant: Cell,
        #[case] location: Location,
    ) {
        let result = service.cheapest_delivery(client, restaurant, "pizza");
        assert_eq!(
            result,
            Err(OrderError::Invalid(InvalidOrder::OutOfMap { location }))
        );
    }

    #[rstest]
    fn client_not_on_its_location_is_rejected(service: OrderService) {
        let misplaced = Cell::new(Location::new(1, 1), EntityType::Client);
        let result = service.cheapest_delivery(misplaced, restaurant(), "pizza");
        assert_eq!(
            result,
            Err(OrderError::Invalid(InvalidOrder::EntityMismatch {
                location: Location::new(1, 1),
                claimed: EntityType::Client,
                stored: EntityType::CourierBike,
            }))
        );
    }

    #[rstest]
    fn restaurant_not_on_its_location_is_rejected(service: OrderService) {
        let misplaced = Cell::new(Location::new(1, 1), EntityType::Restaurant);
        let result = service.cheapest_delivery(client(), misplaced, "pizza");
        assert!(matches!(
            result,
            Err(OrderError::Invalid(InvalidOrder::EntityMismatch { .. }))
        ));
    }

    #[rstest]
    fn swapped_roles_are_rejected(service: OrderService) {
        let result = service.cheapest_delivery(restaurant(), client(), "pizza");
        assert_eq!(
            result,
            Err(OrderError::Invalid(InvalidOrder::WrongEntityType {
                expected: EntityType::Client,
                found: EntityType::Restaurant,
            }))
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_food_item_is_rejected(service: OrderService, #[case] food_item: &str) {
        let result = service.cheapest_delivery(client(), restaurant(), food_item);
        assert_eq!(result, Err(OrderError::Invalid(InvalidOrder::BlankFoodItem)));
    }

    #[rstest]
    fn dispatch_failure_is_propagated() {
        let grid: Grid = REFERENCE_MAP.parse().expect("reference map parses");
        let failure = DispatchError::Search(SearchError::UnreachableDestination {
            from: Location::new(1, 3),
            to: Location::new(3, 1),
        });
        let service = OrderService::new(StubDispatcher::new(grid, Err(failure.clone())));
        let result = service.cheapest_delivery(client(), restaurant(), "pizza");
        assert_eq!(result, Err(OrderError::Dispatch(failure)));
    }

    #[rstest]
    fn validation_runs_before_dispatch() {
        let grid: Grid = REFERENCE_MAP.parse().expect("reference map parses");
        let service = OrderService::new(StubDispatcher::new(grid, Ok(None)));
        let blank = service.cheapest_delivery(client(), restaurant(), " ");
        assert_eq!(blank, Err(OrderError::Invalid(InvalidOrder::BlankFoodItem)));
        let valid = service.cheapest_delivery(client(), restaurant(), "pizza");
        assert_eq!(valid, Err(OrderError::NoAvailableCourier));
    }

    #[rstest]
    fn explicit_order_round_trips_through_place(service: OrderService) {
        let order = Order::fastest(client(), restaurant(), "pizza");
        let delivery = service.place(&order).expect("delivery placed");
        assert_eq!(delivery.food_item, order.food_item);
        assert_eq!(delivery.client, order.client.location);
        assert_eq!(delivery.restaurant, order.restaurant.location);
    }
}
