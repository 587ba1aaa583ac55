#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for order placement on the reference map.

use std::cell::RefCell;

use dispatch_core::test_support::REFERENCE_MAP;
use dispatch_core::{Cell, EntityType, Location, VehicleClass};
use dispatch_orders::{Delivery, InvalidOrder, OrderError, OrderService};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const CLIENT: Cell = Cell::new(Location::new(3, 1), EntityType::Client);
const RESTAURANT: Cell = Cell::new(Location::new(1, 3), EntityType::Restaurant);

/// Service under test and the outcome of the last order.
#[derive(Debug, Default)]
struct OrderWorld {
    service: RefCell<Option<OrderService>>,
    outcome: RefCell<Option<Result<Delivery, OrderError>>>,
}

impl OrderWorld {
    fn place_with(&self, place: impl FnOnce(&OrderService) -> Result<Delivery, OrderError>) {
        let borrowed = self.service.borrow();
        let service = borrowed.as_ref().expect("service should be configured");
        self.outcome.replace(Some(place(service)));
    }

    fn outcome(&self) -> Result<Delivery, OrderError> {
        self.outcome
            .borrow()
            .clone()
            .expect("an order should have been placed")
    }

    fn assert_delivered(&self, courier: Location, vehicle: VehicleClass, price: u64, time: u64) {
        let delivery = self.outcome().expect("order should succeed");
        assert_eq!(
            delivery,
            Delivery {
                client: CLIENT.location,
                restaurant: RESTAURANT.location,
                courier,
                food_item: "pizza".to_owned(),
                price,
                estimated_time: time,
                vehicle,
            }
        );
    }
}

#[fixture]
fn world() -> OrderWorld {
    OrderWorld::default()
}

#[given("the reference order service")]
fn reference_service(#[from(world)] world: &OrderWorld) {
    let grid = REFERENCE_MAP.parse().expect("reference map parses");
    world.service.replace(Some(OrderService::from_grid(grid)));
}

#[when("I order pizza as cheaply as possible")]
fn order_cheapest(#[from(world)] world: &OrderWorld) {
    world.place_with(|service| service.cheapest_delivery(CLIENT, RESTAURANT, "pizza"));
}

#[when("I order pizza as fast as possible for at most 20")]
fn order_fastest_under_20(#[from(world)] world: &OrderWorld) {
    world.place_with(|service| {
        service.fastest_delivery_under_price(CLIENT, RESTAURANT, "pizza", 20)
    });
}

#[when("I order pizza as fast as possible for at most 15")]
fn order_fastest_under_15(#[from(world)] world: &OrderWorld) {
    world.place_with(|service| {
        service.fastest_delivery_under_price(CLIENT, RESTAURANT, "pizza", 15)
    });
}

#[when("I order pizza as cheaply as possible within 20 minutes")]
fn order_cheapest_within_20(#[from(world)] world: &OrderWorld) {
    world.place_with(|service| {
        service.cheapest_delivery_within_time_limit(CLIENT, RESTAURANT, "pizza", 20)
    });
}

#[when("I order pizza for a client at 5,5")]
fn order_off_map(#[from(world)] world: &OrderWorld) {
    let client = Cell::new(Location::new(5, 5), EntityType::Client);
    world.place_with(|service| service.cheapest_delivery(client, RESTAURANT, "pizza"));
}

#[when("I order a blank food item")]
fn order_blank(#[from(world)] world: &OrderWorld) {
    world.place_with(|service| service.cheapest_delivery(CLIENT, RESTAURANT, "  "));
}

#[then("the bike courier at 1,1 delivers the pizza for 18 in 30 minutes")]
fn bike_delivers(#[from(world)] world: &OrderWorld) {
    world.assert_delivered(Location::new(1, 1), VehicleClass::Bike, 18, 30);
}

#[then("the car courier at 3,3 delivers the pizza for 30 in 18 minutes")]
fn car_delivers(#[from(world)] world: &OrderWorld) {
    world.assert_delivered(Location::new(3, 3), VehicleClass::Car, 30, 18);
}

#[then("the order fails because no courier is available")]
fn no_courier(#[from(world)] world: &OrderWorld) {
    assert_eq!(world.outcome(), Err(OrderError::NoAvailableCourier));
}

#[then("the order is rejected as outside the map")]
fn rejected_off_map(#[from(world)] world: &OrderWorld) {
    assert_eq!(
        world.outcome(),
        Err(OrderError::Invalid(InvalidOrder::OutOfMap {
            location: Location::new(5, 5)
        }))
    );
}

#[then("the order is rejected for a blank food item")]
fn rejected_blank(#[from(world)] world: &OrderWorld) {
    assert_eq!(
        world.outcome(),
        Err(OrderError::Invalid(InvalidOrder::BlankFoodItem))
    );
}

macro_rules! register_order_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/orders.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: OrderWorld) {
            let _ = world;
        }
    };
}

register_order_scenario!(cheapest_order_uses_bike, "a cheapest order is carried by the bike");
register_order_scenario!(
    fastest_under_price_uses_bike,
    "a fastest order under a price of 20 is carried by the bike"
);
register_order_scenario!(
    cheapest_within_time_uses_car,
    "a cheapest order within 20 minutes is carried by the car"
);
register_order_scenario!(
    unreachable_price_refused,
    "an order with an unreachable price is refused"
);
register_order_scenario!(off_map_client_invalid, "an order to a client outside the map is invalid");
register_order_scenario!(blank_food_item_invalid, "an order without a food item is invalid");
