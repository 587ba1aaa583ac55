//! Sample maps and a canned [`Dispatcher`] shared by unit and behaviour
//! tests.

use crate::{DeliveryQuote, DispatchError, DispatchRequest, Dispatcher, Grid};

/// Five-by-five city with a bike at `(1, 1)`, a car at `(3, 3)`, the
/// restaurant at `(1, 3)` and the client at `(3, 1)`.
///
/// Both couriers are two steps from the restaurant and the client is four
/// steps beyond it.
pub const REFERENCE_MAP: &str = "\
###.#
#B.R.
..#.#
#C.A.
#.###";

/// The client at `(4, 0)` is sealed off by walls.
pub const UNREACHABLE_CLIENT_MAP: &str = "\
###.#
#B.R.
....#
##.A.
C####";

/// Both couriers sit in walled pockets; the restaurant is at `(2, 2)` and
/// the client at `(1, 3)`.
pub const NO_COURIERS_REACHABLE_MAP: &str = "\
A##.#
##.C.
..R.#
##...
B####";

/// Only the bike at `(4, 0)` is walled off; the car at `(0, 0)` is four
/// steps from the restaurant at `(2, 2)`.
pub const UNREACHABLE_BIKE_MAP: &str = "\
A.#.#
#..C.
..R.#
##...
B####";

/// [`Dispatcher`] returning a fixed outcome for every request.
#[derive(Debug, Clone)]
pub struct StubDispatcher {
    grid: Grid,
    outcome: Result<Option<DeliveryQuote>, DispatchError>,
}

impl StubDispatcher {
    /// Answer every request over `grid` with `outcome`.
    #[must_use]
    pub const fn new(grid: Grid, outcome: Result<Option<DeliveryQuote>, DispatchError>) -> Self {
        Self { grid, outcome }
    }
}

impl Dispatcher for StubDispatcher {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn find_best_courier(
        &self,
        _request: &DispatchRequest,
    ) -> Result<Option<DeliveryQuote>, DispatchError> {
        self.outcome.clone()
    }
}
