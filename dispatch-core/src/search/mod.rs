//! Breadth-first search over the city grid.
//!
//! Edges join orthogonally adjacent cells when neither is a wall, and every
//! edge is one kilometre long. [`PathFinder`] and [`EntityLocator`] share a
//! single traversal so their termination and tie-break behaviour cannot
//! drift apart: only the goal predicate differs.

mod error;

use std::collections::{HashSet, VecDeque};

pub use error::SearchError;

use crate::{Cell, EntityType, Grid, Location};

/// A cell reached by a search, with its path length from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Where the match was found.
    pub location: Location,
    /// Shortest path length in kilometres.
    pub distance: u64,
}

/// Shortest-path distance between two fixed locations.
///
/// # Examples
/// ```
/// use dispatch_core::{Grid, Location, PathFinder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let grid: Grid = "R.#\n#.C".parse()?;
/// let distance = PathFinder::new(&grid).distance(Location::new(0, 0), Location::new(1, 2))?;
/// assert_eq!(distance, 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'grid> {
    grid: &'grid Grid,
}

impl<'grid> PathFinder<'grid> {
    /// Search over `grid`.
    #[must_use]
    pub const fn new(grid: &'grid Grid) -> Self {
        Self { grid }
    }

    /// Length of the shortest wall-free path from `from` to `to`.
    ///
    /// # Errors
    /// Returns [`SearchError::UnreachableDestination`] when the frontier is
    /// exhausted without dequeuing `to`.
    pub fn distance(&self, from: Location, to: Location) -> Result<u64, SearchError> {
        breadth_first(self.grid, from, |cell| cell.location == to)
            .map(|found| found.distance)
            .ok_or(SearchError::UnreachableDestination { from, to })
    }
}

/// Nearest-entity lookup.
///
/// An empty result is an ordinary outcome, e.g. a city without bikes.
#[derive(Debug, Clone, Copy)]
pub struct EntityLocator<'grid> {
    grid: &'grid Grid,
}

impl<'grid> EntityLocator<'grid> {
    /// Search over `grid`.
    #[must_use]
    pub const fn new(grid: &'grid Grid) -> Self {
        Self { grid }
    }

    /// Closest reachable cell of type `kind`, measured from `from`.
    ///
    /// When several matches are equally close, whichever is dequeued first
    /// wins; its distance is still the minimum.
    #[must_use]
    pub fn nearest_of_type(&self, from: Location, kind: EntityType) -> Option<Candidate> {
        let found = breadth_first(self.grid, from, |cell| cell.kind == kind);
        log::trace!("nearest {kind} from {from}: {found:?}");
        found
    }
}

/// FIFO traversal returning the first dequeued cell satisfying `is_goal`.
///
/// A wall start matches only itself: edges join two open cells, so nothing
/// is reachable from it. Cells are marked visited when dequeued. Neighbours
/// that were already expanded are not re-enqueued.
fn breadth_first<F>(grid: &Grid, start: Location, mut is_goal: F) -> Option<Candidate>
where
    F: FnMut(&Cell) -> bool,
{
    let origin = grid.get(start)?;
    if is_goal(origin) {
        return Some(Candidate {
            location: start,
            distance: 0,
        });
    }
    if !origin.kind.is_traversable() {
        return None;
    }

    let mut visited: HashSet<Location> = HashSet::new();
    let mut frontier: VecDeque<(Location, u64)> = VecDeque::from([(start, 0)]);

    while let Some((location, distance)) = frontier.pop_front() {
        let Some(cell) = grid.get(location) else {
            continue;
        };
        if is_goal(cell) {
            return Some(Candidate { location, distance });
        }
        if !visited.insert(location) {
            continue;
        }

        let next = distance.saturating_add(1);
        frontier.extend(
            grid.open_neighbours(location)
                .filter(|neighbour| !visited.contains(&neighbour.location))
                .map(|neighbour| (neighbour.location, next)),
        );
    }

    None
}
