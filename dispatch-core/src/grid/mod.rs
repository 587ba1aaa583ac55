//! The immutable city map.
//!
//! A [`Grid`] is built once from a character layout and then only read.
//! Rows may have different lengths, so every lookup validates the column
//! against the length of the row it addresses rather than a global width.
//! Cells live in a single flat arena; `row_offsets[r]..row_offsets[r + 1]`
//! is the slice holding row `r`.

mod entity;
mod error;

use std::str::FromStr;

pub use entity::{Cell, EntityType};
pub use error::GridError;

use crate::Location;

/// Read-only map of typed cells.
///
/// # Examples
/// ```
/// use dispatch_core::{EntityType, Grid, Location};
///
/// # fn main() -> Result<(), dispatch_core::GridError> {
/// let grid: Grid = "#R.\n.C".parse()?;
/// assert_eq!(grid.row_count(), 2);
/// assert_eq!(grid.row_len(1), Some(2));
/// assert_eq!(grid.cell_at(Location::new(0, 1))?.kind, EntityType::Restaurant);
/// assert!(grid.cell_at(Location::new(1, 2)).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    row_offsets: Vec<usize>,
}

impl Grid {
    /// Build a grid from rows of layout symbols.
    ///
    /// # Errors
    /// Returns [`GridError::UnknownSymbol`] for the first symbol outside the
    /// alphabet documented on [`EntityType`].
    pub fn build<R: AsRef<[char]>>(layout: &[R]) -> Result<Self, GridError> {
        let capacity = layout.iter().map(|row| row.as_ref().len()).sum();
        let mut cells = Vec::with_capacity(capacity);
        let mut row_offsets = Vec::with_capacity(layout.len().saturating_add(1));
        row_offsets.push(0);

        for (row, symbols) in layout.iter().enumerate() {
            for (col, &symbol) in symbols.as_ref().iter().enumerate() {
                let location = Location::new(row, col);
                let kind = EntityType::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, location })?;
                cells.push(Cell::new(location, kind));
            }
            row_offsets.push(cells.len());
        }

        Ok(Self { cells, row_offsets })
    }

    /// Number of rows, including empty ones.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_offsets.len().saturating_sub(1)
    }

    /// Length of `row`, or `None` when the row does not exist.
    #[must_use]
    pub fn row_len(&self, row: usize) -> Option<usize> {
        let (start, end) = self.row_bounds(row)?;
        end.checked_sub(start)
    }

    /// Total number of cells across all rows.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at `location`, if it exists.
    #[must_use]
    pub fn get(&self, location: Location) -> Option<&Cell> {
        let (start, end) = self.row_bounds(location.row)?;
        let index = start.checked_add(location.col).filter(|&index| index < end)?;
        self.cells.get(index)
    }

    /// Cell at `location`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] when the row does not exist or the
    /// column exceeds that row's length.
    pub fn cell_at(&self, location: Location) -> Result<&Cell, GridError> {
        self.get(location)
            .ok_or(GridError::OutOfBounds { location })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Locations of every cell holding `kind`, in row-major order.
    pub fn locations_of(&self, kind: EntityType) -> impl Iterator<Item = Location> + '_ {
        self.cells
            .iter()
            .filter(move |cell| cell.kind == kind)
            .map(|cell| cell.location)
    }

    /// Traversable orthogonal neighbours of `location`.
    ///
    /// Neighbours are checked against their own row's length, so stepping
    /// from a long row into a shorter one never reads past its end.
    pub fn open_neighbours(&self, location: Location) -> impl Iterator<Item = &Cell> {
        location
            .orthogonal_neighbours()
            .filter_map(|neighbour| self.get(neighbour))
            .filter(|cell| cell.kind.is_traversable())
    }

    fn row_bounds(&self, row: usize) -> Option<(usize, usize)> {
        let start = *self.row_offsets.get(row)?;
        let end = *self.row_offsets.get(row.checked_add(1)?)?;
        Some((start, end))
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse one row per line. Both `\n` and `\r\n` line endings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let layout: Vec<Vec<char>> = s.lines().map(|line| line.chars().collect()).collect();
        Self::build(&layout)
    }
}
