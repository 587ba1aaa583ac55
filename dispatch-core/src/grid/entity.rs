//! Cell contents and the symbol alphabet used by map layouts.

use std::fmt;

use crate::Location;

/// What occupies a grid cell.
///
/// The symbol mapping is a bijection:
///
/// | Symbol | Entity        |
/// |--------|---------------|
/// | `.`    | `Road`        |
/// | `#`    | `Wall`        |
/// | `R`    | `Restaurant`  |
/// | `C`    | `Client`      |
/// | `A`    | `CourierCar`  |
/// | `B`    | `CourierBike` |
///
/// # Examples
/// ```
/// use dispatch_core::EntityType;
///
/// assert_eq!(EntityType::from_symbol('A'), Some(EntityType::CourierCar));
/// assert_eq!(EntityType::Wall.symbol(), '#');
/// assert_eq!(EntityType::from_symbol('?'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityType {
    /// Open road.
    Road,
    /// Impassable wall.
    Wall,
    /// A restaurant that prepares orders.
    Restaurant,
    /// A client awaiting a delivery.
    Client,
    /// A courier travelling by car.
    CourierCar,
    /// A courier travelling by bike.
    CourierBike,
}

impl EntityType {
    /// Every entity type, in symbol-table order.
    pub const ALL: [Self; 6] = [
        Self::Road,
        Self::Wall,
        Self::Restaurant,
        Self::Client,
        Self::CourierCar,
        Self::CourierBike,
    ];

    /// Map a layout symbol to its entity type.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Road),
            '#' => Some(Self::Wall),
            'R' => Some(Self::Restaurant),
            'C' => Some(Self::Client),
            'A' => Some(Self::CourierCar),
            'B' => Some(Self::CourierBike),
            _ => None,
        }
    }

    /// Layout symbol for this entity type.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Road => '.',
            Self::Wall => '#',
            Self::Restaurant => 'R',
            Self::Client => 'C',
            Self::CourierCar => 'A',
            Self::CourierBike => 'B',
        }
    }

    /// Whether searches may step onto a cell of this type.
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Lowercase human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Wall => "wall",
            Self::Restaurant => "restaurant",
            Self::Client => "client",
            Self::CourierCar => "car courier",
            Self::CourierBike => "bike courier",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single typed grid cell.
///
/// Cells are created by [`Grid`](crate::Grid) and never change afterwards.
/// Two cells describe the same graph node iff their locations match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Position on the grid.
    pub location: Location,
    /// What occupies the position.
    pub kind: EntityType,
}

impl Cell {
    /// Construct a cell.
    #[must_use]
    pub const fn new(location: Location, kind: EntityType) -> Self {
        Self { location, kind }
    }
}
