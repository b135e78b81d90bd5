#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core vocabulary shared across the Floorbot engine.
//!
//! This crate defines the types that connect the floor store, the pure
//! simulation systems, and adapters: the eight-way compass [`Direction`] used
//! for every neighbor relation, the [`CellCoord`] grid identity, and the
//! closed [`CellKind`] variant set with its per-variant defaults. The floor
//! store owns the grid itself; systems and adapters speak exclusively in
//! these types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compass directions used for cell adjacency and movement queries.
///
/// The declaration order is load-bearing: [`Direction::ALL`] and
/// [`Direction::index`] follow it, and the floor store lays out its eight
/// neighbor slots in the same order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward increasing y within the same plan row.
    North,
    /// Toward increasing x and increasing y.
    Northeast,
    /// Toward increasing x.
    East,
    /// Toward increasing x and decreasing y.
    Southeast,
    /// Toward decreasing y.
    South,
    /// Toward decreasing x and decreasing y.
    Southwest,
    /// Toward decreasing x.
    West,
    /// Toward decreasing x and increasing y.
    Northwest,
}

impl Direction {
    /// All eight directions in neighbor-slot order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    /// Stable slot index in `0..=7` following [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::Northeast => 1,
            Direction::East => 2,
            Direction::Southeast => 3,
            Direction::South => 4,
            Direction::Southwest => 5,
            Direction::West => 6,
            Direction::Northwest => 7,
        }
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::Northeast => Direction::Southwest,
            Direction::East => Direction::West,
            Direction::Southeast => Direction::Northwest,
            Direction::South => Direction::North,
            Direction::Southwest => Direction::Northeast,
            Direction::West => Direction::East,
            Direction::Northwest => Direction::Southeast,
        }
    }

    /// Signed `(dx, dy)` grid offset for this direction.
    ///
    /// `x` advances with each parsed plan line and `y` along a line, so
    /// North is `(0, +1)` and East is `(+1, 0)`.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::Northeast => (1, 1),
            Direction::East => (1, 0),
            Direction::Southeast => (1, -1),
            Direction::South => (0, -1),
            Direction::Southwest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::Northwest => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::Northeast => "Northeast",
            Direction::East => "East",
            Direction::Southeast => "Southeast",
            Direction::South => "South",
            Direction::Southwest => "Southwest",
            Direction::West => "West",
            Direction::Northwest => "Northwest",
        };
        f.write_str(name)
    }
}

/// Location of a single grid cell expressed as `(x, y)` coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    x: u32,
    y: u32,
}

impl CellCoord {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based x index of the cell (the parsed plan row).
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based y index of the cell (the column within a plan row).
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Elevation grade assigned to stairs, marking them as never traversable.
pub const STAIRS_GRADE: i32 = -100;

/// Closed set of cell variants that can occupy a grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Uncovered hard flooring.
    BareFloor,
    /// Carpet with a short pile.
    LowPileCarpet,
    /// Carpet with a tall pile.
    HighPileCarpet,
    /// Solid wall segment.
    Wall,
    /// Doorway connecting two floor regions.
    Door,
    /// Immovable obstruction resting on the floor.
    Obstacle,
    /// Staircase; obstacle-class terrain that is never traversable.
    Stairs,
    /// Dock the robot recharges at; registered with the floor store.
    ChargingStation,
    /// Padding placeholder inserted into short rows; consumers treat it as
    /// "no cell".
    Null,
}

impl CellKind {
    /// Maps a floor-plan grammar character onto a cell variant.
    ///
    /// The grammar is closed; every unlisted character (newlines aside,
    /// which delimit rows) yields `None` and emits no cell. `Null` has no
    /// grammar character — it only ever appears through padding.
    #[must_use]
    pub const fn from_plan_char(symbol: char) -> Option<CellKind> {
        match symbol {
            'W' => Some(CellKind::Wall),
            'C' => Some(CellKind::ChargingStation),
            'B' => Some(CellKind::BareFloor),
            'D' => Some(CellKind::Door),
            'H' => Some(CellKind::HighPileCarpet),
            'L' => Some(CellKind::LowPileCarpet),
            'O' => Some(CellKind::Obstacle),
            'S' => Some(CellKind::Stairs),
            _ => None,
        }
    }

    /// Single-character display symbol used by the diagnostic renders.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CellKind::BareFloor => 'B',
            CellKind::LowPileCarpet => 'L',
            CellKind::HighPileCarpet => 'H',
            CellKind::Wall => 'W',
            CellKind::Door => 'D',
            CellKind::Obstacle => 'O',
            CellKind::Stairs => 'S',
            CellKind::ChargingStation => 'C',
            CellKind::Null => 'N',
        }
    }

    /// Default signed elevation grade for the variant.
    ///
    /// Negative grades denote obstacle-class terrain; carpet grades rise
    /// with pile height.
    #[must_use]
    pub const fn default_elevation_grade(self) -> i32 {
        match self {
            CellKind::BareFloor => 0,
            CellKind::LowPileCarpet => 1,
            CellKind::HighPileCarpet => 2,
            CellKind::Wall => 0,
            CellKind::Door => 0,
            CellKind::Obstacle => -1,
            CellKind::Stairs => STAIRS_GRADE,
            CellKind::ChargingStation => 0,
            CellKind::Null => 0,
        }
    }

    /// Whether cells of this variant start out obstructed.
    #[must_use]
    pub const fn default_obstruction(self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Obstacle | CellKind::Stairs)
    }

    /// Whether this variant is the padding placeholder.
    #[must_use]
    pub const fn is_null(self) -> bool {
        matches!(self, CellKind::Null)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::BareFloor => "BareFloor",
            CellKind::LowPileCarpet => "LowPileCarpet",
            CellKind::HighPileCarpet => "HighPileCarpet",
            CellKind::Wall => "Wall",
            CellKind::Door => "Door",
            CellKind::Obstacle => "Obstacle",
            CellKind::Stairs => "Stairs",
            CellKind::ChargingStation => "ChargingStation",
            CellKind::Null => "Null",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellCoord, CellKind, Direction, STAIRS_GRADE};
    use serde::{de::DeserializeOwned, Serialize};

    #[test]
    fn direction_index_follows_declaration_order() {
        for (slot, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), slot);
        }
    }

    #[test]
    fn direction_opposites_are_symmetric() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn direction_offsets_cancel_against_opposites() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn plan_grammar_is_closed() {
        assert_eq!(CellKind::from_plan_char('W'), Some(CellKind::Wall));
        assert_eq!(
            CellKind::from_plan_char('C'),
            Some(CellKind::ChargingStation)
        );
        assert_eq!(CellKind::from_plan_char('B'), Some(CellKind::BareFloor));
        assert_eq!(CellKind::from_plan_char('D'), Some(CellKind::Door));
        assert_eq!(
            CellKind::from_plan_char('H'),
            Some(CellKind::HighPileCarpet)
        );
        assert_eq!(CellKind::from_plan_char('L'), Some(CellKind::LowPileCarpet));
        assert_eq!(CellKind::from_plan_char('O'), Some(CellKind::Obstacle));
        assert_eq!(CellKind::from_plan_char('S'), Some(CellKind::Stairs));

        for rejected in ['N', 'w', 'x', '?', ' ', '\r', '0'] {
            assert_eq!(
                CellKind::from_plan_char(rejected),
                None,
                "character {rejected:?} is outside the grammar",
            );
        }
    }

    #[test]
    fn stairs_grade_is_fixed_at_never_traversable() {
        assert_eq!(CellKind::Stairs.default_elevation_grade(), STAIRS_GRADE);
        assert_eq!(STAIRS_GRADE, -100);
    }

    #[test]
    fn obstacle_class_variants_start_obstructed() {
        assert!(CellKind::Wall.default_obstruction());
        assert!(CellKind::Obstacle.default_obstruction());
        assert!(CellKind::Stairs.default_obstruction());
        assert!(!CellKind::Door.default_obstruction());
        assert!(!CellKind::BareFloor.default_obstruction());
        assert!(!CellKind::ChargingStation.default_obstruction());
        assert!(!CellKind::Null.default_obstruction());
    }

    #[test]
    fn carpet_grades_rise_with_pile_height() {
        assert!(
            CellKind::BareFloor.default_elevation_grade()
                < CellKind::LowPileCarpet.default_elevation_grade()
        );
        assert!(
            CellKind::LowPileCarpet.default_elevation_grade()
                < CellKind::HighPileCarpet.default_elevation_grade()
        );
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(3, 14));
    }

    #[test]
    fn direction_round_trips_through_bincode() {
        for direction in Direction::ALL {
            assert_round_trip(&direction);
        }
    }

    #[test]
    fn cell_kind_round_trips_through_bincode() {
        assert_round_trip(&CellKind::Stairs);
        assert_round_trip(&CellKind::Null);
    }

    #[test]
    fn coord_display_is_compact() {
        assert_eq!(CellCoord::new(4, 9).to_string(), "(4,9)");
    }
}
