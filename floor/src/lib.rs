#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative floor store for the Floorbot engine.
//!
//! A [`Floor`] owns a rectangular grid of [`Cell`] values addressed by
//! `(x, y)`, the charging-station registry, and the starting cell.
//! Construction is two-phase: populate the grid (by parsing a plan or
//! through the placement family), then finalize adjacency exactly once via
//! [`Floor::link_adjacency`] — building and linking must not interleave,
//! because a cell can only be linked once its neighbors exist. Read-only
//! diagnostic views live in [`query`].

mod cell;
mod linker;
mod parser;

pub use cell::{Cell, Neighbors};
pub use linker::LinkError;
pub use parser::FloorPlanError;

use std::path::Path;

use floorbot_core::{CellCoord, CellKind, Direction};

/// The published default floor layout: perimeter walls, a low-pile west
/// wing with the charging station at (1,1), stairs at (7,0), bare-floor
/// halls, a high-pile block, and connecting doors.
const DEFAULT_PLAN_ROWS: [&str; 17] = [
    "WWWWWWWWWWWWWWWWWW",
    "WCLLLLLWBWBDLLLLLW",
    "WLLLLLLWBWBWLLLLLW",
    "WLLLLLLWBWWWLLLLLW",
    "WLLLLLLWBWBWLLLLLW",
    "WLLLLLLWBWBWLLLLLW",
    "WWWWDWWWDWDWDWWWWW",
    "SBBBBBBBBBBBBDBWBW",
    "WBBBBBBBBBBBBWBWBW",
    "WWWWWWWWWWWDWWWWBW",
    "WBBBBBBBBBBBBBBDBW",
    "WBHHHHHBBBBBBBBWBW",
    "WBHHHHHBBBWWWWDWWW",
    "WBHHHHHBBBWBBBBBBW",
    "WBHHHHHBBBWBBBBBBW",
    "WBBBBBBBBBWBBBBBBW",
    "WWWWWWWWWWWWWWWWWW",
];

/// A rectangular grid of typed cells with its charging-station registry
/// and starting cell.
#[derive(Clone, Debug, Default)]
pub struct Floor {
    rows: Vec<Vec<Cell>>,
    charging_stations: Vec<CellCoord>,
    starting_cell: Option<CellCoord>,
}

impl Floor {
    /// Creates an empty floor with no grid, registry, or starting cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            charging_stations: Vec::new(),
            starting_cell: None,
        }
    }

    /// Parses a floor plan from the file at `path`, links adjacency, and
    /// selects the starting cell.
    ///
    /// # Errors
    ///
    /// Returns a discriminated [`FloorPlanError`] for a missing path, an
    /// I/O failure, a source without cells, or a plan without a charging
    /// station.
    pub fn from_plan_file(path: &Path) -> Result<Self, FloorPlanError> {
        parser::floor_from_file(path)
    }

    /// Parses a floor plan from in-memory source text.
    ///
    /// # Errors
    ///
    /// Returns [`FloorPlanError::EmptySource`] when the source holds no
    /// cells and [`FloorPlanError::MissingChargingStation`] when no `C`
    /// was discovered.
    pub fn from_plan_source(source: &str) -> Result<Self, FloorPlanError> {
        parser::floor_from_source(source)
    }

    /// Builds the published fixed default layout through the placement
    /// family and links it, ready for queries.
    #[must_use]
    pub fn default_plan() -> Self {
        let mut floor = Floor::new();
        for (xi, row) in DEFAULT_PLAN_ROWS.iter().enumerate() {
            for (yi, symbol) in row.chars().enumerate() {
                let x = xi as u32;
                let y = yi as u32;
                match symbol {
                    'W' => floor.place_wall_at(x, y),
                    'C' => floor.place_charging_station_at(x, y),
                    'B' => floor.place_bare_floor_at(x, y),
                    'D' => floor.place_door_at(x, y),
                    'H' => floor.place_high_pile_carpet_at(x, y),
                    'L' => floor.place_low_pile_carpet_at(x, y),
                    'S' => floor.place_stairs_at(x, y),
                    _ => {}
                }
            }
        }
        linker::link_grid(&mut floor.rows);
        floor
    }

    pub(crate) fn from_parts(
        rows: Vec<Vec<Cell>>,
        charging_stations: Vec<CellCoord>,
        starting_cell: Option<CellCoord>,
    ) -> Self {
        Self {
            rows,
            charging_stations,
            starting_cell,
        }
    }

    /// The cell at `(x, y)`, or `None` when the grid is empty or the
    /// coordinates exceed the row's bounds. Absence is a normal result.
    #[must_use]
    pub fn cell_at(&self, x: u32, y: u32) -> Option<&Cell> {
        self.rows.get(x as usize)?.get(y as usize)
    }

    /// Mutable access to the cell at `(x, y)`; the mutation hook for the
    /// simulation layers that track dirt and obstructions.
    pub fn cell_at_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        self.rows.get_mut(x as usize)?.get_mut(y as usize)
    }

    /// Resolves the linked neighbor of the cell at `coord` in the given
    /// direction through the grid arena.
    #[must_use]
    pub fn adjacent_cell(&self, coord: CellCoord, direction: Direction) -> Option<&Cell> {
        let neighbor = self.cell_at(coord.x(), coord.y())?.neighbor(direction)?;
        self.cell_at(neighbor.x(), neighbor.y())
    }

    /// The current starting cell, if one has been selected.
    #[must_use]
    pub fn starting_cell(&self) -> Option<&Cell> {
        let coord = self.starting_cell?;
        self.cell_at(coord.x(), coord.y())
    }

    /// Bounds-checked lookup into the charging-station registry; an
    /// out-of-range index returns `None` rather than failing.
    #[must_use]
    pub fn charging_station(&self, index: usize) -> Option<&Cell> {
        let coord = *self.charging_stations.get(index)?;
        self.cell_at(coord.x(), coord.y())
    }

    /// Number of registered charging stations.
    #[must_use]
    pub fn charging_station_count(&self) -> usize {
        self.charging_stations.len()
    }

    /// Places a wall cell at `(x, y)`.
    pub fn place_wall_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::Wall);
    }

    /// Places a door cell at `(x, y)`.
    pub fn place_door_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::Door);
    }

    /// Places a stairs cell at `(x, y)`.
    pub fn place_stairs_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::Stairs);
    }

    /// Places a bare-floor cell at `(x, y)`.
    pub fn place_bare_floor_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::BareFloor);
    }

    /// Places a low-pile carpet cell at `(x, y)`.
    pub fn place_low_pile_carpet_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::LowPileCarpet);
    }

    /// Places a high-pile carpet cell at `(x, y)`.
    pub fn place_high_pile_carpet_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::HighPileCarpet);
    }

    /// Places a charging-station cell at `(x, y)`, registers it in
    /// discovery order, and makes it the starting cell when none is set.
    pub fn place_charging_station_at(&mut self, x: u32, y: u32) {
        self.place_cell_at(x, y, CellKind::ChargingStation);
        let coord = CellCoord::new(x, y);
        self.charging_stations.push(coord);
        if self.starting_cell.is_none() {
            self.starting_cell = Some(coord);
        }
    }

    /// Grid mutation shared by the placement family: grows the grid as
    /// needed, pads gaps with `Null` cells, and keeps stored coordinates
    /// equal to grid positions. Never relinks adjacency.
    fn place_cell_at(&mut self, x: u32, y: u32, kind: CellKind) {
        let xi = x as usize;
        let yi = y as usize;
        while self.rows.len() <= xi {
            self.rows.push(Vec::new());
        }

        let mut replaced_station = false;
        {
            let row = &mut self.rows[xi];
            while row.len() < yi {
                let column = row.len() as u32;
                row.push(Cell::new(CellCoord::new(x, column), CellKind::Null));
            }
            let cell = Cell::new(CellCoord::new(x, y), kind);
            if row.len() == yi {
                row.push(cell);
            } else {
                replaced_station = row[yi].kind() == CellKind::ChargingStation;
                row[yi] = cell;
            }
        }

        if replaced_station {
            self.forget_station(CellCoord::new(x, y));
        }
    }

    /// Drops a coordinate from the registry after its cell was overwritten,
    /// clearing the starting cell if it pointed there.
    fn forget_station(&mut self, coord: CellCoord) {
        self.charging_stations.retain(|station| *station != coord);
        if self.starting_cell == Some(coord) {
            self.starting_cell = None;
        }
    }

    /// Assigns every cell's eight neighbor slots. Must be called exactly
    /// once after the grid is fully populated, and again after any bulk
    /// placement sequence — placement alone never relinks.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::EmptyGrid`] when the grid holds no cells.
    pub fn link_adjacency(&mut self) -> Result<(), LinkError> {
        if self.rows.iter().all(Vec::is_empty) {
            return Err(LinkError::EmptyGrid);
        }
        linker::link_grid(&mut self.rows);
        Ok(())
    }
}

/// Read-only diagnostic views over a floor.
pub mod query {
    use floorbot_core::Direction;

    use super::{Cell, Floor};

    /// Formatted snapshot of the cell at `(x, y)`: location, type, grade,
    /// dirty and obstructed flags, and the 3×3 neighborhood diagram.
    /// Returns `None` when there is no cell at the coordinates.
    #[must_use]
    pub fn query_cell_at(floor: &Floor, x: u32, y: u32) -> Option<String> {
        let cell = floor.cell_at(x, y)?;
        let mut out = String::new();
        out.push_str(&format!("Location: ({x},{y})\n"));
        out.push_str(&format!("Cell Type: {}\n", cell.kind()));
        out.push_str(&format!("Grade: {}\n", cell.elevation_grade()));
        out.push_str(&format!("Dirty?: {}\n", !cell.is_clean()));
        out.push_str(&format!("Obstructed?: {}\n", cell.is_obstructed()));
        out.push_str("AdjacentCells:\n");
        out.push_str(&neighborhood_diagram(floor, cell));
        Some(out)
    }

    /// Renders the whole grid with `*` substituted at `(x, y)`. With
    /// `show_dirt`, every other cell renders its dirt digit instead of its
    /// type symbol.
    #[must_use]
    pub fn mark_cell_at(floor: &Floor, x: u32, y: u32, show_dirt: bool) -> String {
        let mut out = String::new();
        for (xi, row) in floor.rows.iter().enumerate() {
            for (yi, cell) in row.iter().enumerate() {
                if xi as u32 == x && yi as u32 == y {
                    out.push('*');
                } else if show_dirt {
                    out.push(cell.dirt_symbol());
                } else {
                    out.push(cell.kind().symbol());
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Plain render of the grid, one row of type symbols per line.
    #[must_use]
    pub fn floor_map(floor: &Floor) -> String {
        let mut out = String::new();
        for row in &floor.rows {
            for cell in row {
                out.push(cell.kind().symbol());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// The 3×3 neighborhood: rows NW N NE / W * E / SW S SE, each neighbor
    /// drawn by its type symbol or `-` when absent, the cell itself as `*`.
    fn neighborhood_diagram(floor: &Floor, cell: &Cell) -> String {
        let symbol = |direction: Direction| -> char {
            cell.neighbor(direction)
                .and_then(|coord| floor.cell_at(coord.x(), coord.y()))
                .map_or('-', |neighbor| neighbor.kind().symbol())
        };

        let mut out = String::new();
        out.push(symbol(Direction::Northwest));
        out.push(symbol(Direction::North));
        out.push(symbol(Direction::Northeast));
        out.push('\n');
        out.push(symbol(Direction::West));
        out.push('*');
        out.push(symbol(Direction::East));
        out.push('\n');
        out.push(symbol(Direction::Southwest));
        out.push(symbol(Direction::South));
        out.push(symbol(Direction::Southeast));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{query, CellCoord, CellKind, Direction, Floor, LinkError};

    #[test]
    fn cell_lookup_outside_the_grid_is_a_normal_absence() {
        let floor = Floor::new();
        assert!(floor.cell_at(0, 0).is_none());

        let floor = Floor::from_plan_source("WCW\n").expect("plan parses");
        assert!(floor.cell_at(0, 2).is_some());
        assert!(floor.cell_at(0, 3).is_none());
        assert!(floor.cell_at(1, 0).is_none());
    }

    #[test]
    fn placement_grows_the_grid_and_pads_gaps_with_null() {
        let mut floor = Floor::new();
        floor.place_wall_at(1, 2);
        assert!(floor.cell_at(0, 0).is_none(), "row 0 stays empty");
        let pad = floor.cell_at(1, 0).expect("gap padded");
        assert_eq!(pad.kind(), CellKind::Null);
        assert_eq!(pad.coord(), CellCoord::new(1, 0));
        let wall = floor.cell_at(1, 2).expect("wall placed");
        assert_eq!(wall.kind(), CellKind::Wall);
        assert_eq!(wall.coord(), CellCoord::new(1, 2));
    }

    #[test]
    fn first_placed_station_becomes_the_starting_cell() {
        let mut floor = Floor::new();
        floor.place_charging_station_at(0, 0);
        floor.place_charging_station_at(0, 1);
        assert_eq!(floor.charging_station_count(), 2);
        assert_eq!(
            floor.starting_cell().map(super::Cell::coord),
            Some(CellCoord::new(0, 0))
        );
    }

    #[test]
    fn overwriting_a_station_forgets_its_registration() {
        let mut floor = Floor::new();
        floor.place_charging_station_at(0, 0);
        floor.place_wall_at(0, 0);
        assert_eq!(floor.charging_station_count(), 0);
        assert!(floor.starting_cell().is_none());
        assert_eq!(
            floor.cell_at(0, 0).map(super::Cell::kind),
            Some(CellKind::Wall)
        );
    }

    #[test]
    fn station_registry_lookup_is_bounds_checked() {
        let floor = Floor::from_plan_source("WCW\n").expect("plan parses");
        assert!(floor.charging_station(0).is_some());
        assert!(floor.charging_station(1).is_none());
        assert!(floor.charging_station(usize::MAX).is_none());
    }

    #[test]
    fn linking_an_empty_grid_fails_fast() {
        let mut floor = Floor::new();
        assert_eq!(floor.link_adjacency(), Err(LinkError::EmptyGrid));

        floor.place_wall_at(0, 0);
        assert_eq!(floor.link_adjacency(), Ok(()));
    }

    #[test]
    fn placement_never_relinks_until_asked() {
        let mut floor = Floor::from_plan_source("WC\nWW\n").expect("plan parses");
        floor.place_wall_at(2, 0);
        floor.place_wall_at(2, 1);
        let station = floor.cell_at(0, 1).expect("station exists");
        assert_eq!(station.neighbor(Direction::Southeast), Some(CellCoord::new(1, 0)));
        let late_wall = floor.cell_at(2, 0).expect("wall placed");
        assert_eq!(
            late_wall.neighbors().present_count(),
            0,
            "fresh placements stay unlinked until link_adjacency runs",
        );

        floor.link_adjacency().expect("grid is populated");
        let late_wall = floor.cell_at(2, 0).expect("wall placed");
        assert_eq!(late_wall.neighbor(Direction::West), Some(CellCoord::new(1, 0)));
    }

    #[test]
    fn adjacent_cell_resolves_through_the_arena() {
        let floor = Floor::from_plan_source("WWW\nWCW\nWWW").expect("plan parses");
        let east = floor
            .adjacent_cell(CellCoord::new(1, 1), Direction::East)
            .expect("interior neighbor");
        assert_eq!(east.coord(), CellCoord::new(2, 1));
        assert_eq!(east.kind(), CellKind::Wall);
        assert!(floor
            .adjacent_cell(CellCoord::new(0, 0), Direction::West)
            .is_none());
    }

    #[test]
    fn default_plan_matches_the_published_layout() {
        let floor = Floor::default_plan();
        for x in 0..17 {
            for y in 0..18 {
                assert!(floor.cell_at(x, y).is_some(), "cell ({x},{y}) exists");
            }
        }
        assert!(floor.cell_at(17, 0).is_none());
        assert!(floor.cell_at(0, 18).is_none());

        assert_eq!(
            floor.cell_at(0, 0).map(super::Cell::kind),
            Some(CellKind::Wall)
        );
        assert_eq!(
            floor.cell_at(7, 0).map(super::Cell::kind),
            Some(CellKind::Stairs)
        );
        assert_eq!(floor.charging_station_count(), 1);
        let start = floor.starting_cell().expect("station selected");
        assert_eq!(start.coord(), CellCoord::new(1, 1));
        assert_eq!(start.kind(), CellKind::ChargingStation);
    }

    #[test]
    fn query_cell_at_formats_the_snapshot_with_diagram() {
        let floor = Floor::from_plan_source("WWW\nWCW\nWWW").expect("plan parses");
        let snapshot = query::query_cell_at(&floor, 1, 1).expect("cell exists");
        assert_eq!(
            snapshot,
            "Location: (1,1)\n\
             Cell Type: ChargingStation\n\
             Grade: 0\n\
             Dirty?: false\n\
             Obstructed?: false\n\
             AdjacentCells:\n\
             WWW\nW*W\nWWW",
        );
    }

    #[test]
    fn query_corner_cell_renders_absent_neighbors_as_dashes() {
        let floor = Floor::from_plan_source("WWW\nWCW\nWWW").expect("plan parses");
        let snapshot = query::query_cell_at(&floor, 0, 0).expect("cell exists");
        assert!(
            snapshot.ends_with("AdjacentCells:\n-WC\n-*W\n---"),
            "unexpected corner diagram in {snapshot:?}",
        );
        assert!(query::query_cell_at(&floor, 9, 9).is_none());
    }

    #[test]
    fn mark_cell_at_substitutes_a_star() {
        let floor = Floor::from_plan_source("WWW\nWCW\nWWW").expect("plan parses");
        assert_eq!(
            query::mark_cell_at(&floor, 1, 1, false),
            "W W W \nW * W \nW W W \n",
        );
        assert_eq!(
            query::floor_map(&floor),
            "W W W \nW C W \nW W W \n",
        );
    }

    #[test]
    fn mark_cell_at_with_show_dirt_renders_dirt_digits() {
        let mut floor = Floor::from_plan_source("WWW\nWCW\nWWW").expect("plan parses");
        floor
            .cell_at_mut(0, 1)
            .expect("cell exists")
            .set_dirt_amount(3);
        assert_eq!(
            query::mark_cell_at(&floor, 1, 1, true),
            "0 3 0 \n0 * 0 \n0 0 0 \n",
        );
    }
}
