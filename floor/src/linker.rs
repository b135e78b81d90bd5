//! Adjacency linking: the one-time pass that assigns every cell's eight
//! compass neighbors.
//!
//! Each coordinate is classified into exactly one of nine geometric cases
//! (four corners, four edges, interior); corners are checked before edges
//! because corner coordinates also satisfy the edge predicates. Populated
//! slots hold the coordinate of the grid cell at the offset position;
//! absent slots stay `None`. Every populated slot is additionally
//! bounds-checked so degenerate single-row or single-column grids link
//! their real neighbors instead of reading out of range.

use floorbot_core::CellCoord;
use thiserror::Error;

use crate::cell::{Cell, Neighbors};

/// Errors raised when finalizing a floor's adjacency.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// The grid holds no cells, so there is nothing to link.
    #[error("cannot link adjacency on an empty grid")]
    EmptyGrid,
}

/// Assigns all eight neighbor slots for every cell in the grid, `Null`
/// padding included. Must run after the grid is fully populated; linking
/// mid-construction would leave neighbors stale once later rows arrive.
pub(crate) fn link_grid(rows: &mut [Vec<Cell>]) {
    let last_x = rows.len().saturating_sub(1);
    for x in 0..rows.len() {
        let last_y = rows[x].len().saturating_sub(1);
        for y in 0..rows[x].len() {
            let neighbors = neighbors_for(rows, x, y, last_x, last_y);
            rows[x][y].set_neighbors(neighbors);
        }
    }
}

fn neighbors_for(
    rows: &[Vec<Cell>],
    x: usize,
    y: usize,
    last_x: usize,
    last_y: usize,
) -> Neighbors {
    let at = |dx: i64, dy: i64| slot_at(rows, x, y, dx, dy);

    // Slot order is [N, NE, E, SE, S, SW, W, NW].
    let slots = if x == 0 && y == 0 {
        // Lower-left corner: nothing south or west.
        [at(0, 1), at(1, 1), at(1, 0), None, None, None, None, None]
    } else if x == last_x && y == last_y {
        // Upper-right corner: nothing north or east.
        [None, None, None, None, at(0, -1), at(-1, -1), at(-1, 0), None]
    } else if x == 0 && y == last_y {
        // Upper-left corner: nothing north or west.
        [None, None, at(1, 0), at(1, -1), at(0, -1), None, None, None]
    } else if x == last_x && y == 0 {
        // Lower-right corner: nothing south or east.
        [at(0, 1), None, None, None, None, None, at(-1, 0), at(-1, 1)]
    } else if x == 0 {
        // Left edge: nothing west.
        [
            at(0, 1),
            at(1, 1),
            at(1, 0),
            at(1, -1),
            at(0, -1),
            None,
            None,
            None,
        ]
    } else if x == last_x {
        // Right edge: nothing east.
        [
            at(0, 1),
            None,
            None,
            None,
            at(0, -1),
            at(-1, -1),
            at(-1, 0),
            at(-1, 1),
        ]
    } else if y == last_y {
        // Top edge: nothing north.
        [
            None,
            None,
            at(1, 0),
            at(1, -1),
            at(0, -1),
            at(-1, -1),
            at(-1, 0),
            None,
        ]
    } else if y == 0 {
        // Bottom edge: nothing south.
        [
            at(0, 1),
            at(1, 1),
            at(1, 0),
            None,
            None,
            None,
            at(-1, 0),
            at(-1, 1),
        ]
    } else {
        // Interior: all eight present.
        [
            at(0, 1),
            at(1, 1),
            at(1, 0),
            at(1, -1),
            at(0, -1),
            at(-1, -1),
            at(-1, 0),
            at(-1, 1),
        ]
    };

    Neighbors::from_slots(slots)
}

fn slot_at(rows: &[Vec<Cell>], x: usize, y: usize, dx: i64, dy: i64) -> Option<CellCoord> {
    let nx = i64::try_from(x).ok()?.checked_add(dx)?;
    let ny = i64::try_from(y).ok()?.checked_add(dy)?;
    let nx = usize::try_from(nx).ok()?;
    let ny = usize::try_from(ny).ok()?;
    let row = rows.get(nx)?;
    if ny >= row.len() {
        return None;
    }
    Some(CellCoord::new(u32::try_from(nx).ok()?, u32::try_from(ny).ok()?))
}
