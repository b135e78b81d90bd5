//! Floor-plan parsing: the textual grammar that populates a floor's grid.
//!
//! One recognized character emits one cell; a newline ends the row and
//! resets the column counter. Characters outside the grammar are silently
//! skipped without advancing the column — permissive by design, not an
//! error. Dimensions are never declared; they are inferred from line breaks
//! and the longest row, and shorter rows are padded with `Null` placeholder
//! cells so the grid stays rectangular.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use floorbot_core::{CellCoord, CellKind};
use thiserror::Error;

use crate::{cell::Cell, linker, Floor};

/// Discriminated reasons loading a floor plan can fail.
///
/// Callers can distinguish "no floor loaded" from "corrupt floor plan"
/// instead of collapsing every failure into one signal.
#[derive(Debug, Error)]
pub enum FloorPlanError {
    /// No file exists at the provided path.
    #[error("floor plan not found at {}", path.display())]
    PathNotFound {
        /// Path that failed to resolve.
        path: PathBuf,
    },
    /// The plan file exists but could not be read.
    #[error("failed to read floor plan: {source}")]
    Io {
        /// Underlying I/O failure.
        #[from]
        source: io::Error,
    },
    /// The source contained no cells at all.
    #[error("floor plan contains no cells")]
    EmptySource,
    /// The plan finished without a single charging station, so no starting
    /// cell can be selected.
    #[error("floor plan contains no charging station")]
    MissingChargingStation,
}

pub(crate) fn floor_from_file(path: &Path) -> Result<Floor, FloorPlanError> {
    let source = fs::read_to_string(path).map_err(|error| {
        if error.kind() == io::ErrorKind::NotFound {
            FloorPlanError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FloorPlanError::Io { source: error }
        }
    })?;
    floor_from_source(&source)
}

pub(crate) fn floor_from_source(source: &str) -> Result<Floor, FloorPlanError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut stations: Vec<CellCoord> = Vec::new();
    let mut line: Vec<Cell> = Vec::new();
    let mut x: u32 = 0;
    let mut y: u32 = 0;
    let mut max_width: usize = 0;

    for symbol in source.chars() {
        if symbol == '\n' {
            max_width = max_width.max(line.len());
            rows.push(std::mem::take(&mut line));
            x += 1;
            y = 0;
            continue;
        }
        let Some(kind) = CellKind::from_plan_char(symbol) else {
            continue;
        };
        let coord = CellCoord::new(x, y);
        if kind == CellKind::ChargingStation {
            stations.push(coord);
        }
        line.push(Cell::new(coord, kind));
        y += 1;
    }
    // A trailing row without a final newline still counts; a final newline
    // does not open an empty row.
    if !line.is_empty() {
        max_width = max_width.max(line.len());
        rows.push(line);
    }

    if rows.iter().all(Vec::is_empty) {
        return Err(FloorPlanError::EmptySource);
    }

    // Pad short rows with Null placeholders, preserving column indices.
    for (row_index, row) in rows.iter_mut().enumerate() {
        for column in row.len()..max_width {
            let coord = CellCoord::new(row_index as u32, column as u32);
            row.push(Cell::new(coord, CellKind::Null));
        }
    }

    linker::link_grid(&mut rows);

    let starting_cell = stations
        .first()
        .copied()
        .ok_or(FloorPlanError::MissingChargingStation)?;

    Ok(Floor::from_parts(rows, stations, Some(starting_cell)))
}
