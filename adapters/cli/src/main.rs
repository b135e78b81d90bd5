#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that loads and inspects floor plans.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use floorbot_floor::{query, Floor};

/// Inspect floor plans for the cleaning-robot simulator.
#[derive(Debug, Parser)]
#[command(name = "floorbot")]
struct Args {
    /// Floor-plan file to load; the built-in default plan is used when
    /// omitted.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Render each cell's dirt amount instead of its type symbol.
    #[arg(long)]
    show_dirt: bool,

    /// Print the detailed snapshot of the cell at the given coordinates.
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    query: Option<Vec<u32>>,
}

/// Entry point for the Floorbot command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();

    let floor = match &args.plan {
        Some(path) => Floor::from_plan_file(path)
            .with_context(|| format!("loading floor plan from {}", path.display()))?,
        None => Floor::default_plan(),
    };

    let start = floor.starting_cell().context("floor has no starting cell")?;
    let start_coord = start.coord();
    print!(
        "{}",
        query::mark_cell_at(&floor, start_coord.x(), start_coord.y(), args.show_dirt)
    );
    println!("Charging stations: {}", floor.charging_station_count());
    println!("Starting cell: {} at {}", start.kind(), start_coord);

    if let Some(coords) = &args.query {
        let (x, y) = (coords[0], coords[1]);
        match query::query_cell_at(&floor, x, y) {
            Some(snapshot) => println!("\n{snapshot}"),
            None => println!("\nNo cell at ({x},{y})"),
        }
    }

    Ok(())
}
