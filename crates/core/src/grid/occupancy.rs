//! Projection of flight numbers onto the discrete grid.

use rustc_hash::FxHashSet;

use super::types::GridCell;
use crate::model::FlightNumbers;

/// The grid cell a disc occupies: speed and stability each rounded to the
/// nearest integer.
pub fn grid_cell(flight: &FlightNumbers) -> GridCell {
    (
        flight.speed.round() as i32,
        flight.stability().round() as i32,
    )
}

/// Build the set of occupied cells for a collection of discs.
///
/// Occupancy only; any number of discs may share a cell. Rebuilt from
/// scratch on every call.
pub(crate) fn occupied_cells<I>(flights: I) -> FxHashSet<GridCell>
where
    I: IntoIterator<Item = FlightNumbers>,
{
    flights.into_iter().map(|f| grid_cell(&f)).collect()
}
