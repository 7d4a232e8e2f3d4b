//! Continuous display placement on the stability-vs-speed chart.
//!
//! The chart positions discs by their unrounded flight numbers; the grid
//! rounding in [`crate::grid`] is a separate concern and the two must not
//! be unified.

use crate::grid::Gap;
use crate::model::FlightNumbers;

/// A position on the chart, in percent of the plot area. The x axis runs
/// from stability 4 (left) down to -5 (right); the y axis from speed 14
/// (top) down to 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPosition {
    pub x_percent: f64,
    pub y_percent: f64,
}

/// Where a disc sits on the chart.
pub fn disc_position(flight: &FlightNumbers) -> GridPosition {
    // 4 is our 0 on an axis that runs from 4 to -5.
    let x_position = 4.0 - flight.stability();
    let y_position = 14.0 - flight.speed;

    GridPosition {
        x_percent: x_position / 9.0 * 100.0,
        y_percent: y_position / 14.0 * 100.0,
    }
}

/// The center of a gap's cell range on the chart, for anchoring a
/// suggestion marker.
pub fn gap_marker_position(gap: &Gap) -> GridPosition {
    let x_col_start = (4 - gap.stability_end) as f64;
    let x_col_end = (4 - gap.stability_start) as f64;
    let y_row_start = (14 - gap.speed_end) as f64;
    let y_row_end = (14 - gap.speed_start) as f64;

    GridPosition {
        x_percent: (x_col_start + x_col_end) / 2.0 / 9.0 * 100.0,
        y_percent: (y_row_start + y_row_end) / 2.0 / 14.0 * 100.0,
    }
}
