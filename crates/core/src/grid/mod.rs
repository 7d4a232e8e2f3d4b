//! Gap search over the (speed, stability) grid.
//!
//! A bag is projected onto a discrete grid, the unoccupied space is
//! scanned for rectangles, overlapping candidates are thinned out, and
//! oversized survivors are subdivided. Stages run strictly in that order.

mod finder;
mod occupancy;
mod resolver;
mod scanner;
mod splitter;
mod types;

pub use finder::{find_gaps, find_gaps_from_flights};
pub use occupancy::grid_cell;
pub use types::{Gap, GapSettings, GridCell, ScanDomain};
