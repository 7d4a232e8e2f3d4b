//! discgap - bag coverage analysis for disc golf.
//!
//! Projects a bag of discs onto a discrete (speed, stability) grid, finds
//! the under-served rectangular regions of that grid, and ranks catalog
//! discs that would fill them.

pub mod chart;
pub mod error;
pub mod grid;
pub mod model;
pub mod suggest;

pub use error::{BagError, Result};
pub use grid::{Gap, GapSettings, GridCell, ScanDomain, find_gaps, find_gaps_from_flights};
pub use model::{CatalogDisc, Disc, FlightNumbers, load_catalog, load_discs};
pub use suggest::{SuggestCriteria, suggest};
