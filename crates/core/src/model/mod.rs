//! Data model for bag and catalog discs.

mod catalog;
mod disc;
mod flight;

pub use catalog::{CatalogDisc, load_catalog};
pub use disc::{Disc, load_discs};
pub use flight::FlightNumbers;
