//! Discs in a user's bag.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::flight::FlightNumbers;
use crate::error::Result;

/// A disc in a bag: the stock flight numbers from the manufacturer plus an
/// optional adjusted set reflecting how the disc actually flies (wear,
/// personal throw data).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disc {
    pub name: String,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plastic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub stock_flight: FlightNumbers,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_flight: Option<FlightNumbers>,
}

impl Disc {
    /// The flight numbers that describe how this disc actually flies:
    /// the adjusted set when present, otherwise stock.
    pub fn effective_flight(&self) -> FlightNumbers {
        self.adjusted_flight.unwrap_or(self.stock_flight)
    }
}

/// Load a bag from a JSON file containing an array of discs.
pub fn load_discs(path: impl AsRef<Path>) -> Result<Vec<Disc>> {
    let file = File::open(path)?;
    let discs = serde_json::from_reader(BufReader::new(file))?;
    Ok(discs)
}
