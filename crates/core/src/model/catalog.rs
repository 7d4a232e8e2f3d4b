//! Retail catalog discs used for suggestions.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::flight::FlightNumbers;
use crate::error::Result;

/// A disc from the retail catalog, candidate for filling a coverage gap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogDisc {
    pub name: String,
    pub brand: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub speed: f64,
    pub glide: f64,
    pub turn: f64,
    pub fade: f64,
}

impl CatalogDisc {
    pub fn flight(&self) -> FlightNumbers {
        FlightNumbers::new(self.speed, self.glide, self.turn, self.fade)
    }

    pub fn stability(&self) -> f64 {
        self.turn + self.fade
    }
}

/// Load a catalog from a JSON file containing an array of catalog discs.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogDisc>> {
    let file = File::open(path)?;
    let discs = serde_json::from_reader(BufReader::new(file))?;
    Ok(discs)
}
