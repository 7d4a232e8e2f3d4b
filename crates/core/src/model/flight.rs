//! Flight number primitives.

use serde::{Deserialize, Serialize};

/// The four standard flight attributes of a disc.
///
/// Domains as printed on retail discs: speed 1-14 (half steps), glide 1-7,
/// turn -5-1, fade 0-5. Values are not validated here; callers own the
/// domain checks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightNumbers {
    pub speed: f64,
    pub glide: f64,
    pub turn: f64,
    pub fade: f64,
}

impl FlightNumbers {
    pub fn new(speed: f64, glide: f64, turn: f64, fade: f64) -> Self {
        Self {
            speed,
            glide,
            turn,
            fade,
        }
    }

    /// Stability of the disc: turn + fade. Negative is understable,
    /// positive is overstable.
    pub fn stability(&self) -> f64 {
        self.turn + self.fade
    }
}
