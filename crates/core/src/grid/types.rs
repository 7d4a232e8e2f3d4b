//! Gap search types and settings.

use serde::{Deserialize, Serialize};

use crate::error::{BagError, Result};

// Default constants
pub(crate) const DEFAULT_GAP_THRESHOLD: i32 = 3;
pub(crate) const DEFAULT_MAX_OVERLAP: i32 = 1;
pub(crate) const DEFAULT_MAX_SPAN: i32 = 4;

/// A cell of the discrete grid: (rounded speed, rounded stability).
pub type GridCell = (i32, i32);

/// An axis-aligned rectangle of grid cells, inclusive on both ends,
/// containing no occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    pub speed_start: i32,
    pub speed_end: i32,
    pub stability_start: i32,
    pub stability_end: i32,
}

impl Gap {
    pub fn new(speed_start: i32, speed_end: i32, stability_start: i32, stability_end: i32) -> Self {
        Self {
            speed_start,
            speed_end,
            stability_start,
            stability_end,
        }
    }

    /// Number of cells covered on the speed axis.
    pub fn speed_span(&self) -> i32 {
        self.speed_end - self.speed_start + 1
    }

    /// Number of cells covered on the stability axis.
    pub fn stability_span(&self) -> i32 {
        self.stability_end - self.stability_start + 1
    }

    pub fn area(&self) -> i32 {
        self.speed_span() * self.stability_span()
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        let (speed, stability) = cell;
        speed >= self.speed_start
            && speed <= self.speed_end
            && stability >= self.stability_start
            && stability <= self.stability_end
    }
}

/// The rectangle of cells the scanner searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanDomain {
    pub speed_min: i32,
    pub speed_max: i32,
    pub stability_min: i32,
    pub stability_max: i32,
}

impl Default for ScanDomain {
    fn default() -> Self {
        // TODO: speed_max stops at 13 while the display grid runs to 14;
        // widening it changes gap placement near speed 14.
        Self {
            speed_min: 1,
            speed_max: 13,
            stability_min: -5,
            stability_max: 4,
        }
    }
}

impl ScanDomain {
    pub fn speed_extent(&self) -> i32 {
        self.speed_max - self.speed_min + 1
    }

    pub fn stability_extent(&self) -> i32 {
        self.stability_max - self.stability_min + 1
    }
}

/// Settings for the gap search pipeline.
#[derive(Clone, Debug)]
pub struct GapSettings {
    /// Minimum span a gap must reach on BOTH axes to be reported.
    pub gap_threshold: i32,
    /// Two kept gaps may share at most this many cells per axis.
    pub max_overlap: i32,
    /// Reported gaps are subdivided until no span exceeds this.
    pub max_span: i32,
    pub domain: ScanDomain,
}

impl Default for GapSettings {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            max_overlap: DEFAULT_MAX_OVERLAP,
            max_span: DEFAULT_MAX_SPAN,
            domain: ScanDomain::default(),
        }
    }
}

impl GapSettings {
    /// Default settings with a custom gap threshold.
    ///
    /// A threshold larger than the domain extent is valid and yields no
    /// gaps; a threshold below 1 is rejected.
    pub fn with_threshold(gap_threshold: i32) -> Result<Self> {
        if gap_threshold < 1 {
            return Err(BagError::InvalidThreshold(gap_threshold));
        }
        Ok(Self {
            gap_threshold,
            ..Self::default()
        })
    }
}
