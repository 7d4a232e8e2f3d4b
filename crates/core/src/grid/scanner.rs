//! Rectangular gap scan over the unoccupied grid.

use itertools::iproduct;
use rustc_hash::FxHashSet;

use super::types::{Gap, GapSettings, GridCell};

/// Find every rectangle of unoccupied cells whose top-left corner is
/// unoccupied and whose spans both meet the threshold.
///
/// Corners are visited in row-major order (speed outer, stability inner).
/// From each corner the rectangle grows greedily: along the corner's
/// stability row until an occupied cell stops the speed edge, then row by
/// row, clamping the stability edge just short of any occupied cell a
/// later row runs into. The growth can miss a larger rectangle under some
/// occupancy patterns; the selection downstream depends on exactly this
/// shape, so it stays.
///
/// Every qualifying corner emits its own rectangle, so the candidate list
/// overlaps heavily by construction.
pub(crate) fn scan_gaps(occupied: &FxHashSet<GridCell>, settings: &GapSettings) -> Vec<Gap> {
    let d = settings.domain;
    let mut gaps = Vec::new();

    for (speed_start, stability_start) in iproduct!(
        d.speed_min..=d.speed_max,
        d.stability_min..=d.stability_max
    ) {
        if occupied.contains(&(speed_start, stability_start)) {
            continue;
        }

        let mut speed_end = d.speed_max;
        let mut stability_end = d.stability_max;

        // The bounds shrink while iterating, so while loops rather than
        // ranges.
        let mut speed = speed_start;
        while speed <= speed_end {
            let mut stability = stability_start;
            while stability <= stability_end {
                if occupied.contains(&(speed, stability)) {
                    if stability == stability_start {
                        // Blocked on the corner row: the speed edge stops
                        // just short of this column.
                        speed_end = speed - 1;
                    } else {
                        stability_end = stability - 1;
                    }
                    break;
                }
                stability += 1;
            }
            speed += 1;
        }

        let gap = Gap::new(speed_start, speed_end, stability_start, stability_end);
        if gap.speed_span() >= settings.gap_threshold
            && gap.stability_span() >= settings.gap_threshold
        {
            gaps.push(gap);
        }
    }

    gaps
}
