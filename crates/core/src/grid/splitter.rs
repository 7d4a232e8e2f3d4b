//! Subdivision of oversized gaps.

use smallvec::{SmallVec, smallvec};

use super::types::Gap;

/// Bound a gap to at most `max_span` cells per axis.
///
/// A gap over the limit on both axes splits into four quadrants at the
/// per-axis midpoints; a gap over on one axis bisects there. Sub-gaps
/// still over the limit split again, so the bound holds even for the
/// near-empty grid where the resolver emits the whole scan domain as one
/// rectangle. Anything the resolver produces from a moderately occupied
/// grid is done in a single level.
pub(crate) fn split_oversized(gap: Gap, max_span: i32) -> SmallVec<[Gap; 4]> {
    let wide = gap.speed_span() > max_span;
    let tall = gap.stability_span() > max_span;

    let parts: SmallVec<[Gap; 4]> = if wide && tall {
        // Floor division, not truncation: stability sums can be negative.
        let speed_mid = (gap.speed_start + gap.speed_end).div_euclid(2);
        let stability_mid = (gap.stability_start + gap.stability_end).div_euclid(2);
        smallvec![
            Gap {
                speed_end: speed_mid,
                stability_end: stability_mid,
                ..gap
            },
            Gap {
                speed_start: speed_mid + 1,
                stability_end: stability_mid,
                ..gap
            },
            Gap {
                speed_end: speed_mid,
                stability_start: stability_mid + 1,
                ..gap
            },
            Gap {
                speed_start: speed_mid + 1,
                stability_start: stability_mid + 1,
                ..gap
            },
        ]
    } else if wide {
        let mid = (gap.speed_start + gap.speed_end).div_euclid(2);
        smallvec![
            Gap {
                speed_end: mid,
                ..gap
            },
            Gap {
                speed_start: mid + 1,
                ..gap
            },
        ]
    } else if tall {
        let mid = (gap.stability_start + gap.stability_end).div_euclid(2);
        smallvec![
            Gap {
                stability_end: mid,
                ..gap
            },
            Gap {
                stability_start: mid + 1,
                ..gap
            },
        ]
    } else {
        return smallvec![gap];
    };

    parts
        .into_iter()
        .flat_map(|part| split_oversized(part, max_span))
        .collect()
}
