//! Overlap resolution between candidate gaps.

use std::cmp::Reverse;

use super::types::Gap;

/// Overlap between two inclusive integer ranges, in cells. Zero or
/// negative means the ranges are disjoint on that axis.
fn axis_overlap(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> i32 {
    a_end.min(b_end) - a_start.max(b_start) + 1
}

/// Reduce the candidate list so that no two kept gaps overlap by more
/// than `max_overlap` cells on both axes at once.
///
/// Largest area wins: candidates are walked in area-descending order (the
/// sort is stable, so equal areas keep scan order) and a candidate is
/// kept only if it does not crowd a gap already kept. Greedy, not a
/// maximum independent set.
pub(crate) fn resolve_overlaps(mut candidates: Vec<Gap>, max_overlap: i32) -> Vec<Gap> {
    candidates.sort_by_key(|gap| Reverse(gap.area()));

    let mut kept: Vec<Gap> = Vec::new();
    for gap in candidates {
        let crowds = kept.iter().any(|sel| {
            axis_overlap(gap.speed_start, gap.speed_end, sel.speed_start, sel.speed_end)
                > max_overlap
                && axis_overlap(
                    gap.stability_start,
                    gap.stability_end,
                    sel.stability_start,
                    sel.stability_end,
                ) > max_overlap
        });
        if !crowds {
            kept.push(gap);
        }
    }

    kept
}
