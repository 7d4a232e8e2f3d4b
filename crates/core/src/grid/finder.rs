//! Gap pipeline orchestration.

use tracing::debug;

use super::occupancy::occupied_cells;
use super::resolver::resolve_overlaps;
use super::scanner::scan_gaps;
use super::splitter::split_oversized;
use super::types::{Gap, GapSettings};
use crate::model::{Disc, FlightNumbers};

/// Find the coverage gaps in a bag.
///
/// Effective flight numbers are read once per disc; stored discs are
/// never mutated. Pure and deterministic: the same bag and settings
/// always produce the same gap list, order included.
pub fn find_gaps(discs: &[Disc], settings: &GapSettings) -> Vec<Gap> {
    find_gaps_from_flights(discs.iter().map(Disc::effective_flight), settings)
}

/// Find the coverage gaps for pre-extracted flight numbers.
pub fn find_gaps_from_flights<I>(flights: I, settings: &GapSettings) -> Vec<Gap>
where
    I: IntoIterator<Item = FlightNumbers>,
{
    let occupied = occupied_cells(flights);
    let candidates = scan_gaps(&occupied, settings);
    debug!(
        occupied = occupied.len(),
        candidates = candidates.len(),
        "scanned grid"
    );

    let resolved = resolve_overlaps(candidates, settings.max_overlap);
    debug!(resolved = resolved.len(), "resolved overlaps");

    resolved
        .into_iter()
        .flat_map(|gap| split_oversized(gap, settings.max_span))
        .collect()
}
