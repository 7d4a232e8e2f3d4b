//! Catalog suggestions for filling a gap.

use ordered_float::OrderedFloat;

use crate::grid::Gap;
use crate::model::CatalogDisc;

pub(crate) const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// Brands surfaced first when distance ties, in rank order.
const PREFERRED_BRANDS: &[&str] = &[
    "mvp",
    "axiom discs",
    "mint discs",
    "kastaplast",
    "innova",
    "thought space athletics",
    "latitude 64",
    "discraft",
    "westside discs",
];

/// Inclusive flight-number ranges a suggested disc must fall in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuggestCriteria {
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_stability: f64,
    pub max_stability: f64,
    pub limit: usize,
}

impl Default for SuggestCriteria {
    fn default() -> Self {
        // The full display domain.
        Self {
            min_speed: 1.0,
            max_speed: 14.0,
            min_stability: -5.0,
            max_stability: 4.0,
            limit: DEFAULT_SUGGEST_LIMIT,
        }
    }
}

impl SuggestCriteria {
    /// Criteria covering exactly a gap's cell range: the gap bounds are
    /// used verbatim as the inclusive filter.
    pub fn from_gap(gap: &Gap) -> Self {
        Self {
            min_speed: gap.speed_start as f64,
            max_speed: gap.speed_end as f64,
            min_stability: gap.stability_start as f64,
            max_stability: gap.stability_end as f64,
            limit: DEFAULT_SUGGEST_LIMIT,
        }
    }

    /// Override the suggestion limit. Zero falls back to the default.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = if limit == 0 {
            DEFAULT_SUGGEST_LIMIT
        } else {
            limit
        };
        self
    }
}

fn brand_rank(brand: &str) -> usize {
    let lowered = brand.to_lowercase();
    PREFERRED_BRANDS
        .iter()
        .position(|b| *b == lowered)
        .unwrap_or(PREFERRED_BRANDS.len())
}

/// Rank catalog discs that fall inside the criteria ranges.
///
/// Unrounded speed and stability are compared against the inclusive
/// bounds. Matches are ordered by Euclidean distance from the center of
/// the criteria box, preferred brands breaking ties, and truncated to
/// `limit`. The sort is stable, so catalog order breaks remaining ties.
pub fn suggest<'a>(catalog: &'a [CatalogDisc], criteria: &SuggestCriteria) -> Vec<&'a CatalogDisc> {
    let mid_speed = (criteria.min_speed + criteria.max_speed) / 2.0;
    let mid_stability = (criteria.min_stability + criteria.max_stability) / 2.0;

    let mut matches: Vec<&CatalogDisc> = catalog
        .iter()
        .filter(|disc| {
            disc.speed >= criteria.min_speed
                && disc.speed <= criteria.max_speed
                && disc.stability() >= criteria.min_stability
                && disc.stability() <= criteria.max_stability
        })
        .collect();

    matches.sort_by_key(|disc| {
        let distance =
            ((disc.speed - mid_speed).powi(2) + (disc.stability() - mid_stability).powi(2)).sqrt();
        (OrderedFloat(distance), brand_rank(&disc.brand))
    });
    matches.truncate(criteria.limit);

    matches
}
