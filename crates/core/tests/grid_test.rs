//! End-to-end tests for the gap pipeline.

use discgap_core::{Disc, FlightNumbers, Gap, GapSettings, GridCell, find_gaps, grid::grid_cell};

fn disc(name: &str, speed: f64, turn: f64, fade: f64) -> Disc {
    Disc {
        name: name.to_string(),
        brand: "Test Brand".to_string(),
        plastic: None,
        weight: None,
        color_hex: None,
        notes: None,
        stock_flight: FlightNumbers::new(speed, 5.0, turn, fade),
        adjusted_flight: None,
    }
}

fn occupied_cells_of(discs: &[Disc]) -> Vec<GridCell> {
    discs
        .iter()
        .map(|d| grid_cell(&d.effective_flight()))
        .collect()
}

/// A mid-sized bag with the usual slots filled.
fn sample_bag() -> Vec<Disc> {
    vec![
        disc("Destroyer", 12.0, -1.0, 3.0),
        disc("Wraith", 11.0, -1.0, 3.0),
        disc("Hex", 9.0, -1.0, 1.0),
        disc("Buzzz", 5.0, -1.0, 1.0),
        disc("Zone", 4.0, 0.0, 3.0),
        disc("Envy", 3.0, 0.0, 2.0),
        disc("Aviar", 2.0, 0.0, 1.0),
    ]
}

#[test]
fn empty_bag_reports_bounded_gaps() {
    let gaps = find_gaps(&[], &GapSettings::default());

    assert!(!gaps.is_empty());
    // The whole scan domain is one unoccupied region; it must come back
    // subdivided, never as a single 13x10 rectangle.
    let total_area: i32 = gaps.iter().map(Gap::area).sum();
    assert_eq!(total_area, 13 * 10);
    for gap in &gaps {
        assert!(gap.speed_span() <= 4, "{gap:?}");
        assert!(gap.stability_span() <= 4, "{gap:?}");
    }
}

#[test]
fn single_disc_cell_is_never_covered() {
    // Speed 7, turn -1, fade 1: occupies exactly cell (7, 0).
    let bag = vec![disc("Mid", 7.0, -1.0, 1.0)];
    let gaps = find_gaps(&bag, &GapSettings::default());

    assert!(!gaps.is_empty());
    for gap in &gaps {
        assert!(!gap.contains((7, 0)), "{gap:?} covers the occupied cell");
    }
}

#[test]
fn saturated_grid_yields_no_gaps() {
    // One disc per cell of the scan domain.
    let mut bag = Vec::new();
    for speed in 1..=13 {
        for stability in -5..=4 {
            let fade = f64::from(stability).max(0.0);
            let turn = f64::from(stability) - fade;
            bag.push(disc("Filler", f64::from(speed), turn, fade));
        }
    }

    let gaps = find_gaps(&bag, &GapSettings::default());
    assert!(gaps.is_empty());
}

#[test]
fn two_distant_discs_leave_a_clear_gap() {
    let bag = vec![disc("Putter", 3.0, -5.0, 2.0), disc("Driver", 11.0, -1.0, 4.0)];
    let cells = occupied_cells_of(&bag);
    assert_eq!(cells, vec![(3, -3), (11, 3)]);

    let gaps = find_gaps(&bag, &GapSettings::default());
    assert!(!gaps.is_empty());
    for gap in &gaps {
        assert!(gap.speed_span() <= 4 && gap.stability_span() <= 4);
    }

    // At least one gap sits clear of both occupied cells, not even
    // adjacent to them.
    let clear = gaps.iter().any(|gap| {
        cells.iter().all(|&(speed, stability)| {
            speed < gap.speed_start - 1
                || speed > gap.speed_end + 1
                || stability < gap.stability_start - 1
                || stability > gap.stability_end + 1
        })
    });
    assert!(clear);
}

#[test]
fn oversized_threshold_yields_no_gaps() {
    let settings = GapSettings::with_threshold(999).unwrap();
    let gaps = find_gaps(&[], &settings);
    assert!(gaps.is_empty());
}

#[test]
fn threshold_below_one_is_rejected() {
    assert!(GapSettings::with_threshold(0).is_err());
    assert!(GapSettings::with_threshold(-3).is_err());
    assert!(GapSettings::with_threshold(1).is_ok());
}

#[test]
fn gaps_are_disjoint_from_occupancy() {
    let bag = sample_bag();
    let cells = occupied_cells_of(&bag);
    let gaps = find_gaps(&bag, &GapSettings::default());

    assert!(!gaps.is_empty());
    for gap in &gaps {
        for &cell in &cells {
            assert!(!gap.contains(cell), "{gap:?} covers occupied {cell:?}");
        }
    }
}

#[test]
fn gap_bounds_are_ordered() {
    for bag in [Vec::new(), sample_bag()] {
        for gap in find_gaps(&bag, &GapSettings::default()) {
            assert!(gap.speed_start <= gap.speed_end);
            assert!(gap.stability_start <= gap.stability_end);
        }
    }
}

#[test]
fn no_pair_crowds_on_both_axes() {
    let overlap = |a_start: i32, a_end: i32, b_start: i32, b_end: i32| {
        a_end.min(b_end) - a_start.max(b_start) + 1
    };

    for bag in [Vec::new(), sample_bag()] {
        let gaps = find_gaps(&bag, &GapSettings::default());
        for (i, a) in gaps.iter().enumerate() {
            for b in &gaps[i + 1..] {
                let speed = overlap(a.speed_start, a.speed_end, b.speed_start, b.speed_end);
                let stability = overlap(
                    a.stability_start,
                    a.stability_end,
                    b.stability_start,
                    b.stability_end,
                );
                assert!(
                    !(speed > 1 && stability > 1),
                    "{a:?} and {b:?} overlap {speed}x{stability}"
                );
            }
        }
    }
}

#[test]
fn pipeline_is_deterministic() {
    let bag = sample_bag();
    let settings = GapSettings::default();

    let first = find_gaps(&bag, &settings);
    let second = find_gaps(&bag, &settings);
    assert_eq!(first, second);
}

#[test]
fn adjusted_flight_drives_occupancy() {
    // Stock says cell (12, 2); adjusted says the disc actually flies
    // like (9, 0). Gaps must be computed against the adjusted cell.
    let mut beat_in = disc("Beat-in Driver", 12.0, -1.0, 3.0);
    beat_in.adjusted_flight = Some(FlightNumbers::new(9.0, 5.0, -2.0, 2.0));

    let gaps = find_gaps(&[beat_in], &GapSettings::default());
    assert!(gaps.iter().any(|g| g.contains((12, 2))));
    for gap in &gaps {
        assert!(!gap.contains((9, 0)));
    }
}
