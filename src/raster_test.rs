use std::collections::BTreeSet;

use super::*;
use crate::consts::{BRESENHAM_CIRCLE_COLOR, BRESENHAM_LINE_COLOR, DDA_COLOR, STEP_COLOR};

fn cells(set: &PixelSet) -> BTreeSet<(i64, i64)> {
    set.iter().map(|p| (p.x, p.y)).collect()
}

fn expect(points: &[(i64, i64)]) -> BTreeSet<(i64, i64)> {
    points.iter().copied().collect()
}

/// Deterministic pseudo-random coordinate in [-20, 20].
fn next_coord(seed: &mut u64) -> i64 {
    *seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
    ((*seed >> 33) % 41) as i64 - 20
}

// =============================================================
// Algorithm enum
// =============================================================

#[test]
fn default_algorithm_is_step() {
    assert_eq!(Algorithm::default(), Algorithm::Step);
}

#[test]
fn codes_roundtrip() {
    for alg in [
        Algorithm::Step,
        Algorithm::Dda,
        Algorithm::BresenhamLine,
        Algorithm::BresenhamCircle,
    ] {
        assert_eq!(Algorithm::from_code(alg.code()), Some(alg));
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(Algorithm::from_code("wu_line"), None);
    assert_eq!(Algorithm::from_code(""), None);
}

#[test]
fn serde_codes_match_selector_values() {
    let cases = [
        (Algorithm::Step, "\"step\""),
        (Algorithm::Dda, "\"dda\""),
        (Algorithm::BresenhamLine, "\"bresenham_line\""),
        (Algorithm::BresenhamCircle, "\"bresenham_circle\""),
    ];
    for (alg, json) in cases {
        assert_eq!(serde_json::to_string(&alg).unwrap(), json);
        let back: Algorithm = serde_json::from_str(json).unwrap();
        assert_eq!(back, alg);
    }
}

#[test]
fn colors_are_distinct() {
    let colors: BTreeSet<&str> = [
        Algorithm::Step.color(),
        Algorithm::Dda.color(),
        Algorithm::BresenhamLine.color(),
        Algorithm::BresenhamCircle.color(),
    ]
    .into();
    assert_eq!(colors.len(), 4);
}

#[test]
fn labels_are_distinct() {
    let labels: BTreeSet<&str> = [
        Algorithm::Step.label(),
        Algorithm::Dda.label(),
        Algorithm::BresenhamLine.label(),
        Algorithm::BresenhamCircle.label(),
    ]
    .into();
    assert_eq!(labels.len(), 4);
}

#[test]
fn only_the_circle_algorithm_uses_circle_inputs() {
    assert_eq!(Algorithm::Step.input_mode(), crate::input::InputMode::Line);
    assert_eq!(Algorithm::Dda.input_mode(), crate::input::InputMode::Line);
    assert_eq!(Algorithm::BresenhamLine.input_mode(), crate::input::InputMode::Line);
    assert_eq!(Algorithm::BresenhamCircle.input_mode(), crate::input::InputMode::Circle);
}

// =============================================================
// step_line
// =============================================================

#[test]
fn step_degenerate_point() {
    let set = step_line(7, -3, 7, -3);
    assert_eq!(cells(&set), expect(&[(7, -3)]));
}

#[test]
fn step_horizontal() {
    let set = step_line(0, 0, 5, 0);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
}

#[test]
fn step_vertical() {
    let set = step_line(2, -1, 2, 3);
    assert_eq!(cells(&set), expect(&[(2, -1), (2, 0), (2, 1), (2, 2), (2, 3)]));
}

#[test]
fn step_diagonal() {
    let set = step_line(0, 0, 3, 3);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
}

#[test]
fn step_gentle_slope() {
    // k = 0.5: halves at odd x round away from zero.
    let set = step_line(0, 0, 4, 2);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]));
}

#[test]
fn step_negative_tie_rounds_away_from_zero() {
    let set = step_line(0, 0, 2, -1);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, -1), (2, -1)]));
}

#[test]
fn step_steep_slope_iterates_y() {
    let set = step_line(0, 0, 2, 4);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]));
}

#[test]
fn step_reversed_endpoints_match_forward() {
    assert_eq!(cells(&step_line(4, 2, 0, 0)), cells(&step_line(0, 0, 4, 2)));
    assert_eq!(cells(&step_line(2, 4, 0, 0)), cells(&step_line(0, 0, 2, 4)));
}

#[test]
fn step_color_tag() {
    assert_eq!(step_line(0, 0, 1, 1).color(), STEP_COLOR);
}

// =============================================================
// dda_line
// =============================================================

#[test]
fn dda_degenerate_point() {
    let set = dda_line(-4, 9, -4, 9);
    assert_eq!(cells(&set), expect(&[(-4, 9)]));
}

#[test]
fn dda_diagonal() {
    let set = dda_line(0, 0, 4, 4);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
}

#[test]
fn dda_horizontal() {
    let set = dda_line(-2, 1, 2, 1);
    assert_eq!(cells(&set), expect(&[(-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1)]));
}

#[test]
fn dda_tie_rounds_away_from_zero() {
    let set = dda_line(0, 0, 2, 1);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (2, 1)]));
}

#[test]
fn dda_emits_both_endpoints() {
    let set = dda_line(-3, 7, 9, -2);
    assert!(set.contains(GridPoint::new(-3, 7)));
    assert!(set.contains(GridPoint::new(9, -2)));
    assert!(set.len() <= 13); // max(|dx|, |dy|) + 1 emissions
}

#[test]
fn dda_reversed_endpoints_match_forward() {
    assert_eq!(cells(&dda_line(4, 4, 0, 0)), cells(&dda_line(0, 0, 4, 4)));
}

#[test]
fn dda_color_tag() {
    assert_eq!(dda_line(0, 0, 1, 1).color(), DDA_COLOR);
}

// =============================================================
// bresenham_line
// =============================================================

#[test]
fn bresenham_degenerate_point() {
    let set = bresenham_line(5, 5, 5, 5);
    assert_eq!(cells(&set), expect(&[(5, 5)]));
}

#[test]
fn bresenham_horizontal_span() {
    let set = bresenham_line(0, 0, 5, 0);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]));
}

#[test]
fn bresenham_perfect_diagonal() {
    // Both error branches fire on every step.
    let set = bresenham_line(0, 0, 4, 4);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
}

#[test]
fn bresenham_shallow_line() {
    let set = bresenham_line(0, 0, 5, 2);
    assert_eq!(cells(&set), expect(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
}

#[test]
fn bresenham_vertical_down() {
    let set = bresenham_line(0, 0, 0, -4);
    assert_eq!(cells(&set), expect(&[(0, 0), (0, -1), (0, -2), (0, -3), (0, -4)]));
}

#[test]
fn bresenham_covers_all_octants() {
    for (x2, y2) in [(5, 2), (2, 5), (-2, 5), (-5, 2), (-5, -2), (-2, -5), (2, -5), (5, -2)] {
        let set = bresenham_line(0, 0, x2, y2);
        assert!(set.contains(GridPoint::new(0, 0)), "missing start for ({x2}, {y2})");
        assert!(set.contains(GridPoint::new(x2, y2)), "missing end for ({x2}, {y2})");
        let span = x2.abs().max(y2.abs()) as usize + 1;
        assert_eq!(set.len(), span, "wrong cell count for ({x2}, {y2})");
    }
}

#[test]
fn bresenham_is_endpoint_symmetric() {
    // Tie-free lines (odd reduced denominator): the walk picks the strictly
    // closest cell in either direction, so the sets must match. Lines that
    // pass exactly through a cell-boundary midpoint round toward the walk
    // direction instead and are excluded by construction.
    let pairs = [
        ((0, 0), (5, 2)),
        ((0, 0), (7, 3)),
        ((1, 2), (4, 9)),
        ((-3, -1), (4, -8)),
        ((0, 0), (0, 9)),
        ((0, 0), (4, 4)),
        ((2, 0), (-5, 0)),
    ];
    for ((x1, y1), (x2, y2)) in pairs {
        assert_eq!(
            cells(&bresenham_line(x1, y1, x2, y2)),
            cells(&bresenham_line(x2, y2, x1, y1)),
            "asymmetric for ({x1}, {y1}) -> ({x2}, {y2})"
        );
    }
}

#[test]
fn bresenham_trace_matches_pixels() {
    let (set, trace) = bresenham_line_traced(0, 0, 5, 2);
    assert_eq!(trace.len(), set.len());
    for entry in &trace {
        assert!(set.contains(GridPoint::new(entry.x, entry.y)));
    }
}

#[test]
fn bresenham_trace_starts_at_origin_with_initial_error() {
    let (_, trace) = bresenham_line_traced(0, 0, 5, 0);
    assert_eq!(trace[0], TraceStep { step: 0, x: 0, y: 0, err: 5 });
    assert_eq!(trace.len(), 6);
    assert_eq!((trace[5].x, trace[5].y), (5, 0));
}

#[test]
fn bresenham_trace_steps_count_up() {
    let (_, trace) = bresenham_line_traced(-2, -2, 3, 1);
    for (i, entry) in trace.iter().enumerate() {
        assert_eq!(entry.step, i);
    }
}

#[test]
fn bresenham_color_tag() {
    assert_eq!(bresenham_line(0, 0, 1, 1).color(), BRESENHAM_LINE_COLOR);
}

// =============================================================
// bresenham_circle
// =============================================================

#[test]
fn circle_zero_radius_is_the_center_cell() {
    let set = bresenham_circle(3, -1, 0);
    assert_eq!(cells(&set), expect(&[(3, -1)]));
}

#[test]
fn circle_radius_one_is_a_diamond() {
    let set = bresenham_circle(0, 0, 1);
    assert_eq!(cells(&set), expect(&[(0, 1), (0, -1), (1, 0), (-1, 0)]));
}

#[test]
fn circle_radius_two() {
    let set = bresenham_circle(0, 0, 2);
    assert_eq!(
        cells(&set),
        expect(&[
            (0, 2),
            (0, -2),
            (2, 0),
            (-2, 0),
            (1, 2),
            (-1, 2),
            (1, -2),
            (-1, -2),
            (2, 1),
            (-2, 1),
            (2, -1),
            (-2, -1),
        ])
    );
}

#[test]
fn circle_radius_five_cell_count() {
    assert_eq!(bresenham_circle(0, 0, 5).len(), 28);
}

#[test]
fn circle_radius_five_is_eightfold_symmetric() {
    let set = cells(&bresenham_circle(0, 0, 5));
    for &(x, y) in &set {
        for sym in [(x, -y), (-x, y), (-x, -y), (y, x), (y, -x), (-y, x), (-y, -x)] {
            assert!(set.contains(&sym), "({x}, {y}) present but {sym:?} missing");
        }
    }
}

#[test]
fn circle_radius_five_stays_in_the_radius_band() {
    for point in bresenham_circle(0, 0, 5).iter() {
        let dist = ((point.x * point.x + point.y * point.y) as f64).sqrt().round() as i64;
        assert!((4..=5).contains(&dist), "({}, {}) is off the circle", point.x, point.y);
    }
}

#[test]
fn circle_translates_with_its_center() {
    let at_origin = cells(&bresenham_circle(0, 0, 5));
    let moved = cells(&bresenham_circle(3, -2, 5));
    let translated: BTreeSet<(i64, i64)> =
        at_origin.iter().map(|&(x, y)| (x + 3, y - 2)).collect();
    assert_eq!(moved, translated);
}

#[test]
fn circle_color_tag() {
    assert_eq!(bresenham_circle(0, 0, 1).color(), BRESENHAM_CIRCLE_COLOR);
}

// =============================================================
// Cross-algorithm properties
// =============================================================

#[test]
fn all_line_algorithms_agree_on_the_degenerate_case() {
    for set in [step_line(7, -3, 7, -3), dda_line(7, -3, 7, -3), bresenham_line(7, -3, 7, -3)] {
        assert_eq!(cells(&set), expect(&[(7, -3)]));
    }
}

#[test]
fn random_sweep_holds_the_core_invariants() {
    let mut seed = 0x5eed_u64;
    for _ in 0..40 {
        let (x1, y1) = (next_coord(&mut seed), next_coord(&mut seed));
        let (x2, y2) = (next_coord(&mut seed), next_coord(&mut seed));

        for set in [
            step_line(x1, y1, x2, y2),
            dda_line(x1, y1, x2, y2),
            bresenham_line(x1, y1, x2, y2),
        ] {
            // Set semantics: the backing set cannot hold duplicates, and the
            // iterator agrees with it.
            assert_eq!(set.iter().count(), set.points().len());
            assert!(!set.is_empty());
            assert!(set.contains(GridPoint::new(x1, y1)));
            assert!(set.contains(GridPoint::new(x2, y2)));
        }

        let span = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;
        assert_eq!(bresenham_line(x1, y1, x2, y2).len(), span);
    }
}

#[test]
fn random_circles_are_symmetric_about_their_center() {
    let mut seed = 0xc1dc_u64;
    for _ in 0..20 {
        let (xc, yc) = (next_coord(&mut seed), next_coord(&mut seed));
        let r = next_coord(&mut seed).abs() % 16;
        let set = cells(&bresenham_circle(xc, yc, r));
        for &(x, y) in &set {
            let (dx, dy) = (x - xc, y - yc);
            for (sx, sy) in [(dx, -dy), (-dx, dy), (-dx, -dy), (dy, dx), (-dy, -dx)] {
                assert!(set.contains(&(xc + sx, yc + sy)));
            }
        }
    }
}
