//! Aggregate metrics and the category cascade.

use crate::model::{Category, ClimbStats, TrackPoint};

/// Window length for the "worst sustained pitch" metric, in metres. Fixed
/// policy, not a tunable parameter.
pub const MAX_GRADIENT_WINDOW_M: f64 = 500.0;

/// Computes the aggregate metrics for a point sequence. Sequences with
/// fewer than two points get the canonical zero result and stay
/// uncategorised.
///
/// The category and difficulty index are decided on full-precision
/// intermediates; the rounding policy described on [`ClimbStats`] is applied
/// only when the struct is built.
pub fn calculate_stats(points: &[TrackPoint]) -> ClimbStats {
    if points.len() < 2 {
        return ClimbStats::zero();
    }

    let total_distance = points[points.len() - 1].distance - points[0].distance;

    // Positive deltas only: descending stretches contribute nothing,
    // never a negative amount.
    let mut elevation_gain = 0.0;
    for pair in points.windows(2) {
        let delta = pair[1].elevation - pair[0].elevation;
        if delta > 0.0 {
            elevation_gain += delta;
        }
    }

    let avg_gradient = if total_distance > 0.0 {
        elevation_gain / total_distance * 100.0
    } else {
        0.0
    };

    let max_gradient = max_gradient_over_window(points, MAX_GRADIENT_WINDOW_M);

    let peak_elevation = points
        .iter()
        .map(|p| p.elevation)
        .fold(f64::NEG_INFINITY, f64::max);
    let start_elevation = points[0].elevation;

    let distance_km = total_distance / 1000.0;
    let difficulty_index = distance_km * avg_gradient * avg_gradient / 10.0;
    let category = categorize(elevation_gain, distance_km, avg_gradient);

    ClimbStats {
        total_distance_m: total_distance.round(),
        elevation_gain_m: elevation_gain.round(),
        avg_gradient: round_1dp(avg_gradient),
        max_gradient: round_1dp(max_gradient),
        peak_elevation_m: peak_elevation.round(),
        start_elevation_m: start_elevation.round(),
        difficulty_index: difficulty_index.round(),
        category,
    }
}

/// Worst sustained pitch: for each point, the gradient to the first later
/// point at least `window_metres` further along. Points with no such
/// successor (the tail of the climb) contribute nothing. Quadratic in the
/// worst case, but the lookahead is short for real sampling densities.
fn max_gradient_over_window(points: &[TrackPoint], window_metres: f64) -> f64 {
    let mut max_gradient = 0.0_f64;

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            let run = points[j].distance - points[i].distance;
            if run >= window_metres {
                if run > 0.0 {
                    let gradient = (points[j].elevation - points[i].elevation) / run * 100.0;
                    max_gradient = max_gradient.max(gradient);
                }
                break;
            }
        }
    }

    max_gradient
}

/// The fixed classification cascade, evaluated top to bottom, first match
/// wins. The thresholds are policy constants carried for behaviour
/// compatibility rather than re-derived.
fn categorize(elevation_gain: f64, distance_km: f64, avg_gradient: f64) -> Category {
    let score = elevation_gain * avg_gradient;

    if score > 80_000.0 || (elevation_gain > 1500.0 && avg_gradient > 6.0) {
        Category::Hc
    } else if score > 50_000.0 || (elevation_gain > 800.0 && avg_gradient > 5.0) {
        Category::One
    } else if score > 25_000.0 || (elevation_gain > 500.0 && avg_gradient > 5.0) {
        Category::Two
    } else if score > 15_000.0 || (elevation_gain > 300.0 && avg_gradient > 4.0) {
        Category::Three
    } else if score > 8_000.0 || (elevation_gain > 150.0 && distance_km > 1.0) {
        Category::Four
    } else {
        Category::Uncategorized
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
