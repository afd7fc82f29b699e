//! End-to-end runs of the whole pipeline over synthetic traces:
//! ingestion -> detection -> smoothing -> stats -> alignment.

use veloclimb_core::{
    align_climb, detect_climb, filter_by_view_range, ingest_trace, smooth_gradients, Category,
    Climb, ClimbDetectionParameters, TraceSample,
};

/// Degrees of latitude per metre of northing on the spherical model.
const DEG_PER_METRE: f64 = 1.0 / 111_194.93;

/// A trace heading due north at 10 m spacing, with elevations supplied by
/// the caller.
fn northbound_trace(elevations: impl IntoIterator<Item = f64>) -> Vec<TraceSample> {
    elevations
        .into_iter()
        .enumerate()
        .map(|(i, elevation)| TraceSample {
            latitude: 45.0 + i as f64 * 10.0 * DEG_PER_METRE,
            longitude: 6.0,
            elevation,
        })
        .collect()
}

#[test]
fn linear_ten_km_climb_end_to_end() {
    // 1,000 points at 10 m spacing, rising linearly 500 -> 1,500 m.
    let samples = northbound_trace((0..1000).map(|i| 500.0 + i as f64 * 1000.0 / 999.0));

    let points = ingest_trace(&samples).unwrap();
    assert_eq!(points[0].distance, 0.0);

    // The whole trace is one ascent, so detection keeps everything.
    let detected = detect_climb(&points, &ClimbDetectionParameters::default());
    assert_eq!(detected.len(), points.len());

    let smoothed = smooth_gradients(&detected, 100.0);
    let climb = Climb::new("test-1", "Synthetic col", smoothed);

    let stats = &climb.stats;
    assert!((stats.total_distance_m - 10_000.0).abs() < 20.0);
    assert_eq!(stats.elevation_gain_m, 1000.0);
    assert!((stats.avg_gradient - 10.0).abs() < 0.1);
    assert!((stats.max_gradient - 10.0).abs() < 0.2);
    assert_eq!(stats.peak_elevation_m, 1500.0);
    assert_eq!(stats.start_elevation_m, 500.0);
    assert_eq!(stats.category, Category::One);

    let aligned = align_climb(&climb.points);
    assert_eq!(aligned.last().unwrap().distance_from_peak_km, 0.0);
    assert!((aligned[0].distance_from_peak_km + stats.total_distance_m / 1000.0).abs() < 0.05);

    let windowed = filter_by_view_range(&aligned, Some(5.0));
    assert!(windowed.iter().all(|p| p.distance_from_peak_km >= -5.0));
    assert!(windowed.len() < aligned.len());
}

#[test]
fn descent_after_the_summit_is_discarded() {
    // A flat run-in (no dip, so it stays inside the segment), a 599 m climb,
    // then a long descent that must not survive detection.
    let flat = (0..200).map(|_| 400.0);
    let ascent = (0..600).map(|i| 400.0 + i as f64);
    let descent = (1..300).map(|i| 999.0 - i as f64);
    let samples = northbound_trace(flat.chain(ascent).chain(descent));

    let points = ingest_trace(&samples).unwrap();
    let detected = detect_climb(&points, &ClimbDetectionParameters::default());

    // Everything up to and including the summit survives, re-based to
    // distance 0; the descent is gone.
    assert_eq!(detected.len(), 800);
    assert_eq!(detected[0].distance, 0.0);
    assert_eq!(detected.last().unwrap().elevation, 999.0);
    assert!(detected.len() < points.len());

    let climb = Climb::new("test-2", "With run-in", smooth_gradients(&detected, 100.0));
    assert_eq!(climb.stats.elevation_gain_m, 599.0);
    assert_eq!(climb.stats.category, Category::Two);
    assert!((climb.stats.total_distance_m - 7_990.0).abs() < 20.0);
}

#[test]
fn comparing_two_climbs_is_order_independent() {
    let long = northbound_trace((0..800).map(|i| 300.0 + i as f64 * 0.8));
    let short = northbound_trace((0..300).map(|i| 300.0 + i as f64 * 1.2));

    let analyse = |id: &str, samples: &[TraceSample]| {
        let points = ingest_trace(samples).unwrap();
        let detected = detect_climb(&points, &ClimbDetectionParameters::default());
        Climb::new(id, id, smooth_gradients(&detected, 100.0))
    };

    let a = analyse("long", &long);
    let b = analyse("short", &short);

    // Climbs share no state; analysing one never perturbs the other.
    let a_again = analyse("long", &long);
    assert_eq!(a.stats, a_again.stats);
    assert!(a.stats.elevation_gain_m > b.stats.elevation_gain_m);
}
