//! Peak alignment.
//!
//! Re-expresses a climb's distance axis with the summit at the origin, so
//! that climbs of different lengths can be overlaid and compared "into the
//! finish". Distances before the summit are negative kilometres.

use crate::model::{AlignedPoint, TrackPoint};

/// Produces the comparison-ready view of a climb: the uphill portion only,
/// with each point's distance re-expressed as kilometres from the summit
/// (<= 0, exactly 0 at the summit).
///
/// The summit is the first occurrence of the maximum elevation, consistent
/// with the detector's tie-break. Any points after it exist only in the
/// stored climb; they are dropped from this view.
pub fn align_climb(points: &[TrackPoint]) -> Vec<AlignedPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut peak_idx = 0;
    for (i, point) in points.iter().enumerate().skip(1) {
        if point.elevation > points[peak_idx].elevation {
            peak_idx = i;
        }
    }
    let peak_distance = points[peak_idx].distance;

    points[..=peak_idx]
        .iter()
        .map(|p| AlignedPoint {
            distance_from_peak_km: (p.distance - peak_distance) / 1000.0,
            elevation: p.elevation,
            gradient: p.gradient,
            latitude: p.latitude,
            longitude: p.longitude,
        })
        .collect()
}

/// Keeps only the trailing `view_range_km` kilometres before the summit.
/// `None` means unbounded - all points are returned.
pub fn filter_by_view_range(
    points: &[AlignedPoint],
    view_range_km: Option<f64>,
) -> Vec<AlignedPoint> {
    match view_range_km {
        Some(range) => points
            .iter()
            .copied()
            .filter(|p| p.distance_from_peak_km >= -range)
            .collect(),
        None => points.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(distance: f64, elevation: f64) -> TrackPoint {
        TrackPoint {
            latitude: 45.0,
            longitude: 6.0,
            elevation,
            distance,
            gradient: 0.0,
        }
    }

    #[test]
    fn summit_point_lands_exactly_at_zero() {
        let points: Vec<TrackPoint> = (0..=100)
            .map(|i| point(i as f64 * 100.0, 500.0 + i as f64 * 5.0))
            .collect();
        let aligned = align_climb(&points);

        assert_eq!(aligned.len(), points.len());
        assert_eq!(aligned.last().unwrap().distance_from_peak_km, 0.0);
        assert!((aligned[0].distance_from_peak_km - -10.0).abs() < 1e-9);
        assert!(aligned.iter().all(|p| p.distance_from_peak_km <= 0.0));
    }

    #[test]
    fn points_after_the_summit_are_dropped_from_the_view() {
        let mut points: Vec<TrackPoint> = (0..=50)
            .map(|i| point(i as f64 * 100.0, 500.0 + i as f64 * 5.0))
            .collect();
        // A bit of descent after the top, as stored climbs can have.
        points.push(point(5100.0, 748.0));
        points.push(point(5200.0, 744.0));

        let aligned = align_climb(&points);

        assert_eq!(aligned.len(), 51);
        assert_eq!(aligned.last().unwrap().elevation, 750.0);
    }

    #[test]
    fn first_occurrence_of_the_maximum_is_the_summit() {
        let points = vec![
            point(0.0, 500.0),
            point(100.0, 600.0),
            point(200.0, 590.0),
            point(300.0, 600.0),
        ];
        let aligned = align_climb(&points);

        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned.last().unwrap().distance_from_peak_km, 0.0);
    }

    #[test]
    fn empty_input_gives_an_empty_view() {
        assert!(align_climb(&[]).is_empty());
    }

    #[test]
    fn view_range_keeps_the_final_kilometres() {
        let points: Vec<TrackPoint> = (0..=100)
            .map(|i| point(i as f64 * 100.0, 500.0 + i as f64 * 5.0))
            .collect();
        let aligned = align_climb(&points);

        let windowed = filter_by_view_range(&aligned, Some(5.0));
        assert!(windowed.len() < aligned.len());
        assert!(windowed.iter().all(|p| p.distance_from_peak_km >= -5.0));
        assert_eq!(windowed.last().unwrap().distance_from_peak_km, 0.0);

        let unbounded = filter_by_view_range(&aligned, None);
        assert_eq!(unbounded.len(), aligned.len());
    }
}
