//! Distance-windowed gradient smoothing.
//!
//! The window is measured in metres, not in points: GPS sampling density is
//! uneven, so a point-count window would smooth different amounts of road in
//! different parts of the trace.

use crate::model::TrackPoint;

/// Replaces each point's gradient with the average slope over a symmetric
/// distance window centred on it. Sequence length and ordering are
/// preserved; only the gradient field changes.
///
/// For each point the window runs from the earliest point at or after
/// `distance - window/2` to the latest point at or before
/// `distance + window/2`. If the window collapses to a zero distance span
/// the original gradient is kept - that is the expected behaviour at trace
/// boundaries and for a zero-width window, not an error.
///
/// Smoothing is lossy; re-applying the same window to already-smoothed data
/// is only a no-op up to floating rounding.
pub fn smooth_gradients(points: &[TrackPoint], window_metres: f64) -> Vec<TrackPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let half_window = window_metres / 2.0;
    let mut out = Vec::with_capacity(points.len());

    // Both window edges only ever move forward because distances are
    // non-decreasing, so the whole pass is linear.
    let mut start_idx = 0;
    let mut end_idx = 0;

    for point in points {
        let lo = point.distance - half_window;
        let hi = point.distance + half_window;

        while points[start_idx].distance < lo {
            start_idx += 1;
        }
        while end_idx + 1 < points.len() && points[end_idx + 1].distance <= hi {
            end_idx += 1;
        }

        let span = points[end_idx].distance - points[start_idx].distance;
        let gradient = if span > 0.0 {
            (points[end_idx].elevation - points[start_idx].elevation) / span * 100.0
        } else {
            point.gradient
        };

        out.push(TrackPoint { gradient, ..*point });
    }

    assert_eq!(out.len(), points.len());
    out
}
