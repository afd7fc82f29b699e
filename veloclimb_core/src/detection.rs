//! Finding "the climb" inside a full trace.
//!
//! A recorded ride usually contains approach roads, false flats and the
//! descent. The detector extracts the single contiguous sub-range with the
//! greatest net elevation gain, absorbing dips smaller than the tolerance so
//! that a short downhill ramp in the middle of a col does not split it in
//! two.

use log::debug;
use logging_timer::time;

use crate::model::TrackPoint;

/// Ascents with less net gain than this are noise, not climbs. Kept as a
/// policy constant for behaviour compatibility; it is deliberately not a
/// tunable parameter.
pub const SIGNIFICANCE_THRESHOLD_M: f64 = 50.0;

/// These are the parameters that control the climb-finding algorithm.
pub struct ClimbDetectionParameters {
    /// A drop from the running peak smaller than this (metres) is treated
    /// as noise within one continuous ascent, not a segment break.
    pub dip_tolerance_m: f64,
}

impl Default for ClimbDetectionParameters {
    fn default() -> Self {
        Self {
            dip_tolerance_m: 10.0,
        }
    }
}

/// A closed ascending segment found during the scan.
struct Candidate {
    start: usize,
    peak: usize,
    gain: f64,
}

/// Scans a full trace and returns the sub-sequence most plausibly
/// representing the climb, with distances re-based so the first returned
/// point is at 0. Gradients are untouched by re-basing.
///
/// The scan keeps a running maximum elevation and the minimum seen since
/// that maximum. When the drop below the running peak exceeds the dip
/// tolerance the current ascending segment is closed and recorded if its
/// gain beats [`SIGNIFICANCE_THRESHOLD_M`]; a new segment starts at the
/// current index. The candidate with the greatest gain wins; on an exact tie
/// the first one found wins, which keeps the result stable with input order.
///
/// If no segment reaches the significance threshold the full input trace is
/// returned unchanged - a flat ride is still meaningful to display, so this
/// degrades rather than failing.
#[time]
pub fn detect_climb(points: &[TrackPoint], params: &ClimbDetectionParameters) -> Vec<TrackPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut seg_start = 0;
    let mut peak_so_far = points[0].elevation;
    let mut trough_since_peak = points[0].elevation;

    for i in 1..points.len() {
        let elevation = points[i].elevation;

        if elevation > peak_so_far {
            peak_so_far = elevation;
            trough_since_peak = elevation;
        } else if elevation < trough_since_peak {
            trough_since_peak = elevation;
        }

        // Dropping more than the tolerance below the running peak closes
        // the current ascending segment.
        if peak_so_far - trough_since_peak > params.dip_tolerance_m {
            if let Some(candidate) = close_segment(points, seg_start, i - 1, peak_so_far) {
                candidates.push(candidate);
            }
            seg_start = i;
            peak_so_far = elevation;
            trough_since_peak = elevation;
        }
    }

    // The final in-progress segment is closed and evaluated the same way.
    if let Some(candidate) = close_segment(points, seg_start, points.len() - 1, peak_so_far) {
        candidates.push(candidate);
    }

    if candidates.is_empty() {
        debug!(
            "no ascent with gain over {SIGNIFICANCE_THRESHOLD_M} m found, returning the full trace"
        );
        return points.to_vec();
    }

    let mut best = &candidates[0];
    for candidate in &candidates[1..] {
        if candidate.gain > best.gain {
            best = candidate;
        }
    }

    debug!(
        "detected climb: points {}..={} with {:.1} m gain ({} candidate segments)",
        best.start,
        best.peak,
        best.gain,
        candidates.len()
    );

    rebase(&points[best.start..=best.peak])
}

/// Closes the segment spanning `seg_start..=end` against the running peak
/// elevation, returning a candidate if its gain is significant. The peak
/// index is the first index at which the maximum occurs - the earliest
/// occurrence wins the tie, consistent with the aligner.
fn close_segment(
    points: &[TrackPoint],
    seg_start: usize,
    end: usize,
    peak_elevation: f64,
) -> Option<Candidate> {
    let gain = peak_elevation - points[seg_start].elevation;
    if gain <= SIGNIFICANCE_THRESHOLD_M {
        return None;
    }

    // peak_elevation was read from a point in this range, so the exact
    // comparison always finds it.
    let peak = (seg_start..=end).find(|&j| points[j].elevation == peak_elevation)?;

    Some(Candidate {
        start: seg_start,
        peak,
        gain,
    })
}

/// Shifts distances so the first point is the origin.
fn rebase(points: &[TrackPoint]) -> Vec<TrackPoint> {
    let origin = points[0].distance;
    points
        .iter()
        .map(|p| TrackPoint {
            distance: p.distance - origin,
            ..*p
        })
        .collect()
}
