use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw GPS sample as decoded from a GPX file (or synthesised by a sample
/// generator). This is the shape the library accepts at its boundary;
/// distance and gradient are derived during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Degrees, WGS84.
    pub latitude: f64,
    /// Degrees, WGS84.
    pub longitude: f64,
    /// Metres above sea level, taken as given from the input.
    pub elevation: f64,
}

/// One GPS sample after ingestion, annotated with derived data.
///
/// Within any ordered sequence of TrackPoints the distances are
/// non-decreasing, and after a re-indexing step (detection, truncation) the
/// first point's distance is 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above sea level.
    pub elevation: f64,
    /// Cumulative metres from the first point of the owning sequence.
    pub distance: f64,
    /// Percent rise over run to the previous point in the same sequence.
    /// 0 for the first point by convention.
    pub gradient: f64,
}

/// Climb categories, hardest first. The ordering follows road-race roadbook
/// convention: HC ("hors catégorie") down to 4, then uncategorised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "HC")]
    Hc,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    Uncategorized,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Hc => write!(f, "HC"),
            Category::One => write!(f, "1"),
            Category::Two => write!(f, "2"),
            Category::Three => write!(f, "3"),
            Category::Four => write!(f, "4"),
            Category::Uncategorized => write!(f, "Uncategorized"),
        }
    }
}

/// Aggregate metrics derived from a climb's points. Never mutated in place:
/// recompute whenever the underlying points change.
///
/// Rounding policy is applied here, at the boundary - gradients to one
/// decimal place, elevations, distances and the difficulty index to the
/// nearest metre/integer. Intermediate computations keep full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClimbStats {
    /// Last point's distance minus first point's distance, in metres.
    pub total_distance_m: f64,
    /// Sum of the positive elevation deltas only, in metres.
    pub elevation_gain_m: f64,
    /// Elevation gain over total distance, in percent.
    pub avg_gradient: f64,
    /// Worst sustained pitch over a 500 m rolling window, in percent.
    pub max_gradient: f64,
    pub peak_elevation_m: f64,
    pub start_elevation_m: f64,
    /// Unitless: distance (km) times average gradient squared, over 10.
    /// Rewards steep-and-long climbs superlinearly in gradient.
    pub difficulty_index: f64,
    pub category: Category,
}

impl ClimbStats {
    /// The canonical result for sequences too short to analyse.
    pub fn zero() -> Self {
        Self {
            total_distance_m: 0.0,
            elevation_gain_m: 0.0,
            avg_gradient: 0.0,
            max_gradient: 0.0,
            peak_elevation_m: 0.0,
            start_elevation_m: 0.0,
            difficulty_index: 0.0,
            category: Category::Uncategorized,
        }
    }
}

/// A named, immutable climb profile: the detected (and usually smoothed)
/// ascent plus its derived statistics. The caller owns it once constructed;
/// the library keeps no references to it.
#[derive(Debug, Clone)]
pub struct Climb {
    pub id: String,
    pub name: String,
    pub points: Vec<TrackPoint>,
    pub stats: ClimbStats,
}

impl Climb {
    /// Builds a climb from an already-detected point sequence, computing its
    /// stats. Stats are derived data: rebuild the climb if the points change.
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: Vec<TrackPoint>) -> Self {
        let stats = crate::stats::calculate_stats(&points);
        Self {
            id: id.into(),
            name: name.into(),
            points,
            stats,
        }
    }
}

/// A TrackPoint re-expressed relative to the summit, for overlay comparison
/// of climbs of different lengths. Always a derived view, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedPoint {
    /// Kilometres relative to the summit; always <= 0, exactly 0 at the
    /// summit.
    pub distance_from_peak_km: f64,
    pub elevation: f64,
    pub gradient: f64,
    pub latitude: f64,
    pub longitude: f64,
}
