//! Built-in sample climbs.
//!
//! These are plain configuration records describing well-known European
//! cols, expanded into synthetic 10 m-spaced traces. The core treats them
//! like any other input; they exist so the tool does something interesting
//! without a GPX file to hand.

use veloclimb_core::TraceSample;

/// Spacing of the synthetic samples, in metres.
const STEP_M: f64 = 10.0;

/// Kilometres of northing per degree of latitude.
const KM_PER_DEGREE: f64 = 111.32;

/// A stretch of a profile: a fraction of the total length ridden at a
/// nominal gradient.
pub struct ProfileSegment {
    pub fraction: f64,
    pub gradient: f64,
}

const fn seg(fraction: f64, gradient: f64) -> ProfileSegment {
    ProfileSegment { fraction, gradient }
}

/// A named synthetic climb profile. Fractions are expected to sum to 1.
pub struct ClimbProfile {
    pub name: &'static str,
    pub distance_km: f64,
    pub start_elevation_m: f64,
    pub segments: &'static [ProfileSegment],
    /// Anchor coordinate of the foot of the climb.
    pub lat: f64,
    pub lon: f64,
    /// Compass bearing the synthetic road follows, in degrees.
    pub bearing_deg: f64,
}

pub const SAMPLE_PROFILES: &[ClimbProfile] = &[
    ClimbProfile {
        name: "Alpe d'Huez",
        distance_km: 13.8,
        start_elevation_m: 744.0,
        segments: &[
            seg(0.07, 10.5),
            seg(0.07, 8.0),
            seg(0.07, 10.0),
            seg(0.07, 9.0),
            seg(0.07, 8.5),
            seg(0.07, 9.5),
            seg(0.07, 8.0),
            seg(0.08, 7.5),
            seg(0.07, 8.0),
            seg(0.07, 9.0),
            seg(0.07, 7.5),
            seg(0.07, 8.5),
            seg(0.07, 7.0),
            seg(0.08, 6.5),
        ],
        lat: 45.0569,
        lon: 6.0714,
        bearing_deg: 330.0,
    },
    ClimbProfile {
        name: "Alto de l'Angliru",
        distance_km: 12.5,
        start_elevation_m: 280.0,
        segments: &[
            seg(0.15, 5.0),
            seg(0.10, 7.5),
            seg(0.10, 10.0),
            seg(0.10, 12.5),
            seg(0.10, 14.0),
            seg(0.10, 11.0),
            seg(0.10, 16.0),
            seg(0.10, 23.5),
            seg(0.08, 18.0),
            seg(0.07, 12.0),
        ],
        lat: 43.2333,
        lon: -5.9333,
        bearing_deg: 180.0,
    },
    ClimbProfile {
        name: "Mont Ventoux (Bédoin)",
        distance_km: 21.5,
        start_elevation_m: 300.0,
        segments: &[
            seg(0.10, 4.5),
            seg(0.10, 6.0),
            seg(0.10, 8.5),
            seg(0.10, 9.5),
            seg(0.10, 10.0),
            seg(0.10, 9.0),
            seg(0.10, 10.5),
            seg(0.10, 8.0),
            seg(0.10, 7.0),
            seg(0.10, 6.0),
        ],
        lat: 44.174,
        lon: 5.2788,
        bearing_deg: 0.0,
    },
    ClimbProfile {
        name: "Stelvio Pass",
        distance_km: 24.3,
        start_elevation_m: 950.0,
        segments: &[
            seg(0.10, 7.0),
            seg(0.10, 7.5),
            seg(0.10, 8.0),
            seg(0.10, 7.0),
            seg(0.10, 7.5),
            seg(0.10, 8.5),
            seg(0.10, 7.0),
            seg(0.10, 8.0),
            seg(0.10, 7.5),
            seg(0.10, 7.0),
        ],
        lat: 46.5285,
        lon: 10.4532,
        bearing_deg: 270.0,
    },
    ClimbProfile {
        name: "Col du Tourmalet",
        distance_km: 17.1,
        start_elevation_m: 852.0,
        segments: &[
            seg(0.10, 6.0),
            seg(0.10, 7.5),
            seg(0.10, 8.0),
            seg(0.10, 7.0),
            seg(0.10, 8.5),
            seg(0.10, 9.0),
            seg(0.10, 7.5),
            seg(0.10, 8.0),
            seg(0.10, 7.0),
            seg(0.10, 6.5),
        ],
        lat: 42.8681,
        lon: 0.1456,
        bearing_deg: 90.0,
    },
];

/// Expands a profile into evenly spaced raw samples, with a deterministic
/// sinusoidal wobble on the gradient so the trace looks like measured data
/// rather than a staircase.
pub fn generate_samples(profile: &ClimbProfile) -> Vec<TraceSample> {
    let total_m = profile.distance_km * 1000.0;
    let num_points = (total_m / STEP_M).floor() as usize;
    let bearing_rad = profile.bearing_deg.to_radians();

    let mut samples = Vec::with_capacity(num_points + 1);
    let mut elevation = profile.start_elevation_m;

    for i in 0..=num_points {
        let distance = i as f64 * STEP_M;
        let fraction = distance / total_m;

        let noise = ((i as f64 * 0.3).sin() * 0.8 + (i as f64 * 0.17).cos() * 0.5) * 1.2;
        let gradient = gradient_at(profile, fraction) + noise;

        if i > 0 {
            elevation += gradient / 100.0 * STEP_M;
        }

        let distance_km = distance / 1000.0;
        let lat_offset = distance_km * bearing_rad.cos() / KM_PER_DEGREE;
        let lon_offset =
            distance_km * bearing_rad.sin() / (KM_PER_DEGREE * profile.lat.to_radians().cos());

        samples.push(TraceSample {
            latitude: profile.lat + lat_offset,
            longitude: profile.lon + lon_offset,
            elevation,
        });
    }

    samples
}

/// The nominal gradient at a fractional position along the profile.
fn gradient_at(profile: &ClimbProfile, fraction: f64) -> f64 {
    let mut cumulative = 0.0;
    for segment in profile.segments {
        cumulative += segment.fraction;
        if fraction <= cumulative {
            return segment.gradient;
        }
    }
    // Fractions are meant to sum to 1; cover rounding shortfall.
    profile.segments.last().map(|s| s.gradient).unwrap_or(0.0)
}
