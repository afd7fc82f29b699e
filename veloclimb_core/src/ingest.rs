//! Turning raw samples into annotated TrackPoints.

use crate::distance::haversine_distance;
use crate::errors::Error;
use crate::model::{TraceSample, TrackPoint};

/// Walks a raw sample list once and annotates each sample with the
/// cumulative distance from the start and the percent gradient to the
/// previous sample. The output corresponds to the input index-for-index.
///
/// The first point gets distance 0 and gradient 0. Coincident samples are
/// common (GPS units repeat fixes while stationary); a zero run means the
/// gradient is defined as 0, not a division.
pub fn ingest_trace(samples: &[TraceSample]) -> Result<Vec<TrackPoint>, Error> {
    if samples.len() < 2 {
        return Err(Error::InsufficientData(samples.len()));
    }

    let mut points = Vec::with_capacity(samples.len());
    let mut cumulative = 0.0;

    for (idx, sample) in samples.iter().enumerate() {
        let mut gradient = 0.0;
        if idx > 0 {
            let prev = &samples[idx - 1];
            let delta = haversine_distance(
                prev.latitude,
                prev.longitude,
                sample.latitude,
                sample.longitude,
            );
            cumulative += delta;
            if delta > 0.0 {
                gradient = (sample.elevation - prev.elevation) / delta * 100.0;
            }
        }

        points.push(TrackPoint {
            latitude: sample.latitude,
            longitude: sample.longitude,
            elevation: sample.elevation,
            distance: cumulative,
            gradient,
        });
    }

    assert_eq!(points.len(), samples.len());
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(latitude: f64, elevation: f64) -> TraceSample {
        TraceSample {
            latitude,
            longitude: 6.0,
            elevation,
        }
    }

    #[test]
    fn fewer_than_two_samples_is_an_error() {
        assert!(matches!(
            ingest_trace(&[]),
            Err(Error::InsufficientData(0))
        ));
        assert!(matches!(
            ingest_trace(&[sample(45.0, 500.0)]),
            Err(Error::InsufficientData(1))
        ));
    }

    #[test]
    fn distances_are_non_decreasing_and_start_at_zero() {
        let samples = vec![
            sample(45.000, 500.0),
            sample(45.001, 505.0),
            sample(45.002, 512.0),
            sample(45.003, 510.0),
        ];
        let points = ingest_trace(&samples).unwrap();

        assert_eq!(points.len(), samples.len());
        assert_eq!(points[0].distance, 0.0);
        assert_eq!(points[0].gradient, 0.0);
        for pair in points.windows(2) {
            assert!(pair[1].distance >= pair[0].distance);
        }
    }

    #[test]
    fn gradient_sign_follows_elevation() {
        let samples = vec![
            sample(45.000, 500.0),
            sample(45.001, 510.0),
            sample(45.002, 505.0),
        ];
        let points = ingest_trace(&samples).unwrap();

        assert!(points[1].gradient > 0.0);
        assert!(points[2].gradient < 0.0);
    }

    #[test]
    fn coincident_samples_get_zero_gradient() {
        let samples = vec![
            sample(45.000, 500.0),
            sample(45.000, 510.0), // same fix, elevation jumped
            sample(45.001, 512.0),
        ];
        let points = ingest_trace(&samples).unwrap();

        assert_eq!(points[1].gradient, 0.0);
        assert_eq!(points[1].distance, points[0].distance);
    }

    #[test]
    fn gradient_is_rise_over_run_in_percent() {
        // Roughly 111.2 m of northing per 0.001 degrees of latitude.
        let samples = vec![sample(45.000, 500.0), sample(45.001, 511.12)];
        let points = ingest_trace(&samples).unwrap();

        let run = points[1].distance;
        let expected = 11.12 / run * 100.0;
        assert!((points[1].gradient - expected).abs() < 1e-9);
        assert!((points[1].gradient - 10.0).abs() < 0.5);
    }
}
