//! Minimal GPX 1.1 track decoding.
//!
//! The core library deliberately accepts plain samples rather than files, so
//! the XML handling lives here at the boundary. quick-xml's serde
//! integration does a good-enough job for the trk/trkseg/trkpt subset this
//! tool cares about; metadata, waypoints and extensions are skipped.

use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::info;
use logging_timer::time;
use serde::Deserialize;
use veloclimb_core::TraceSample;

#[derive(Debug, Deserialize)]
struct Gpx {
    #[serde(rename = "trk", default)]
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: Option<String>,
    #[serde(rename = "trkseg", default)]
    segments: Vec<TrackSegment>,
}

#[derive(Debug, Deserialize)]
struct TrackSegment {
    #[serde(rename = "trkpt", default)]
    points: Vec<GpxTrackPoint>,
}

#[derive(Debug, Deserialize)]
struct GpxTrackPoint {
    #[serde(rename = "@lat")]
    lat: f64,
    #[serde(rename = "@lon")]
    lon: f64,
    /// Some exporters omit <ele>; 0 is as good a guess as any.
    #[serde(default)]
    ele: f64,
}

/// A decoded track: the display name plus the raw samples the core ingests.
#[derive(Debug)]
pub struct DecodedTrack {
    pub name: String,
    pub samples: Vec<TraceSample>,
}

/// Reads the first track of a GPX file, flattening its segments into a
/// single sample sequence. Multi-track files are out of scope; the first
/// track is what the big providers export anyway.
#[time]
pub fn read_gpx_file(input_file: &Path) -> Result<DecodedTrack> {
    info!("Reading GPX file {:?}", input_file);
    let contents = std::fs::read_to_string(input_file)
        .with_context(|| format!("could not read {:?}", input_file))?;

    let mut track = parse_gpx(&contents)
        .with_context(|| format!("could not parse {:?} as GPX", input_file))?;

    if track.name.is_empty() {
        track.name = input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "climb".to_string());
    }

    Ok(track)
}

/// Parses GPX content into the first track's samples. The name is empty if
/// the track carries none.
pub fn parse_gpx(contents: &str) -> Result<DecodedTrack> {
    let gpx: Gpx = quick_xml::de::from_str(contents)?;
    ensure!(!gpx.tracks.is_empty(), "no tracks found in GPX document");

    let track = &gpx.tracks[0];
    let samples: Vec<TraceSample> = track
        .segments
        .iter()
        .flat_map(|segment| &segment.points)
        .map(|p| TraceSample {
            latitude: p.lat,
            longitude: p.lon,
            elevation: p.ele,
        })
        .collect();

    Ok(DecodedTrack {
        name: track.name.clone().unwrap_or_default(),
        samples,
    })
}
