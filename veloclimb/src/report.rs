//! Comparison output: a stats table on stdout and optional CSV export of
//! the profiles for charting elsewhere.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use veloclimb_core::{align_climb, filter_by_view_range, Climb};

/// Prints one row of summary statistics per climb, in the order given.
pub fn print_comparison(climbs: &[Climb]) {
    println!(
        "{:<28} {:>9} {:>8} {:>7} {:>7} {:>8} {:>10}  {}",
        "Climb", "Dist km", "Gain m", "Avg %", "Max %", "Peak m", "Difficulty", "Category"
    );
    for climb in climbs {
        let s = &climb.stats;
        println!(
            "{:<28} {:>9.1} {:>8.0} {:>7.1} {:>7.1} {:>8.0} {:>10.0}  {}",
            climb.name,
            s.total_distance_m / 1000.0,
            s.elevation_gain_m,
            s.avg_gradient,
            s.max_gradient,
            s.peak_elevation_m,
            s.difficulty_index,
            s.category
        );
    }
}

/// Writes `<name>.profile.csv` (the full detected profile) and
/// `<name>.aligned.csv` (the summit-aligned view, optionally truncated to
/// the requested trailing window) into `dir`.
pub fn write_profile_csvs(dir: &Path, climb: &Climb, view_range_km: Option<f64>) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("could not create {:?}", dir))?;
    let stem = file_stem(&climb.name);

    let profile_path = dir.join(format!("{stem}.profile.csv"));
    let mut writer = csv::Writer::from_path(&profile_path)
        .with_context(|| format!("could not create {:?}", profile_path))?;
    for point in &climb.points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    let aligned = filter_by_view_range(&align_climb(&climb.points), view_range_km);
    let aligned_path = dir.join(format!("{stem}.aligned.csv"));
    let mut writer = csv::Writer::from_path(&aligned_path)
        .with_context(|| format!("could not create {:?}", aligned_path))?;
    for point in &aligned {
        writer.serialize(point)?;
    }
    writer.flush()?;

    info!("Wrote {:?} and {:?}", profile_path, aligned_path);
    Ok(())
}

/// Lowercase alphanumerics with everything else collapsed to underscores,
/// safe for a filename on any platform.
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
