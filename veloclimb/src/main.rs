use std::cmp::Ordering;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use args::{parse_args, Args};
use clap::builder::styling::AnsiColor;
use env_logger::Builder;
use log::{debug, info, warn};
use logging_timer::time;
use rayon::prelude::*;
use veloclimb_core::{
    detect_climb, ingest_trace, smooth_gradients, Climb, ClimbDetectionParameters, TraceSample,
};

mod args;
mod gpx_reader;
mod report;
mod samples;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> Result<()> {
    configure_logging();
    info!("Starting {PROGRAM_NAME}");

    let args = parse_args();
    debug!("{:?}", &args);

    let gpx_files = args.gpx_files();
    if gpx_files.is_empty() && !args.samples {
        warn!("No .gpx files specified and --samples not given, exiting");
        return Ok(());
    }

    // Each climb's pipeline is independent and shares no state, so the
    // input files can be analysed in parallel.
    let mut climbs = gpx_files
        .par_iter()
        .enumerate()
        .map(|(idx, file)| analyse_file(idx, file, &args))
        .collect::<Result<Vec<Climb>>>()?;

    if args.samples {
        for (idx, profile) in samples::SAMPLE_PROFILES.iter().enumerate() {
            let trace = samples::generate_samples(profile);
            climbs.push(analyse_trace(
                format!("sample-{idx}"),
                profile.name.to_string(),
                &trace,
                &args,
            )?);
        }
    }

    // Hardest first; difficulty breaks ties within a category.
    climbs.sort_by(|a, b| {
        a.stats.category.cmp(&b.stats.category).then(
            b.stats
                .difficulty_index
                .partial_cmp(&a.stats.difficulty_index)
                .unwrap_or(Ordering::Equal),
        )
    });

    report::print_comparison(&climbs);

    if let Some(dir) = &args.csv_dir {
        for climb in &climbs {
            report::write_profile_csvs(dir, climb, args.view_range)?;
        }
    }

    Ok(())
}

#[time]
fn analyse_file(idx: usize, file: &Path, args: &Args) -> Result<Climb> {
    let track = gpx_reader::read_gpx_file(file)?;
    analyse_trace(format!("gpx-{idx}"), track.name, &track.samples, args)
}

/// Runs the core pipeline over one trace: ingestion, climb detection,
/// gradient smoothing, stats.
fn analyse_trace(id: String, name: String, trace: &[TraceSample], args: &Args) -> Result<Climb> {
    let points = ingest_trace(trace).with_context(|| format!("ingesting '{name}'"))?;

    let params = ClimbDetectionParameters {
        dip_tolerance_m: args.dip_tolerance,
    };
    let detected = detect_climb(&points, &params);
    let smoothed = smooth_gradients(&detected, args.smoothing_window);

    let climb = Climb::new(id, name, smoothed);
    info!(
        "{}: {} points, {:.0} m gain, category {}",
        climb.name,
        climb.points.len(),
        climb.stats.elevation_gain_m,
        climb.stats.category
    );
    Ok(climb)
}

fn configure_logging() {
    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let level_style = buf.default_level_style(record.level());
        let level_style = match record.level() {
            log::Level::Error => level_style.fg_color(Some(AnsiColor::Red.into())),
            log::Level::Warn => level_style.fg_color(Some(AnsiColor::Yellow.into())),
            log::Level::Info => level_style.fg_color(Some(AnsiColor::Green.into())),
            log::Level::Debug => level_style.fg_color(Some(AnsiColor::Blue.into())),
            log::Level::Trace => level_style.fg_color(Some(AnsiColor::Magenta.into())),
        };

        writeln!(
            buf,
            "[{} {level_style}{}{level_style:#}] {}",
            buf.timestamp(),
            record.level(),
            record.args()
        )
    });

    builder.init();
}
