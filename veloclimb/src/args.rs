use std::path::PathBuf;

use clap::Parser;

/// Returns the parsed command line options.
pub fn parse_args() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        long,
        default_value = "10.0",
        help = "A drop (in metres) from the running peak smaller than this is \
                absorbed into the ascent instead of splitting it"
    )]
    pub dip_tolerance: f64,

    #[arg(
        long,
        default_value = "100.0",
        help = "Width (in metres) of the distance window used to smooth gradients. \
                50, 100, 200 and 500 are sensible presets"
    )]
    pub smoothing_window: f64,

    #[arg(
        long,
        help = "Only keep the last RANGE kilometres before the summit in the \
                aligned CSV output. Unbounded when omitted."
    )]
    pub view_range: Option<f64>,

    #[arg(
        long,
        help = "Directory to write per-climb profile and aligned-profile CSV files to"
    )]
    pub csv_dir: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = "false",
        help = "Include the built-in sample climbs (European classics) in the comparison"
    )]
    pub samples: bool,

    #[arg(help = "GPX files to analyse. Files without a 'gpx' extension are ignored.")]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// The input files that actually look like GPX files.
    pub fn gpx_files(&self) -> Vec<PathBuf> {
        self.files
            .iter()
            .filter(|p| {
                p.extension()
                    .map(|ext| ext.eq_ignore_ascii_case("gpx"))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }
}
