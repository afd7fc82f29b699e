//! Core climb-analysis library. Turns raw GPS traces of road-cycling climbs
//! into comparable distance/elevation/gradient profiles, summary statistics
//! and an automatic category ("HC", "1" .. "4").
//!
//! The pipeline runs strictly forward:
//! ingestion -> detection -> smoothing -> statistics -> (for comparison) peak
//! alignment. Every stage is a pure function over immutable sequences. File
//! decoding, rendering and storage are the caller's concern; this crate
//! accepts already-decoded samples and hands back plain structs.

pub mod alignment;
pub mod detection;
pub mod distance;
pub mod errors;
pub mod ingest;
pub mod model;
pub mod smoothing;
pub mod stats;

pub use alignment::{align_climb, filter_by_view_range};
pub use detection::{detect_climb, ClimbDetectionParameters, SIGNIFICANCE_THRESHOLD_M};
pub use distance::haversine_distance;
pub use errors::Error;
pub use ingest::ingest_trace;
pub use model::{AlignedPoint, Category, Climb, ClimbStats, TraceSample, TrackPoint};
pub use smoothing::smooth_gradients;
pub use stats::{calculate_stats, MAX_GRADIENT_WINDOW_M};
