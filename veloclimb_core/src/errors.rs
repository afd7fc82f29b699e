use thiserror::Error;

/// Errors returned by the analysis pipeline. All of them are recoverable at
/// the call site; the library never logs, retries or exits on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// A trace with fewer than two samples cannot define distance or
    /// gradient, and no amount of retrying will synthesise more data.
    #[error("insufficient data: a trace requires at least 2 samples, got {0}")]
    InsufficientData(usize),
}
