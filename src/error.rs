use thiserror::Error;

/// Errors raised by the driver itself. Solver and wrapper failures are not
/// errors; they show up only in the transcript.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Missing or invalid command-line selection
    #[error("usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("benchmark scan failed: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type DriverResult<T> = Result<T, DriverError>;
