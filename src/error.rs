use ndarray_npy::ReadNpyError;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that invalidate the whole run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid arguments: {0}")]
    Usage(String),
    #[error(
        "could not find the results folder at {}; ensure the simulation ran correctly and created .npy files",
        .0.display()
    )]
    MissingResultsDirectory(PathBuf),
    #[error("no .npy files found in {}", .0.display())]
    NoResultFiles(PathBuf),
    #[error("failed to list results folder {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write summary file to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Conditions that invalidate a single room; the room is skipped.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error("could not read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },
    #[error("empty data array ({points} points x {hours} hours)")]
    EmptyMatrix { points: usize, hours: usize },
    #[error("invalid illuminance {value} at point {point}, hour {hour}")]
    InvalidValue { point: usize, hour: usize, value: f64 },
}
