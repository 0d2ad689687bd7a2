use crate::error::{AnalysisError, RoomError};
use ndarray::Array2;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod npy;

/// Where Honeybee annual daylight recipes leave total illuminance per grid.
pub const RESULTS_SUBPATH: [&str; 4] = ["results", "__static_apertures__", "default", "total"];
pub const RESULT_EXTENSION: &str = "npy";

/// One per-room result file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomFile {
    /// File stem, used as the room label in the summary.
    pub label: String,
    pub path: PathBuf,
}

/// Source of room illuminance matrices (points x hours).
pub trait MatrixReader {
    fn read_matrix(&self, room: &RoomFile) -> Result<Array2<f64>, RoomError>;
}

pub fn results_dir(root: &Path) -> PathBuf {
    RESULTS_SUBPATH
        .iter()
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Lists the room result files under `root`, sorted by file name.
pub fn discover_room_files(root: &Path) -> Result<Vec<RoomFile>, AnalysisError> {
    let dir = results_dir(root);
    if !dir.is_dir() {
        return Err(AnalysisError::MissingResultsDirectory(dir));
    }

    let scan_error = |source: std::io::Error| AnalysisError::Scan {
        path: dir.clone(),
        source,
    };
    let mut rooms = Vec::new();
    for entry in std::fs::read_dir(&dir).map_err(scan_error)? {
        let path = entry.map_err(scan_error)?.path();
        let is_result = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(RESULT_EXTENSION));
        if !path.is_file() || !is_result {
            tracing::debug!(path = %path.display(), "Ignoring non-result entry");
            continue;
        }
        let Some(label) = path.file_stem().and_then(|stem| stem.to_str()) else {
            tracing::warn!(path = %path.display(), "Skipping result file with non UTF-8 name");
            continue;
        };
        rooms.push(RoomFile {
            label: label.to_string(),
            path,
        });
    }

    if rooms.is_empty() {
        return Err(AnalysisError::NoResultFiles(dir));
    }
    rooms.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(rooms)
}

/// Rejects matrices the metric engine cannot score and returns the number of
/// negative cells. Negative values are scored as they are.
pub fn validate_matrix(matrix: &Array2<f64>) -> Result<usize, RoomError> {
    let (points, hours) = matrix.dim();
    if points == 0 || hours == 0 {
        return Err(RoomError::EmptyMatrix { points, hours });
    }
    if let Some(((point, hour), &value)) =
        matrix.indexed_iter().find(|(_, value)| !value.is_finite())
    {
        return Err(RoomError::InvalidValue { point, hour, value });
    }
    Ok(matrix.iter().filter(|&&value| value < 0.0).count())
}
