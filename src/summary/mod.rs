//! Building-level reduction of room metrics and the `daylight_summary.json` artifact.

use crate::error::AnalysisError;
use crate::metrics::model::{RoomMetrics, Thresholds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const SUMMARY_FILE_NAME: &str = "daylight_summary.json";
/// Worst-room label reported when no room could be analysed.
pub const NO_ROOM_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingVerdict {
    #[serde(rename = "overall_building_pass")]
    pub overall_pass: bool,
    #[serde(rename = "overall_worst_room_label")]
    pub worst_room_label: String,
    #[serde(rename = "total_rooms_analysed")]
    pub rooms_analysed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSummary {
    pub summary: BuildingVerdict,
    pub parameters: Thresholds,
    pub rooms: Vec<RoomMetrics>,
}

impl BuildingSummary {
    pub fn worst_room(&self) -> Option<&RoomMetrics> {
        self.rooms
            .iter()
            .find(|room| room.room_label == self.summary.worst_room_label)
    }
}

/// A building passes only if it has rooms and every one of them passes.
/// The worst room has the fewest minimum-point hours; ties go to the room
/// listed first.
pub fn build_summary(rooms: Vec<RoomMetrics>, thresholds: Thresholds) -> BuildingSummary {
    let overall_pass = !rooms.is_empty() && rooms.iter().all(|room| room.room_pass);
    let worst_room_label = rooms
        .iter()
        .min_by_key(|room| room.min_hours_achieved)
        .map(|room| room.room_label.clone())
        .unwrap_or_else(|| NO_ROOM_LABEL.to_string());

    BuildingSummary {
        summary: BuildingVerdict {
            overall_pass,
            worst_room_label,
            rooms_analysed: rooms.len(),
        },
        parameters: thresholds,
        rooms,
    }
}

pub fn summary_path(root: &Path) -> PathBuf {
    root.join(SUMMARY_FILE_NAME)
}

/// Writes the summary under `root` and returns the file path.
pub fn write_summary(root: &Path, summary: &BuildingSummary) -> Result<PathBuf, AnalysisError> {
    let path = summary_path(root);
    let contents = serde_json::to_string_pretty(summary)?;
    std::fs::write(&path, contents).map_err(|source| AnalysisError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[derive(Debug, Error)]
pub enum SummaryReadError {
    #[error("failed to read summary file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse summary file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn read_summary(path: impl AsRef<Path>) -> Result<BuildingSummary, SummaryReadError> {
    let contents = std::fs::read_to_string(path)?;
    let summary: BuildingSummary = serde_json::from_str(&contents)?;
    Ok(summary)
}
