use crate::error::{AnalysisError, RoomError};
use crate::metrics::compute_room_metrics;
use crate::metrics::model::{RoomMetrics, Thresholds};
use crate::results::{MatrixReader, RoomFile, discover_room_files, validate_matrix};
use crate::summary::{BuildingSummary, build_summary, write_summary};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct AnalysisOutcome {
    pub summary: BuildingSummary,
    pub summary_path: PathBuf,
}

/// Discover, score and persist every room under `root`.
///
/// Only a missing or empty results folder and a failed summary write abort
/// the run; unreadable or empty rooms are logged and skipped.
pub fn run_analysis<R>(
    root: &Path,
    thresholds: &Thresholds,
    reader: &R,
    parallel: bool,
) -> Result<AnalysisOutcome, AnalysisError>
where
    R: MatrixReader + Sync,
{
    let rooms = discover_room_files(root)?;
    info!(
        root = %root.display(),
        files = rooms.len(),
        parallel,
        "Analysing room result files"
    );

    let metrics = analyze_rooms(&rooms, reader, thresholds, parallel);
    let skipped = rooms.len() - metrics.len();
    if skipped > 0 {
        warn!(skipped, analysed = metrics.len(), "Some rooms were skipped");
    }

    let summary = build_summary(metrics, *thresholds);
    let summary_path = write_summary(root, &summary)?;
    info!(
        path = %summary_path.display(),
        overall_pass = summary.summary.overall_pass,
        worst_room = %summary.summary.worst_room_label,
        worst_room_min_hours = summary.worst_room().map(|room| room.min_hours_achieved),
        "Daylight summary written"
    );

    Ok(AnalysisOutcome {
        summary,
        summary_path,
    })
}

/// Scores rooms independently; output keeps the order of `rooms`, minus skipped ones.
pub fn analyze_rooms<R>(
    rooms: &[RoomFile],
    reader: &R,
    thresholds: &Thresholds,
    parallel: bool,
) -> Vec<RoomMetrics>
where
    R: MatrixReader + Sync,
{
    if parallel {
        rooms
            .par_iter()
            .filter_map(|room| score_room(room, reader, thresholds))
            .collect()
    } else {
        rooms
            .iter()
            .filter_map(|room| score_room(room, reader, thresholds))
            .collect()
    }
}

fn score_room<R>(room: &RoomFile, reader: &R, thresholds: &Thresholds) -> Option<RoomMetrics>
where
    R: MatrixReader,
{
    let loaded = reader.read_matrix(room).and_then(|matrix| {
        let negative_cells = validate_matrix(&matrix)?;
        Ok::<_, RoomError>((matrix, negative_cells))
    });

    match loaded {
        Ok((matrix, negative_cells)) => {
            if negative_cells > 0 {
                warn!(
                    room = %room.label,
                    negative_cells,
                    "Scoring negative illuminance values as they are"
                );
            }
            let metrics = compute_room_metrics(&room.label, matrix.view(), thresholds);
            debug!(
                room = %room.label,
                points = metrics.n_points,
                hours = metrics.total_hours,
                room_pass = metrics.room_pass,
                "Room analysed"
            );
            Some(metrics)
        }
        Err(err) => {
            warn!(
                room = %room.label,
                path = %room.path.display(),
                error = %err,
                "Skipping room"
            );
            None
        }
    }
}
