//! Per-room daylight metrics.
//!
//! Every function here is pure: a room matrix (points x hours) and the run
//! thresholds go in, values come out. Rooms can be scored in any order or in
//! parallel.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

pub mod breeam;
pub mod exposure;
pub mod model;
pub mod udi;

use model::{RoomMetrics, Thresholds};

/// Mean illuminance across all points for each hour.
pub fn spatial_average(matrix: ArrayView2<'_, f64>) -> Array1<f64> {
    matrix
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::zeros(matrix.ncols()))
}

/// Number of hours at which a point reaches `lux` (inclusive).
pub fn hours_at_or_above(series: ArrayView1<'_, f64>, lux: f64) -> usize {
    series.iter().filter(|&&value| value >= lux).count()
}

/// Number of hours at which a point exceeds `lux` (exclusive).
pub fn hours_above(series: ArrayView1<'_, f64>, lux: f64) -> usize {
    series.iter().filter(|&&value| value > lux).count()
}

/// Rounds half away from zero to two decimal places.
pub fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `count / total` as a percentage rounded to two decimals; zero when `total` is zero.
pub fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_pct(count as f64 / total as f64 * 100.0)
}

/// Scores one room. Callers filter out matrices with a zero dimension first.
pub fn compute_room_metrics(
    room_label: &str,
    matrix: ArrayView2<'_, f64>,
    thresholds: &Thresholds,
) -> RoomMetrics {
    let (n_points, total_hours) = matrix.dim();
    let hourly_average = spatial_average(matrix);

    let minimum = breeam::minimum_point(matrix, thresholds.min_lux, thresholds.min_hours_required);
    let average = breeam::spatial_average_check(
        matrix,
        hourly_average.view(),
        thresholds.avg_lux,
        thresholds.avg_hours_required,
    );
    let udi_hours = udi::classify_hours(hourly_average.view(), thresholds.udi_min_lux);

    RoomMetrics {
        room_label: room_label.to_string(),
        n_points,
        total_hours,
        min_hours_achieved: minimum.hours_achieved,
        min_pass: minimum.pass,
        avg_hours_achieved: average.hours_achieved,
        avg_pass: average.pass,
        room_pass: minimum.pass && average.pass,
        min_area_pct: minimum.area_pct,
        avg_area_pct: average.area_pct,
        sda_pct: exposure::spatial_daylight_autonomy(matrix),
        ase_pct: exposure::annual_sun_exposure(matrix),
        udi_hours,
        udi_pct: udi::percentages(&udi_hours, total_hours),
    }
}
