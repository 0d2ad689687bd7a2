//! BREEAM daylight credit checks: minimum-point and spatial-average illuminance
//! held for a required number of hours.

use super::{hours_at_or_above, percent_of};
use ndarray::{ArrayView1, ArrayView2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumPointCheck {
    /// Qualifying hours of the worst point in the room.
    pub hours_achieved: usize,
    pub pass: bool,
    /// Share of points that individually meet the hour requirement.
    pub area_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialAverageCheck {
    /// Hours where the spatial average reaches the target.
    pub hours_achieved: usize,
    pub pass: bool,
    /// Share of points whose own hours reach the target for the required time.
    pub area_pct: f64,
}

/// The room is bound by its worst point, not by the mean.
pub fn minimum_point(
    matrix: ArrayView2<'_, f64>,
    min_lux: f64,
    hours_required: u32,
) -> MinimumPointCheck {
    let required = hours_required as usize;
    let per_point: Vec<usize> = matrix
        .outer_iter()
        .map(|point| hours_at_or_above(point, min_lux))
        .collect();

    let hours_achieved = per_point.iter().copied().min().unwrap_or(0);
    let passing_points = per_point.iter().filter(|&&hours| hours >= required).count();

    MinimumPointCheck {
        hours_achieved,
        pass: hours_achieved >= required,
        area_pct: percent_of(passing_points, per_point.len()),
    }
}

/// Pass/fail comes from the hourly spatial average while the area share is
/// counted point by point. Both definitions are reported as-is.
pub fn spatial_average_check(
    matrix: ArrayView2<'_, f64>,
    hourly_average: ArrayView1<'_, f64>,
    avg_lux: f64,
    hours_required: u32,
) -> SpatialAverageCheck {
    let required = hours_required as usize;
    let hours_achieved = hours_at_or_above(hourly_average, avg_lux);

    let passing_points = matrix
        .outer_iter()
        .filter(|point| hours_at_or_above(point.view(), avg_lux) >= required)
        .count();

    SpatialAverageCheck {
        hours_achieved,
        pass: hours_achieved >= required,
        area_pct: percent_of(passing_points, matrix.nrows()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::spatial_average;
    use ndarray::{Array2, array, s};

    #[test]
    fn all_points_lit_every_hour_pass_with_full_area() {
        let matrix = Array2::from_elem((5, 12), 350.0);

        let check = minimum_point(matrix.view(), 300.0, 12);

        assert_eq!(check.hours_achieved, 12);
        assert!(check.pass);
        assert_eq!(check.area_pct, 100.0);
    }

    #[test]
    fn worst_point_one_hour_short_fails_the_room() {
        let required = 8;
        let mut matrix = Array2::from_elem((4, 10), 400.0);
        // Point 0 reaches the threshold for only `required - 1` hours.
        matrix.slice_mut(s![0, (required as usize - 1)..]).fill(100.0);

        let check = minimum_point(matrix.view(), 300.0, required);

        assert_eq!(check.hours_achieved, required as usize - 1);
        assert!(!check.pass);
        assert_eq!(check.area_pct, 75.0);
    }

    #[test]
    fn minimum_threshold_is_inclusive() {
        let matrix = array![[300.0, 300.0], [300.0, 299.9]];

        let check = minimum_point(matrix.view(), 300.0, 2);

        assert_eq!(check.hours_achieved, 1);
        assert!(!check.pass);
        assert_eq!(check.area_pct, 50.0);
    }

    #[test]
    fn average_area_counts_points_while_pass_uses_spatial_mean() {
        // One bright point lifts the spatial average above 300 lux every hour,
        // yet only that point passes on its own hours. The two definitions
        // disagree on purpose and both are reported.
        let matrix = array![
            [1200.0, 1200.0, 1200.0, 1200.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0]
        ];
        let average = spatial_average(matrix.view());

        let check = spatial_average_check(matrix.view(), average.view(), 300.0, 4);

        assert_eq!(check.hours_achieved, 4);
        assert!(check.pass);
        assert_eq!(check.area_pct, 25.0);
    }

    #[test]
    fn average_check_fails_when_mean_stays_low() {
        let matrix = array![[400.0, 100.0, 100.0], [200.0, 100.0, 100.0]];
        let average = spatial_average(matrix.view());

        let check = spatial_average_check(matrix.view(), average.view(), 300.0, 2);

        assert_eq!(check.hours_achieved, 1);
        assert!(!check.pass);
        assert_eq!(check.area_pct, 0.0);
    }
}
