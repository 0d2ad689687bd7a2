//! Climate-based area metrics: spatial Daylight Autonomy (sDA 300/50%) and
//! Annual Sun Exposure (ASE 1000/250).
//!
//! ASE is defined on direct sunlight only. Result matrices carry total
//! illuminance, so it stands in for direct sun here, as Honeybee ASE recipes do.

use super::{hours_above, hours_at_or_above, percent_of};
use ndarray::ArrayView2;

pub const SDA_LUX: f64 = 300.0;
/// Fraction of occupied hours a point must hold `SDA_LUX`.
pub const SDA_HOUR_FRACTION: f64 = 0.5;
pub const ASE_LUX: f64 = 1000.0;
pub const ASE_MAX_HOURS: usize = 250;

/// Share of points reaching 300 lux for at least half of the hours.
pub fn spatial_daylight_autonomy(matrix: ArrayView2<'_, f64>) -> f64 {
    let hour_threshold = matrix.ncols() as f64 * SDA_HOUR_FRACTION;
    let passing = matrix
        .outer_iter()
        .filter(|point| hours_at_or_above(point.view(), SDA_LUX) as f64 >= hour_threshold)
        .count();
    percent_of(passing, matrix.nrows())
}

/// Share of points above 1000 lux for more than 250 hours.
pub fn annual_sun_exposure(matrix: ArrayView2<'_, f64>) -> f64 {
    let exposed = matrix
        .outer_iter()
        .filter(|point| hours_above(point.view(), ASE_LUX) > ASE_MAX_HOURS)
        .count();
    percent_of(exposed, matrix.nrows())
}
