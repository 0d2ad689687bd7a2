//! Useful Daylight Illuminance bands over the hourly spatial average.

use super::model::{UdiHours, UdiPercentages};
use super::percent_of;
use ndarray::ArrayView1;

/// Below this the space is too dark to be useful.
pub const FELL_SHORT_LUX: f64 = 100.0;
/// Above this daylight is likely to cause glare or overheating.
pub const EXCEEDED_LUX: f64 = 3000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UdiBand {
    FellShort,
    Supplementary,
    Autonomous,
    Exceeded,
}

/// Assigns an hour to exactly one band.
///
/// `[0, 100)` fell short, `(3000, ∞)` exceeded, `[udi_min_lux, 3000]`
/// autonomous and whatever is left of `[100, udi_min_lux)` supplementary.
/// With `udi_min_lux <= 100` the supplementary band is empty; with
/// `udi_min_lux > 3000` the autonomous band is.
pub fn classify(average_lux: f64, udi_min_lux: f64) -> UdiBand {
    if average_lux < FELL_SHORT_LUX {
        UdiBand::FellShort
    } else if average_lux > EXCEEDED_LUX {
        UdiBand::Exceeded
    } else if average_lux >= udi_min_lux {
        UdiBand::Autonomous
    } else {
        UdiBand::Supplementary
    }
}

pub fn classify_hours(hourly_average: ArrayView1<'_, f64>, udi_min_lux: f64) -> UdiHours {
    let mut hours = UdiHours {
        fell_short: 0,
        supplementary: 0,
        autonomous: 0,
        exceeded: 0,
    };
    for &average in hourly_average {
        match classify(average, udi_min_lux) {
            UdiBand::FellShort => hours.fell_short += 1,
            UdiBand::Supplementary => hours.supplementary += 1,
            UdiBand::Autonomous => hours.autonomous += 1,
            UdiBand::Exceeded => hours.exceeded += 1,
        }
    }
    hours
}

pub fn percentages(hours: &UdiHours, total_hours: usize) -> UdiPercentages {
    UdiPercentages {
        fell_short: percent_of(hours.fell_short, total_hours),
        supplementary: percent_of(hours.supplementary, total_hours),
        autonomous: percent_of(hours.autonomous, total_hours),
        exceeded: percent_of(hours.exceeded, total_hours),
    }
}
