//! Value types shared by the metric engine and the summary builder.
//!
//! Field names follow the `daylight_summary.json` schema, which downstream
//! readers parse by name.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Compliance thresholds supplied by the caller for one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Illuminance every point must reach for the minimum-point check.
    pub min_lux: f64,
    #[serde(rename = "min_hours_req")]
    pub min_hours_required: u32,
    /// Illuminance the spatial average must reach.
    pub avg_lux: f64,
    #[serde(rename = "avg_hours_req")]
    pub avg_hours_required: u32,
    /// Lower bound of the autonomous (useful) UDI band.
    pub udi_min_lux: f64,
}

impl Thresholds {
    pub fn new(
        min_lux: f64,
        min_hours_required: u32,
        avg_lux: f64,
        avg_hours_required: u32,
        udi_min_lux: f64,
    ) -> Result<Self, AnalysisError> {
        for (name, value) in [
            ("min_lux", min_lux),
            ("avg_lux", avg_lux),
            ("udi_min_lux", udi_min_lux),
        ] {
            check_lux(name, value)?;
        }
        Ok(Self {
            min_lux,
            min_hours_required,
            avg_lux,
            avg_hours_required,
            udi_min_lux,
        })
    }
}

/// Lux thresholds must be finite and non-negative.
pub fn check_lux(name: &str, value: f64) -> Result<f64, AnalysisError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::Usage(format!(
            "{name} must be a finite, non-negative lux value (got {value})"
        )))
    }
}

/// Hours of the spatial-average series in each Useful Daylight Illuminance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdiHours {
    #[serde(rename = "udi_f_hours (<100lx)")]
    pub fell_short: usize,
    #[serde(rename = "udi_s_hours (100-min)")]
    pub supplementary: usize,
    #[serde(rename = "udi_a_hours (min-3000lx)")]
    pub autonomous: usize,
    #[serde(rename = "udi_e_hours (>3000lx)")]
    pub exceeded: usize,
}

impl UdiHours {
    pub fn total(&self) -> usize {
        self.fell_short + self.supplementary + self.autonomous + self.exceeded
    }
}

/// The same bands expressed as a percentage of occupied hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UdiPercentages {
    #[serde(rename = "udi_f_pct (<100lx)")]
    pub fell_short: f64,
    #[serde(rename = "udi_s_pct (100-min)")]
    pub supplementary: f64,
    #[serde(rename = "udi_a_pct (min-3000lx)")]
    pub autonomous: f64,
    #[serde(rename = "udi_e_pct (>3000lx)")]
    pub exceeded: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMetrics {
    pub room_label: String,
    pub n_points: usize,
    pub total_hours: usize,
    /// Qualifying hours of the worst point.
    pub min_hours_achieved: usize,
    pub min_pass: bool,
    /// Hours where the spatial average reaches `avg_lux`.
    pub avg_hours_achieved: usize,
    pub avg_pass: bool,
    pub room_pass: bool,
    pub min_area_pct: f64,
    pub avg_area_pct: f64,
    #[serde(rename = "sDA_300_50_pct")]
    pub sda_pct: f64,
    #[serde(rename = "ASE_1000_250_pct")]
    pub ase_pct: f64,
    #[serde(flatten)]
    pub udi_hours: UdiHours,
    #[serde(flatten)]
    pub udi_pct: UdiPercentages,
}
