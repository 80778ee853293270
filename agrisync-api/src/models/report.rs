use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::NpkLevels;

/// Export payload produced by the dashboard's data download.
///
/// Write-only artifact: serialized once per export, never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReport {
    /// Export creation time
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Full soil moisture history, oldest first
    pub soil_readings: Vec<i32>,
    /// Full temperature history, oldest first
    pub temperature_readings: Vec<i32>,
    /// Full humidity history, oldest first
    pub humidity_readings: Vec<i32>,
    /// Static soil nutrient levels
    pub npk_levels: NpkLevels,
}
