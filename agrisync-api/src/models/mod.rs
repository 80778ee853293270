mod control;
mod report;

pub use control::*;
pub use report::*;

use serde::{Deserialize, Serialize};

/// One simulated physical quantity tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    SoilMoisture,
    Temperature,
    Humidity,
}

impl Channel {
    pub const ALL: [Channel; 3] = [
        Channel::SoilMoisture,
        Channel::Temperature,
        Channel::Humidity,
    ];

    /// Closed physical range readings are clamped to.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Channel::SoilMoisture => (0.0, 100.0),
            Channel::Temperature => (15.0, 40.0),
            Channel::Humidity => (40.0, 100.0),
        }
    }

    /// Width of the centered uniform delta drawn on each tick.
    pub fn span(&self) -> f64 {
        match self {
            Channel::SoilMoisture => 4.0,
            Channel::Temperature => 2.0,
            Channel::Humidity => 6.0,
        }
    }

    /// Chart legend label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::SoilMoisture => "Soil Moisture (%)",
            Channel::Temperature => "Temperature (°C)",
            Channel::Humidity => "Humidity (%)",
        }
    }
}

/// Current instantaneous reading set for all monitored channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Soil moisture percentage
    pub soil_moisture: f64,
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Soil pH, fixed reference value, never simulated
    pub ph_level: f64,
    /// Weather description shown on the dashboard
    pub weather: String,
    /// Overall field condition
    pub field_status: String,
}

impl Snapshot {
    pub fn value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::SoilMoisture => self.soil_moisture,
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
        }
    }

    pub fn set_value(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::SoilMoisture => self.soil_moisture = value,
            Channel::Temperature => self.temperature = value,
            Channel::Humidity => self.humidity = value,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            soil_moisture: 65.0,
            temperature: 24.0,
            humidity: 72.0,
            ph_level: 6.8,
            weather: "Partly Cloudy".to_string(),
            field_status: "Healthy".to_string(),
        }
    }
}

/// Static soil nutrient levels included in exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpkLevels {
    /// Nitrogen level
    pub nitrogen: u32,
    /// Phosphorus level
    pub phosphorus: u32,
    /// Potassium level
    pub potassium: u32,
}

impl Default for NpkLevels {
    fn default() -> Self {
        Self {
            nitrogen: 45,
            phosphorus: 38,
            potassium: 52,
        }
    }
}

/// Static field analytics shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    /// Crop health percentage
    pub crop_health: u32,
    /// Water efficiency percentage
    pub water_efficiency: u32,
    /// Yield prediction percentage
    pub yield_prediction: u32,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            crop_health: 85,
            water_efficiency: 78,
            yield_prediction: 92,
        }
    }
}
