use serde::{Deserialize, Serialize};

/// Irrigation zone activity state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    Active,
    Stopped,
}

/// An irrigation area with an independent on/off status. Status changes
/// only through explicit user action, never through the simulator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone display name
    pub name: String,
    /// Current activity state
    pub status: ZoneStatus,
}

/// Irrigation control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Auto,
    Manual,
}

/// Daily irrigation start times, kept as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Morning run start time
    pub morning: String,
    /// Evening run start time
    pub evening: String,
}

/// User-controlled irrigation state, disjoint from the simulated
/// readings. The simulator never reads or writes these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Active control mode
    pub current_mode: OperationMode,
    /// All irrigation zones
    pub irrigation_zones: Vec<Zone>,
    /// Daily irrigation schedule
    pub schedule: Schedule,
}

impl Default for ControlState {
    fn default() -> Self {
        let irrigation_zones = (1..=4)
            .map(|index| Zone {
                name: format!("Zone {index}"),
                status: if index == 1 {
                    ZoneStatus::Active
                } else {
                    ZoneStatus::Stopped
                },
            })
            .collect();

        Self {
            current_mode: OperationMode::Auto,
            irrigation_zones,
            schedule: Schedule {
                morning: "06:00".to_string(),
                evening: "18:00".to_string(),
            },
        }
    }
}
