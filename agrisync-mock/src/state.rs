use std::sync::Arc;

use time::OffsetDateTime;
use time::macros::format_description;
use tokio::sync::RwLock;

use agrisync_api::{
    Analytics, Channel, ChannelHistory, ControlState, NpkLevels, OperationMode, Schedule,
    SensorReport, Snapshot, ZoneStatus,
};

use crate::errors::ControlError;
use crate::simulate::{TickDeltas, perturb};

/// Seed sequences matching the reference dashboard's initial data set.
const SOIL_SEED: [i32; 10] = [62, 65, 68, 64, 67, 65, 63, 66, 64, 68];
const TEMPERATURE_SEED: [i32; 10] = [22, 24, 26, 23, 25, 24, 22, 25, 23, 26];
const HUMIDITY_SEED: [i32; 10] = [68, 72, 75, 70, 73, 72, 69, 74, 71, 75];

/// Chart window length ("10min" .. "Now").
const RECENT_WINDOW: usize = 6;

/// Everything the dashboard reads: live readings, per-channel rolling
/// windows, static nutrient/analytics blocks and the user-controlled
/// irrigation state.
#[derive(Debug, Clone)]
pub struct TelemetryState {
    pub snapshot: Snapshot,
    pub soil_history: ChannelHistory,
    pub temperature_history: ChannelHistory,
    pub humidity_history: ChannelHistory,
    pub npk_levels: NpkLevels,
    pub analytics: Analytics,
    pub control: ControlState,
}

impl TelemetryState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            snapshot: Snapshot::default(),
            soil_history: ChannelHistory::from_seed(history_capacity, &SOIL_SEED),
            temperature_history: ChannelHistory::from_seed(history_capacity, &TEMPERATURE_SEED),
            humidity_history: ChannelHistory::from_seed(history_capacity, &HUMIDITY_SEED),
            npk_levels: NpkLevels::default(),
            analytics: Analytics::default(),
            control: ControlState::default(),
        }
    }

    fn history(&self, channel: Channel) -> &ChannelHistory {
        match channel {
            Channel::SoilMoisture => &self.soil_history,
            Channel::Temperature => &self.temperature_history,
            Channel::Humidity => &self.humidity_history,
        }
    }

    fn history_mut(&mut self, channel: Channel) -> &mut ChannelHistory {
        match channel {
            Channel::SoilMoisture => &mut self.soil_history,
            Channel::Temperature => &mut self.temperature_history,
            Channel::Humidity => &mut self.humidity_history,
        }
    }
}

/// Shared handle over the telemetry state.
///
/// The simulator task is the sole writer of the snapshot and histories;
/// control setters only touch the disjoint control fields. Readers get
/// owned copies, so no caller can corrupt the rolling windows.
#[derive(Debug, Clone)]
pub struct TelemetryService {
    state: Arc<RwLock<TelemetryState>>,
}

impl TelemetryService {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            state: Arc::new(RwLock::new(TelemetryState::new(history_capacity))),
        }
    }

    /// Applies one tick: per channel, perturbs the snapshot by the drawn
    /// delta with a saturating clamp, then appends the rounded reading to
    /// that channel's rolling window. All three channels update inside a
    /// single write-lock scope, so readers never observe a partial tick.
    pub async fn apply_tick(&self, deltas: TickDeltas) -> Snapshot {
        let mut state = self.state.write().await;

        for channel in Channel::ALL {
            let next = perturb(channel, state.snapshot.value(channel), deltas.get(channel));
            state.snapshot.set_value(channel, next);
            state.history_mut(channel).push(next.round() as i32);
        }

        state.snapshot.clone()
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.snapshot.clone()
    }

    /// Full rolling window for a channel, oldest first.
    pub async fn history(&self, channel: Channel) -> Vec<i32> {
        self.state.read().await.history(channel).to_vec()
    }

    /// Fixed 6-point window feeding the dashboard chart.
    pub async fn recent_window(&self, channel: Channel) -> Vec<i32> {
        self.state.read().await.history(channel).last(RECENT_WINDOW)
    }

    /// The k-th most recent sample for a channel (1 = most recent).
    pub async fn recent_reading(&self, channel: Channel, k: usize) -> Option<i32> {
        self.state.read().await.history(channel).last_at(k)
    }

    pub async fn npk_levels(&self) -> NpkLevels {
        self.state.read().await.npk_levels
    }

    pub async fn analytics(&self) -> Analytics {
        self.state.read().await.analytics
    }

    pub async fn control(&self) -> ControlState {
        self.state.read().await.control.clone()
    }

    pub async fn set_mode(&self, mode: OperationMode) {
        let mut state = self.state.write().await;
        state.control.current_mode = mode;

        tracing::info!("control mode set to {mode:?}");
    }

    pub async fn set_zone_status(
        &self,
        name: &str,
        status: ZoneStatus,
    ) -> Result<(), ControlError> {
        let mut state = self.state.write().await;

        let zone = state
            .control
            .irrigation_zones
            .iter_mut()
            .find(|zone| zone.name == name)
            .ok_or_else(|| ControlError::ZoneNotFound(name.to_string()))?;

        zone.status = status;

        tracing::info!("{name} set to {status:?}");

        Ok(())
    }

    pub async fn set_schedule(&self, morning: &str, evening: &str) -> Result<(), ControlError> {
        validate_schedule_time(morning)?;
        validate_schedule_time(evening)?;

        let mut state = self.state.write().await;
        state.control.schedule = Schedule {
            morning: morning.to_string(),
            evening: evening.to_string(),
        };

        tracing::info!("irrigation schedule updated to {morning} / {evening}");

        Ok(())
    }

    /// Emergency stop: flips every zone to `Stopped`.
    pub async fn stop_all_zones(&self) {
        let mut state = self.state.write().await;

        for zone in &mut state.control.irrigation_zones {
            zone.status = ZoneStatus::Stopped;
        }

        tracing::warn!("emergency stop activated, all zones stopped");
    }

    /// Builds the export payload from the current histories.
    pub async fn export_report(&self) -> SensorReport {
        let state = self.state.read().await;

        SensorReport {
            timestamp: OffsetDateTime::now_utc(),
            soil_readings: state.soil_history.to_vec(),
            temperature_readings: state.temperature_history.to_vec(),
            humidity_readings: state.humidity_history.to_vec(),
            npk_levels: state.npk_levels,
        }
    }
}

fn validate_schedule_time(value: &str) -> Result<(), ControlError> {
    let format = format_description!("[hour]:[minute]");

    time::Time::parse(value, &format)
        .map(|_| ())
        .map_err(|_| ControlError::InvalidScheduleTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_lookup_by_name() {
        let state = TelemetryState::new(10);

        assert!(
            state
                .control
                .irrigation_zones
                .iter()
                .any(|zone| zone.name == "Zone 4")
        );
    }

    #[test]
    fn test_validate_schedule_time() {
        assert!(validate_schedule_time("06:30").is_ok());
        assert!(validate_schedule_time("23:59").is_ok());
        assert!(validate_schedule_time("24:00").is_err());
        assert!(validate_schedule_time("7pm").is_err());
        assert!(validate_schedule_time("").is_err());
    }

    #[tokio::test]
    async fn test_readers_return_copies() {
        let service = TelemetryService::new(10);

        let mut history = service.history(Channel::SoilMoisture).await;
        history.clear();

        assert_eq!(service.history(Channel::SoilMoisture).await.len(), 10);
    }

    #[tokio::test]
    async fn test_set_zone_status_unknown_zone() {
        let service = TelemetryService::new(10);

        let result = service.set_zone_status("Zone 9", ZoneStatus::Active).await;

        assert!(matches!(result, Err(ControlError::ZoneNotFound(_))));
    }

    #[tokio::test]
    async fn test_stop_all_zones() {
        let service = TelemetryService::new(10);
        service
            .set_zone_status("Zone 2", ZoneStatus::Active)
            .await
            .unwrap();

        service.stop_all_zones().await;

        let control = service.control().await;
        assert!(
            control
                .irrigation_zones
                .iter()
                .all(|zone| zone.status == ZoneStatus::Stopped)
        );
    }

    #[tokio::test]
    async fn test_control_setters_leave_telemetry_untouched() {
        let service = TelemetryService::new(10);
        let before = service.snapshot().await;

        service.set_mode(OperationMode::Manual).await;
        service.set_schedule("05:00", "19:00").await.unwrap();
        service.stop_all_zones().await;

        assert_eq!(service.snapshot().await, before);
        assert_eq!(service.history(Channel::Humidity).await.len(), 10);
    }
}
