use std::sync::Arc;
use std::time::Duration;

use crate::settings::Settings;
use crate::simulator::Simulator;
use crate::state::TelemetryService;

pub mod errors;
pub mod export;
pub mod settings;
pub mod simulate;
pub mod simulator;
pub mod state;

pub async fn run(settings: &Arc<Settings>) {
    let service = TelemetryService::new(settings.simulator.history_capacity);
    let simulator = Simulator::new(service.clone());

    let period = Duration::from_secs(settings.simulator.tick_interval_secs);
    let handle = simulator
        .start(period)
        .expect("Fail to start telemetry simulator");

    tracing::info!("telemetry simulator started, ticking every {period:?}");

    tokio::signal::ctrl_c()
        .await
        .expect("Fail to listen for shutdown signal");

    handle.stop().await;

    tracing::info!("telemetry simulator stopped");
}
