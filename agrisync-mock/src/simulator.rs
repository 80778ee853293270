use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::simulate::TickDeltas;
use crate::state::TelemetryService;

/// Periodic telemetry tick driver.
///
/// At most one tick task runs per simulator: a second `start` while one
/// is running returns `None` instead of spawning a competing timer.
pub struct Simulator {
    service: TelemetryService,
    running: Arc<AtomicBool>,
}

/// Cancellation handle for a running tick task.
pub struct SimulatorHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Simulator {
    pub fn new(service: TelemetryService) -> Self {
        Self {
            service,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Spawns the tick loop with the given period. Returns `None` when a
    /// tick task is already running.
    pub fn start(&self, period: Duration) -> Option<SimulatorHandle> {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::warn!("simulator already running, start ignored");
            return None;
        }

        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let service = self.service.clone();
        let running = Arc::clone(&self.running);

        let task = tokio::spawn(async move {
            let mut interval = time::interval(period);
            // The first interval tick fires immediately; skip it so the
            // seed data stands until one full period has elapsed.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let deltas = TickDeltas::draw(&mut rand::rng());
                        let snapshot = service.apply_tick(deltas).await;

                        tracing::debug!(
                            soil_moisture = snapshot.soil_moisture,
                            temperature = snapshot.temperature,
                            humidity = snapshot.humidity,
                            "telemetry tick"
                        );
                    }
                    _ = shutdown_rx.changed() => break,
                }
            }

            running.store(false, Ordering::SeqCst);
        });

        Some(SimulatorHandle { shutdown, task })
    }
}

impl SimulatorHandle {
    /// Stops the tick loop and waits for the task to exit. No in-flight
    /// work is aborted: a tick in progress completes before the task
    /// observes the shutdown signal.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
