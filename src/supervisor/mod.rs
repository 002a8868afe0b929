// src/supervisor/mod.rs

//! Periodic polling of a [`Sensor`] with failure counting and recovery.
//!
//! The supervisor runs one operation at a time on its sensor. When the sensor
//! is also used elsewhere, wrap it in a
//! [`SharedSensor`](crate::driver::SharedSensor). Health is published through
//! a [`HealthFlag`] after every attempt; measurements and read errors go to a
//! [`MetricsSink`].

mod health;
mod state;

pub use health::HealthFlag;
pub use state::{PollError, PollState, RecoveryRetry, SupervisorConfig};

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::common::types::Measurement;
use crate::driver::Sensor;

/// Destination for completed measurements and read failures.
pub trait MetricsSink: Send {
    /// Publishes every channel of `measurement`.
    fn record(&self, measurement: &Measurement);

    /// Counts one failed sensor exchange.
    fn record_read_error(&self);
}

pub struct Supervisor<S, M> {
    sensor: S,
    sink: M,
    health: HealthFlag,
    config: SupervisorConfig,
    state: PollState,
    failures: u32,
}

impl<S, M> Supervisor<S, M>
where
    S: Sensor,
    M: MetricsSink,
{
    pub fn new(sensor: S, sink: M, health: HealthFlag, config: SupervisorConfig) -> Self {
        Self {
            sensor,
            sink,
            health,
            config,
            state: PollState::Idle,
            failures: 0,
        }
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Consecutive failed polls since the last success or successful recovery.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Gives the sensor back.
    pub fn into_sensor(self) -> S {
        self.sensor
    }

    /// Runs one poll cycle, including recovery when it falls due.
    ///
    /// The returned error has already been logged and counted.
    pub async fn poll_once(&mut self) -> Result<(), PollError<S::Error>> {
        match self.sample().await {
            Ok(measurement) => {
                self.sink.record(&measurement);
                self.health.set(true);
                self.failures = 0;
                self.state = PollState::Sampling;
                info!("Sensor data updated");
                Ok(())
            }
            Err(e) => {
                if matches!(e, PollError::Sensor(_)) {
                    self.sink.record_read_error();
                }
                self.health.set(false);
                self.failures = self.failures.saturating_add(1);
                self.state = PollState::Degraded(self.failures);
                warn!(consecutive_failures = self.failures, "Sensor read failed");

                if self
                    .config
                    .recovery_retry
                    .is_due(self.failures, self.config.failure_threshold)
                {
                    self.recover().await;
                }
                Err(e)
            }
        }
    }

    async fn sample(&mut self) -> Result<Measurement, PollError<S::Error>> {
        let measuring = self.sensor.is_measuring().await.map_err(|e| {
            error!(error = %e, "Sensor status check failed");
            PollError::Sensor(e)
        })?;
        if !measuring {
            warn!("Sensor is not measuring, skipping update");
            return Err(PollError::NotMeasuring);
        }
        self.sensor.read().await.map_err(|e| {
            error!(error = %e, "Failed to read sensor data");
            PollError::Sensor(e)
        })
    }

    /// Stop, pause, re-init and verify. Health is left for the next poll to set.
    async fn recover(&mut self) {
        self.state = PollState::Recovering;
        warn!(consecutive_failures = self.failures, "Attempting to recover sensor");

        if let Err(e) = self.sensor.stop().await {
            debug!(error = %e, "Stop before re-init failed, continuing");
        }
        tokio::time::sleep(self.config.recovery_pause).await;

        match self.reinit().await {
            Ok(()) => {
                info!("Sensor re-initialized successfully");
                self.failures = 0;
                self.state = PollState::Sampling;
            }
            Err(e) => {
                error!(error = %e, "Sensor recovery failed, will retry later");
                self.state = PollState::Degraded(self.failures);
            }
        }
    }

    async fn reinit(&mut self) -> Result<(), PollError<S::Error>> {
        self.sensor.init().await.map_err(PollError::Sensor)?;
        if self.sensor.is_measuring().await.map_err(PollError::Sensor)? {
            Ok(())
        } else {
            Err(PollError::NotMeasuring)
        }
    }

    /// Polls on a fixed interval until `token` is cancelled, then stops the
    /// sensor and returns it.
    ///
    /// The first poll happens one interval after start. Cancellation is only
    /// observed between polls; a cycle in progress always completes.
    pub async fn run(mut self, token: CancellationToken) -> S {
        info!(interval = ?self.config.interval, "Sensor polling started");

        let mut ticker = tokio::time::interval_at(
            Instant::now() + self.config.interval,
            self.config.interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    // Failures are logged and counted inside poll_once.
                    let _ = self.poll_once().await;
                }
            }
        }

        match self.sensor.stop().await {
            Ok(()) => info!("Sensor stopped successfully"),
            Err(e) => error!(error = %e, "Sensor stop failed"),
        }
        info!("Sensor polling stopped");
        self.sensor
    }
}
