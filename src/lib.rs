// src/lib.rs

//! Driver for the Sensirion SPS30 particulate matter sensor over I2C, plus a
//! supervisor that polls it, recovers it when it stalls and publishes its
//! readings.

pub mod common;
pub mod driver;
pub mod supervisor;

#[cfg(feature = "exporter")]
pub mod api;
#[cfg(feature = "exporter")]
pub mod config;
#[cfg(all(feature = "exporter", target_os = "linux"))]
pub mod linux;
#[cfg(feature = "exporter")]
pub mod logging;
#[cfg(feature = "exporter")]
pub mod metrics;

// Re-export key types for convenience
pub use common::{Measurement, ProtocolError, Transport};
pub use driver::{Sensor, SharedSensor, Sps30};
pub use supervisor::{HealthFlag, MetricsSink, PollError, PollState, Supervisor, SupervisorConfig};
