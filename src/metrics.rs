// src/metrics.rs

//! Prometheus implementation of [`MetricsSink`].
//!
//! Collectors are registered on a caller-owned [`Registry`] rather than the
//! process-wide default, so tests can build as many independent handles as
//! they need.

use prometheus::{Counter, Encoder, GaugeVec, Opts, Registry, TextEncoder};

use crate::common::types::Measurement;
use crate::supervisor::MetricsSink;

pub const VALUE_METRIC: &str = "sps30_value";
pub const READ_ERRORS_METRIC: &str = "sensor_read_errors_total";

/// Handle to the registered SPS30 collectors.
#[derive(Clone)]
pub struct PrometheusMetrics {
    values: GaugeVec,
    read_errors: Counter,
}

impl PrometheusMetrics {
    /// Creates the collectors and registers them on `registry`.
    pub fn register(registry: &Registry) -> Result<Self, prometheus::Error> {
        let values = GaugeVec::new(
            Opts::new(VALUE_METRIC, "SPS30 sensor values with type and unit labels"),
            &["type", "unit"],
        )?;
        let read_errors = Counter::new(READ_ERRORS_METRIC, "Total number of failed sensor reads")?;

        registry.register(Box::new(values.clone()))?;
        if let Err(e) = registry.register(Box::new(read_errors.clone())) {
            // Leave the registry as we found it.
            let _ = registry.unregister(Box::new(values.clone()));
            return Err(e);
        }

        Ok(Self {
            values,
            read_errors,
        })
    }

    /// Removes the collectors from `registry`.
    pub fn unregister(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        registry.unregister(Box::new(self.values.clone()))?;
        registry.unregister(Box::new(self.read_errors.clone()))
    }
}

impl MetricsSink for PrometheusMetrics {
    fn record(&self, measurement: &Measurement) {
        for (channel, value) in measurement.channels() {
            self.values
                .with_label_values(&[channel.name(), channel.unit()])
                .set(f64::from(value));
        }
    }

    fn record_read_error(&self) {
        self.read_errors.inc();
    }
}

/// Renders everything in `registry` in the text exposition format.
pub fn encode_text(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
