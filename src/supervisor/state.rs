// src/supervisor/state.rs

use core::fmt;
use core::time::Duration;

use crate::common::timing;

/// Where the poll loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    /// No poll has run yet.
    #[default]
    Idle,
    /// The last poll succeeded.
    Sampling,
    /// `n` consecutive polls have failed.
    Degraded(u32),
    /// A stop/re-init sequence is in progress.
    Recovering,
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollState::Idle => f.write_str("idle"),
            PollState::Sampling => f.write_str("sampling"),
            PollState::Degraded(n) => write!(f, "degraded ({n} failures)"),
            PollState::Recovering => f.write_str("recovering"),
        }
    }
}

/// A failed poll cycle.
#[derive(Debug, thiserror::Error)]
pub enum PollError<E>
where
    E: std::error::Error + 'static,
{
    /// The status query succeeded but the sensor is not in measurement mode.
    #[error("sensor is not measuring")]
    NotMeasuring,

    /// The sensor driver reported an error.
    #[error(transparent)]
    Sensor(E),
}

/// When recovery is retried after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryRetry {
    /// Retry once every `failure_threshold` further failures.
    #[default]
    EveryThreshold,
    /// Retry on every failed cycle once the threshold is reached.
    EveryCycle,
}

impl RecoveryRetry {
    /// Whether `failures` consecutive failures call for a recovery attempt.
    pub fn is_due(self, failures: u32, threshold: u32) -> bool {
        if threshold == 0 || failures < threshold {
            return false;
        }
        match self {
            RecoveryRetry::EveryThreshold => failures % threshold == 0,
            RecoveryRetry::EveryCycle => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SupervisorConfig {
    pub interval: Duration,
    pub failure_threshold: u32,
    pub recovery_pause: Duration,
    pub recovery_retry: RecoveryRetry,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            interval: timing::DEFAULT_POLL_INTERVAL,
            failure_threshold: timing::FAILURE_THRESHOLD,
            recovery_pause: timing::RECOVERY_PAUSE,
            recovery_retry: RecoveryRetry::default(),
        }
    }
}

impl SupervisorConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_threshold_cadence() {
        let due: Vec<u32> = (1..=16)
            .filter(|&n| RecoveryRetry::EveryThreshold.is_due(n, 5))
            .collect();
        assert_eq!(due, vec![5, 10, 15]);
    }

    #[test]
    fn test_every_cycle_cadence() {
        let due: Vec<u32> = (1..=8)
            .filter(|&n| RecoveryRetry::EveryCycle.is_due(n, 5))
            .collect();
        assert_eq!(due, vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_zero_threshold_never_recovers() {
        assert!(!RecoveryRetry::EveryThreshold.is_due(5, 0));
        assert!(!RecoveryRetry::EveryCycle.is_due(5, 0));
    }

    #[test]
    fn test_default_config() {
        let config = SupervisorConfig::default();
        assert_eq!(config.interval, Duration::from_secs(2));
        assert_eq!(config.failure_threshold, 5);
        assert_eq!(config.recovery_pause, Duration::from_millis(300));
        assert_eq!(config.recovery_retry, RecoveryRetry::EveryThreshold);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(PollState::Degraded(3).to_string(), "degraded (3 failures)");
        assert_eq!(PollState::default(), PollState::Idle);
    }
}
