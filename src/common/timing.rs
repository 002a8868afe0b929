// src/common/timing.rs

use core::time::Duration;

// === Device Timing ===

/// Wait between the read-status command and reading its response.
pub const STATUS_SETTLE: Duration = Duration::from_millis(50);
/// Wait between the read-measurement command and reading its response.
/// The sensor needs processing time after acknowledging the command.
pub const MEASUREMENT_SETTLE: Duration = Duration::from_millis(100);

// === Bus Retry ===

/// Attempts per bus transaction before giving up.
pub const BUS_ATTEMPTS: u32 = 3;
/// Pause after a failed bus transaction.
pub const BUS_RETRY_BACKOFF: Duration = Duration::from_millis(50);

// === Supervisor ===

/// Default interval between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Pause between stopping and restarting the sensor during recovery.
pub const RECOVERY_PAUSE: Duration = Duration::from_millis(300);
/// Consecutive failed polls that trigger a recovery attempt.
pub const FAILURE_THRESHOLD: u32 = 5;
