// src/supervisor/health.rs

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared sensor health, written by the poller and read by the HTTP surface.
///
/// Starts unhealthy until the first successful read.
#[derive(Debug, Clone, Default)]
pub struct HealthFlag(Arc<AtomicBool>);

impl HealthFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, healthy: bool) {
        self.0.store(healthy, Ordering::Release);
    }

    pub fn is_healthy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unhealthy() {
        assert!(!HealthFlag::new().is_healthy());
    }

    #[test]
    fn test_clones_share_state() {
        let writer = HealthFlag::new();
        let reader = writer.clone();
        writer.set(true);
        assert!(reader.is_healthy());
        writer.set(false);
        assert!(!reader.is_healthy());
    }
}
