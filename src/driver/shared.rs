// src/driver/shared.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Sensor;
use crate::common::types::Measurement;

/// A sensor shared between the poller and maintenance requests.
///
/// Every operation holds the lock from its first command to its last response
/// read, settle delays included, so one caller's command can never land
/// between another caller's command and its response.
pub struct SharedSensor<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> SharedSensor<S> {
    pub fn new(sensor: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sensor)),
        }
    }
}

impl<S> Clone for SharedSensor<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl<S> Sensor for SharedSensor<S>
where
    S: Sensor,
{
    type Error = S::Error;

    async fn init(&mut self) -> Result<(), Self::Error> {
        self.inner.lock().await.init().await
    }

    async fn stop(&mut self) -> Result<(), Self::Error> {
        self.inner.lock().await.stop().await
    }

    async fn clean(&mut self) -> Result<(), Self::Error> {
        self.inner.lock().await.clean().await
    }

    async fn is_measuring(&mut self) -> Result<bool, Self::Error> {
        self.inner.lock().await.is_measuring().await
    }

    async fn read(&mut self) -> Result<Measurement, Self::Error> {
        self.inner.lock().await.read().await
    }
}
