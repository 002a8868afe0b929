// src/driver/mod.rs

mod io_helpers;
mod shared;
mod transaction;

pub use shared::SharedSensor;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::common::{
    command::Command,
    error::ProtocolError,
    hal_traits::Transport,
    response::{decode_measurement, decode_status, MEASUREMENT_RESPONSE_LEN, STATUS_RESPONSE_LEN},
    timing,
    types::Measurement,
};

/// Operations the supervisor and the maintenance endpoint need from a sensor.
#[async_trait]
pub trait Sensor: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Starts continuous measurement.
    async fn init(&mut self) -> Result<(), Self::Error>;

    /// Stops measurement. Stopping an idle sensor is not an error.
    async fn stop(&mut self) -> Result<(), Self::Error>;

    /// Starts fan cleaning. Returns once the command is dispatched.
    async fn clean(&mut self) -> Result<(), Self::Error>;

    /// Returns whether the sensor reports measurement mode.
    async fn is_measuring(&mut self) -> Result<bool, Self::Error>;

    /// Reads the latest measured values.
    async fn read(&mut self) -> Result<Measurement, Self::Error>;
}

/// SPS30 driver over an I2C [`Transport`].
///
/// The driver is stateless protocol logic; it keeps no measurement history.
#[derive(Debug)]
pub struct Sps30<T> {
    transport: T,
}

impl<T> Sps30<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Sps30 { transport }
    }

    /// Gives the transport back.
    pub fn release(self) -> T {
        self.transport
    }
}

#[async_trait]
impl<T> Sensor for Sps30<T>
where
    T: Transport,
{
    type Error = ProtocolError<T::Error>;

    async fn init(&mut self) -> Result<(), Self::Error> {
        info!("Sending start measurement command to SPS30");
        self.send_command(Command::start_float()).await
    }

    async fn stop(&mut self) -> Result<(), Self::Error> {
        debug!("Sending stop measurement command to SPS30");
        self.send_command(Command::StopMeasurement).await
    }

    async fn clean(&mut self) -> Result<(), Self::Error> {
        info!("Sending fan cleaning command to SPS30");
        self.send_command(Command::StartFanCleaning).await
    }

    async fn is_measuring(&mut self) -> Result<bool, Self::Error> {
        let mut buf = [0u8; STATUS_RESPONSE_LEN];
        self.query(Command::ReadStatus, timing::STATUS_SETTLE, &mut buf).await?;
        Ok(decode_status(&buf)?)
    }

    async fn read(&mut self) -> Result<Measurement, Self::Error> {
        let mut buf = [0u8; MEASUREMENT_RESPONSE_LEN];
        self.query(Command::ReadMeasurement, timing::MEASUREMENT_SETTLE, &mut buf)
            .await?;
        Ok(decode_measurement(&buf)?)
    }
}
