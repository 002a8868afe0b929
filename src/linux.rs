// src/linux.rs

//! [`Transport`] over a Linux `/dev/i2c-*` character device.

use std::path::Path;

use async_trait::async_trait;
use i2cdev::core::I2CDevice;
use i2cdev::linux::{LinuxI2CDevice, LinuxI2CError};
use tracing::debug;

use crate::common::hal_traits::Transport;

pub struct LinuxI2cTransport {
    device: LinuxI2CDevice,
}

impl LinuxI2cTransport {
    /// Opens `path` and binds it to the 7-bit `address`.
    pub fn open<P: AsRef<Path>>(path: P, address: u16) -> Result<Self, LinuxI2CError> {
        let device = LinuxI2CDevice::new(path.as_ref(), address)?;
        debug!(path = %path.as_ref().display(), address = format_args!("{address:#04x}"), "Opened I2C device");
        Ok(Self { device })
    }
}

#[async_trait]
impl Transport for LinuxI2cTransport {
    type Error = LinuxI2CError;

    // Transfers are a few dozen bytes at most, short enough to run inline.
    async fn exchange(
        &mut self,
        write: Option<&[u8]>,
        read: Option<&mut [u8]>,
    ) -> Result<(), Self::Error> {
        if let Some(write) = write {
            self.device.write(write)?;
        }
        if let Some(read) = read {
            self.device.read(read)?;
        }
        Ok(())
    }
}
