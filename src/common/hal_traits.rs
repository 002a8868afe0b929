// src/common/hal_traits.rs

use async_trait::async_trait;

/// Abstraction for a single transaction on the sensor bus.
///
/// The physical link (opening, closing, addressing) belongs to the
/// implementation. The driver only ever asks for one transaction at a time.
#[async_trait]
pub trait Transport: Send {
    /// Associated error type for bus failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes `write` (if given), then fills `read` (if given).
    ///
    /// Write-only and read-only transactions are the common case; both at once
    /// is a combined write-then-read transaction.
    async fn exchange(
        &mut self,
        write: Option<&[u8]>,
        read: Option<&mut [u8]>,
    ) -> Result<(), Self::Error>;
}

/// Adapts any blocking `embedded-hal` I2C bus to [`Transport`].
#[cfg(feature = "embedded-hal")]
pub struct HalTransport<I2C> {
    i2c: I2C,
    address: u8,
}

#[cfg(feature = "embedded-hal")]
impl<I2C> HalTransport<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Gives the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "embedded-hal")]
#[async_trait]
impl<I2C> Transport for HalTransport<I2C>
where
    I2C: embedded_hal::i2c::I2c + Send,
    I2C::Error: Send + Sync + 'static,
{
    type Error = super::error::BusError<I2C::Error>;

    async fn exchange(
        &mut self,
        write: Option<&[u8]>,
        read: Option<&mut [u8]>,
    ) -> Result<(), Self::Error> {
        let result = match (write, read) {
            (Some(write), Some(read)) => self.i2c.write_read(self.address, write, read),
            (Some(write), None) => self.i2c.write(self.address, write),
            (None, Some(read)) => self.i2c.read(self.address, read),
            (None, None) => Ok(()),
        };
        result.map_err(super::error::BusError)
    }
}
