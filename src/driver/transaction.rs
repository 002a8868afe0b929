// src/driver/transaction.rs

use core::time::Duration;

use super::Sps30;
use crate::common::{command::Command, error::ProtocolError, hal_traits::Transport};
use tracing::trace;

impl<T> Sps30<T>
where
    T: Transport,
{
    /// Encodes and writes a command frame.
    pub(super) async fn send_command(&mut self, command: Command) -> Result<(), ProtocolError<T::Error>> {
        let frame = command.encode()?;
        trace!(%command, frame = ?frame, "Sending command");
        self.exchange_with_retry(Some(&frame), None).await
    }

    /// Sends `command`, waits `settle` for the sensor to prepare its answer,
    /// then reads the raw response into `response`.
    ///
    /// The response is returned undecoded; checksum validation is up to the caller.
    pub(super) async fn query(
        &mut self,
        command: Command,
        settle: Duration,
        response: &mut [u8],
    ) -> Result<(), ProtocolError<T::Error>> {
        self.send_command(command).await?;
        tokio::time::sleep(settle).await;
        self.exchange_with_retry(None, Some(&mut *response)).await?;
        trace!(%command, response = ?response, "Received response");
        Ok(())
    }
}
