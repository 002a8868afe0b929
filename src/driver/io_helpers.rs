// src/driver/io_helpers.rs

use super::Sps30;
use crate::common::{error::ProtocolError, hal_traits::Transport, timing};
use tracing::debug;

impl<T> Sps30<T>
where
    T: Transport,
{
    /// Runs one bus transaction, retrying transient failures.
    ///
    /// Up to [`timing::BUS_ATTEMPTS`] attempts are made with
    /// [`timing::BUS_RETRY_BACKOFF`] between them. The last transport error is
    /// kept as the source of `TransportExhausted`.
    pub(super) async fn exchange_with_retry(
        &mut self,
        write: Option<&[u8]>,
        mut read: Option<&mut [u8]>,
    ) -> Result<(), ProtocolError<T::Error>> {
        let mut attempt = 1;
        loop {
            match self.transport.exchange(write, read.as_deref_mut()).await {
                Ok(()) => return Ok(()),
                Err(source) if attempt >= timing::BUS_ATTEMPTS => {
                    return Err(ProtocolError::TransportExhausted {
                        attempts: attempt,
                        source,
                    });
                }
                Err(e) => {
                    debug!(attempt, error = %e, "Bus transaction failed, retrying");
                    tokio::time::sleep(timing::BUS_RETRY_BACKOFF).await;
                    attempt += 1;
                }
            }
        }
    }
}
