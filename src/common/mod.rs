// src/common/mod.rs

// --- Wire protocol building blocks shared by the driver ---
pub mod command;
pub mod crc;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod response;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::Command;

// From error.rs
pub use error::{BusError, DecodeError, EncodeError, ProtocolError};

// From frame.rs
pub use frame::{decode_pairs, RawPair};

// From hal_traits.rs
pub use hal_traits::Transport;
#[cfg(feature = "embedded-hal")]
pub use hal_traits::HalTransport;

// From response/mod.rs
pub use response::{decode_measurement, decode_status};

// From types.rs
pub use types::{Channel, Measurement};
