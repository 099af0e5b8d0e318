use horipad_proto::{Identity, IdentityError, IDENTITY_LEN};
use thiserror::Error;

use crate::timings::{pause, Timings};
use crate::transport::{BusTransport, TransportError};

/// Wake/mode/enable register sequence of the extension protocol.
const WAKE_REGISTER: u8 = 0xF0;
const WAKE_VALUE: u8 = 0x55;
const MODE_REGISTER: u8 = 0xFB;
const MODE_VALUE: u8 = 0x00;
const ENABLE_REGISTER: u8 = 0xFE;
const ENABLE_VALUE: u8 = 0x01;

/// Offset the identity block is read from.
const IDENTITY_OFFSET: u8 = 0xFA;

/// Why a connection attempt did not produce a pollable device.
#[derive(Debug, Error)]
pub enum HandshakeError {
    /// A bus write or the identity read failed; all are fatal for
    /// this attempt.
    #[error("handshake transport failure: {0}")]
    Transport(#[from] TransportError),
    #[error("unknown device id {0:02x?}")]
    UnknownFamily([u8; 2]),
    #[error("wrong device type {0:02x}")]
    UnknownVariant(u8),
}

impl From<IdentityError> for HandshakeError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::UnknownFamily(id) => HandshakeError::UnknownFamily(id),
            IdentityError::UnknownVariant(v) => HandshakeError::UnknownVariant(v),
        }
    }
}

/// Wake and configure the peripheral, then gate it on its identity
/// block.
///
/// Each register write is followed by a settle delay; the identity is
/// read one byte at a time with a short gap to avoid overrunning the
/// bus.
pub fn handshake<T: BusTransport>(
    bus: &mut T,
    timings: &Timings,
) -> Result<Identity, HandshakeError> {
    bus.write_register(WAKE_REGISTER, WAKE_VALUE)?;
    pause(timings.settle);
    bus.write_register(MODE_REGISTER, MODE_VALUE)?;
    pause(timings.settle);
    bus.write_register(ENABLE_REGISTER, ENABLE_VALUE)?;
    pause(timings.settle);

    bus.write_byte(IDENTITY_OFFSET)?;
    pause(timings.inter_byte);
    let mut raw = [0u8; IDENTITY_LEN];
    for slot in &mut raw {
        *slot = bus.read_byte()?;
        pause(timings.inter_byte);
    }

    Ok(Identity::parse(&raw)?)
}
