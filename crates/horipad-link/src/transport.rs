use thiserror::Error;

/// Fixed I2C address the pad answers on.
pub const PERIPHERAL_ADDRESS: u16 = 0x52;

/// I/O failure reported by the underlying bus.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bus i/o failed: {0}")]
    Io(String),
}

/// Byte-level access to the peripheral on a numbered bus.
///
/// The methods mirror the smbus primitives the device speaks:
/// register writes for the handshake, bare byte writes to select a
/// read offset, and byte/block reads for identity and poll data.
pub trait BusTransport {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), TransportError>;
    fn write_byte(&mut self, value: u8) -> Result<(), TransportError>;
    fn read_byte(&mut self) -> Result<u8, TransportError>;
    /// Read up to `buf.len()` bytes, returning how many arrived.
    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}
