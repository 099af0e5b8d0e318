use horipad_link::{BusTransport, TransportError, PERIPHERAL_ADDRESS};
use rppal::i2c::I2c;

/// smbus-backed transport on `/dev/i2c-<bus>`.
pub(crate) struct I2cTransport {
    i2c: I2c,
}

impl I2cTransport {
    /// Open the numbered bus and select the pad's fixed address.
    pub fn open(bus: u8) -> Result<Self, rppal::i2c::Error> {
        let mut i2c = I2c::with_bus(bus)?;
        i2c.set_slave_address(PERIPHERAL_ADDRESS)?;
        Ok(Self { i2c })
    }
}

fn io_err(err: rppal::i2c::Error) -> TransportError {
    TransportError::Io(err.to_string())
}

impl BusTransport for I2cTransport {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), TransportError> {
        self.i2c.smbus_write_byte(reg, value).map_err(io_err)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), TransportError> {
        self.i2c.smbus_send_byte(value).map_err(io_err)
    }

    fn read_byte(&mut self) -> Result<u8, TransportError> {
        self.i2c.smbus_receive_byte().map_err(io_err)
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        self.i2c.read(buf).map_err(io_err)
    }
}
