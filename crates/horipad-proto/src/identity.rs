use thiserror::Error;

/// Length of the identity block at register 0xFA.
pub const IDENTITY_LEN: usize = 6;

/// Expected device family, bytes 2..4 of the identity block.
pub const DEVICE_FAMILY: [u8; 2] = [0xA4, 0x20];

/// Expected device variant, byte 5 of the identity block.
pub const DEVICE_VARIANT: u8 = 0x01;

/// Identity block that failed a gate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    #[error("unknown device id {0:02x?}")]
    UnknownFamily([u8; 2]),
    #[error("wrong device type {0:02x}")]
    UnknownVariant(u8),
}

/// A validated identity block, kept only long enough to log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity([u8; IDENTITY_LEN]);

impl Identity {
    /// Gate the block on family then variant.
    pub fn parse(raw: &[u8; IDENTITY_LEN]) -> Result<Self, IdentityError> {
        if raw[2] != DEVICE_FAMILY[0] || raw[3] != DEVICE_FAMILY[1] {
            return Err(IdentityError::UnknownFamily([raw[2], raw[3]]));
        }
        if raw[5] != DEVICE_VARIANT {
            return Err(IdentityError::UnknownVariant(raw[5]));
        }
        Ok(Self(*raw))
    }

    pub fn bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }
}
