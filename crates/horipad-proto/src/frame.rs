use thiserror::Error;

/// Length of one poll frame on the wire.
pub const FRAME_LEN: usize = 6;

/// Framing marker the peripheral puts in byte 0 of a valid frame.
pub const FRAME_SENTINEL: u8 = 0x5F;

/// Why a raw block could not be accepted as a frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Transport returned fewer bytes than a full frame.
    #[error("short read: got {got} of {FRAME_LEN} bytes")]
    ShortRead { got: usize },
    /// Byte 0 did not carry the framing sentinel.
    #[error("bad frame sentinel: 0x{0:02X}")]
    BadSentinel(u8),
}

/// Decode the two button bytes into the logical button word.
/// Bits are active-low on the wire.
#[inline]
pub fn decode_word(b4: u8, b5: u8) -> u16 {
    (u16::from(255 - b4) << 8) | u16::from(255 - b5)
}

/// One validated 6-byte poll frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Validate a raw block read off the bus.
    pub fn parse(raw: &[u8]) -> Result<Self, FrameError> {
        if raw.len() != FRAME_LEN {
            return Err(FrameError::ShortRead { got: raw.len() });
        }
        if raw[0] != FRAME_SENTINEL {
            return Err(FrameError::BadSentinel(raw[0]));
        }
        let mut bytes = [0u8; FRAME_LEN];
        bytes.copy_from_slice(raw);
        Ok(Self(bytes))
    }

    /// The decoded, active-high button word.
    pub fn button_word(&self) -> u16 {
        decode_word(self.0[4], self.0[5])
    }

    pub fn bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}
