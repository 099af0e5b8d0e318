use horipad_proto::{ButtonStates, Frame, FrameError, FRAME_LEN};
use thiserror::Error;

use crate::timings::{pause, Timings};
use crate::transport::{BusTransport, TransportError};

/// Attempts per poll call before giving up on the device.
pub const RETRIES_MAX: u32 = 5;

/// Offset byte that requests a fresh button frame.
const READ_REQUEST: u8 = 0x00;

/// Outcome of a failed poll call. Every variant sends the supervisor
/// back through the handshake; they are distinct so callers can apply
/// different policies later.
#[derive(Debug, Error)]
pub enum PollError {
    /// The read request itself was not accepted; the device is gone.
    #[error("read request rejected: {0}")]
    Disconnected(#[source] TransportError),
    /// The device answered with a truncated frame.
    #[error("short read: got {got} of {FRAME_LEN} bytes")]
    ShortRead { got: usize },
    /// Nothing but corrupt frames within the retry budget.
    #[error("no valid frame after {RETRIES_MAX} attempts")]
    Exhausted,
}

/// Request, read and decode one button frame, retrying corrupt
/// frames up to [`RETRIES_MAX`] times.
///
/// On success every `pressed` flag in `states` reflects the new
/// frame; `prev_pressed` tracking is untouched and belongs to the
/// translator.
pub fn poll<T: BusTransport>(
    bus: &mut T,
    states: &mut ButtonStates,
    timings: &Timings,
) -> Result<(), PollError> {
    for attempt in 1..=RETRIES_MAX {
        bus.write_byte(READ_REQUEST).map_err(PollError::Disconnected)?;
        pause(timings.settle);

        let mut raw = [0u8; FRAME_LEN];
        let got = bus
            .read_block(&mut raw)
            .map_err(PollError::Disconnected)?;

        match Frame::parse(&raw[..got]) {
            Ok(frame) => {
                states.apply_word(frame.button_word());
                return Ok(());
            }
            Err(FrameError::ShortRead { got }) => {
                return Err(PollError::ShortRead { got });
            }
            Err(FrameError::BadSentinel(byte)) => {
                log::debug!("corrupt frame, sentinel 0x{byte:02X}: {raw:02X?}");
                // No point waiting once the budget is spent.
                if attempt < RETRIES_MAX {
                    pause(timings.retry);
                }
            }
        }
    }
    Err(PollError::Exhausted)
}
