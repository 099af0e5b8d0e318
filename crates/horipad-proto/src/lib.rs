//! Wire protocol for the Hori I2C Fighting Commander.
//!
//! Pure data: the button table, poll-frame parsing and the identity
//! block. No I/O lives here; the link crate drives a transport and
//! feeds raw bytes into these types.

mod buttons;
mod frame;
mod identity;

pub use buttons::{Button, ButtonState, ButtonStates, BUTTON_COUNT};
pub use frame::{decode_word, Frame, FrameError, FRAME_LEN, FRAME_SENTINEL};
pub use identity::{Identity, IdentityError, DEVICE_FAMILY, DEVICE_VARIANT, IDENTITY_LEN};
