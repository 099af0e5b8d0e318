use std::thread;
use std::time::Duration;

/// Every delay the state machine takes, as named injectable values.
///
/// Production uses [`Timings::default`]; tests use
/// [`Timings::instant`] so nothing touches the wall clock.
#[derive(Debug, Clone)]
pub struct Timings {
    /// Settle time after a register write or read request.
    pub settle: Duration,
    /// Gap between single-byte identity reads.
    pub inter_byte: Duration,
    /// Delay before re-requesting after a corrupt frame.
    pub retry: Duration,
    /// Sleep between successful poll cycles.
    pub poll_interval: Duration,
    /// Back-off between handshake attempts while disconnected.
    pub backoff: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(10),
            inter_byte: Duration::from_micros(10),
            retry: Duration::from_millis(1),
            poll_interval: Duration::from_millis(50),
            backoff: Duration::from_millis(500),
        }
    }
}

impl Timings {
    /// All delays zeroed.
    pub fn instant() -> Self {
        Self {
            settle: Duration::ZERO,
            inter_byte: Duration::ZERO,
            retry: Duration::ZERO,
            poll_interval: Duration::ZERO,
            backoff: Duration::ZERO,
        }
    }
}

/// Blocking sleep that skips the syscall for zeroed test timings.
pub(crate) fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}
