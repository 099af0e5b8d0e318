use horipad_proto::Button;
use thiserror::Error;

/// Failure while publishing to the virtual input device.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("event emit failed: {0}")]
    Emit(String),
}

/// Destination for translated button events.
///
/// Key events accumulate until [`emit_sync`](EventSink::emit_sync)
/// marks the batch complete; consumers apply the whole batch as one
/// atomic state update.
pub trait EventSink {
    fn emit_key(&mut self, button: Button, pressed: bool) -> Result<(), SinkError>;
    fn emit_sync(&mut self) -> Result<(), SinkError>;
}
