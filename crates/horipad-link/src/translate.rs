use horipad_proto::ButtonStates;

use crate::sink::{EventSink, SinkError};

/// Publish every edge since the last emitted batch as one synchronized
/// group of key events.
///
/// `prev_pressed` advances only for buttons whose change is actually
/// emitted, so a failed emit leaves the edge pending. Returns whether
/// a batch (including its sync marker) went out; an unchanged button
/// set emits nothing at all.
pub fn translate<S: EventSink>(
    states: &mut ButtonStates,
    sink: &mut S,
) -> Result<bool, SinkError> {
    let mut dirty = false;
    for (button, state) in states.iter_mut() {
        if state.pressed != state.prev_pressed {
            sink.emit_key(button, state.pressed)?;
            state.prev_pressed = state.pressed;
            dirty = true;
        }
    }
    if dirty {
        sink.emit_sync()?;
    }
    Ok(dirty)
}
