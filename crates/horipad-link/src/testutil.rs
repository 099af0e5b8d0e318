//! Scripted fakes for the transport and sink seams.

use std::collections::VecDeque;

use horipad_proto::{Button, FRAME_SENTINEL, IDENTITY_LEN};

use crate::sink::{EventSink, SinkError};
use crate::transport::{BusTransport, TransportError};

/// Identity block that passes both handshake gates.
pub(crate) const GOOD_IDENTITY: [u8; IDENTITY_LEN] =
    [0x00, 0x00, 0xA4, 0x20, 0x00, 0x01];

/// Encode a button word into its active-low wire frame.
pub(crate) fn wire_frame(word: u16) -> Vec<u8> {
    let b4 = 255 - (word >> 8) as u8;
    let b5 = 255 - (word & 0xFF) as u8;
    vec![FRAME_SENTINEL, 0x00, 0x00, 0x00, b4, b5]
}

/// A full-length frame with a bad sentinel.
pub(crate) fn corrupt_frame() -> Vec<u8> {
    vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
}

/// Bus double that records writes and serves scripted reads.
pub(crate) struct MockTransport {
    pub register_writes: Vec<(u8, u8)>,
    pub byte_writes: Vec<u8>,
    pub fail_register_writes: bool,
    pub fail_byte_writes: bool,
    identity: [u8; IDENTITY_LEN],
    identity_cursor: usize,
    frames: VecDeque<Vec<u8>>,
}

impl MockTransport {
    pub fn new(identity: [u8; IDENTITY_LEN]) -> Self {
        Self {
            register_writes: Vec::new(),
            byte_writes: Vec::new(),
            fail_register_writes: false,
            fail_byte_writes: false,
            identity,
            identity_cursor: 0,
            frames: VecDeque::new(),
        }
    }

    /// Queue a block to be served by the next `read_block`.
    pub fn push_frame(&mut self, frame: Vec<u8>) {
        self.frames.push_back(frame);
    }

    /// Alias that documents intent at the call site.
    pub fn push_short_frame(&mut self, frame: Vec<u8>) {
        self.push_frame(frame);
    }
}

impl BusTransport for MockTransport {
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), TransportError> {
        if self.fail_register_writes {
            return Err(TransportError::Io("scripted write failure".into()));
        }
        self.register_writes.push((reg, value));
        Ok(())
    }

    fn write_byte(&mut self, value: u8) -> Result<(), TransportError> {
        if self.fail_byte_writes {
            return Err(TransportError::Io("scripted write failure".into()));
        }
        if value == 0xFA {
            self.identity_cursor = 0;
        }
        self.byte_writes.push(value);
        Ok(())
    }

    fn read_byte(&mut self) -> Result<u8, TransportError> {
        let byte = self.identity[self.identity_cursor % IDENTITY_LEN];
        self.identity_cursor += 1;
        Ok(byte)
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, TransportError> {
        let Some(frame) = self.frames.pop_front() else {
            return Err(TransportError::Io("no scripted frame left".into()));
        };
        let n = frame.len().min(buf.len());
        buf[..n].copy_from_slice(&frame[..n]);
        Ok(n)
    }
}

/// What a sink saw, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SinkEvent {
    Key(Button, bool),
    Sync,
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

/// Sink that rejects the next `failures` key events, then records.
#[derive(Default)]
pub(crate) struct FlakySink {
    pub failures: usize,
    pub inner: RecordingSink,
}

impl EventSink for FlakySink {
    fn emit_key(&mut self, button: Button, pressed: bool) -> Result<(), SinkError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(SinkError::Emit("scripted emit failure".into()));
        }
        self.inner.emit_key(button, pressed)
    }

    fn emit_sync(&mut self) -> Result<(), SinkError> {
        self.inner.emit_sync()
    }
}

impl EventSink for RecordingSink {
    fn emit_key(&mut self, button: Button, pressed: bool) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Key(button, pressed));
        Ok(())
    }

    fn emit_sync(&mut self) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Sync);
        Ok(())
    }
}
