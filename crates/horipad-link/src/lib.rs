//! Connection and polling state machine for the Hori I2C pad.
//!
//! Everything here is generic over the [`BusTransport`] and
//! [`EventSink`] seams, so the whole machine runs under test against
//! scripted fakes with zeroed delays.

mod handshake;
mod poll;
mod sink;
mod supervisor;
mod timings;
mod translate;
mod transport;

#[cfg(test)]
mod testutil;

pub use handshake::{handshake, HandshakeError};
pub use poll::{poll, PollError, RETRIES_MAX};
pub use sink::{EventSink, SinkError};
pub use supervisor::{ConnectionState, Supervisor};
pub use timings::Timings;
pub use translate::translate;
pub use transport::{BusTransport, TransportError, PERIPHERAL_ADDRESS};
