use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use horipad_proto::ButtonStates;

use crate::handshake::handshake;
use crate::poll::poll;
use crate::sink::EventSink;
use crate::timings::Timings;
use crate::translate::translate;
use crate::transport::BusTransport;

/// Where the supervisor currently is in its two-state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Top-level loop alternating between handshake attempts and poll
/// cycles, absorbing every bus failure into a reconnect.
pub struct Supervisor {
    states: ButtonStates,
    connection: ConnectionState,
    timings: Timings,
    reset_on_reconnect: bool,
}

impl Supervisor {
    /// `reset_on_reconnect` re-arms edge tracking when the device
    /// drops. Off by default behavior-wise: stale `prev_pressed`
    /// suppresses events for buttons that changed while disconnected,
    /// which matches the device's historical behavior.
    pub fn new(timings: Timings, reset_on_reconnect: bool) -> Self {
        Self {
            states: ButtonStates::new(),
            connection: ConnectionState::Disconnected,
            timings,
            reset_on_reconnect,
        }
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn buttons(&self) -> &ButtonStates {
        &self.states
    }

    /// Drive exactly one transition and return how long to wait
    /// before the next one. Failure paths return their back-off;
    /// state changes return zero so the loop reacts immediately.
    ///
    /// A sink failure is logged and absorbed: the edge stays pending
    /// in `states` and the next cycle retries it, so a stuttering
    /// output device never takes the bridge down.
    pub fn step<T, S>(&mut self, bus: &mut T, sink: &mut S) -> Duration
    where
        T: BusTransport,
        S: EventSink,
    {
        match self.connection {
            ConnectionState::Disconnected => {
                match handshake(bus, &self.timings) {
                    Ok(identity) => {
                        log::info!("detected device: {:02X?}", identity.bytes());
                        self.connection = ConnectionState::Connected;
                        Duration::ZERO
                    }
                    Err(err) => {
                        log::debug!("handshake failed: {err}");
                        self.timings.backoff
                    }
                }
            }
            ConnectionState::Connected => {
                match poll(bus, &mut self.states, &self.timings) {
                    Ok(()) => {
                        if let Err(err) = translate(&mut self.states, sink) {
                            log::warn!("event sink failed: {err}");
                        }
                        self.timings.poll_interval
                    }
                    Err(err) => {
                        log::warn!("connection lost: {err}");
                        self.connection = ConnectionState::Disconnected;
                        if self.reset_on_reconnect {
                            self.states.reset();
                        }
                        Duration::ZERO
                    }
                }
            }
        }
    }

    /// Run until the stop channel fires or its sender goes away.
    /// Inter-step waits ride on the stop channel so shutdown never
    /// waits out a back-off.
    pub fn run<T, S>(&mut self, bus: &mut T, sink: &mut S, stop: &Receiver<()>)
    where
        T: BusTransport,
        S: EventSink,
    {
        loop {
            let wait = self.step(bus, sink);
            if wait.is_zero() {
                match stop.try_recv() {
                    Ok(()) | Err(TryRecvError::Disconnected) => return,
                    Err(TryRecvError::Empty) => {}
                }
            } else {
                match stop.recv_timeout(wait) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                    Err(RecvTimeoutError::Timeout) => {}
                }
            }
        }
    }
}
