//! Receive path and command dispatcher
//!
//! The [`Controller`] owns the single [`MatchState`] and the packet parser.
//! Bytes go in through [`Controller::feed`] (or [`Controller::poll`] with a
//! [`UartRx`]); every command that changes what the digits show publishes
//! a rebuilt buffer to the shared [`DisplayCell`] before returning.

use scoreboard_hal::UartRx;
use scoreboard_protocol::{Command, FrameParser, Reply};

use crate::config::{DisplayLayout, ScoreboardConfig};
use crate::display::{DisplayBuffer, DisplayCell};
use crate::state::{Event, MatchState};
use crate::stats::LinkStats;

/// Match controller: parser, dispatcher and state owner
pub struct Controller<'a> {
    cell: &'a DisplayCell,
    state: MatchState,
    parser: FrameParser,
    stats: LinkStats,
    layout: DisplayLayout,
    byte_timeout_ms: u32,
}

impl<'a> Controller<'a> {
    /// Create a controller in the power-on state and publish its buffer
    pub fn new(cell: &'a DisplayCell, config: &ScoreboardConfig) -> Self {
        let controller = Self {
            cell,
            state: MatchState::new(),
            parser: FrameParser::new(),
            stats: LinkStats::default(),
            layout: config.layout,
            byte_timeout_ms: config.byte_timeout_ms,
        };
        controller.publish();
        controller
    }

    /// Current match state
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Link counters
    pub fn stats(&self) -> &LinkStats {
        &self.stats
    }

    /// Configured digit layout
    pub fn layout(&self) -> DisplayLayout {
        self.layout
    }

    /// Per-byte receive timeout
    pub fn byte_timeout_ms(&self) -> u32 {
        self.byte_timeout_ms
    }

    /// Buffer for the current state
    pub fn buffer(&self) -> DisplayBuffer {
        DisplayBuffer::from_state(&self.state, self.layout)
    }

    /// Feed one received byte
    ///
    /// Returns a reply to transmit when the byte completed a PING.
    /// Rejected packets and unusable commands are counted and dropped.
    pub fn feed(&mut self, byte: u8) -> Option<Reply> {
        let packet = match self.parser.feed(byte) {
            Ok(Some(packet)) => packet,
            Ok(None) => return None,
            Err(e) => {
                self.stats.record_frame_error(&e);
                return None;
            }
        };
        self.stats.packets_accepted = self.stats.packets_accepted.wrapping_add(1);

        match Command::from_packet(&packet) {
            Ok(command) => self.dispatch(command),
            Err(e) => {
                self.stats.record_command_error(&e);
                None
            }
        }
    }

    /// The receive wait expired
    ///
    /// Abandons any partial packet so the next start marker begins a
    /// fresh one. Returns true if a packet was in progress.
    pub fn byte_timeout(&mut self) -> bool {
        let abandoned = self.parser.timeout();
        if abandoned {
            self.stats.timeouts = self.stats.timeouts.wrapping_add(1);
        }
        abandoned
    }

    /// Apply a command to the match state
    pub fn dispatch(&mut self, command: Command) -> Option<Reply> {
        match command {
            Command::UpdateScore { red, blue } => {
                self.state.set_scores(red, blue);
                self.publish();
            }
            Command::UpdateTimer { minutes, seconds } => {
                self.state.set_timer(minutes, seconds);
                self.publish();
            }
            Command::StartMatch => {
                self.state.apply(Event::Start);
            }
            Command::StopMatch => {
                self.state.apply(Event::Stop);
            }
            Command::ResetMatch => {
                self.state.apply(Event::Reset);
                self.publish();
            }
            Command::Ping => {
                self.stats.pings_answered = self.stats.pings_answered.wrapping_add(1);
                return Some(Reply::Ack);
            }
            Command::SetLed { alliance, on } => {
                self.state.set_indicator(alliance, on);
            }
        }
        None
    }

    /// Wait for one byte on `uart` and process it
    ///
    /// A timed-out wait is handled like [`byte_timeout`](Self::byte_timeout).
    pub fn poll<U: UartRx>(&mut self, uart: &mut U) -> Result<Option<Reply>, U::Error> {
        match uart.read_byte_timeout(self.byte_timeout_ms)? {
            Some(byte) => Ok(self.feed(byte)),
            None => {
                self.byte_timeout();
                Ok(None)
            }
        }
    }

    fn publish(&self) {
        self.cell.publish(&self.buffer());
    }
}
