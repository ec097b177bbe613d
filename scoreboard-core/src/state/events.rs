//! Events that trigger phase transitions

use scoreboard_protocol::Command;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// START_MATCH received
    Start,
    /// STOP_MATCH received
    Stop,
    /// RESET_MATCH received
    Reset,
}

impl Event {
    /// Phase event carried by a command, if any
    ///
    /// Score, timer, LED and ping commands are phase-independent.
    pub fn from_command(command: &Command) -> Option<Self> {
        match command {
            Command::StartMatch => Some(Event::Start),
            Command::StopMatch => Some(Event::Stop),
            Command::ResetMatch => Some(Event::Reset),
            _ => None,
        }
    }
}
