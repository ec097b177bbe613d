//! Command and reply types for the scoreboard protocol
//!
//! Host → controller: the seven match commands below.
//! Controller → host: only the PING acknowledgment.

use crate::frame::{FrameError, Packet, END_MARKER, START_MARKER};

// Command codes: Host → Controller
pub const CMD_UPDATE_SCORE: u8 = 0x01;
pub const CMD_UPDATE_TIMER: u8 = 0x02;
pub const CMD_START_MATCH: u8 = 0x03;
pub const CMD_STOP_MATCH: u8 = 0x04;
pub const CMD_RESET_MATCH: u8 = 0x05;
pub const CMD_PING: u8 = 0x06;
pub const CMD_SET_LED: u8 = 0x07;

/// Acknowledgment code carried in the PING reply
pub const ACK_CODE: u8 = 0xCC;

/// Largest score a two-digit display can show
pub const MAX_SCORE: u8 = 99;
/// Largest minutes value a two-digit display can show
pub const MAX_MINUTES: u8 = 99;
/// Largest seconds value of the match clock
pub const MAX_SECONDS: u8 = 59;

// Alliance selector values used by SET_LED
const ALLIANCE_RED: u8 = 0x01;
const ALLIANCE_BLUE: u8 = 0x02;

/// One of the two competing teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alliance {
    Red,
    Blue,
}

impl Alliance {
    /// Parse an alliance from its wire selector byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            ALLIANCE_RED => Some(Alliance::Red),
            ALLIANCE_BLUE => Some(Alliance::Blue),
            _ => None,
        }
    }

    /// Convert to wire selector byte
    pub fn to_byte(self) -> u8 {
        match self {
            Alliance::Red => ALLIANCE_RED,
            Alliance::Blue => ALLIANCE_BLUE,
        }
    }
}

/// Why a validated packet does not map to a command
///
/// None of these are reported to the sender; the controller treats them
/// as no-ops so newer hosts can talk to older firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Command code not implemented by this firmware
    Unknown(u8),
    /// Known command with fewer data bytes than it needs
    MissingData { command: u8, needed: u8, got: u8 },
    /// SET_LED with a selector that is neither red nor blue
    UnknownAlliance(u8),
}

/// Commands parsed from host packets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set both alliance scores
    UpdateScore { red: u8, blue: u8 },
    /// Set the match clock
    UpdateTimer { minutes: u8, seconds: u8 },
    /// Start or resume the match
    StartMatch,
    /// Pause the match
    StopMatch,
    /// Restore power-on defaults
    ResetMatch,
    /// Liveness probe, answered with [`Reply::Ack`]
    Ping,
    /// Set one alliance indicator flag
    SetLed { alliance: Alliance, on: bool },
}

impl Command {
    /// Score update with both values clamped to the displayable range
    pub fn update_score(red: u8, blue: u8) -> Self {
        Command::UpdateScore {
            red: red.min(MAX_SCORE),
            blue: blue.min(MAX_SCORE),
        }
    }

    /// Timer update with both values clamped to the displayable range
    pub fn update_timer(minutes: u8, seconds: u8) -> Self {
        Command::UpdateTimer {
            minutes: minutes.min(MAX_MINUTES),
            seconds: seconds.min(MAX_SECONDS),
        }
    }

    /// Wire command code
    pub fn code(&self) -> u8 {
        match self {
            Command::UpdateScore { .. } => CMD_UPDATE_SCORE,
            Command::UpdateTimer { .. } => CMD_UPDATE_TIMER,
            Command::StartMatch => CMD_START_MATCH,
            Command::StopMatch => CMD_STOP_MATCH,
            Command::ResetMatch => CMD_RESET_MATCH,
            Command::Ping => CMD_PING,
            Command::SetLed { .. } => CMD_SET_LED,
        }
    }

    /// Parse a command from a validated packet
    ///
    /// Data bytes beyond what a command needs are ignored.
    pub fn from_packet(packet: &Packet) -> Result<Self, CommandError> {
        let data = packet.data.as_slice();
        match packet.command {
            CMD_UPDATE_SCORE => {
                let [red, blue] = two_bytes(packet.command, data)?;
                Ok(Command::UpdateScore { red, blue })
            }
            CMD_UPDATE_TIMER => {
                let [minutes, seconds] = two_bytes(packet.command, data)?;
                Ok(Command::UpdateTimer { minutes, seconds })
            }
            CMD_START_MATCH => Ok(Command::StartMatch),
            CMD_STOP_MATCH => Ok(Command::StopMatch),
            CMD_RESET_MATCH => Ok(Command::ResetMatch),
            CMD_PING => Ok(Command::Ping),
            CMD_SET_LED => {
                let [selector, state] = two_bytes(packet.command, data)?;
                let alliance =
                    Alliance::from_byte(selector).ok_or(CommandError::UnknownAlliance(selector))?;
                Ok(Command::SetLed {
                    alliance,
                    on: state != 0,
                })
            }
            other => Err(CommandError::Unknown(other)),
        }
    }

    /// Encode this command into a packet (host side, tests, simulation)
    pub fn to_packet(&self) -> Result<Packet, FrameError> {
        match *self {
            Command::UpdateScore { red, blue } => Packet::new(CMD_UPDATE_SCORE, &[red, blue]),
            Command::UpdateTimer { minutes, seconds } => {
                Packet::new(CMD_UPDATE_TIMER, &[minutes, seconds])
            }
            Command::SetLed { alliance, on } => {
                Packet::new(CMD_SET_LED, &[alliance.to_byte(), on as u8])
            }
            Command::StartMatch | Command::StopMatch | Command::ResetMatch | Command::Ping => {
                Ok(Packet::empty(self.code()))
            }
        }
    }
}

fn two_bytes(command: u8, data: &[u8]) -> Result<[u8; 2], CommandError> {
    match data {
        [first, second, ..] => Ok([*first, *second]),
        _ => Err(CommandError::MissingData {
            command,
            needed: 2,
            got: data.len() as u8,
        }),
    }
}

/// Replies sent from the controller to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// PING acknowledgment
    Ack,
}

/// Exact bytes of the PING acknowledgment
pub const ACK_REPLY: [u8; 3] = [START_MARKER, ACK_CODE, END_MARKER];

impl Reply {
    /// Wire bytes for this reply
    ///
    /// The ACK is a fixed three-byte sequence, not a regular packet: it has
    /// no length or checksum field.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            Reply::Ack => &ACK_REPLY,
        }
    }

    /// Recognize a reply at the start of `bytes` (host side)
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&ACK_REPLY) {
            Some(Reply::Ack)
        } else {
            None
        }
    }
}
