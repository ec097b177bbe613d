//! Inter-task communication channels
//!
//! The display buffer does not go through a channel: it is published in
//! [`DISPLAY`] and read by the multiplex task on every refresh cycle.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use scoreboard_core::{DisplayBuffer, DisplayCell, MatchState};
use scoreboard_protocol::Reply;

use crate::board::CONFIG;

/// Queued replies; a burst of PINGs gets one ACK each
const REPLY_CHANNEL_SIZE: usize = 4;

/// Replies waiting for the TX task
pub static REPLY_CHANNEL: Channel<CriticalSectionRawMutex, Reply, REPLY_CHANNEL_SIZE> =
    Channel::new();

/// Display buffer shared by the controller and multiplex tasks
pub static DISPLAY: DisplayCell =
    DisplayCell::new(DisplayBuffer::from_state(&MatchState::new(), CONFIG.layout));
