//! Receive-link statistics
//!
//! Drops are never reported to the sender, so these counters are the only
//! record of them. Counters wrap on overflow.

use scoreboard_protocol::{CommandError, FrameError};

/// Counters for the serial command link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStats {
    /// Packets that passed every framing check
    pub packets_accepted: u32,
    /// Packets dropped for a bad end marker
    pub framing_errors: u32,
    /// Packets dropped for a length above the maximum
    pub length_errors: u32,
    /// Packets dropped for a checksum mismatch
    pub checksum_errors: u32,
    /// Partial packets abandoned by the byte timeout
    pub timeouts: u32,
    /// Valid packets with an unknown command code
    pub unknown_commands: u32,
    /// Valid packets too short for their command, or with a bad selector
    pub malformed_commands: u32,
    /// PING acknowledgments produced
    pub pings_answered: u32,
}

impl LinkStats {
    /// Count a packet rejected by the framer
    pub fn record_frame_error(&mut self, error: &FrameError) {
        let counter = match error {
            FrameError::LengthExceeded(_) => &mut self.length_errors,
            FrameError::BadEndMarker(_) => &mut self.framing_errors,
            FrameError::ChecksumMismatch { .. } => &mut self.checksum_errors,
            // Encoder-side errors never come out of the parser
            FrameError::PayloadTooLarge | FrameError::BufferTooSmall => return,
        };
        *counter = counter.wrapping_add(1);
    }

    /// Count a valid packet that did not map to a command
    pub fn record_command_error(&mut self, error: &CommandError) {
        let counter = match error {
            CommandError::Unknown(_) => &mut self.unknown_commands,
            CommandError::MissingData { .. } | CommandError::UnknownAlliance(_) => {
                &mut self.malformed_commands
            }
        };
        *counter = counter.wrapping_add(1);
    }

    /// Packets dropped by the framer
    pub fn dropped(&self) -> u32 {
        self.framing_errors
            .wrapping_add(self.length_errors)
            .wrapping_add(self.checksum_errors)
            .wrapping_add(self.timeouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_errors_counted_by_kind() {
        let mut stats = LinkStats::default();
        stats.record_frame_error(&FrameError::LengthExceeded(11));
        stats.record_frame_error(&FrameError::BadEndMarker(0));
        stats.record_frame_error(&FrameError::ChecksumMismatch {
            expected: 0x25,
            received: 0x24,
        });
        stats.record_frame_error(&FrameError::BufferTooSmall);

        assert_eq!(stats.length_errors, 1);
        assert_eq!(stats.framing_errors, 1);
        assert_eq!(stats.checksum_errors, 1);
        assert_eq!(stats.dropped(), 3);
    }

    #[test]
    fn test_command_errors_counted() {
        let mut stats = LinkStats::default();
        stats.record_command_error(&CommandError::Unknown(0x42));
        stats.record_command_error(&CommandError::UnknownAlliance(3));
        assert_eq!(stats.unknown_commands, 1);
        assert_eq!(stats.malformed_commands, 1);
    }

    #[test]
    fn test_counters_wrap() {
        let mut stats = LinkStats {
            checksum_errors: u32::MAX,
            ..LinkStats::default()
        };
        stats.record_frame_error(&FrameError::ChecksumMismatch {
            expected: 0,
            received: 1,
        });
        assert_eq!(stats.checksum_errors, 0);
    }
}
