//! Packet encoding and decoding for the scoreboard protocol.
//!
//! Packet format:
//! - START (1 byte): 0xAA synchronization byte
//! - CMD (1 byte): command code
//! - LEN (1 byte): data length (0-10)
//! - DATA (0-10 bytes): command-specific data
//! - CHECKSUM (1 byte): XOR of CMD, LEN, and all DATA bytes
//! - END (1 byte): 0x55 terminator

use heapless::Vec;

/// Packet synchronization byte
pub const START_MARKER: u8 = 0xAA;

/// Packet terminator byte
pub const END_MARKER: u8 = 0x55;

/// Maximum data bytes carried by one packet
pub const MAX_DATA_LEN: usize = 10;

/// Maximum complete packet size (START + CMD + LEN + MAX_DATA + CHECKSUM + END)
pub const MAX_PACKET_SIZE: usize = 1 + 1 + 1 + MAX_DATA_LEN + 1 + 1;

/// Reasons a packet is rejected or cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// LEN byte announced more than [`MAX_DATA_LEN`] data bytes
    LengthExceeded(u8),
    /// Byte in the END position was not [`END_MARKER`]
    BadEndMarker(u8),
    /// Received checksum does not match the computed one
    ChecksumMismatch { expected: u8, received: u8 },
    /// Data exceeds maximum allowed size (encoding side)
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// XOR checksum over the command, the length byte and the data
pub fn checksum(command: u8, data: &[u8]) -> u8 {
    data.iter()
        .fold(command ^ data.len() as u8, |acc, &byte| acc ^ byte)
}

/// A validated or constructed packet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Command code
    pub command: u8,
    /// Data bytes
    pub data: Vec<u8, MAX_DATA_LEN>,
}

impl Packet {
    /// Create a packet with the given command code and data
    pub fn new(command: u8, data: &[u8]) -> Result<Self, FrameError> {
        let data = Vec::from_slice(data).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { command, data })
    }

    /// Create a packet with no data
    pub fn empty(command: u8) -> Self {
        Self {
            command,
            data: Vec::new(),
        }
    }

    /// Value of the LEN byte
    pub fn data_len(&self) -> u8 {
        self.data.len() as u8
    }

    /// Checksum this packet carries on the wire
    pub fn checksum(&self) -> u8 {
        checksum(self.command, &self.data)
    }

    /// Encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        5 + self.data.len()
    }

    /// Encode this packet into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let len = self.encoded_len();
        if buffer.len() < len {
            return Err(FrameError::BufferTooSmall);
        }

        let data_end = 3 + self.data.len();
        buffer[0] = START_MARKER;
        buffer[1] = self.command;
        buffer[2] = self.data_len();
        buffer[3..data_end].copy_from_slice(&self.data);
        buffer[data_end] = self.checksum();
        buffer[data_end + 1] = END_MARKER;

        Ok(len)
    }

    /// Encode this packet into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_PACKET_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        let len = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..len]).map_err(|_| FrameError::BufferTooSmall)
    }
}

/// Byte-at-a-time packet framer
///
/// Every state can be abandoned with [`FrameParser::timeout`], which is how
/// the receive loop recovers from a sender that stops mid-packet.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    command: u8,
    expected_len: u8,
    data: Vec<u8, MAX_DATA_LEN>,
    received_checksum: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Discarding bytes until START
    WaitStart,
    /// Got START, waiting for CMD
    ReadCmd,
    /// Got CMD, waiting for LEN
    ReadLen,
    /// Reading DATA bytes
    ReadData,
    /// Waiting for CHECKSUM
    ReadChecksum,
    /// Waiting for END
    ReadEnd,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    /// Create a new parser waiting for a start marker
    pub const fn new() -> Self {
        Self {
            state: ParseState::WaitStart,
            command: 0,
            expected_len: 0,
            data: Vec::new(),
            received_checksum: 0,
        }
    }

    /// Drop any partial packet and wait for the next start marker
    pub fn reset(&mut self) {
        self.state = ParseState::WaitStart;
        self.command = 0;
        self.expected_len = 0;
        self.data.clear();
        self.received_checksum = 0;
    }

    /// True while no packet is in progress
    pub fn is_idle(&self) -> bool {
        self.state == ParseState::WaitStart
    }

    /// Abandon the packet in progress after the byte wait expired
    ///
    /// Returns `true` if a partial packet was discarded.
    pub fn timeout(&mut self) -> bool {
        let abandoned = !self.is_idle();
        self.reset();
        abandoned
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(packet))` when a complete valid packet is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` when the packet in
    /// progress was rejected. After an error the parser is already back
    /// to waiting for a start marker.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Packet>, FrameError> {
        match self.state {
            ParseState::WaitStart => {
                if byte == START_MARKER {
                    self.state = ParseState::ReadCmd;
                }
                // Silently ignore non-START bytes while waiting
                Ok(None)
            }
            ParseState::ReadCmd => {
                self.command = byte;
                self.state = ParseState::ReadLen;
                Ok(None)
            }
            ParseState::ReadLen => {
                if byte as usize > MAX_DATA_LEN {
                    self.reset();
                    return Err(FrameError::LengthExceeded(byte));
                }
                self.expected_len = byte;
                self.data.clear();
                self.state = if byte == 0 {
                    ParseState::ReadChecksum
                } else {
                    ParseState::ReadData
                };
                Ok(None)
            }
            ParseState::ReadData => {
                // Cannot fail: expected_len was bounded by MAX_DATA_LEN
                let _ = self.data.push(byte);
                if self.data.len() == self.expected_len as usize {
                    self.state = ParseState::ReadChecksum;
                }
                Ok(None)
            }
            ParseState::ReadChecksum => {
                self.received_checksum = byte;
                self.state = ParseState::ReadEnd;
                Ok(None)
            }
            ParseState::ReadEnd => {
                if byte != END_MARKER {
                    self.reset();
                    return Err(FrameError::BadEndMarker(byte));
                }

                let expected = checksum(self.command, &self.data);
                let received = self.received_checksum;
                if expected != received {
                    self.reset();
                    return Err(FrameError::ChecksumMismatch { expected, received });
                }

                let packet = Packet {
                    command: self.command,
                    data: core::mem::take(&mut self.data),
                };
                self.reset();
                Ok(Some(packet))
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete packet found, if any.
    /// Remaining bytes after a complete packet are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Packet>, FrameError> {
        for &byte in bytes {
            if let Some(packet) = self.feed(byte)? {
                return Ok(Some(packet));
            }
        }
        Ok(None)
    }
}
