//! UART serial communication abstractions
//!
//! The command link is receive-driven: the controller only ever waits for
//! the next byte, and every wait is bounded so a sender that stalls
//! mid-packet cannot hang the foreground loop.

/// UART receiver with a bounded wait
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Wait up to `timeout_ms` for the next byte
    ///
    /// Returns `Ok(Some(byte))` when a byte arrived, `Ok(None)` when the
    /// wait expired, or `Err` on a line error (framing, overrun, ...).
    fn read_byte_timeout(&mut self, timeout_ms: u32) -> Result<Option<u8>, Self::Error>;
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// Scoreboard link settings: 9600 baud, 8N1, no flow control
    pub const SCOREBOARD: Self = Self {
        baudrate: 9600,
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
    };

    /// Bits on the wire per byte, including start, parity and stop bits
    pub const fn frame_bits(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
            DataBits::Nine => 9,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Time to transfer one byte, in microseconds (rounded up)
    pub const fn byte_time_us(&self) -> u32 {
        (self.frame_bits() * 1_000_000).div_ceil(self.baudrate)
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::SCOREBOARD
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}
