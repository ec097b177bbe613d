//! Multi-line output ports
//!
//! The seven-segment bus and the digit-select lines are both modeled as an
//! [`OutputPort`]: a group of up to eight lines written together from a bit
//! mask, where bit `n` drives line `n` and a set bit means "asserted".
//! Electrical polarity (active-low digit selects on common-cathode
//! displays) is handled by the port, not by the caller.

use crate::gpio::OutputPin;

/// Errors reported when a port cannot serve a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError {
    /// Requested line does not exist on this port
    LineOutOfRange,
    /// Port has fewer lines than the caller needs
    TooNarrow,
}

/// A group of output lines driven together
pub trait OutputPort {
    /// Number of lines on the port (at most 8)
    fn width(&self) -> u8;

    /// Drive every line from `mask` (bit n = line n, 1 = asserted)
    fn write(&mut self, mask: u8);

    /// De-assert every line
    fn clear(&mut self) {
        self.write(0);
    }

    /// Assert exactly one line, de-asserting all others
    fn select(&mut self, line: u8) -> Result<(), PortError> {
        if line >= self.width() {
            return Err(PortError::LineOutOfRange);
        }
        self.write(1 << line);
        Ok(())
    }
}

/// Output port assembled from individual pins
///
/// Pin `n` of the array is line `n` of the port. When `inverted` is set an
/// asserted line is driven low, which is how the digit-select transistors
/// of a common-cathode bank are wired.
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    inverted: bool,
    last: u8,
}

impl<P: OutputPin, const N: usize> PinBank<P, N> {
    const WIDTH_FITS: () = assert!(N > 0 && N <= 8, "a PinBank holds 1 to 8 pins");

    /// Create a bank with all lines de-asserted
    pub fn new(pins: [P; N], inverted: bool) -> Self {
        let () = Self::WIDTH_FITS;

        let mut bank = Self {
            pins,
            inverted,
            last: 0,
        };
        bank.write(0);
        bank
    }

    /// Bank where an asserted line is driven high
    pub fn active_high(pins: [P; N]) -> Self {
        Self::new(pins, false)
    }

    /// Bank where an asserted line is driven low
    pub fn active_low(pins: [P; N]) -> Self {
        Self::new(pins, true)
    }

    /// Mask passed to the most recent write
    pub fn last_written(&self) -> u8 {
        self.last
    }

    /// Borrow the underlying pins
    pub fn pins(&self) -> &[P; N] {
        &self.pins
    }
}

impl<P: OutputPin, const N: usize> OutputPort for PinBank<P, N> {
    fn width(&self) -> u8 {
        N as u8
    }

    fn write(&mut self, mask: u8) {
        for (line, pin) in self.pins.iter_mut().enumerate() {
            let asserted = mask & (1 << line) != 0;
            pin.set_state(asserted != self.inverted);
        }
        self.last = mask;
    }
}
