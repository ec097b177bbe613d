//! Common-cathode seven-segment encoding
//!
//! Bit 0..6 = segments a..g, a set bit lights the segment.

/// Patterns for digits 0-9
pub const SEGMENT_TABLE: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// All segments off
pub const BLANK: u8 = 0x00;

/// Segment lines a..g
pub const SEGMENT_MASK: u8 = 0x7F;

/// Segment pattern for the units digit of `digit`
pub const fn pattern(digit: u8) -> u8 {
    SEGMENT_TABLE[(digit % 10) as usize]
}

/// Digit shown by a pattern, or `None` if it is not a decimal digit
///
/// The decimal point (bit 7) is ignored.
pub fn decode(pattern: u8) -> Option<u8> {
    let segments = pattern & SEGMENT_MASK;
    SEGMENT_TABLE
        .iter()
        .position(|&p| p == segments)
        .map(|d| d as u8)
}

/// Split a value into (tens, units), saturating at 99
pub const fn split_digits(value: u8) -> (u8, u8) {
    let value = if value > 99 { 99 } else { value };
    (value / 10, value % 10)
}
