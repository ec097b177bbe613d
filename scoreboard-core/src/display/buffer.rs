//! Display buffer builder
//!
//! A [`DisplayBuffer`] holds one segment pattern per physical digit, in
//! slot order `[min-tens, min-units, sec-tens, sec-units, red-tens,
//! red-units]`, followed by `[blue-tens, blue-units]` in the eight-digit
//! layout.
//!
//! The whole buffer packs into one `u64` so it can be swapped atomically.
//! Segment patterns never use bit 7, so the packed form marks each
//! populated slot with that bit and the slot count travels with the data.

use super::segments::{decode, pattern, split_digits};
use crate::config::{DisplayLayout, MAX_SLOTS};
use crate::state::MatchState;

/// Marks a populated slot in the packed representation
const SLOT_PRESENT: u8 = 0x80;

/// Fixed-size array of segment patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    slots: [u8; MAX_SLOTS],
    len: u8,
}

/// Values recovered from a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayedValues {
    pub minutes: u8,
    pub seconds: u8,
    pub red_score: u8,
    /// Only present in the eight-digit layout
    pub blue_score: Option<u8>,
}

impl DisplayBuffer {
    /// Buffer with no populated slots
    pub const EMPTY: Self = Self {
        slots: [0; MAX_SLOTS],
        len: 0,
    };

    /// Build the buffer for `state` in the given layout
    ///
    /// Values above 99 (or seconds above 59) are clamped, so any state
    /// produces valid digit patterns.
    pub const fn from_state(state: &MatchState, layout: DisplayLayout) -> Self {
        let seconds = if state.seconds() > 59 {
            59
        } else {
            state.seconds()
        };
        let values = [
            state.minutes(),
            seconds,
            state.red_score(),
            state.blue_score(),
        ];

        let mut slots = [0u8; MAX_SLOTS];
        let len = layout.slot_count();
        let mut i = 0;
        while i < len / 2 {
            let (tens, units) = split_digits(values[i]);
            slots[2 * i] = pattern(tens);
            slots[2 * i + 1] = pattern(units);
            i += 1;
        }

        Self {
            slots,
            len: len as u8,
        }
    }

    /// Number of populated slots
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pattern for one slot
    pub fn slot(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }

    /// Populated slots in display order
    pub fn as_slice(&self) -> &[u8] {
        &self.slots[..self.len as usize]
    }

    /// Decode the displayed values back out of the patterns
    ///
    /// Returns `None` if the buffer is not a six or eight slot layout or
    /// any slot is not a decimal digit.
    pub fn decode_values(&self) -> Option<DisplayedValues> {
        let mut values = [0u8; MAX_SLOTS / 2];
        for (value, pair) in values.iter_mut().zip(self.as_slice().chunks_exact(2)) {
            *value = decode(pair[0])? * 10 + decode(pair[1])?;
        }

        let blue_score = match self.len() {
            6 => None,
            8 => Some(values[3]),
            _ => return None,
        };

        Some(DisplayedValues {
            minutes: values[0],
            seconds: values[1],
            red_score: values[2],
            blue_score,
        })
    }

    /// Pack into a single word (slot n in byte n)
    pub const fn pack(&self) -> u64 {
        let mut word = 0u64;
        let mut i = 0;
        while i < self.len as usize {
            word |= ((self.slots[i] | SLOT_PRESENT) as u64) << (8 * i);
            i += 1;
        }
        word
    }

    /// Inverse of [`pack`](Self::pack)
    ///
    /// Slots are read until the first byte without the presence bit.
    pub const fn unpack(word: u64) -> Self {
        let mut slots = [0u8; MAX_SLOTS];
        let mut len = 0;
        while len < MAX_SLOTS {
            let byte = (word >> (8 * len)) as u8;
            if byte & SLOT_PRESENT == 0 {
                break;
            }
            slots[len] = byte & !SLOT_PRESENT;
            len += 1;
        }
        Self {
            slots,
            len: len as u8,
        }
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::from_state(&MatchState::new(), DisplayLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_state_six_digits() {
        let buffer = DisplayBuffer::default();
        // 02 30 00
        assert_eq!(buffer.as_slice(), &[0x3F, 0x5B, 0x4F, 0x3F, 0x3F, 0x3F]);
    }

    #[test]
    fn test_eight_digit_layout_adds_blue() {
        let mut state = MatchState::new();
        state.set_scores(50, 20);
        let buffer = DisplayBuffer::from_state(&state, DisplayLayout::Eight);

        assert_eq!(buffer.len(), 8);
        assert_eq!(buffer.slot(6), Some(0x5B)); // 2
        assert_eq!(buffer.slot(7), Some(0x3F)); // 0
        assert_eq!(buffer.slot(8), None);
    }

    #[test]
    fn test_decode_values() {
        let mut state = MatchState::new();
        state.set_timer(1, 5);
        state.set_scores(42, 7);

        let six = DisplayBuffer::from_state(&state, DisplayLayout::Six);
        assert_eq!(
            six.decode_values(),
            Some(DisplayedValues {
                minutes: 1,
                seconds: 5,
                red_score: 42,
                blue_score: None,
            })
        );

        let eight = DisplayBuffer::from_state(&state, DisplayLayout::Eight);
        assert_eq!(eight.decode_values().and_then(|v| v.blue_score), Some(7));
    }

    #[test]
    fn test_empty_buffer() {
        assert!(DisplayBuffer::EMPTY.is_empty());
        assert_eq!(DisplayBuffer::EMPTY.pack(), 0);
        assert_eq!(DisplayBuffer::unpack(0), DisplayBuffer::EMPTY);
        assert_eq!(DisplayBuffer::EMPTY.decode_values(), None);
    }

    #[test]
    fn test_pack_layout() {
        let word = DisplayBuffer::default().pack();
        assert_eq!(word & 0xFF, 0x3F | 0x80);
        assert_eq!(word >> 48, 0);
    }

    proptest! {
        #[test]
        fn prop_buffer_decodes_to_state(
            red in any::<u8>(),
            blue in any::<u8>(),
            minutes in any::<u8>(),
            seconds in any::<u8>(),
        ) {
            let mut state = MatchState::new();
            state.set_scores(red, blue);
            state.set_timer(minutes, seconds);

            for layout in [DisplayLayout::Six, DisplayLayout::Eight] {
                let buffer = DisplayBuffer::from_state(&state, layout);
                prop_assert!(buffer.as_slice().iter().all(|&p| decode(p).is_some()));

                let values = buffer.decode_values().unwrap();
                prop_assert_eq!(values.minutes, minutes.min(99));
                prop_assert_eq!(values.seconds, seconds.min(59));
                prop_assert_eq!(values.red_score, red.min(99));
                if layout.shows_blue() {
                    prop_assert_eq!(values.blue_score, Some(blue.min(99)));
                }

                prop_assert_eq!(DisplayBuffer::unpack(buffer.pack()), buffer);
            }
        }
    }
}
