//! Fixed-period digit multiplexer
//!
//! Each tick shows one slot, in strict order:
//!
//! 1. de-assert every digit select
//! 2. drive the segment lines with the slot's pattern
//! 3. assert the select line for the slot
//! 4. advance the cursor, wrapping at the slot count
//!
//! At most one digit is ever selected. The buffer is latched from the
//! [`DisplayCell`] when the cursor wraps to 0, so a refresh cycle never
//! mixes digits from two published buffers.

use scoreboard_hal::{OutputPort, PortError};

use super::buffer::DisplayBuffer;
use super::cell::DisplayCell;
use super::segments::BLANK;
use crate::config::{DisplayLayout, SEGMENT_LINES};

/// Digit multiplexer driving a segment port and a digit-select port
pub struct Multiplexer<'a, S, D> {
    cell: &'a DisplayCell,
    segments: S,
    digits: D,
    slot_count: u8,
    cursor: u8,
    frame: DisplayBuffer,
}

impl<'a, S: OutputPort, D: OutputPort> Multiplexer<'a, S, D> {
    /// Create a multiplexer with both ports blanked
    ///
    /// Fails with [`PortError::TooNarrow`] if the segment port has fewer
    /// than seven lines or the digit port cannot select every slot.
    pub fn new(
        cell: &'a DisplayCell,
        segments: S,
        digits: D,
        layout: DisplayLayout,
    ) -> Result<Self, PortError> {
        if segments.width() < SEGMENT_LINES || (digits.width() as usize) < layout.slot_count() {
            return Err(PortError::TooNarrow);
        }

        let mut mux = Self {
            cell,
            segments,
            digits,
            slot_count: layout.slot_count() as u8,
            cursor: 0,
            frame: DisplayBuffer::EMPTY,
        };
        mux.blank();
        Ok(mux)
    }

    /// Slot shown by the next tick
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Number of slots in one refresh cycle
    pub fn slot_count(&self) -> u8 {
        self.slot_count
    }

    /// Turn every digit and segment off
    pub fn blank(&mut self) {
        self.digits.clear();
        self.segments.write(BLANK);
    }

    /// Show the slot under the cursor and advance
    pub fn tick(&mut self) {
        self.digits.clear();

        if self.cursor == 0 {
            self.frame = self.cell.load();
        }
        let pattern = self.frame.slot(self.cursor as usize).unwrap_or(BLANK);
        self.segments.write(pattern);

        // Cannot fail: the digit port width was checked in new()
        let _ = self.digits.select(self.cursor);

        self.cursor = (self.cursor + 1) % self.slot_count;
    }

    /// Release the ports
    pub fn into_ports(self) -> (S, D) {
        (self.segments, self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    use crate::state::MatchState;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Write {
        Segments(u8),
        Digits(u8),
    }

    type Log = Rc<RefCell<Vec<Write>>>;

    struct RecordingPort {
        width: u8,
        digits: bool,
        log: Log,
    }

    impl OutputPort for RecordingPort {
        fn width(&self) -> u8 {
            self.width
        }

        fn write(&mut self, mask: u8) {
            let entry = if self.digits {
                Write::Digits(mask)
            } else {
                Write::Segments(mask)
            };
            self.log.borrow_mut().push(entry);
        }
    }

    fn ports(segment_width: u8, digit_width: u8) -> (RecordingPort, RecordingPort, Log) {
        let log = Log::default();
        let segments = RecordingPort {
            width: segment_width,
            digits: false,
            log: log.clone(),
        };
        let digits = RecordingPort {
            width: digit_width,
            digits: true,
            log: log.clone(),
        };
        (segments, digits, log)
    }

    #[test]
    fn test_rejects_narrow_ports() {
        let cell = DisplayCell::default();

        let (segments, digits, _) = ports(6, 6);
        assert!(matches!(
            Multiplexer::new(&cell, segments, digits, DisplayLayout::Six),
            Err(PortError::TooNarrow)
        ));

        let (segments, digits, _) = ports(7, 6);
        assert!(matches!(
            Multiplexer::new(&cell, segments, digits, DisplayLayout::Eight),
            Err(PortError::TooNarrow)
        ));
    }

    #[test]
    fn test_tick_order_blank_pattern_select() {
        let cell = DisplayCell::default();
        let (segments, digits, log) = ports(7, 6);
        let mut mux = Multiplexer::new(&cell, segments, digits, DisplayLayout::Six).unwrap();
        log.borrow_mut().clear();

        mux.tick();
        assert_eq!(
            log.borrow().as_slice(),
            &[Write::Digits(0), Write::Segments(0x3F), Write::Digits(0b1)]
        );
        assert_eq!(mux.cursor(), 1);
    }

    #[test]
    fn test_full_cycle_selects_each_digit_once() {
        let cell = DisplayCell::default();
        let (segments, digits, log) = ports(7, 6);
        let mut mux = Multiplexer::new(&cell, segments, digits, DisplayLayout::Six).unwrap();
        log.borrow_mut().clear();

        for _ in 0..mux.slot_count() {
            mux.tick();
        }
        assert_eq!(mux.cursor(), 0);

        let selects: Vec<u8> = log
            .borrow()
            .iter()
            .filter_map(|w| match w {
                Write::Digits(mask) if *mask != 0 => Some(*mask),
                _ => None,
            })
            .collect();
        assert_eq!(selects, [1, 2, 4, 8, 16, 32]);
        assert!(selects.iter().all(|m| m.count_ones() == 1));
    }

    #[test]
    fn test_buffer_latched_per_cycle() {
        let cell = DisplayCell::default();
        let (segments, digits, log) = ports(7, 6);
        let mut mux = Multiplexer::new(&cell, segments, digits, DisplayLayout::Six).unwrap();

        mux.tick(); // latches 02:30 / 00

        let mut state = MatchState::new();
        state.set_timer(9, 59);
        cell.publish(&DisplayBuffer::from_state(&state, DisplayLayout::Six));

        log.borrow_mut().clear();
        mux.tick(); // slot 1 still from the latched buffer: '2'
        assert!(log.borrow().contains(&Write::Segments(0x5B)));

        for _ in 2..6 {
            mux.tick();
        }
        log.borrow_mut().clear();
        mux.tick(); // new cycle picks up 09:59, slot 0 is '0'
        mux.tick(); // slot 1 is '9'
        assert!(log.borrow().contains(&Write::Segments(0x6F)));
    }

    #[test]
    fn test_short_buffer_shows_blank() {
        let cell = DisplayCell::new(DisplayBuffer::EMPTY);
        let (segments, digits, log) = ports(7, 8);
        let mut mux = Multiplexer::new(&cell, segments, digits, DisplayLayout::Eight).unwrap();
        log.borrow_mut().clear();

        mux.tick();
        assert_eq!(log.borrow()[1], Write::Segments(BLANK));
    }
}
