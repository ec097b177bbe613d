//! Display buffer shared between the foreground and the multiplex tick
//!
//! The packed buffer lives in one 64-bit atomic word. A reader always sees
//! either the previous or the new buffer, never a mix of both.

use portable_atomic::{AtomicU64, Ordering};

use super::buffer::DisplayBuffer;

/// Single-word publication slot for a [`DisplayBuffer`]
pub struct DisplayCell {
    word: AtomicU64,
}

impl DisplayCell {
    /// Create a cell holding `initial`
    pub const fn new(initial: DisplayBuffer) -> Self {
        Self {
            word: AtomicU64::new(initial.pack()),
        }
    }

    /// Replace the shown buffer
    pub fn publish(&self, buffer: &DisplayBuffer) {
        self.word.store(buffer.pack(), Ordering::Release);
    }

    /// Current buffer
    pub fn load(&self) -> DisplayBuffer {
        DisplayBuffer::unpack(self.word.load(Ordering::Acquire))
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::new(DisplayBuffer::default())
    }
}
